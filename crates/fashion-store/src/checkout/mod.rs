//! Checkout module.
//!
//! Turns the cart into the order body the backend accepts.

mod address;
mod order;

pub use address::{PaymentMethod, ShippingAddress};
pub use order::{OrderDraft, OrderItem, OrderStatus};
