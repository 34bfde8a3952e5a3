//! Shopping cart module.
//!
//! Contains the cart store, its lines and keys, and the derived summary.

mod cart;
mod summary;

pub use cart::{CartKey, CartLine, CartStore, STANDARD_SIZE};
pub use summary::{CartSummary, LineSummary};
