//! Storefront error types.

use thiserror::Error;

/// Errors returned by the fallible edges of the storefront core.
///
/// The cart operations and the filter pipeline themselves are total and
/// never produce these; they come from parsing text, optional stock checks
/// and checkout.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A size must be chosen for products that have size variants.
    #[error("Please select a size for {0}")]
    SizeRequired(String),

    /// The chosen size does not exist on the product.
    #[error("Size {size} not found for {product_id}")]
    SizeNotFound { product_id: String, size: String },

    /// The chosen size has no stock left.
    #[error("Size {size} of {product_id} is out of stock")]
    OutOfStock { product_id: String, size: String },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Shipping address is missing required fields.
    #[error("Shipping address incomplete: missing {0}")]
    IncompleteAddress(String),

    /// Cart key text could not be parsed.
    #[error("Invalid cart key: {0}")]
    InvalidCartKey(String),

    /// Sort order text could not be parsed.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// Order status text could not be parsed.
    #[error("Invalid order status: {0}")]
    InvalidOrderStatus(String),

    /// Backend payload was not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
