//! Storefront core for the Fashion Store.
//!
//! Two pieces of client logic live here, independent of any UI:
//!
//! - **Cart**: a session-owned [`CartStore`](cart::CartStore) whose lines are
//!   keyed by product and size, with merge-on-add semantics
//! - **Search**: the catalog filter pipeline (category, price bounds, name
//!   search, sort) plus pagination
//!
//! Around them sit the catalog types the backend returns, an adapter that
//! normalizes every observed list-response shape, and checkout, which turns
//! a cart into an order body.
//!
//! # Example
//!
//! ```rust
//! use fashion_store::prelude::*;
//!
//! let mut cart = CartStore::new();
//! let tee = CartLine::new("p1", "Tee", 800.0).with_size("M");
//! cart.add_to_cart(tee.clone());
//! cart.add_to_cart(tee);
//! cart.increase_quantity(&CartKey::new("p1", "M"));
//!
//! assert_eq!(cart.total_item_count(), 3);
//! assert_eq!(cart.total_amount().amount(), 2400.0);
//!
//! let catalog = parse_products(r#"{"products":[{"_id":"p1","name":"Tee","price":800}]}"#).unwrap();
//! let shown = FilterCriteria::new().with_search("tee").apply(&catalog);
//! assert_eq!(shown.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::StoreError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        parse_categories, parse_products, CatalogEntry, CategoriesPayload, Category,
        CategoryRef, CategoryTree, ProductsPayload, SizeStock,
    };

    // Cart
    pub use crate::cart::{CartKey, CartLine, CartStore, CartSummary, LineSummary, STANDARD_SIZE};

    // Checkout
    pub use crate::checkout::{OrderDraft, OrderItem, OrderStatus, PaymentMethod, ShippingAddress};

    // Search
    pub use crate::search::{
        filter_catalog, paginate, FilterCriteria, Page, Pagination, SortOrder, ALL_CATEGORIES,
    };
}
