//! Product catalog module.
//!
//! Contains catalog entries, the category tree, and the adapter that
//! normalizes backend list responses.

mod category;
mod payload;
mod product;

pub use category::{Category, CategoryTree};
pub use payload::{parse_categories, parse_products, CategoriesPayload, ProductsPayload};
pub use product::{CatalogEntry, CategoryRef, ParentRef, SizeStock, DEFAULT_CATEGORY};
