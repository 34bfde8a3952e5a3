//! Search module.
//!
//! Contains the catalog filter criteria, sort order, and pagination.

mod filter;
mod query;
mod results;

pub use filter::{filter_catalog, FilterCriteria, ALL_CATEGORIES};
pub use query::SortOrder;
pub use results::{paginate, Page, Pagination, DEFAULT_PAGE_SIZE};
