//! Catalog filter criteria and the listing pipeline.

use crate::catalog::{CatalogEntry, ProductsPayload};
use crate::search::SortOrder;
use serde::{Deserialize, Serialize};

/// Category selection meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// The narrowing and sorting choices currently held by the catalog view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Category name at either tree level, or [`ALL_CATEGORIES`].
    pub selected_category: String,
    /// Case-insensitive substring of the product name.
    pub search_query: String,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            min_price: None,
            max_price: None,
            sort_order: SortOrder::None,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = category.into();
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_sort(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Blank or any casing of "all" disables the category stage.
    pub fn is_all_categories(&self) -> bool {
        let selected = self.selected_category.trim();
        selected.is_empty() || selected.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    /// Run the pipeline over a fetched list.
    ///
    /// Stages run in order: category, price bounds, name search, sort.
    /// The input is never modified; entries that survive are returned by
    /// reference in output order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let by_category: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|e| self.category_matches(e))
            .collect();

        let by_price: Vec<&CatalogEntry> = by_category
            .iter()
            .copied()
            .filter(|e| self.price_matches(e))
            .collect();

        let mut by_name: Vec<&CatalogEntry> = by_price
            .iter()
            .copied()
            .filter(|e| self.name_matches(e))
            .collect();

        // `sort_by` is stable, so equal prices keep fetch order.
        match self.sort_order {
            SortOrder::None => {}
            SortOrder::PriceAscending => by_name.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDescending => by_name.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        tracing::debug!(
            input = entries.len(),
            category = by_category.len(),
            price = by_price.len(),
            search = by_name.len(),
            sort = %self.sort_order,
            "filtered catalog"
        );

        by_name
    }

    /// Run the pipeline over a raw backend body of any observed shape.
    pub fn apply_payload(&self, payload: ProductsPayload) -> Vec<CatalogEntry> {
        let entries = payload.into_entries();
        self.apply(&entries).into_iter().cloned().collect()
    }

    fn category_matches(&self, entry: &CatalogEntry) -> bool {
        self.is_all_categories() || entry.category.matches(&self.selected_category)
    }

    fn price_matches(&self, entry: &CatalogEntry) -> bool {
        let price = entry.price.amount();
        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }

    fn name_matches(&self, entry: &CatalogEntry) -> bool {
        let query = self.search_query.trim();
        query.is_empty() || entry.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Filter a fetched product list with the given criteria.
pub fn filter_catalog<'a>(
    entries: &'a [CatalogEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a CatalogEntry> {
    criteria.apply(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryRef;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("p1", "Linen Shirt", 1200.0)
                .with_category(CategoryRef::nested("Shirts", "Men")),
            CatalogEntry::new("p2", "Summer Dress", 1800.0)
                .with_category(CategoryRef::nested("Dresses", "Women")),
            CatalogEntry::new("p3", "Denim Shirt", 1200.0)
                .with_category(CategoryRef::nested("Shirts", "Men")),
            CatalogEntry::new("p4", "Canvas Tote", 450.0).with_category(CategoryRef::name("Accessories")),
        ]
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_default_criteria_pass_everything() {
        let entries = catalog();
        let out = FilterCriteria::new().apply(&entries);
        assert_eq!(ids(&out), vec!["p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_all_sentinel_any_case() {
        let entries = catalog();
        for sentinel in ["All", "all", "ALL", ""] {
            let out = FilterCriteria::new().with_category(sentinel).apply(&entries);
            assert_eq!(out.len(), 4, "sentinel {sentinel:?}");
        }
    }

    #[test]
    fn test_flat_category() {
        let entries = catalog();
        let out = FilterCriteria::new().with_category("accessories").apply(&entries);
        assert_eq!(ids(&out), vec!["p4"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = catalog();
        let out = FilterCriteria::new().with_search("SHIRT").apply(&entries);
        assert_eq!(ids(&out), vec!["p1", "p3"]);

        let out = FilterCriteria::new().with_search("   ").apply(&entries);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_sort_is_stable() {
        let entries = catalog();
        let asc = FilterCriteria::new()
            .with_sort(SortOrder::PriceAscending)
            .apply(&entries);
        assert_eq!(ids(&asc), vec!["p4", "p1", "p3", "p2"]);

        let desc = FilterCriteria::new()
            .with_sort(SortOrder::PriceDescending)
            .apply(&entries);
        assert_eq!(ids(&desc), vec!["p2", "p1", "p3", "p4"]);
    }

    #[test]
    fn test_stages_compose() {
        let entries = catalog();
        let out = FilterCriteria::new()
            .with_category("Men")
            .with_search("denim")
            .with_price_range(Some(1000.0), Some(1500.0))
            .apply(&entries);
        assert_eq!(ids(&out), vec!["p3"]);
    }

    #[test]
    fn test_input_untouched() {
        let entries = catalog();
        let before = entries.clone();
        let _ = FilterCriteria::new()
            .with_sort(SortOrder::PriceDescending)
            .apply(&entries);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let entries = crate::catalog::parse_products(r#"[{"id":"x","name":"Gift Card"}]"#).unwrap();
        let out = FilterCriteria::new()
            .with_price_range(Some(1.0), None)
            .apply(&entries);
        assert!(out.is_empty());

        let out = FilterCriteria::new()
            .with_price_range(None, Some(100.0))
            .apply(&entries);
        assert_eq!(out.len(), 1);
    }
}
