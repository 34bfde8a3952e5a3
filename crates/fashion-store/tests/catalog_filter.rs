//! Catalog filter pipeline through the public API.

use fashion_store::prelude::*;
use serde_json::json;

fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_malformed_response_filters_to_empty() {
    let criteria = FilterCriteria::new().with_sort(SortOrder::PriceAscending);

    for body in [
        json!({ "message": "Unauthorized" }),
        json!({ "products": { "count": 3 } }),
        json!("down for maintenance"),
        json!(null),
    ] {
        let out = criteria.apply_payload(ProductsPayload::from_value(body));
        assert!(out.is_empty());
    }
}

#[test]
fn test_wrapped_response_filters_like_bare() {
    let criteria = FilterCriteria::new().with_category("Men");
    let items = json!([
        { "_id": "p1", "name": "Oxford", "price": 900, "category": { "name": "Shirts", "parent": { "name": "Men" } } },
        { "_id": "p2", "name": "Skirt", "price": 700, "category": "Women" }
    ]);

    let bare = criteria.apply_payload(ProductsPayload::from_value(items.clone()));
    let wrapped = criteria.apply_payload(ProductsPayload::from_value(json!({ "data": items })));

    assert_eq!(bare, wrapped);
    assert_eq!(bare.len(), 1);
    assert_eq!(bare[0].id.as_str(), "p1");
}

#[test]
fn test_two_level_category_match() {
    let entries = vec![CatalogEntry::new("p1", "Oxford", 900.0)
        .with_category(CategoryRef::nested("Shirts", "Men"))];

    for selected in ["Men", "Shirts"] {
        let out = FilterCriteria::new().with_category(selected).apply(&entries);
        assert_eq!(out.len(), 1, "selected {selected}");
    }

    let out = FilterCriteria::new().with_category("Women").apply(&entries);
    assert!(out.is_empty());
}

#[test]
fn test_price_bounds_are_inclusive() {
    let entries = vec![
        CatalogEntry::new("low", "Below", 499.0),
        CatalogEntry::new("min", "At Min", 500.0),
        CatalogEntry::new("mid", "Middle", 750.0),
        CatalogEntry::new("max", "At Max", 1000.0),
        CatalogEntry::new("high", "Above", 1001.0),
    ];

    let out = FilterCriteria::new()
        .with_price_range(Some(500.0), Some(1000.0))
        .apply(&entries);

    assert_eq!(ids(&out), vec!["min", "mid", "max"]);
}

#[test]
fn test_filtered_listing_paginates() {
    let entries: Vec<CatalogEntry> = (1..=30)
        .map(|i| CatalogEntry::new(format!("p{i}"), format!("Tee {i}"), f64::from(i) * 100.0))
        .collect();

    let shown = FilterCriteria::new()
        .with_search("tee")
        .with_sort(SortOrder::PriceDescending)
        .apply(&entries);
    let page = paginate(shown, 2, 12);

    assert_eq!(page.len(), 12);
    assert_eq!(page.items[0].id.as_str(), "p18");
    assert_eq!(page.pagination.total_pages, 3);
}
