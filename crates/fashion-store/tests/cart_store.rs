//! Cart store behavior through the public API.

use fashion_store::prelude::*;

fn line(id: &str, size: &str) -> CartLine {
    CartLine::new(id, "Item", 500.0).with_size(size)
}

#[test]
fn test_same_key_adds_merge_into_one_line() {
    let mut cart = CartStore::new();
    cart.add_to_cart(line("A", "S"));
    cart.add_to_cart(line("A", "S"));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line(&CartKey::new("A", "S")).unwrap().quantity, 2);
}

#[test]
fn test_distinct_sizes_stay_distinct() {
    let mut cart = CartStore::new();
    cart.add_to_cart(line("A", "S"));
    cart.add_to_cart(line("A", "M"));

    assert_eq!(cart.len(), 2);
    assert!(cart.lines().iter().all(|l| l.quantity == 1));
}

#[test]
fn test_decrease_floors_at_one() {
    let mut cart = CartStore::new();
    cart.add_to_cart(line("A", "S"));
    cart.add_to_cart(line("A", "S"));
    let key = CartKey::new("A", "S");

    for _ in 0..5 {
        cart.decrease_quantity(&key);
    }

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line(&key).unwrap().quantity, 1);
}

#[test]
fn test_remove_matches_both_fields() {
    let mut cart = CartStore::new();
    cart.add_to_cart(line("A", "S"));
    cart.add_to_cart(line("A", "M"));
    cart.add_to_cart(line("A", "M"));

    assert!(cart.remove_from_cart(&CartKey::new("A", "S")));

    assert_eq!(cart.len(), 1);
    let remaining = cart.line(&CartKey::new("A", "M")).unwrap();
    assert_eq!(remaining.quantity, 2);
}

#[test]
fn test_clear_empties_everything() {
    let mut cart = CartStore::new();
    for id in ["A", "B", "C"] {
        cart.add_to_cart(line(id, "M"));
        cart.add_to_cart(line(id, "L"));
    }
    cart.increase_quantity(&CartKey::new("B", "L"));

    cart.clear_cart();

    assert!(cart.is_empty());
    assert_eq!(cart.total_item_count(), 0);
    assert!(cart.total_amount().is_zero());
}

#[test]
fn test_add_twice_then_increase_scenario() {
    let mut cart = CartStore::new();
    let tee = CartLine::new("p1", "Tee", 800.0).with_size("M");

    cart.add_to_cart(tee.clone());
    cart.add_to_cart(tee);
    cart.increase_quantity(&CartKey::new("p1", "M"));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
    assert_eq!(cart.total_amount().amount(), 2400.0);
    assert_eq!(cart.total_item_count(), 3);
}

#[test]
fn test_stores_are_independent() {
    let mut first = CartStore::new();
    let second = CartStore::new();
    first.add_to_cart(line("A", "S"));

    assert_eq!(first.total_item_count(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_store_adds_without_stock_check() {
    let entry = CatalogEntry::new("p5", "Hoodie", 1500.0).with_size("L", 0);
    assert!(entry.check_available(Some("L")).is_err());

    let mut cart = CartStore::new();
    cart.add_to_cart(CartLine::from_entry(&entry, Some("L")));
    assert_eq!(cart.total_item_count(), 1);
}
