//! Cart store and line types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::CatalogEntry;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size recorded for products sold without size variants.
pub const STANDARD_SIZE: &str = "Standard";

/// Identity of a cart line: product plus selected size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartKey {
    pub product_id: ProductId,
    pub selected_size: String,
}

impl CartKey {
    pub fn new(product_id: impl Into<ProductId>, selected_size: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            selected_size: normalize_size(selected_size.into()),
        }
    }

    /// Key for a product without size variants.
    pub fn standard(product_id: impl Into<ProductId>) -> Self {
        Self::new(product_id, STANDARD_SIZE)
    }

    /// Parse `"<product_id>"` or `"<product_id>:<size>"`.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let (id, size) = match text.split_once(':') {
            Some((id, size)) => (id.trim(), size.trim()),
            None => (text.trim(), ""),
        };
        if id.is_empty() {
            return Err(StoreError::InvalidCartKey(text.to_string()));
        }
        Ok(Self::new(id, size))
    }
}

impl FromStr for CartKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.product_id, self.selected_size)
    }
}

/// A line in the shopping cart.
///
/// Name, image and price are a snapshot taken at add time and are never
/// re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: Money,
    pub selected_size: String,
    pub quantity: u32,
}

impl CartLine {
    /// Create a candidate line in the standard size.
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            image: None,
            unit_price: Money::new(unit_price),
            selected_size: STANDARD_SIZE.to_string(),
            quantity: 1,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = normalize_size(size.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Build a candidate line from a catalog entry and the chosen size.
    ///
    /// No stock check happens here; see [`CatalogEntry::check_available`].
    pub fn from_entry(entry: &CatalogEntry, size: Option<&str>) -> Self {
        Self {
            product_id: entry.id.clone(),
            name: entry.name.clone(),
            image: entry.primary_image().map(str::to_string),
            unit_price: entry.price,
            selected_size: normalize_size(size.unwrap_or_default().to_string()),
            quantity: 1,
        }
    }

    pub fn key(&self) -> CartKey {
        CartKey {
            product_id: self.product_id.clone(),
            selected_size: self.selected_size.clone(),
        }
    }

    pub fn matches(&self, key: &CartKey) -> bool {
        self.product_id == key.product_id && self.selected_size == key.selected_size
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The cart for one session.
///
/// Owned by whoever holds the session; there is no global instance. Lines
/// keep insertion order, which is also the display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product in a size.
    ///
    /// Merges into the line with the same key, otherwise appends a new
    /// line. The candidate's quantity is ignored; every call adds exactly
    /// one unit.
    pub fn add_to_cart(&mut self, line: CartLine) {
        let key = CartKey::new(line.product_id.clone(), line.selected_size.clone());

        if let Some(existing) = self.lines.iter_mut().find(|l| l.matches(&key)) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(key = %key, quantity = existing.quantity, "merged into cart line");
            return;
        }

        self.lines.push(CartLine {
            selected_size: key.selected_size.clone(),
            quantity: 1,
            ..line
        });
        tracing::debug!(key = %key, lines = self.lines.len(), "added cart line");
    }

    /// Remove the line for a key regardless of its quantity.
    ///
    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, key: &CartKey) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !l.matches(key));
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(key = %key, "removed cart line");
        }
        removed
    }

    /// Add one to a line's quantity. Returns whether the key matched.
    pub fn increase_quantity(&mut self, key: &CartKey) -> bool {
        match self.lines.iter_mut().find(|l| l.matches(key)) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                tracing::debug!(key = %key, quantity = line.quantity, "increased quantity");
                true
            }
            None => false,
        }
    }

    /// Take one from a line's quantity, never going below one.
    ///
    /// A line at quantity one stays in the cart; removal is only through
    /// [`CartStore::remove_from_cart`]. Returns whether the key matched.
    pub fn decrease_quantity(&mut self, key: &CartKey) -> bool {
        match self.lines.iter_mut().find(|l| l.matches(key)) {
            Some(line) => {
                line.quantity = line.quantity.saturating_sub(1).max(1);
                tracing::debug!(key = %key, quantity = line.quantity, "decreased quantity");
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("cleared cart");
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, key: &CartKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Per-line and overall totals for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_item_count(),
            total_amount: self.total_amount(),
            lines: self
                .lines
                .iter()
                .map(|l| LineSummary {
                    key: l.key(),
                    name: l.name.clone(),
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
        }
    }
}

fn normalize_size(size: String) -> String {
    let trimmed = size.trim();
    if trimmed.is_empty() {
        STANDARD_SIZE.to_string()
    } else if trimmed.len() == size.len() {
        size
    } else {
        trimmed.to_string()
    }
}
