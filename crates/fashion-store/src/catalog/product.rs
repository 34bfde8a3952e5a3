//! Catalog entries as returned by the product endpoints.

use crate::cart::STANDARD_SIZE;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category name used when a product arrives without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A product record from the backend.
///
/// Deserialization is lenient: absent or null fields take defaults so a
/// partially filled record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "EntryRecord")]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: CategoryRef,
    pub sizes: Vec<SizeStock>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of a product record.
///
/// Document stores may send `_id`, `id` or both; `_id` wins.
#[derive(Deserialize)]
struct EntryRecord {
    #[serde(rename = "_id", default)]
    document_id: Option<ProductId>,
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "lenient_price")]
    price: Money,
    #[serde(default)]
    category: CategoryRef,
    #[serde(default, deserialize_with = "null_as_default")]
    sizes: Vec<SizeStock>,
    #[serde(default, deserialize_with = "null_as_default")]
    images: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<EntryRecord> for CatalogEntry {
    fn from(record: EntryRecord) -> Self {
        Self {
            id: record.document_id.or(record.id).unwrap_or_default(),
            name: record.name,
            price: record.price,
            category: record.category,
            sizes: record.sizes,
            images: record.images,
            image: record.image,
            description: record.description,
        }
    }
}

impl CatalogEntry {
    /// Create an entry with no sizes in the default category.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Money::new(price),
            category: CategoryRef::default(),
            sizes: Vec::new(),
            images: Vec::new(),
            image: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = category;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>, quantity: i64) -> Self {
        self.sizes.push(SizeStock {
            size: size.into(),
            quantity,
        });
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// First gallery image, falling back to the single `image` field.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.image.as_deref())
    }

    /// Whether the product is sold in size variants.
    pub fn has_sizes(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// Size variant matching `size`, case-insensitively.
    pub fn size_stock(&self, size: &str) -> Option<&SizeStock> {
        let size = size.trim();
        self.sizes.iter().find(|s| s.size.eq_ignore_ascii_case(size))
    }

    /// Stock units for a size, matched case-insensitively.
    pub fn stock_for(&self, size: &str) -> Option<i64> {
        self.size_stock(size).map(|s| s.quantity)
    }

    /// Products without size variants are always considered in stock.
    pub fn is_in_stock(&self) -> bool {
        !self.has_sizes() || self.sizes.iter().any(SizeStock::is_available)
    }

    /// Validate a size selection before adding to the cart.
    ///
    /// Returns the size to put on the cart line: the catalog's spelling of
    /// the selected size for sized products, [`STANDARD_SIZE`] otherwise.
    pub fn check_available(&self, size: Option<&str>) -> Result<&str, StoreError> {
        if !self.has_sizes() {
            return Ok(STANDARD_SIZE);
        }

        let size = match size.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Err(StoreError::SizeRequired(self.id.to_string())),
        };

        match self.size_stock(size) {
            None => Err(StoreError::SizeNotFound {
                product_id: self.id.to_string(),
                size: size.to_string(),
            }),
            Some(stock) if !stock.is_available() => Err(StoreError::OutOfStock {
                product_id: self.id.to_string(),
                size: stock.size.clone(),
            }),
            Some(stock) => Ok(&stock.size),
        }
    }
}

/// Stock for one size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStock {
    #[serde(default)]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

impl SizeStock {
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// A product's category as sent by the backend.
///
/// Either a flat name or a populated two-level record naming the
/// sub-department and, optionally, its parent department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Name(String),
    Nested {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent: Option<ParentRef>,
    },
}

/// Parent department of a nested category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub name: String,
}

impl CategoryRef {
    pub fn name(name: impl Into<String>) -> Self {
        CategoryRef::Name(name.into())
    }

    pub fn nested(name: impl Into<String>, parent: impl Into<String>) -> Self {
        CategoryRef::Nested {
            name: name.into(),
            parent: Some(ParentRef {
                name: parent.into(),
            }),
        }
    }

    /// Top-level category name.
    pub fn label(&self) -> &str {
        match self {
            CategoryRef::Name(name) | CategoryRef::Nested { name, .. } => name,
        }
    }

    pub fn parent_name(&self) -> Option<&str> {
        match self {
            CategoryRef::Nested {
                parent: Some(parent),
                ..
            } => Some(&parent.name),
            _ => None,
        }
    }

    /// Case-insensitive match against either level of the category.
    pub fn matches(&self, selected: &str) -> bool {
        let selected = selected.trim().to_lowercase();
        self.label().to_lowercase() == selected
            || self
                .parent_name()
                .is_some_and(|p| p.to_lowercase() == selected)
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        CategoryRef::Name(DEFAULT_CATEGORY.to_string())
    }
}

impl<'de> Deserialize<'de> for CategoryRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(CategoryRef::from_value(&value))
    }
}

impl CategoryRef {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(name) if !name.trim().is_empty() => CategoryRef::Name(name.clone()),
            Value::Object(map) => {
                let name = match map.get("name").and_then(Value::as_str) {
                    Some(name) if !name.trim().is_empty() => name.to_string(),
                    _ => return CategoryRef::default(),
                };
                // An unpopulated parent is just an id and carries no name.
                let parent = map
                    .get("parent")
                    .and_then(|p| p.get("name"))
                    .and_then(Value::as_str)
                    .map(|name| ParentRef {
                        name: name.to_string(),
                    });
                CategoryRef::Nested { name, parent }
            }
            _ => CategoryRef::default(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept numbers, numeric strings and null; anything else is zero.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(Money::new(amount))
}

/// Whole units from numbers or numeric strings; anything else is zero.
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let quantity = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    };
    Ok(quantity)
}
