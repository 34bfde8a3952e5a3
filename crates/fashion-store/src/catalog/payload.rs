//! Normalizing adapter for backend list responses.
//!
//! List endpoints answer with a bare array, or an object wrapping the
//! array under a named key. Error bodies come back as plain objects.
//! Everything is folded into a single `Vec` here so the rest of the
//! crate only sees canonical sequences.

use crate::catalog::{CatalogEntry, Category};
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Body of the product list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductsPayload {
    List(Vec<Value>),
    Products { products: Vec<Value> },
    Data { data: Vec<Value> },
    Other(Value),
}

impl ProductsPayload {
    pub fn from_value(value: Value) -> Self {
        // Untagged deserialization always lands on `Other` at worst.
        serde_json::from_value(value.clone()).unwrap_or(ProductsPayload::Other(value))
    }

    /// Canonical entry list; unrecognized bodies become empty.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            ProductsPayload::List(items)
            | ProductsPayload::Products { products: items }
            | ProductsPayload::Data { data: items } => decode_items(items, "product"),
            ProductsPayload::Other(value) => {
                tracing::warn!(
                    shape = shape_of(&value),
                    "unrecognized product payload, using empty list"
                );
                Vec::new()
            }
        }
    }
}

/// Body of the category list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoriesPayload {
    List(Vec<Value>),
    Categories { categories: Vec<Value> },
    Data { data: Vec<Value> },
    Other(Value),
}

impl CategoriesPayload {
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(CategoriesPayload::Other(value))
    }

    pub fn into_categories(self) -> Vec<Category> {
        match self {
            CategoriesPayload::List(items)
            | CategoriesPayload::Categories { categories: items }
            | CategoriesPayload::Data { data: items } => decode_items(items, "category"),
            CategoriesPayload::Other(value) => {
                tracing::warn!(
                    shape = shape_of(&value),
                    "unrecognized category payload, using empty list"
                );
                Vec::new()
            }
        }
    }
}

/// Parse a product list body. Only invalid JSON is an error.
pub fn parse_products(text: &str) -> Result<Vec<CatalogEntry>, StoreError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(ProductsPayload::from_value(value).into_entries())
}

/// Parse a category list body. Only invalid JSON is an error.
pub fn parse_categories(text: &str) -> Result<Vec<Category>, StoreError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(CategoriesPayload::from_value(value).into_categories())
}

/// Decode each element on its own so one bad record does not drop the page.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>, kind: &str) -> Vec<T> {
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(kind, error = %e, "skipping malformed record");
                None
            }
        })
        .collect();
    tracing::debug!(kind, total, kept = decoded.len(), "decoded payload");
    decoded
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
