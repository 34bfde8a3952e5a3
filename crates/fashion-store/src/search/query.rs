//! Sort order for catalog listings.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the filtered listing is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Keep the order the backend returned.
    #[default]
    None,
    /// Price, low to high.
    PriceAscending,
    /// Price, high to low.
    PriceDescending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::PriceAscending => "price-asc",
            SortOrder::PriceDescending => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::None => "Featured",
            SortOrder::PriceAscending => "Price: Low to High",
            SortOrder::PriceDescending => "Price: High to Low",
        }
    }
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "default" | "featured" => Ok(SortOrder::None),
            "asc" | "price-asc" | "priceascending" | "low-to-high" | "lowtohigh" => {
                Ok(SortOrder::PriceAscending)
            }
            "desc" | "price-desc" | "pricedescending" | "high-to-low" | "hightolow" => {
                Ok(SortOrder::PriceDescending)
            }
            _ => Err(StoreError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
