//! Cart totals for display.

use crate::cart::CartKey;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub total_items: u64,
    /// Sum of line subtotals.
    pub total_amount: Money,
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Average price per unit across the cart.
    pub fn average_unit_price(&self) -> Money {
        if self.total_items == 0 {
            return Money::zero();
        }
        Money::new(self.total_amount.amount() / self.total_items as f64)
    }
}

/// Totals for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub key: CartKey,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Unit price times quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_unit_price() {
        let summary = CartSummary {
            total_items: 4,
            total_amount: Money::new(2000.0),
            lines: vec![],
        };
        assert_eq!(summary.average_unit_price().amount(), 500.0);
    }

    #[test]
    fn test_average_of_empty_cart() {
        let summary = CartSummary {
            total_items: 0,
            total_amount: Money::zero(),
            lines: vec![],
        };
        assert!(summary.is_empty());
        assert!(summary.average_unit_price().is_zero());
    }
}
