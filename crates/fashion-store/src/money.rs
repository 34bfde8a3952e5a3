//! Money type for prices and cart totals.
//!
//! The backend sends every amount as a plain number in its base currency
//! unit. There is no minor-unit or currency-code handling, so `Money` is a
//! thin wrapper that keeps arithmetic and formatting in one place.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Symbol used by [`Money::display`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b9}";

/// An amount in the backend's base currency unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Create a money value. Negative and non-finite inputs clamp to zero.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount)
        } else {
            Self(0.0)
        }
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Multiply by a line quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0 * f64::from(quantity))
    }

    /// Total ordering for sorting; amounts are always finite.
    pub fn total_cmp(&self, other: &Money) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Format with the default symbol (e.g., "₹2400.00").
    pub fn display(&self) -> String {
        self.display_with(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Format with a caller-chosen symbol.
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::new(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
