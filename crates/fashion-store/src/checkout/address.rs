//! Shipping address and payment choice captured at checkout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShippingAddress {
    pub fn new(
        full_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            address: address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fullName", &self.full_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postalCode", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.full_name, self.address, self.city, self.postal_code, self.country
        )
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    CashOnDelivery,
    #[serde(rename = "Card")]
    Card,
    #[serde(rename = "UPI")]
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let addr = ShippingAddress::new("Asha Rao", "12 MG Road", "", "560001", " ");
        assert_eq!(addr.missing_fields(), vec!["city", "country"]);
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(), "\"COD\"");
        let m: PaymentMethod = serde_json::from_str("\"UPI\"").unwrap();
        assert_eq!(m, PaymentMethod::Upi);
    }
}
