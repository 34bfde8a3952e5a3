//! Order payload built from the cart at checkout.

use crate::cart::{CartLine, CartStore};
use crate::checkout::{PaymentMethod, ShippingAddress};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(StoreError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered line, frozen from the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub size: String,
    pub quantity: u32,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            price: line.unit_price,
            size: line.selected_size.clone(),
            quantity: line.quantity,
        }
    }
}

/// The order body posted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub total_amount: Money,
}

impl OrderDraft {
    /// Snapshot the cart into an order body without touching the cart.
    pub fn from_cart(
        cart: &CartStore,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let missing = shipping_address.missing_fields();
        if !missing.is_empty() {
            return Err(StoreError::IncompleteAddress(missing.join(", ")));
        }

        Ok(Self {
            items: cart.lines().iter().map(OrderItem::from).collect(),
            shipping_address,
            payment_method,
            total_amount: cart.total_amount(),
        })
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl CartStore {
    /// Build the order body and empty the cart.
    ///
    /// On error the cart is left as it was.
    pub fn checkout(
        &mut self,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Result<OrderDraft, StoreError> {
        let draft = OrderDraft::from_cart(self, shipping_address, payment_method)?;
        self.clear_cart();
        tracing::info!(
            items = draft.item_count(),
            total = draft.total_amount.amount(),
            payment = %draft.payment_method,
            "checkout completed"
        );
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;

    fn address() -> ShippingAddress {
        ShippingAddress::new("Asha Rao", "12 MG Road", "Bengaluru", "560001", "India")
    }

    #[test]
    fn test_checkout_clears_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(CartLine::new("p1", "Tee", 800.0).with_size("M"));
        cart.add_to_cart(CartLine::new("p1", "Tee", 800.0).with_size("M"));

        let draft = cart.checkout(address(), PaymentMethod::Card).unwrap();
        assert!(cart.is_empty());
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].size, "M");
        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.total_amount.amount(), 1600.0);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = CartStore::new();
        let result = cart.checkout(address(), PaymentMethod::CashOnDelivery);
        assert!(matches!(result, Err(StoreError::EmptyCart)));
    }

    #[test]
    fn test_checkout_incomplete_address_keeps_cart() {
        let mut cart = CartStore::new();
        cart.add_to_cart(CartLine::new("p1", "Tee", 800.0));
        let bad = ShippingAddress::new("Asha Rao", "", "Bengaluru", "560001", "India");

        let result = cart.checkout(bad, PaymentMethod::Upi);
        assert!(matches!(result, Err(StoreError::IncompleteAddress(_))));
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_order_body_shape() {
        let mut cart = CartStore::new();
        cart.add_to_cart(CartLine::new("p1", "Tee", 800.0));
        let draft = OrderDraft::from_cart(&cart, address(), PaymentMethod::CashOnDelivery).unwrap();

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["items"][0]["product"], "p1");
        assert_eq!(body["paymentMethod"], "COD");
        assert_eq!(body["totalAmount"], 800.0);
        assert_eq!(body["shippingAddress"]["postalCode"], "560001");
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("Canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("lost".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
    }
}
