//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order fulfillment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses an operator may move an order into
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer snapshot embedded in an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Shipping address embedded in an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog item reference (String ID)
    pub product: String,
    pub name: String,
    pub qty: u32,
    pub price: Decimal,
}

impl OrderLine {
    /// Line total (unit price times quantity)
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Order entity
///
/// The list endpoint returns orders without line items or address;
/// the detail endpoint fills them in. Both deserialize into this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<OrderCustomer>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub products: Vec<OrderLine>,
}

/// Update order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_summary_without_detail_fields() {
        let json = r#"{
            "_id": "o1",
            "user": { "email": "a@b.c" },
            "totalAmount": 2499.0,
            "status": "Pending"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.products.is_empty());
        assert!(order.shipping_address.is_none());
        assert_eq!(order.user.unwrap().email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn status_round_trips_as_plain_string() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"Shipped\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::Shipped);
    }

    #[test]
    fn line_subtotal() {
        let line = OrderLine {
            product: "p1".into(),
            name: "Ring".into(),
            qty: 3,
            price: Decimal::from(250),
        };
        assert_eq!(line.subtotal(), Decimal::from(750));
    }
}
