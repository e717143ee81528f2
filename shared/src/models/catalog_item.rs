//! Catalog Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted catalog item, as stored by the storefront API.
///
/// Note the discounted price is never persisted; only the derived
/// `discount` percent is kept alongside the list `price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Category reference (name, required)
    pub category: String,
    /// Occasion/type label ("type" on the wire)
    #[serde(rename = "type", default)]
    pub kind: String,
    /// List price, authoritative
    pub price: Decimal,
    /// Discount percent applied to `price` for display/sale
    #[serde(default)]
    pub discount: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: u32,
    /// Remote URLs or self-contained base64 data URLs
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the item is visible in the public storefront
    pub is_active: bool,
}

/// Create/update catalog item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemPayload {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Decimal,
    pub discount: u8,
    pub description: String,
    pub stock: u32,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_item_wire_shape() {
        let json = r#"{
            "_id": "66f1a2",
            "name": "Pearl Drop",
            "category": "Earrings",
            "type": "Party",
            "price": 1499.0,
            "discount": 20,
            "description": "",
            "stock": 4,
            "images": ["https://cdn.example.com/pearl.png"],
            "tags": ["pearl", "festive"],
            "isActive": true
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "66f1a2");
        assert_eq!(item.kind, "Party");
        assert_eq!(item.price, Decimal::from(1499));
        assert_eq!(item.discount, 20);
        assert!(item.is_active);
    }

    #[test]
    fn catalog_item_defaults_for_missing_fields() {
        let json = r#"{
            "_id": "66f1a3",
            "name": "Bare",
            "category": "Rings",
            "price": 500.0,
            "isActive": false
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.discount, 0);
        assert!(item.images.is_empty());
        assert!(item.tags.is_empty());
        assert_eq!(item.stock, 0);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = CatalogItemPayload {
            name: "Pearl Drop".into(),
            category: "Earrings".into(),
            kind: "Party".into(),
            price: Decimal::from(1499),
            discount: 20,
            description: String::new(),
            stock: 4,
            images: vec![],
            tags: vec![],
            is_active: true,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "Party");
        assert_eq!(value["isActive"], true);
        assert!(value["price"].is_number());
    }
}
