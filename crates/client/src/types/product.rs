//! Product and variation types.

use mango_market_core::{CategoryId, ProductId, VariationId, VendorId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product owning an array of variations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub vendor: Option<VendorId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_return_allowed: bool,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

const fn default_visible() -> bool {
    true
}

/// One sellable variation of a product.
///
/// `images` holds the stored URLs when fetched from the backend; new file
/// uploads only exist inside the edit form until submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VariationId>,
    pub attributes: VariationAttributes,
    pub price: Decimal,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Variation attribute set.
///
/// Older records carry a single `{ selected, value }` pair; newer ones carry
/// an array of named attributes. Both shapes appear in live data, so both
/// are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariationAttributes {
    Single { selected: String, value: String },
    Named(Vec<NamedAttribute>),
}

/// One named attribute (e.g., `size` / `500g`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedAttribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_single_pair_shape() {
        let json = serde_json::json!({ "selected": "weight", "value": "1kg" });
        let attrs: VariationAttributes = serde_json::from_value(json).unwrap();
        assert!(matches!(attrs, VariationAttributes::Single { .. }));
    }

    #[test]
    fn test_attributes_named_array_shape() {
        let json = serde_json::json!([
            { "name": "size", "value": "500g" },
            { "name": "ripeness", "value": "ready to eat" }
        ]);
        let attrs: VariationAttributes = serde_json::from_value(json).unwrap();
        match attrs {
            VariationAttributes::Named(named) => assert_eq!(named.len(), 2),
            VariationAttributes::Single { .. } => panic!("expected named array"),
        }
    }

    #[test]
    fn test_product_visibility_defaults_true() {
        let json = serde_json::json!({ "_id": "p1", "name": "Mangoes" });
        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.is_visible);
        assert!(product.variations.is_empty());
    }

    #[test]
    fn test_new_variation_serializes_without_id() {
        let variation = Variation {
            id: None,
            attributes: VariationAttributes::Single {
                selected: "weight".to_owned(),
                value: "1kg".to_owned(),
            },
            price: Decimal::new(12000, 2),
            discount: Decimal::ZERO,
            quantity: 10,
            images: vec![],
        };
        let json = serde_json::to_value(&variation).unwrap();
        assert!(json.get("_id").is_none());
    }
}
