//! Product category types.

use mango_market_core::{CategoryId, VendorId};
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Global categories have no `vendor`; vendor-scoped categories (the
/// `/vendor-product-category` resource) carry the owning vendor's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub vendor: Option<VendorId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_global_category_has_no_vendor() {
        let json = serde_json::json!({ "_id": "cat1", "name": "Fruit" });
        let category: Category = serde_json::from_value(json).unwrap();
        assert!(category.vendor.is_none());
    }
}
