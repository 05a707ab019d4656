//! Marketplace settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform-wide settings edited from the admin console.
///
/// Every field is optional on the wire; updates send only the fields being
/// changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_serializes_only_set_fields() {
        let update = StoreSettings {
            support_email: Some("help@mangomarket.app".to_owned()),
            ..StoreSettings::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["supportEmail"], "help@mangomarket.app");
    }
}
