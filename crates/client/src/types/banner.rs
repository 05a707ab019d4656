//! Storefront banner types.

use mango_market_core::BannerId;
use serde::{Deserialize, Serialize};

/// A storefront banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: BannerId,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_active_defaults_false() {
        let json = serde_json::json!({ "_id": "b1", "title": "Summer Sale" });
        let banner: Banner = serde_json::from_value(json).unwrap();
        assert!(!banner.is_active);
    }
}
