//! Status enums for the order, payment, and settlement workflows.
//!
//! All enums serialize to the backend's literal wire strings. The backend is
//! authoritative for every workflow: the console submits whichever value the
//! operator selected and lets the backend accept or reject it.

use serde::{Deserialize, Serialize};

/// Order workflow status.
///
/// The console performs no client-side transition validation - any value may
/// be submitted from any current value (including e.g. `Delivered` back to
/// `In Review`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "In Review")]
    InReview,
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in the order the console presents them.
    pub const ALL: [Self; 6] = [
        Self::InReview,
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether this status ends the order workflow.
    ///
    /// Display-only: terminal statuses are still editable.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The backend wire string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InReview => "In Review",
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', " ").as_str() {
            "in review" => Ok(Self::InReview),
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Payment status, settable independently of [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Unpaid => write!(f, "Unpaid"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

/// Settlement (payout) status for a single settlement lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SettlementStatus {
    #[default]
    Pending,
    Paid,
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

impl std::str::FromStr for SettlementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(format!("invalid settlement status: {s}")),
        }
    }
}

/// The `type` discriminator of the admin payout endpoint.
///
/// Each update targets exactly one settlement lane; the other two lanes are
/// never bundled into the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettlementKind {
    VendorPayment,
    DriverEarning,
    FloatingCash,
}

impl SettlementKind {
    /// The backend wire string for this settlement lane.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VendorPayment => "vendorPayment",
            Self::DriverEarning => "driverEarning",
            Self::FloatingCash => "floatingCash",
        }
    }
}

impl std::fmt::Display for SettlementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SettlementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "vendorpayment" => Ok(Self::VendorPayment),
            "driverearning" => Ok(Self::DriverEarning),
            "floatingcash" => Ok(Self::FloatingCash),
            _ => Err(format!("invalid settlement kind: {s}")),
        }
    }
}

/// Driver approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DriverApprovalStatus {
    #[default]
    Pending,
    Approved,
    Suspended,
}

impl std::fmt::Display for DriverApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for DriverApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "suspended" => Ok(Self::Suspended),
            _ => Err(format!("invalid driver approval status: {s}")),
        }
    }
}

/// Console user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, including payout settlement lanes.
    Admin,
    /// Access scoped to the vendor's own products, categories, and orders.
    Vendor,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Vendor => write!(f, "vendor"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "vendor" => Ok(Self::Vendor),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_strings() {
        let json = serde_json::to_string(&OrderStatus::InReview).unwrap();
        assert_eq!(json, "\"In Review\"");

        let parsed: OrderStatus = serde_json::from_str("\"Shipped\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!(
            "in-review".parse::<OrderStatus>().unwrap(),
            OrderStatus::InReview
        );
        assert_eq!(
            "Delivered".parse::<OrderStatus>().unwrap(),
            OrderStatus::Delivered
        );
        assert!("done".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_status_all_covers_every_variant() {
        assert_eq!(OrderStatus::ALL.len(), 6);
        assert_eq!(OrderStatus::ALL.first(), Some(&OrderStatus::InReview));
        assert_eq!(OrderStatus::ALL.last(), Some(&OrderStatus::Cancelled));
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
    }

    #[test]
    fn test_settlement_kind_wire_strings() {
        let json = serde_json::to_string(&SettlementKind::FloatingCash).unwrap();
        assert_eq!(json, "\"floatingCash\"");
        assert_eq!(SettlementKind::VendorPayment.as_str(), "vendorPayment");
        assert_eq!(
            "floating-cash".parse::<SettlementKind>().unwrap(),
            SettlementKind::FloatingCash
        );
    }

    #[test]
    fn test_payment_status_round_trip() {
        assert_eq!("paid".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        let json = serde_json::to_string(&PaymentStatus::Unpaid).unwrap();
        assert_eq!(json, "\"Unpaid\"");
    }

    #[test]
    fn test_driver_approval_status_lowercase() {
        let json = serde_json::to_string(&DriverApprovalStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("driver".parse::<UserRole>().is_err());
    }
}
