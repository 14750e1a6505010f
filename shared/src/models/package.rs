//! Subscription package

use serde::{Deserialize, Serialize};

/// Payment status of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageStatus {
    /// Awaiting checkout
    Pending,
    /// Checkout confirmed by the payment provider
    Paid,
}

impl PackageStatus {
    /// Parse from database string value (lowercase)
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Database string representation (lowercase)
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

/// Package row
///
/// `price` is in whole currency units; checkout converts to minor units
/// when talking to the payment provider. Seeded catalog rows have no owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Package {
    pub id: i64,
    pub package_name: String,
    pub employee_limit: i64,
    pub price: i64,
    pub owner_email: Option<String>,
    /// "pending" | "paid"
    pub payment_status: String,
    pub paid_at: Option<i64>,
    pub tracking_id: Option<String>,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_db_roundtrip() {
        assert_eq!(PackageStatus::from_db("pending"), Some(PackageStatus::Pending));
        assert_eq!(PackageStatus::from_db("paid"), Some(PackageStatus::Paid));
        assert_eq!(PackageStatus::from_db("refunded"), None);
        assert_eq!(PackageStatus::Paid.as_db(), "paid");
    }
}
