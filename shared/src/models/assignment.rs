//! Assigned asset record

use serde::{Deserialize, Serialize};

/// Status of an assignment (a unit handed to an employee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Approved,
    Returned,
}

impl AssignmentStatus {
    /// Parse from database string value (lowercase)
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "returned" => Some(Self::Returned),
            _ => None,
        }
    }

    /// Database string representation (lowercase)
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Returned => "returned",
        }
    }
}

/// Assignment row
///
/// Created exactly once when a request is approved (one row per request,
/// enforced by a unique index on `request_id`) and closed exactly once when
/// the unit comes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Assignment {
    pub id: i64,
    pub request_id: i64,
    pub employee_email: String,
    pub asset_id: i64,
    pub product_name: String,
    /// "returnable" | "non-returnable"
    pub product_type: String,
    pub company_name: String,
    /// Creation time of the originating request
    pub request_date: i64,
    pub approval_date: i64,
    /// "approved" | "returned"
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_db_roundtrip() {
        assert_eq!(
            AssignmentStatus::from_db("approved"),
            Some(AssignmentStatus::Approved)
        );
        assert_eq!(
            AssignmentStatus::from_db("returned"),
            Some(AssignmentStatus::Returned)
        );
        assert_eq!(AssignmentStatus::from_db("lost"), None);
        assert_eq!(AssignmentStatus::Returned.as_db(), "returned");
    }
}
