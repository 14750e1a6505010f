//! Asset request lifecycle

use serde::{Deserialize, Serialize};

use super::asset::ProductType;
use crate::error::{AppError, ErrorCode};

/// Lifecycle status of an asset request
///
/// ```text
/// Pending ──► Approved ──► Returned   (returnable assets only)
///    │
///    └──────► Rejected
/// ```
///
/// Rejected and Returned are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Returned,
}

impl RequestStatus {
    /// Parse from database string value (lowercase)
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "returned" => Some(Self::Returned),
            _ => None,
        }
    }

    /// Database string representation (lowercase)
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Returned => "returned",
        }
    }

    /// Lenient parse for API input ("Approved" and "approved" both work)
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_db(s.trim().to_lowercase().as_str())
    }

    /// No further transition is allowed out of this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Returned)
    }

    /// Whether `self -> target` is a legal lifecycle transition.
    ///
    /// The Approved -> Returned edge additionally requires a returnable
    /// product type; see [`RequestStatus::validate_transition`].
    pub fn can_transition(&self, target: RequestStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Returned)
        )
    }

    /// Validate `self -> target` for a request over an asset of
    /// `product_type`, producing the error the API reports on failure.
    pub fn validate_transition(
        &self,
        target: RequestStatus,
        product_type: Option<ProductType>,
    ) -> Result<(), AppError> {
        if !self.can_transition(target) {
            return Err(AppError::with_message(
                ErrorCode::InvalidStatusTransition,
                format!("cannot change status from {} to {}", self.as_db(), target.as_db()),
            ));
        }
        if target == Self::Returned && !product_type.is_some_and(|t| t.is_returnable()) {
            return Err(AppError::new(ErrorCode::RequestNotReturnable));
        }
        Ok(())
    }
}

/// Asset request row
///
/// Product fields are snapshotted from the asset at creation time so the
/// request history stays readable even if the asset is later deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AssetRequest {
    pub id: i64,
    pub employee_email: String,
    pub employee_name: String,
    pub asset_id: i64,
    pub product_name: String,
    /// "returnable" | "non-returnable"
    pub product_type: String,
    /// Always 1 in the current product: one unit per request
    pub quantity: i64,
    pub note: Option<String>,
    /// "pending" | "approved" | "rejected" | "returned"
    pub status: String,
    pub created_at: i64,
    pub approval_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_db_roundtrip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Returned,
        ] {
            assert_eq!(RequestStatus::from_db(status.as_db()), Some(status));
        }
        assert_eq!(RequestStatus::from_db("cancelled"), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(RequestStatus::parse("Approved"), Some(RequestStatus::Approved));
        assert_eq!(RequestStatus::parse("  rejected "), Some(RequestStatus::Rejected));
        assert_eq!(RequestStatus::parse("nope"), None);
    }

    #[test]
    fn transition_matrix() {
        use RequestStatus::*;

        let legal = [(Pending, Approved), (Pending, Rejected), (Approved, Returned)];
        for (from, to) in legal {
            assert!(from.can_transition(to), "{from:?} -> {to:?} should be legal");
        }

        for from in [Pending, Approved, Rejected, Returned] {
            for to in [Pending, Approved, Rejected, Returned] {
                if !legal.contains(&(from, to)) {
                    assert!(!from.can_transition(to), "{from:?} -> {to:?} should be illegal");
                }
            }
        }
    }

    #[test]
    fn approving_twice_is_rejected() {
        // After a successful approval the request is Approved; a second
        // approval attempt must fail as an illegal transition.
        let err = RequestStatus::Approved
            .validate_transition(RequestStatus::Approved, Some(ProductType::Returnable))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    }

    #[test]
    fn terminal_states_admit_nothing() {
        for terminal in [RequestStatus::Rejected, RequestStatus::Returned] {
            assert!(terminal.is_terminal());
            for to in [
                RequestStatus::Pending,
                RequestStatus::Approved,
                RequestStatus::Rejected,
                RequestStatus::Returned,
            ] {
                assert!(!terminal.can_transition(to));
            }
        }
    }

    #[test]
    fn return_requires_returnable_product() {
        let ok = RequestStatus::Approved
            .validate_transition(RequestStatus::Returned, Some(ProductType::Returnable));
        assert!(ok.is_ok());

        let err = RequestStatus::Approved
            .validate_transition(RequestStatus::Returned, Some(ProductType::NonReturnable))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestNotReturnable);

        // Unknown product type is treated as non-returnable
        let err = RequestStatus::Approved
            .validate_transition(RequestStatus::Returned, None)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestNotReturnable);
    }

    #[test]
    fn validate_reports_transition_error_before_returnability() {
        let err = RequestStatus::Pending
            .validate_transition(RequestStatus::Returned, Some(ProductType::Returnable))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    }
}
