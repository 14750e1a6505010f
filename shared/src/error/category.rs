//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Asset / inventory errors
/// - 4xxx: Request lifecycle errors
/// - 5xxx: Payment / package errors
/// - 6xxx: Assignment errors
/// - 7xxx: Employee / company errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Asset / inventory errors (3xxx)
    Asset,
    /// Request lifecycle errors (4xxx)
    Request,
    /// Payment / package errors (5xxx)
    Payment,
    /// Assignment errors (6xxx)
    Assignment,
    /// Employee / company errors (7xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Asset,
            4000..5000 => Self::Request,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Assignment,
            7000..8000 => Self::Employee,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Asset => "asset",
            Self::Request => "request",
            Self::Payment => "payment",
            Self::Assignment => "assignment",
            Self::Employee => "employee",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Asset);
        assert_eq!(ErrorCategory::from_code(4002), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from_code(5101), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Assignment);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::PermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::AssetOutOfStock.category(), ErrorCategory::Asset);
        assert_eq!(
            ErrorCode::InvalidStatusTransition.category(),
            ErrorCategory::Request
        );
        assert_eq!(
            ErrorCode::PaymentIncomplete.category(),
            ErrorCategory::Payment
        );
        assert_eq!(
            ErrorCode::AssignmentNotFound.category(),
            ErrorCategory::Assignment
        );
        assert_eq!(
            ErrorCode::EmployeeNotFound.category(),
            ErrorCategory::Employee
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Asset).unwrap();
        assert_eq!(json, "\"asset\"");

        let category: ErrorCategory = serde_json::from_str("\"payment\"").unwrap();
        assert_eq!(category, ErrorCategory::Payment);
    }
}
