//! Unified error codes for the AssetVerse backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Asset / inventory errors
//! - 4xxx: Request lifecycle errors
//! - 5xxx: Payment / package errors
//! - 6xxx: Assignment errors
//! - 7xxx: Employee / company errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1002,
    /// Token is invalid
    TokenInvalid = 1003,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Asset / inventory ====================
    /// Asset not found
    AssetNotFound = 3001,
    /// Asset out of stock, cannot allocate a unit
    AssetOutOfStock = 3002,
    /// Asset quantity must not be negative
    AssetInvalidQuantity = 3003,

    // ==================== 4xxx: Request lifecycle ====================
    /// Asset request not found
    RequestNotFound = 4001,
    /// Illegal request status transition
    InvalidStatusTransition = 4002,
    /// Unknown request status value
    UnknownStatus = 4003,
    /// Non-returnable assets cannot be returned
    RequestNotReturnable = 4004,

    // ==================== 5xxx: Payment / package ====================
    /// Checkout session not found at the payment provider
    PaymentSessionNotFound = 5001,
    /// Payment has not completed at the provider
    PaymentIncomplete = 5002,
    /// Failed to create a checkout session
    PaymentSetupFailed = 5003,
    /// Package not found
    PackageNotFound = 5101,
    /// Package already exists for this owner
    PackageAlreadyExists = 5102,

    // ==================== 6xxx: Assignment ====================
    /// Assignment not found
    AssignmentNotFound = 6001,

    // ==================== 7xxx: Employee / company ====================
    /// Employee not found
    EmployeeNotFound = 7001,
    /// Employee email already registered
    EmployeeAlreadyExists = 7002,
    /// HR manager not found
    ManagerNotFound = 7101,
    /// HR manager email already registered
    ManagerAlreadyExists = 7102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Asset / inventory
            ErrorCode::AssetNotFound => "Asset not found",
            ErrorCode::AssetOutOfStock => "Asset out of stock. Cannot approve.",
            ErrorCode::AssetInvalidQuantity => "Asset quantity must not be negative",

            // Request lifecycle
            ErrorCode::RequestNotFound => "Asset request not found",
            ErrorCode::InvalidStatusTransition => "Illegal request status transition",
            ErrorCode::UnknownStatus => "Unknown request status",
            ErrorCode::RequestNotReturnable => "Non-returnable assets cannot be returned",

            // Payment / package
            ErrorCode::PaymentSessionNotFound => "Checkout session not found",
            ErrorCode::PaymentIncomplete => "Payment not completed",
            ErrorCode::PaymentSetupFailed => "Failed to create checkout session",
            ErrorCode::PackageNotFound => "Package not found",
            ErrorCode::PackageAlreadyExists => "Package already exists for this user",

            // Assignment
            ErrorCode::AssignmentNotFound => "Assigned asset not found",

            // Employee / company
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeAlreadyExists => "User already exists",
            ErrorCode::ManagerNotFound => "HR manager not found",
            ErrorCode::ManagerAlreadyExists => "User already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.code(), self.message())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::RequiredField),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::TokenExpired),
            1003 => Ok(Self::TokenInvalid),
            2001 => Ok(Self::PermissionDenied),
            3001 => Ok(Self::AssetNotFound),
            3002 => Ok(Self::AssetOutOfStock),
            3003 => Ok(Self::AssetInvalidQuantity),
            4001 => Ok(Self::RequestNotFound),
            4002 => Ok(Self::InvalidStatusTransition),
            4003 => Ok(Self::UnknownStatus),
            4004 => Ok(Self::RequestNotReturnable),
            5001 => Ok(Self::PaymentSessionNotFound),
            5002 => Ok(Self::PaymentIncomplete),
            5003 => Ok(Self::PaymentSetupFailed),
            5101 => Ok(Self::PackageNotFound),
            5102 => Ok(Self::PackageAlreadyExists),
            6001 => Ok(Self::AssignmentNotFound),
            7001 => Ok(Self::EmployeeNotFound),
            7002 => Ok(Self::EmployeeAlreadyExists),
            7101 => Ok(Self::ManagerNotFound),
            7102 => Ok(Self::ManagerAlreadyExists),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::NetworkError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::PermissionDenied,
            ErrorCode::AssetOutOfStock,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::PaymentIncomplete,
            ErrorCode::PackageNotFound,
            ErrorCode::AssignmentNotFound,
            ErrorCode::EmployeeNotFound,
            ErrorCode::InternalError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn serializes_as_u16() {
        let json = serde_json::to_string(&ErrorCode::AssetOutOfStock).unwrap();
        assert_eq!(json, "3002");

        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::InvalidStatusTransition);
    }
}
