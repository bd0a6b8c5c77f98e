//! Unified error codes for the Roost booking front-end
//!
//! This module defines all error codes shared by the search core, the API
//! client, and the frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Search/query errors
//! - 3xxx: Hotel/catalog errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
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
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Account is disabled
    AccountDisabled = 1006,
    /// Email is already registered
    EmailExists = 1007,
    /// Password too short
    PasswordTooShort = 1008,

    // ==================== 2xxx: Search ====================
    /// Check-out is not after check-in
    InvalidDateRange = 2001,
    /// Guest count below minimum (at least one adult)
    InvalidGuestCount = 2002,
    /// Room count below minimum
    InvalidRoomCount = 2003,
    /// Rating filter outside the 0-5 scale
    RatingOutOfRange = 2004,

    // ==================== 3xxx: Hotel ====================
    /// Hotel not found
    HotelNotFound = 3001,
    /// Room type not found for hotel
    RoomNotFound = 3002,
    /// Catalog source unavailable
    CatalogUnavailable = 3003,
    /// Catalog data could not be parsed
    CatalogCorrupted = 3004,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Booking has already been cancelled
    BookingAlreadyCancelled = 4002,
    /// Booking has already been completed
    BookingAlreadyCompleted = 4003,
    /// Room is no longer available for the requested dates
    RoomUnavailable = 4004,
    /// Guest count exceeds room capacity
    GuestLimitExceeded = 4005,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Payment was declined
    PaymentDeclined = 5002,
    /// Refund failed
    RefundFailed = 5003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Service temporarily unavailable
    ServiceUnavailable = 9005,
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
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::EmailExists => "Email is already registered",
            ErrorCode::PasswordTooShort => "Password must be at least 8 characters",

            // Search
            ErrorCode::InvalidDateRange => "Check-out must be after check-in",
            ErrorCode::InvalidGuestCount => "At least one adult is required",
            ErrorCode::InvalidRoomCount => "At least one room is required",
            ErrorCode::RatingOutOfRange => "Rating must be between 0 and 5",

            // Hotel
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::RoomNotFound => "Room type not found",
            ErrorCode::CatalogUnavailable => "Hotel catalog is unavailable",
            ErrorCode::CatalogCorrupted => "Hotel catalog data is corrupted",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingAlreadyCancelled => "Booking has already been cancelled",
            ErrorCode::BookingAlreadyCompleted => "Booking has already been completed",
            ErrorCode::RoomUnavailable => "Room is no longer available for these dates",
            ErrorCode::GuestLimitExceeded => "Guest count exceeds room capacity",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentDeclined => "Payment was declined",
            ErrorCode::RefundFailed => "Refund failed",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::AccountDisabled),
            1007 => Ok(ErrorCode::EmailExists),
            1008 => Ok(ErrorCode::PasswordTooShort),

            // Search
            2001 => Ok(ErrorCode::InvalidDateRange),
            2002 => Ok(ErrorCode::InvalidGuestCount),
            2003 => Ok(ErrorCode::InvalidRoomCount),
            2004 => Ok(ErrorCode::RatingOutOfRange),

            // Hotel
            3001 => Ok(ErrorCode::HotelNotFound),
            3002 => Ok(ErrorCode::RoomNotFound),
            3003 => Ok(ErrorCode::CatalogUnavailable),
            3004 => Ok(ErrorCode::CatalogCorrupted),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4002 => Ok(ErrorCode::BookingAlreadyCancelled),
            4003 => Ok(ErrorCode::BookingAlreadyCompleted),
            4004 => Ok(ErrorCode::RoomUnavailable),
            4005 => Ok(ErrorCode::GuestLimitExceeded),

            // Payment
            5001 => Ok(ErrorCode::PaymentFailed),
            5002 => Ok(ErrorCode::PaymentDeclined),
            5003 => Ok(ErrorCode::RefundFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),
            9005 => Ok(ErrorCode::ServiceUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Auth
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::TokenExpired.code(), 1003);
        assert_eq!(ErrorCode::TokenInvalid.code(), 1004);
        assert_eq!(ErrorCode::SessionExpired.code(), 1005);
        assert_eq!(ErrorCode::AccountDisabled.code(), 1006);
        assert_eq!(ErrorCode::EmailExists.code(), 1007);
        assert_eq!(ErrorCode::PasswordTooShort.code(), 1008);

        // Search
        assert_eq!(ErrorCode::InvalidDateRange.code(), 2001);
        assert_eq!(ErrorCode::InvalidGuestCount.code(), 2002);
        assert_eq!(ErrorCode::InvalidRoomCount.code(), 2003);
        assert_eq!(ErrorCode::RatingOutOfRange.code(), 2004);

        // Hotel
        assert_eq!(ErrorCode::HotelNotFound.code(), 3001);
        assert_eq!(ErrorCode::RoomNotFound.code(), 3002);
        assert_eq!(ErrorCode::CatalogUnavailable.code(), 3003);
        assert_eq!(ErrorCode::CatalogCorrupted.code(), 3004);

        // Booking
        assert_eq!(ErrorCode::BookingNotFound.code(), 4001);
        assert_eq!(ErrorCode::BookingAlreadyCancelled.code(), 4002);
        assert_eq!(ErrorCode::BookingAlreadyCompleted.code(), 4003);
        assert_eq!(ErrorCode::RoomUnavailable.code(), 4004);
        assert_eq!(ErrorCode::GuestLimitExceeded.code(), 4005);

        // Payment
        assert_eq!(ErrorCode::PaymentFailed.code(), 5001);
        assert_eq!(ErrorCode::PaymentDeclined.code(), 5002);
        assert_eq!(ErrorCode::RefundFailed.code(), 5003);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::NetworkError.code(), 9002);
        assert_eq!(ErrorCode::TimeoutError.code(), 9003);
        assert_eq!(ErrorCode::ConfigError.code(), 9004);
        assert_eq!(ErrorCode::ServiceUnavailable.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::HotelNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::InvalidDateRange));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::BookingNotFound));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(6001), Err(InvalidErrorCode(6001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ErrorCode::BookingNotFound).unwrap();
        assert_eq!(json, "4001");

        let json = serde_json::to_string(&ErrorCode::Success).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize_from_u16() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::HotelNotFound);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::BookingNotFound), "4001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::HotelNotFound.message(), "Hotel not found");
        assert_eq!(
            ErrorCode::InvalidDateRange.message(),
            "Check-out must be after check-in"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidDateRange,
            ErrorCode::BookingNotFound,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }
}
