//! Error codes returned by the pizza order service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// Rendered as a u16 in [`ApiResponse`](super::ApiResponse) so clients can
/// switch on a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Query parameter could not be parsed
    InvalidFormat = 6,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Unknown order status name
    OrderStatusInvalid = 4002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Stored data could not be decoded
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderStatusInvalid => "Unknown order status",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
