//! Unified error system
//!
//! - [`ErrorCode`]: Numeric codes for every error the service returns
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error with code, message, and details
//! - [`ApiResponse`]: JSON body of an error response
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::order_not_found(7);
//! assert_eq!(err.code, ErrorCode::OrderNotFound);
//!
//! let response = ApiResponse::from(&err);
//! assert_eq!(response.code, 4001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError};
