//! Shared types for the pizza order service
//!
//! Domain model, unified error types and time helpers used by the server and
//! by anything that talks to its API.

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, ErrorCode};
pub use models::{OrderStatus, PizzaOrder};
