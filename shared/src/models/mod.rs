//! Data models
//!
//! Shared between pizza-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod pizza_order;

// Re-exports
pub use pizza_order::*;
