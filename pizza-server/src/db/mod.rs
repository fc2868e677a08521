//! Database access layer
//!
//! [`OrderStore`] is the keyed CRUD contract the HTTP layer consumes. Two
//! backends implement it: [`PgOrderStore`] (PostgreSQL via sqlx) and
//! [`MemoryOrderStore`] (process-local, used by tests and `STORE_BACKEND=memory`).

pub mod memory;
pub mod pizza_orders;

pub use memory::MemoryOrderStore;
pub use pizza_orders::PgOrderStore;

use async_trait::async_trait;
use shared::models::{PizzaOrder, UnknownOrderStatus};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Order {id} has an unreadable status: {source}")]
    Corrupt {
        id: i32,
        #[source]
        source: UnknownOrderStatus,
    },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed persistence for pizza orders.
///
/// Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert or replace by `order.id`, returning the stored row
    async fn save(&self, order: PizzaOrder) -> StoreResult<PizzaOrder>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<PizzaOrder>>;

    /// Every order, ascending by id
    async fn find_all(&self) -> StoreResult<Vec<PizzaOrder>>;

    async fn delete(&self, order: &PizzaOrder) -> StoreResult<()>;

    /// Connectivity probe for `/health`
    async fn ping(&self) -> StoreResult<()>;
}
