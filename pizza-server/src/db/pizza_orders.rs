//! Pizza order database operations (PostgreSQL)

use async_trait::async_trait;
use shared::models::{PizzaOrder, PizzaOrderRow};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{OrderStore, StoreError, StoreResult};
use crate::config::PoolSettings;

#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `database_url`
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(std::time::Duration::from_secs(600))
            .max_lifetime(std::time::Duration::from_secs(1800))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Run embedded migrations (idempotent)
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn decode(row: PizzaOrderRow) -> StoreResult<PizzaOrder> {
    let id = row.id;
    PizzaOrder::try_from(row).map_err(|source| StoreError::Corrupt { id, source })
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn save(&self, order: PizzaOrder) -> StoreResult<PizzaOrder> {
        let row: PizzaOrderRow = sqlx::query_as(
            r#"
            INSERT INTO pizza_order (id, status, order_time)
            VALUES ($1, $2, $3)
            ON CONFLICT (id)
            DO UPDATE SET status = EXCLUDED.status, order_time = EXCLUDED.order_time
            RETURNING id, status, order_time
            "#,
        )
        .bind(order.id)
        .bind(order.status.as_str())
        .bind(order.order_time)
        .fetch_one(&self.pool)
        .await?;
        decode(row)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<PizzaOrder>> {
        let row: Option<PizzaOrderRow> =
            sqlx::query_as("SELECT id, status, order_time FROM pizza_order WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(decode).transpose()
    }

    async fn find_all(&self) -> StoreResult<Vec<PizzaOrder>> {
        let rows: Vec<PizzaOrderRow> =
            sqlx::query_as("SELECT id, status, order_time FROM pizza_order ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn delete(&self, order: &PizzaOrder) -> StoreResult<()> {
        sqlx::query("DELETE FROM pizza_order WHERE id = $1")
            .bind(order.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
