//! Application state

use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::db::{MemoryOrderStore, OrderStore, PgOrderStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, built once at startup and handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Order persistence backend
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Build the configured store (connect + migrate for PostgreSQL)
    pub async fn from_config(config: &Config) -> Result<Self, BoxError> {
        let store: Arc<dyn OrderStore> = match &config.store {
            StoreBackend::Postgres { database_url } => {
                let store = PgOrderStore::connect(database_url, &config.pool).await?;
                tracing::info!(
                    max_connections = config.pool.max_connections,
                    "Connected to PostgreSQL"
                );

                if config.run_migrations {
                    store.migrate().await?;
                    tracing::info!("Database migrations applied");
                }
                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory order store, orders are lost on restart");
                Arc::new(MemoryOrderStore::new())
            }
        };

        Ok(Self::new(store))
    }
}
