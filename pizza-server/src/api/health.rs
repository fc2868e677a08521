//! Liveness and health endpoints
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /ping | GET | static greeting, never touches the store |
//! | /health | GET | store connectivity probe |

use axum::{Json, extract::State};

use crate::state::AppState;

pub const GREETING: &str = "Feel hungry? Let's get a pizza baked for you!";

pub async fn ping() -> &'static str {
    GREETING
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Store health probe failed");
            false
        }
    };
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "db": db_ok,
        "service": "pizza-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
