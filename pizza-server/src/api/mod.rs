//! API routes for pizza-server

pub mod health;
pub mod orders;

use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use http::StatusCode;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the full router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/putNewOrder", post(orders::put_new_order))
        .route("/changeStatus", put(orders::change_status))
        .route("/changeOrderTime", put(orders::change_order_time))
        .route("/deleteOrder", delete(orders::delete_order))
        .route("/allOrders", get(orders::all_orders))
        .route("/getOrder", get(orders::get_order))
        .route("/ping", get(health::ping))
        .route("/health", get(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                .layer(DefaultBodyLimit::max(1024 * 1024)), // 1MB
        )
        .with_state(state)
}
