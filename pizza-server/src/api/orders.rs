//! Order endpoints
//!
//! Every endpoint takes its input from query parameters. Lookups that miss
//! return 404; the store's own failures surface as 5xx.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{OrderStatus, PizzaOrder, UnknownOrderStatus};
use shared::util::parse_timestamp;

use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

type ApiResult<T> = ServiceResult<Json<T>>;

pub const DELETED_MESSAGE: &str = "Deleted the order";

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ChangeStatusQuery {
    pub id: i32,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOrderTimeQuery {
    pub id: i32,
    pub order_time: String,
}

async fn load(state: &AppState, id: i32) -> ServiceResult<PizzaOrder> {
    state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::from(AppError::order_not_found(id)))
}

/// POST /putNewOrder?id= - 下单 (same id overwrites)
pub async fn put_new_order(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<PizzaOrder> {
    let order = state.store.save(PizzaOrder::new(query.id)).await?;
    tracing::info!(order_id = order.id, "Order placed");
    Ok(Json(order))
}

/// PUT /changeStatus?id=&status=
pub async fn change_status(
    State(state): State<AppState>,
    Query(query): Query<ChangeStatusQuery>,
) -> ApiResult<PizzaOrder> {
    let status: OrderStatus = query
        .status
        .parse()
        .map_err(|UnknownOrderStatus(raw)| AppError::unknown_status(raw))?;

    let mut order = load(&state, query.id).await?;
    let previous = order.status;
    order.status = status;
    let order = state.store.save(order).await?;

    tracing::info!(
        order_id = order.id,
        from = %previous,
        to = %order.status,
        "Order status changed"
    );
    Ok(Json(order))
}

/// PUT /changeOrderTime?id=&orderTime=
pub async fn change_order_time(
    State(state): State<AppState>,
    Query(query): Query<ChangeOrderTimeQuery>,
) -> ApiResult<PizzaOrder> {
    let order_time = parse_timestamp(&query.order_time)
        .ok_or_else(|| AppError::invalid_format("orderTime", query.order_time.as_str()))?;

    let mut order = load(&state, query.id).await?;
    order.order_time = order_time;
    let order = state.store.save(order).await?;

    tracing::info!(order_id = order.id, order_time = %order.order_time, "Order time changed");
    Ok(Json(order))
}

/// DELETE /deleteOrder?id=
pub async fn delete_order(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ServiceResult<&'static str> {
    let order = load(&state, query.id).await?;
    state.store.delete(&order).await?;
    tracing::info!(order_id = order.id, "Order deleted");
    Ok(DELETED_MESSAGE)
}

/// GET /allOrders
pub async fn all_orders(State(state): State<AppState>) -> ApiResult<Vec<PizzaOrder>> {
    let orders = state.store.find_all().await?;
    Ok(Json(orders))
}

/// GET /getOrder?id=
pub async fn get_order(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> ApiResult<PizzaOrder> {
    let order = load(&state, query.id).await?;
    Ok(Json(order))
}
