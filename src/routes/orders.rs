use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{
        AddItemRequest, AddItemResponse, CheckoutRequest, CheckoutResponse, OrderView,
    },
    error::AppResult,
    routes::params::ViewOrderQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_item))
        .route("/view", get(view_order))
        .route("/checkout", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/order/add",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item added to the open order", body = AddItemResponse),
        (status = 400, description = "Missing discord_user_id or item_name"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Orders"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<AddItemResponse>> {
    let response = order_service::add_item(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/order/view",
    params(
        ("discord_user_id" = String, Query, description = "Owner of the order")
    ),
    responses(
        (status = 200, description = "Current open order with line items and total", body = OrderView),
        (status = 400, description = "Missing discord_user_id"),
    ),
    tag = "Orders"
)]
pub async fn view_order(
    State(state): State<AppState>,
    Query(query): Query<ViewOrderQuery>,
) -> AppResult<Json<OrderView>> {
    let view = order_service::view_order(&state, query).await?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/api/order/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order checked out", body = CheckoutResponse),
        (status = 400, description = "Missing discord_user_id"),
        (status = 404, description = "No active order"),
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let response = order_service::checkout(&state, payload).await?;
    Ok(Json(response))
}
