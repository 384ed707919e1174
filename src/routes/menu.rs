use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::menu::MenuItemResponse,
    error::AppResult,
    routes::params::MenuListQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_menu))
        .route("/item/{item_name}", get(get_menu_item))
}

#[utoipa::path(
    get,
    path = "/api/menu",
    params(
        ("category" = Option<String>, Query, description = "Exact category, matched case-insensitively"),
        ("limit" = Option<i64>, Query, description = "Result cap, defaults to the configured limit")
    ),
    responses(
        (status = 200, description = "List menu items", body = Vec<MenuItemResponse>)
    ),
    tag = "Menu"
)]
pub async fn list_menu(
    State(state): State<AppState>,
    Query(query): Query<MenuListQuery>,
) -> AppResult<Json<Vec<MenuItemResponse>>> {
    let items = catalog_service::list_menu(&state, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/menu/item/{item_name}",
    params(
        ("item_name" = String, Path, description = "Menu item name, case-insensitive substring match")
    ),
    responses(
        (status = 200, description = "Menu item detail", body = MenuItemResponse),
        (status = 404, description = "Item not found"),
    ),
    tag = "Menu"
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> AppResult<Json<MenuItemResponse>> {
    let item = catalog_service::get_menu_item(&state, &item_name).await?;
    Ok(Json(item))
}
