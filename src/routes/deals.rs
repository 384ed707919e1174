use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::deals::DealResponse, error::AppResult, services::catalog_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_deals))
}

#[utoipa::path(
    get,
    path = "/api/deals",
    responses(
        (status = 200, description = "List active deals", body = Vec<DealResponse>)
    ),
    tag = "Deals"
)]
pub async fn list_deals(State(state): State<AppState>) -> AppResult<Json<Vec<DealResponse>>> {
    let deals = catalog_service::list_active_deals(&state).await?;
    Ok(Json(deals))
}
