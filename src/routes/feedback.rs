use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::feedback::{FeedbackRequest, FeedbackResponse},
    error::AppResult,
    services::feedback_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_feedback))
}

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback recorded", body = FeedbackResponse),
        (status = 400, description = "Missing discord_user_id or message"),
    ),
    tag = "Feedback"
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> AppResult<Json<FeedbackResponse>> {
    let response = feedback_service::submit_feedback(&state, payload).await?;
    Ok(Json(response))
}
