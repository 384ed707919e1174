use uuid::Uuid;

use crate::{
    dto::feedback::{FeedbackRequest, FeedbackResponse},
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn submit_feedback(
    state: &AppState,
    payload: FeedbackRequest,
) -> AppResult<FeedbackResponse> {
    let (owner_id, message) = match (payload.discord_user_id, payload.message) {
        (Some(owner_id), Some(message)) if !owner_id.is_empty() && !message.is_empty() => {
            (owner_id, message)
        }
        _ => {
            return Err(AppError::BadRequest(
                "discord_user_id and message required".to_string(),
            ));
        }
    };

    sqlx::query("INSERT INTO feedback (id, owner_id, message) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(&owner_id)
        .bind(&message)
        .execute(&state.pool)
        .await?;

    tracing::debug!(owner_id = %owner_id, "feedback recorded");

    Ok(FeedbackResponse {
        message: "thanks".to_string(),
    })
}
