use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Deal;

#[derive(Debug, Serialize, ToSchema)]
pub struct DealResponse {
    pub id: Uuid,
    pub title: String,
    pub details: Option<String>,
}

impl From<Deal> for DealResponse {
    fn from(deal: Deal) -> Self {
        Self {
            id: deal.id,
            title: deal.title,
            details: deal.details,
        }
    }
}
