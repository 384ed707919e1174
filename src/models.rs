use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: Uuid,
    pub company: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub calories: Option<i32>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    pub details: Option<String>,
    pub active: bool,
}

#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub checked_out: bool,
}

#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    pub id: Uuid,
    pub owner_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
