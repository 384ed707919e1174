use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::MenuItem;

// Wire shape for menu endpoints; the fixed `company` tag stays off the wire.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub calories: Option<i32>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            description: item.description,
            price: item.price,
            calories: item.calories,
        }
    }
}
