use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Required fields arrive as Option so a missing field surfaces as a 400
// from validation rather than a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub discord_user_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddItemResponse {
    pub message: String,
    pub order_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub discord_user_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    pub order_id: Uuid,
}

#[derive(Debug, FromRow, Serialize, ToSchema)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub subtotal: Decimal,
}

// An owner without an open order views `{"items": []}`: order_id and total
// are omitted entirely.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    pub items: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

impl OrderView {
    pub fn empty() -> Self {
        Self {
            order_id: None,
            items: Vec::new(),
            total: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_view_serializes_to_bare_item_list() {
        let json = serde_json::to_value(OrderView::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "items": [] }));
    }

    #[test]
    fn populated_view_keeps_order_id_and_total() {
        let view = OrderView {
            order_id: Some(Uuid::nil()),
            items: vec![OrderLine {
                name: "Bean Burrito".into(),
                quantity: 2,
                price: dec!(1.99),
                subtotal: dec!(3.98),
            }],
            total: Some(dec!(3.98)),
        };
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["total"], serde_json::json!(3.98));
        assert_eq!(json["items"][0]["subtotal"], serde_json::json!(3.98));
        assert!(json["order_id"].is_string());
    }
}
