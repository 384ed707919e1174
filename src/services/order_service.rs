use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    dto::orders::{
        AddItemRequest, AddItemResponse, CheckoutRequest, CheckoutResponse, OrderLine, OrderView,
    },
    error::{AppError, AppResult},
    models::Order,
    routes::params::ViewOrderQuery,
    services::catalog_service,
    state::AppState,
};

pub async fn add_item(state: &AppState, payload: AddItemRequest) -> AppResult<AddItemResponse> {
    let owner_id = require_field(
        payload.discord_user_id,
        "discord_user_id and item_name required",
    )?;
    let item_name = require_field(payload.item_name, "discord_user_id and item_name required")?;
    let quantity = payload.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let mut tx = state.pool.begin().await?;

    let menu_item = catalog_service::find_item_by_name(&mut *tx, &item_name)
        .await?
        .ok_or_else(|| AppError::NotFound("item not found".into()))?;

    // Get-or-create the open order. The upsert keys on the partial unique
    // index, so two racing adds for the same owner land on the same row.
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (id, owner_id)
        VALUES ($1, $2)
        ON CONFLICT (owner_id) WHERE NOT checked_out
        DO UPDATE SET owner_id = EXCLUDED.owner_id
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&owner_id)
    .fetch_one(&mut *tx)
    .await?;

    // Merge quantity into an existing line for the same item, else insert.
    sqlx::query(
        r#"
        INSERT INTO order_items (id, order_id, menu_item_id, quantity)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (order_id, menu_item_id)
        DO UPDATE SET quantity = order_items.quantity + EXCLUDED.quantity
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(order.id)
    .bind(menu_item.id)
    .bind(quantity)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(order_id = %order.id, item = %menu_item.name, quantity, "item added");

    Ok(AddItemResponse {
        message: "added".to_string(),
        order_id: order.id,
    })
}

pub async fn view_order(state: &AppState, query: ViewOrderQuery) -> AppResult<OrderView> {
    let owner_id = require_field(query.discord_user_id, "discord_user_id required")?;

    let order =
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE owner_id = $1 AND NOT checked_out")
            .bind(&owner_id)
            .fetch_optional(&state.pool)
            .await?;

    let order = match order {
        Some(o) => o,
        None => return Ok(OrderView::empty()),
    };

    let items = sqlx::query_as::<_, OrderLine>(
        r#"
        SELECT mi.name, oi.quantity, mi.price, mi.price * oi.quantity AS subtotal
        FROM order_items oi
        JOIN menu_items mi ON mi.id = oi.menu_item_id
        WHERE oi.order_id = $1
        ORDER BY oi.created_at, mi.name
        "#,
    )
    .bind(order.id)
    .fetch_all(&state.pool)
    .await?;

    let total: Decimal = items.iter().map(|line| line.subtotal).sum();

    Ok(OrderView {
        order_id: Some(order.id),
        items,
        total: Some(total),
    })
}

pub async fn checkout(state: &AppState, payload: CheckoutRequest) -> AppResult<CheckoutResponse> {
    let owner_id = require_field(payload.discord_user_id, "discord_user_id required")?;

    // Single atomic transition; a second checkout finds no open order.
    let checked_out: Option<(Uuid,)> = sqlx::query_as(
        "UPDATE orders SET checked_out = TRUE WHERE owner_id = $1 AND NOT checked_out RETURNING id",
    )
    .bind(&owner_id)
    .fetch_optional(&state.pool)
    .await?;

    match checked_out {
        Some((order_id,)) => {
            tracing::debug!(%order_id, "order checked out");
            Ok(CheckoutResponse {
                message: "checked out".to_string(),
                order_id,
            })
        }
        None => Err(AppError::NotFound("no active order".into())),
    }
}

fn require_field(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
