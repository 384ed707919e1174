use sqlx::PgExecutor;

use crate::{
    dto::{deals::DealResponse, menu::MenuItemResponse},
    error::{AppError, AppResult},
    models::{Deal, MenuItem},
    routes::params::MenuListQuery,
    state::AppState,
};

pub async fn list_menu(
    state: &AppState,
    query: MenuListQuery,
) -> AppResult<Vec<MenuItemResponse>> {
    let limit = query.effective_limit(state.menu_default_limit);

    let items = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => {
            sqlx::query_as::<_, MenuItem>(
                "SELECT * FROM menu_items WHERE LOWER(category) = LOWER($1) ORDER BY name LIMIT $2",
            )
            .bind(category)
            .bind(limit)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY name LIMIT $1")
                .bind(limit)
                .fetch_all(&state.pool)
                .await?
        }
    };

    Ok(items.into_iter().map(MenuItemResponse::from).collect())
}

pub async fn get_menu_item(state: &AppState, item_name: &str) -> AppResult<MenuItemResponse> {
    let item = find_item_by_name(&state.pool, item_name)
        .await?
        .ok_or_else(|| AppError::NotFound("item not found".into()))?;
    Ok(item.into())
}

pub async fn list_active_deals(state: &AppState) -> AppResult<Vec<DealResponse>> {
    let deals = sqlx::query_as::<_, Deal>("SELECT * FROM deals WHERE active ORDER BY title")
        .fetch_all(&state.pool)
        .await?;
    Ok(deals.into_iter().map(DealResponse::from).collect())
}

/// Case-insensitive contains match on item name. Ties resolve exact match
/// first, then lowercased name, then id, so repeated lookups are stable.
pub(crate) async fn find_item_by_name<'e>(
    executor: impl PgExecutor<'e>,
    item_name: &str,
) -> Result<Option<MenuItem>, sqlx::Error> {
    sqlx::query_as::<_, MenuItem>(
        r#"
        SELECT * FROM menu_items
        WHERE name ILIKE $1
        ORDER BY (LOWER(name) = LOWER($2)) DESC, LOWER(name) ASC, id ASC
        LIMIT 1
        "#,
    )
    .bind(contains_pattern(item_name))
    .bind(item_name)
    .fetch_optional(executor)
    .await
}

// LIKE metacharacters in the needle must match literally.
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_plain_names() {
        assert_eq!(contains_pattern("bean burrito"), "%bean burrito%");
    }

    #[test]
    fn contains_pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("100% beef"), "%100\\% beef%");
        assert_eq!(contains_pattern("taco_supreme"), "%taco\\_supreme%");
        assert_eq!(contains_pattern(r"back\slash"), r"%back\\slash%");
    }
}
