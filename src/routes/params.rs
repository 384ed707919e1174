use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

impl MenuListQuery {
    /// Resolve the row cap: explicit `limit` wins, else the configured
    /// default, clamped to a sane range either way.
    pub fn effective_limit(&self, default_limit: i64) -> i64 {
        self.limit.unwrap_or(default_limit).clamp(1, 100)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ViewOrderQuery {
    pub discord_user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_limit_prefers_explicit_value() {
        let query = MenuListQuery {
            category: None,
            limit: Some(8),
        };
        assert_eq!(query.effective_limit(10), 8);
    }

    #[test]
    fn effective_limit_falls_back_and_clamps() {
        let query = MenuListQuery {
            category: None,
            limit: None,
        };
        assert_eq!(query.effective_limit(10), 10);

        let oversized = MenuListQuery {
            category: None,
            limit: Some(5000),
        };
        assert_eq!(oversized.effective_limit(10), 100);

        let zero = MenuListQuery {
            category: None,
            limit: Some(0),
        };
        assert_eq!(zero.effective_limit(10), 1);
    }
}
