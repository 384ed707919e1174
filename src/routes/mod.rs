use axum::Router;

use crate::state::AppState;

pub mod deals;
pub mod doc;
pub mod feedback;
pub mod health;
pub mod menu;
pub mod orders;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/menu", menu::router())
        .nest("/deals", deals::router())
        .nest("/order", orders::router())
        .nest("/feedback", feedback::router())
}
