use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        deals::DealResponse,
        feedback::{FeedbackRequest, FeedbackResponse},
        menu::MenuItemResponse,
        orders::{
            AddItemRequest, AddItemResponse, CheckoutRequest, CheckoutResponse, OrderLine,
            OrderView,
        },
    },
    routes::{deals, feedback, health, menu, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        menu::list_menu,
        menu::get_menu_item,
        deals::list_deals,
        orders::add_item,
        orders::view_order,
        orders::checkout,
        feedback::submit_feedback
    ),
    components(
        schemas(
            health::HealthData,
            MenuItemResponse,
            DealResponse,
            AddItemRequest,
            AddItemResponse,
            CheckoutRequest,
            CheckoutResponse,
            OrderLine,
            OrderView,
            FeedbackRequest,
            FeedbackResponse,
            params::MenuListQuery,
            params::ViewOrderQuery
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu", description = "Menu browsing endpoints"),
        (name = "Deals", description = "Active deal listing"),
        (name = "Orders", description = "Order building and checkout endpoints"),
        (name = "Feedback", description = "Feedback submission"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
