pub mod catalog_service;
pub mod feedback_service;
pub mod order_service;
