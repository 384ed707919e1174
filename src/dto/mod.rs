pub mod deals;
pub mod feedback;
pub mod menu;
pub mod orders;
