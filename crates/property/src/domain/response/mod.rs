pub mod api;
pub mod property;
