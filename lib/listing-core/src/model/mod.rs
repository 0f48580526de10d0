pub mod common;
pub mod list_filter;
pub mod list_query;
pub mod listing;
pub mod order;
pub mod order_status;
pub mod user;
