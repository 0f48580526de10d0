pub mod error;
pub mod listing;
pub mod order;
pub mod user;
