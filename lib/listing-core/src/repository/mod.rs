use std::sync::Arc;

use order_repository::OrderRepository;
use user_repository::UserRepository;

pub mod error;
pub mod order_repository;
pub mod user_repository;

pub trait DataRepository: Send + Sync {
    fn get_order_repository(&self) -> Arc<dyn OrderRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
}
