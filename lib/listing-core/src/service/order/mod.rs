use std::sync::Arc;

use crate::authorization::AuthorizationGate;
use crate::config::ListingConfig;
use crate::repository::order_repository::OrderRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct OrderService {
    order_repository: Arc<dyn OrderRepository>,
    authorization_gate: Arc<dyn AuthorizationGate>,
    config: Arc<ListingConfig>,
}

impl OrderService {
    pub(crate) fn new(
        order_repository: Arc<dyn OrderRepository>,
        authorization_gate: Arc<dyn AuthorizationGate>,
        config: Arc<ListingConfig>,
    ) -> Self {
        Self {
            order_repository,
            authorization_gate,
            config,
        }
    }
}
