//! Listing engine for the storefront back office: turns flat listing
//! criteria into a validated, compiled query over orders or users and
//! assembles the paginated result.

use std::sync::Arc;

use authorization::AuthorizationGate;
use config::ListingConfig;
use repository::DataRepository;
use service::order::OrderService;
use service::user::UserService;

pub mod authorization;
pub mod config;
pub mod model;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct ListingCore {
    pub order_service: OrderService,
    pub user_service: UserService,
}

impl ListingCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        authorization_gate: Arc<dyn AuthorizationGate>,
        config: ListingConfig,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            order_service: OrderService::new(
                data_provider.get_order_repository(),
                authorization_gate.clone(),
                config.clone(),
            ),
            user_service: UserService::new(
                data_provider.get_user_repository(),
                authorization_gate,
                config,
            ),
        }
    }
}
