use std::sync::Arc;

use crate::authorization::AuthorizationGate;
use crate::config::ListingConfig;
use crate::repository::user_repository::UserRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    authorization_gate: Arc<dyn AuthorizationGate>,
    config: Arc<ListingConfig>,
}

impl UserService {
    pub(crate) fn new(
        user_repository: Arc<dyn UserRepository>,
        authorization_gate: Arc<dyn AuthorizationGate>,
        config: Arc<ListingConfig>,
    ) -> Self {
        Self {
            user_repository,
            authorization_gate,
            config,
        }
    }
}

#[cfg(test)]
mod test;
