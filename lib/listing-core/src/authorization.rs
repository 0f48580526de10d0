use strum::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    OrderList,
    UserList,
}

#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("Missing permission `{0}`")]
    MissingPermission(Permission),

    #[error("Authorization gate failure: `{0}`")]
    Gate(String),
}

/// External permission check, invoked before any listing touches the store
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AuthorizationGate: Send + Sync {
    async fn authorize(&self, permission: Permission) -> Result<(), AuthorizationError>;
}
