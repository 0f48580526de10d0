use super::error::DataLayerError;
use crate::model::user::{GetUserList, GetUserQuery};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_list(&self, query: GetUserQuery) -> Result<GetUserList, DataLayerError>;
}
