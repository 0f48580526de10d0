use super::error::DataLayerError;
use crate::model::order::{GetOrderList, GetOrderQuery};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait OrderRepository: Send + Sync {
    /// Total matching count and the requested page, evaluated under the same predicate
    async fn get_order_list(&self, query: GetOrderQuery) -> Result<GetOrderList, DataLayerError>;
}
