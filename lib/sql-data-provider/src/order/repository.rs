use listing_core::model::common::GetListResponse;
use listing_core::model::order::{GetOrderList, GetOrderQuery};
use listing_core::repository::error::DataLayerError;
use listing_core::repository::order_repository::OrderRepository;
use sea_orm::{EntityTrait, QuerySelect};

use super::OrderProvider;
use super::model::OrderListItemModel;
use crate::entity::order;
use crate::list_query_generic::fetch_list;

#[async_trait::async_trait]
impl OrderRepository for OrderProvider {
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    async fn get_order_list(&self, query: GetOrderQuery) -> Result<GetOrderList, DataLayerError> {
        let select = order::Entity::find().select_only().columns([
            order::Column::Id,
            order::Column::Number,
            order::Column::CreatedDate,
            order::Column::CustomerName,
            order::Column::Status,
            order::Column::Total,
            order::Column::Currency,
        ]);

        let GetListResponse {
            values,
            total_items,
        } = fetch_list::<_, OrderListItemModel, _, _>(&self.db, select, &query).await?;

        tracing::debug!(total_items, page_items = values.len(), "Fetched order page");

        Ok(GetOrderList {
            values: values.into_iter().map(Into::into).collect(),
            total_items,
        })
    }
}
