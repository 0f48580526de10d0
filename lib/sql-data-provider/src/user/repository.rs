use listing_core::model::common::GetListResponse;
use listing_core::model::user::{GetUserList, GetUserQuery};
use listing_core::repository::error::DataLayerError;
use listing_core::repository::user_repository::UserRepository;
use sea_orm::{EntityTrait, QuerySelect};

use super::UserProvider;
use super::model::UserListItemModel;
use crate::entity::user;
use crate::list_query_generic::fetch_list;

#[async_trait::async_trait]
impl UserRepository for UserProvider {
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    async fn get_user_list(&self, query: GetUserQuery) -> Result<GetUserList, DataLayerError> {
        let select = user::Entity::find().select_only().columns([
            user::Column::Id,
            user::Column::Email,
            user::Column::CreatedDate,
            user::Column::Name,
            user::Column::Status,
            user::Column::TotalSpent,
            user::Column::Currency,
        ]);

        let GetListResponse {
            values,
            total_items,
        } = fetch_list::<_, UserListItemModel, _, _>(&self.db, select, &query).await?;

        tracing::debug!(total_items, page_items = values.len(), "Fetched user page");

        Ok(GetUserList {
            values: values.into_iter().map(Into::into).collect(),
            total_items,
        })
    }
}
