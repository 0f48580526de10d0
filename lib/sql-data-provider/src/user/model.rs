use sea_orm::FromQueryResult;
use shared_types::UserId;
use time::OffsetDateTime;

use crate::entity::order_status::OrderStatus;

#[derive(FromQueryResult)]
pub(super) struct UserListItemModel {
    pub id: UserId,
    pub email: String,
    pub created_date: OffsetDateTime,
    pub name: String,
    pub status: Option<OrderStatus>,
    pub total_spent: i64,
    pub currency: String,
}
