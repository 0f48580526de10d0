use sea_orm::FromQueryResult;
use shared_types::OrderId;
use time::OffsetDateTime;

use crate::entity::order_status::OrderStatus;

#[derive(FromQueryResult)]
pub(super) struct OrderListItemModel {
    pub id: OrderId,
    pub number: String,
    pub created_date: OffsetDateTime,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total: i64,
    pub currency: String,
}
