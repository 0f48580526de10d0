use shared_types::OrderId;
use strum::{Display, EnumIter, EnumString};
use time::OffsetDateTime;

use super::common::GetListResponse;
use super::list_query::ListQuery;
use super::listing::{ListCriteria, ListingFilterValue};
use super::order_status::OrderStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderListItem {
    pub id: OrderId,
    pub number: String,
    pub created_date: OffsetDateTime,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total_minor: i64,
    pub currency: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum OrderSearchColumn {
    Number,
    CustomerName,
    CustomerEmail,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortableOrderColumn {
    #[default]
    CreatedDate,
    Total,
    Status,
}

pub type OrderFilterValue = ListingFilterValue<OrderSearchColumn>;
pub type OrderListCriteria = ListCriteria<OrderSearchColumn, SortableOrderColumn>;
pub type GetOrderQuery = ListQuery<SortableOrderColumn, OrderFilterValue>;
pub type GetOrderList = GetListResponse<OrderListItem>;
