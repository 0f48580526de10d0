use shared_types::UserId;
use strum::{Display, EnumIter, EnumString};
use time::OffsetDateTime;

use super::common::GetListResponse;
use super::list_query::ListQuery;
use super::listing::{ListCriteria, ListingFilterValue};
use super::order_status::OrderStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserListItem {
    pub id: UserId,
    pub email: String,
    pub created_date: OffsetDateTime,
    pub name: String,
    /// Status of the most recent order, if the user ever ordered
    pub last_order_status: Option<OrderStatus>,
    pub total_spent_minor: i64,
    pub currency: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum UserSearchColumn {
    Name,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortableUserColumn {
    #[default]
    CreatedDate,
    TotalSpent,
    Status,
}

pub type UserFilterValue = ListingFilterValue<UserSearchColumn>;
pub type UserListCriteria = ListCriteria<UserSearchColumn, SortableUserColumn>;
pub type GetUserQuery = ListQuery<SortableUserColumn, UserFilterValue>;
pub type GetUserList = GetListResponse<UserListItem>;
