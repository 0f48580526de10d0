use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::{serde_as, skip_serializing_none};
use shared_types::UserId;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::order_status::OrderStatus;
use crate::service::listing::dto::ListResult;

#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItemResponseDTO {
    pub id: UserId,
    pub email: String,
    #[serde_as(as = "Rfc3339")]
    pub created_date: OffsetDateTime,
    pub name: String,
    pub last_order_status: Option<OrderStatus>,
    pub total_spent: Decimal,
    pub currency: String,
}

pub type GetUserListResponseDTO = ListResult<UserListItemResponseDTO>;
