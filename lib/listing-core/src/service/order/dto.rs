use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::serde_as;
use shared_types::OrderId;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::order_status::OrderStatus;
use crate::service::listing::dto::ListResult;

#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItemResponseDTO {
    pub id: OrderId,
    pub number: String,
    #[serde_as(as = "Rfc3339")]
    pub created_date: OffsetDateTime,
    pub customer_name: String,
    pub status: OrderStatus,
    pub total: Decimal,
    pub currency: String,
}

pub type GetOrderListResponseDTO = ListResult<OrderListItemResponseDTO>;
