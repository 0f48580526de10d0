use super::dto::OrderListItemResponseDTO;
use crate::model::order::OrderListItem;
use crate::service::listing::mapper::amount_from_minor;

impl From<OrderListItem> for OrderListItemResponseDTO {
    fn from(value: OrderListItem) -> Self {
        Self {
            id: value.id,
            number: value.number,
            created_date: value.created_date,
            customer_name: value.customer_name,
            status: value.status,
            total: amount_from_minor(value.total_minor),
            currency: value.currency,
        }
    }
}
