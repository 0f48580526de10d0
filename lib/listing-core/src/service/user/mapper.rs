use super::dto::UserListItemResponseDTO;
use crate::model::user::UserListItem;
use crate::service::listing::mapper::amount_from_minor;

impl From<UserListItem> for UserListItemResponseDTO {
    fn from(value: UserListItem) -> Self {
        Self {
            id: value.id,
            email: value.email,
            created_date: value.created_date,
            name: value.name,
            last_order_status: value.last_order_status,
            total_spent: amount_from_minor(value.total_spent_minor),
            currency: value.currency,
        }
    }
}
