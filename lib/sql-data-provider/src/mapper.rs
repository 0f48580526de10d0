use listing_core::model::common::SortDirection;
use listing_core::model::listing::AddressField;
use listing_core::repository::error::DataLayerError;
use sea_orm::{DbErr, Order};

pub(crate) fn order_from_sort_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    DataLayerError::Db(e.into())
}

/// Maps an address field onto the matching column of one address block
pub(crate) fn address_column<C: Copy>(field: AddressField, columns: &AddressColumns<C>) -> C {
    match field {
        AddressField::Line1 => columns.line1,
        AddressField::Line2 => columns.line2,
        AddressField::City => columns.city,
        AddressField::Region => columns.region,
        AddressField::Postal => columns.postal,
        AddressField::Country => columns.country,
    }
}

pub(crate) struct AddressColumns<C> {
    pub line1: C,
    pub line2: C,
    pub city: C,
    pub region: C,
    pub postal: C,
    pub country: C,
}
