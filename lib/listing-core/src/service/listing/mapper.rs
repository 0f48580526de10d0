use rust_decimal::Decimal;

use super::dto::ListResult;
use crate::model::common::GetListResponse;
use crate::model::list_query::ListPagination;

/// Stored minor units (cents) as a two-decimal amount
pub fn amount_from_minor(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

pub fn calculate_pages_count(total_items_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    total_items_count.div_ceil(page_size)
}

pub fn list_result_from<T, U: From<T>>(
    response: GetListResponse<T>,
    pagination: &ListPagination,
) -> ListResult<U> {
    ListResult {
        items: response.values.into_iter().map(U::from).collect(),
        total_count: response.total_items,
        total_pages: calculate_pages_count(response.total_items, pagination.limit()),
    }
}
