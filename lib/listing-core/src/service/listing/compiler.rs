use strum::IntoEnumIterator;
use time::OffsetDateTime;

use super::sort_resolver::{SortableListColumn, resolve_order};
use super::time_window::effective_window;
use crate::model::list_filter::{ComparisonType, ListFilterCondition, ValueComparison};
use crate::model::list_query::ListQuery;
use crate::model::listing::{ListCriteria, ListingFilterValue};
use crate::model::order_status::OrderStatus;

type Condition<SearchColumn> = ListFilterCondition<ListingFilterValue<SearchColumn>>;

/// Conjunction of every constraint carried by `criteria`. Criteria without a
/// constraint contribute nothing, so an empty request compiles to an empty
/// conjunction (match all).
pub fn compile_filter<SearchColumn: Clone, SortableColumn>(
    criteria: &ListCriteria<SearchColumn, SortableColumn>,
    now: OffsetDateTime,
) -> Condition<SearchColumn> {
    let window = effective_window(criteria.date_range.as_ref(), criteria.time_range, now);

    let created_date = [
        window.from.map(greater_or_equal),
        window.to.map(less_or_equal),
    ]
    .into_iter()
    .flatten()
    .map(ListingFilterValue::CreatedDate)
    .collect::<Vec<_>>();

    let search = criteria
        .search
        .as_constraint()
        .map(|search| ListingFilterValue::Search {
            column: search.column.clone(),
            text: search.text.clone(),
        });

    let statuses = criteria
        .statuses
        .as_constraint()
        .filter(|statuses| !covers_every_status(statuses))
        .map(|statuses| ListingFilterValue::Statuses(statuses.clone()));

    let total = criteria
        .total_range
        .as_constraint()
        .map(|range| {
            [
                range.min.map(greater_or_equal),
                range.max.map(less_or_equal),
            ]
            .into_iter()
            .flatten()
            .map(ListingFilterValue::Total)
            .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let currency = criteria
        .currency
        .as_constraint()
        .map(|currency| ListingFilterValue::Currency(currency.clone()));

    // one conjunct per condition, a record must satisfy all of them
    let address = criteria
        .address_conditions
        .as_constraint()
        .map(|conditions| {
            conditions
                .iter()
                .cloned()
                .map(ListingFilterValue::Address)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    // one membership conjunct per product: contains all, not any
    let products = criteria
        .product_ids
        .as_constraint()
        .map(|ids| {
            ids.iter()
                .copied()
                .map(ListingFilterValue::ContainsProduct)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    ListFilterCondition::default()
        & created_date
        & search
        & statuses
        & total
        & currency
        & address
        & products
}

pub fn compile_list_query<SearchColumn, SortableColumn>(
    criteria: &ListCriteria<SearchColumn, SortableColumn>,
    now: OffsetDateTime,
) -> ListQuery<SortableColumn, ListingFilterValue<SearchColumn>>
where
    SearchColumn: Clone,
    SortableColumn: SortableListColumn,
{
    ListQuery {
        pagination: criteria.pagination,
        ordering: resolve_order(&criteria.sorting),
        filtering: compile_filter(criteria, now),
    }
}

/// A set naming every status selects the same records as no status filter,
/// including those without any status.
fn covers_every_status(statuses: &[OrderStatus]) -> bool {
    OrderStatus::iter().all(|status| statuses.contains(&status))
}

fn greater_or_equal<T>(value: T) -> ValueComparison<T> {
    ValueComparison {
        comparison: ComparisonType::GreaterThanOrEqual,
        value,
    }
}

fn less_or_equal<T>(value: T) -> ValueComparison<T> {
    ValueComparison {
        comparison: ComparisonType::LessThanOrEqual,
        value,
    }
}
