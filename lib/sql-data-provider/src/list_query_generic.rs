use listing_core::model::common::GetListResponse;
use listing_core::model::list_filter::{
    ComparisonType, ListFilterCondition, ListFilterValue, ValueComparison,
};
use listing_core::model::list_query::{ListQuery, OrderSpec};
use listing_core::model::order_status::StatusRankTable;
use listing_core::repository::error::DataLayerError;
use sea_orm::sea_query::{CaseStatement, Expr, Func, IntoCondition, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveEnum, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoSimpleExpr, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};

use crate::entity::order_status;
use crate::mapper::{order_from_sort_direction, to_data_layer_error};

pub trait IntoSortingColumn {
    /// converts declared sorting column into a sea-orm column
    fn get_column(&self) -> SimpleExpr;

    /// unique column appended to every ordering, keeps pages disjoint
    fn get_tie_breaker() -> SimpleExpr;
}

pub trait IntoFilterCondition: Clone + ListFilterValue {
    /// converts single query field into a sea-orm condition
    fn get_condition(self) -> Condition;
}

pub trait SelectWithListQuery<SortableColumn, FilterValue>
where
    SortableColumn: IntoSortingColumn,
    FilterValue: IntoFilterCondition,
{
    /// applies the predicate only, the result is what gets counted
    fn with_list_filter(self, filter: &ListFilterCondition<FilterValue>) -> Self;

    /// applies ordering and the page window on an already filtered select
    fn with_list_page(self, query: &ListQuery<SortableColumn, FilterValue>) -> Self;
}

impl<T, SortableColumn, FilterValue> SelectWithListQuery<SortableColumn, FilterValue> for Select<T>
where
    T: EntityTrait,
    SortableColumn: IntoSortingColumn + Copy,
    FilterValue: IntoFilterCondition,
{
    fn with_list_filter(self, filter: &ListFilterCondition<FilterValue>) -> Select<T> {
        if filter.is_empty() {
            return self;
        }

        self.filter(get_filter_condition(filter))
    }

    fn with_list_page(self, query: &ListQuery<SortableColumn, FilterValue>) -> Select<T> {
        self.order_by(
            get_order_expression(&query.ordering),
            order_from_sort_direction(query.ordering.direction()),
        )
        .order_by_asc(SortableColumn::get_tie_breaker())
        .offset(query.pagination.offset())
        .limit(query.pagination.limit())
    }
}

/// Count and page fetch of one listing. Both statements derive from the same
/// filtered select, whichever ordering strategy was resolved.
pub(crate) async fn fetch_list<T, M, SortableColumn, FilterValue>(
    db: &DatabaseConnection,
    select: Select<T>,
    query: &ListQuery<SortableColumn, FilterValue>,
) -> Result<GetListResponse<M>, DataLayerError>
where
    T: EntityTrait,
    T::Model: Sync,
    M: FromQueryResult + Send + Sync,
    SortableColumn: IntoSortingColumn + Copy,
    FilterValue: IntoFilterCondition,
{
    let filtered = SelectWithListQuery::<SortableColumn, FilterValue>::with_list_filter(
        select,
        &query.filtering,
    );

    let total_items = filtered
        .clone()
        .count(db)
        .await
        .map_err(to_data_layer_error)?;

    let values = filtered
        .with_list_page(query)
        .into_model::<M>()
        .all(db)
        .await
        .map_err(to_data_layer_error)?;

    Ok(GetListResponse {
        values,
        total_items,
    })
}

fn get_order_expression<SortableColumn: IntoSortingColumn + Copy>(
    ordering: &OrderSpec<SortableColumn>,
) -> SimpleExpr {
    match ordering {
        OrderSpec::Column { column, .. } => column.get_column(),
        OrderSpec::StatusRank { column, ranks, .. } => {
            get_status_rank_expression(column.get_column(), ranks)
        }
    }
}

/// `CASE status WHEN 'PENDING' THEN 1 ... ELSE <unranked> END`
pub(crate) fn get_status_rank_expression(
    status: SimpleExpr,
    ranks: &StatusRankTable,
) -> SimpleExpr {
    ranks
        .entries()
        .iter()
        .fold(CaseStatement::new(), |case, (value, rank)| {
            let value = order_status::OrderStatus::from(*value).to_value();
            case.case(Expr::expr(status.clone()).eq(value), Expr::val(*rank))
        })
        .finally(Expr::val(ranks.unranked()))
        .into()
}

fn get_filter_condition<FilterValue: IntoFilterCondition>(
    filter_condition: &ListFilterCondition<FilterValue>,
) -> Condition {
    match filter_condition {
        ListFilterCondition::And(conditions) => conditions
            .iter()
            .filter(|condition| !condition.is_empty())
            .fold(Condition::all(), |result, condition| {
                result.add(get_filter_condition(condition))
            }),
        ListFilterCondition::Value(value) => value.to_owned().get_condition(),
    }
}

/// helper function to construct an inclusive comparison `sea_query::Condition`
pub(crate) fn get_comparison_condition<T: Into<Value>>(
    column: impl ColumnTrait,
    comparison: ValueComparison<T>,
) -> Condition {
    let ValueComparison { comparison, value } = comparison;
    match comparison {
        ComparisonType::GreaterThanOrEqual => column.gte(value),
        ComparisonType::LessThanOrEqual => column.lte(value),
    }
    .into_condition()
}

/// helper function to construct a case-insensitive substring `sea_query::Condition`.
/// The pattern is folded like the store's `LOWER`, which only maps ASCII letters.
pub(crate) fn get_contains_ignore_case_condition(
    column: impl ColumnTrait,
    value: &str,
) -> Condition {
    let pattern = format!("%{}%", escape_like_pattern(&value.to_ascii_lowercase()));

    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(LikeExpr::new(pattern).escape('\\'))
        .into_condition()
}

fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
