use listing_core::model::listing::ListingFilterValue;
use listing_core::model::order::{
    OrderFilterValue, OrderListItem, OrderSearchColumn, SortableOrderColumn,
};
use sea_orm::sea_query::{IntoCondition, Query, SimpleExpr};
use sea_orm::{ColumnTrait, IntoSimpleExpr};

use super::model::OrderListItemModel;
use crate::entity::{order, order_line, order_status};
use crate::list_query_generic::{
    IntoFilterCondition, IntoSortingColumn, get_comparison_condition,
    get_contains_ignore_case_condition,
};
use crate::mapper::{AddressColumns, address_column};

const SHIPPING_ADDRESS: AddressColumns<order::Column> = AddressColumns {
    line1: order::Column::AddressLine1,
    line2: order::Column::AddressLine2,
    city: order::Column::AddressCity,
    region: order::Column::AddressRegion,
    postal: order::Column::AddressPostal,
    country: order::Column::AddressCountry,
};

impl IntoSortingColumn for SortableOrderColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::CreatedDate => order::Column::CreatedDate.into_simple_expr(),
            Self::Total => order::Column::Total.into_simple_expr(),
            Self::Status => order::Column::Status.into_simple_expr(),
        }
    }

    fn get_tie_breaker() -> SimpleExpr {
        order::Column::Id.into_simple_expr()
    }
}

impl IntoFilterCondition for OrderFilterValue {
    fn get_condition(self) -> sea_orm::Condition {
        match self {
            ListingFilterValue::Search { column, text } => {
                let column = match column {
                    OrderSearchColumn::Number => order::Column::Number,
                    OrderSearchColumn::CustomerName => order::Column::CustomerName,
                    OrderSearchColumn::CustomerEmail => order::Column::CustomerEmail,
                };
                get_contains_ignore_case_condition(column, &text)
            }
            ListingFilterValue::Statuses(statuses) => order::Column::Status
                .is_in(statuses.into_iter().map(order_status::OrderStatus::from))
                .into_condition(),
            ListingFilterValue::CreatedDate(value) => {
                get_comparison_condition(order::Column::CreatedDate, value)
            }
            ListingFilterValue::Total(value) => get_comparison_condition(order::Column::Total, value),
            ListingFilterValue::Currency(currency) => {
                order::Column::Currency.eq(currency).into_condition()
            }
            ListingFilterValue::Address(condition) => get_contains_ignore_case_condition(
                address_column(condition.field, &SHIPPING_ADDRESS),
                &condition.value,
            ),
            ListingFilterValue::ContainsProduct(product_id) => order::Column::Id
                .in_subquery(
                    Query::select()
                        .column(order_line::Column::OrderId)
                        .from(order_line::Entity)
                        .and_where(
                            order_line::Column::ProductId
                                .eq(product_id)
                                .and(order_line::Column::IsFree.eq(false)),
                        )
                        .to_owned(),
                )
                .into_condition(),
        }
    }
}

impl From<OrderListItemModel> for OrderListItem {
    fn from(value: OrderListItemModel) -> Self {
        Self {
            id: value.id,
            number: value.number,
            created_date: value.created_date,
            customer_name: value.customer_name,
            status: value.status.into(),
            total_minor: value.total,
            currency: value.currency,
        }
    }
}
