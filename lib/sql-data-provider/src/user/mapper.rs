use listing_core::model::listing::ListingFilterValue;
use listing_core::model::user::{
    SortableUserColumn, UserFilterValue, UserListItem, UserSearchColumn,
};
use sea_orm::sea_query::{Expr, IntoCondition, Query, SimpleExpr};
use sea_orm::{ColumnTrait, IntoSimpleExpr, JoinType};

use super::model::UserListItemModel;
use crate::entity::{order, order_line, order_status, user};
use crate::list_query_generic::{
    IntoFilterCondition, IntoSortingColumn, get_comparison_condition,
    get_contains_ignore_case_condition,
};
use crate::mapper::{AddressColumns, address_column};

const DEFAULT_ADDRESS: AddressColumns<user::Column> = AddressColumns {
    line1: user::Column::AddressLine1,
    line2: user::Column::AddressLine2,
    city: user::Column::AddressCity,
    region: user::Column::AddressRegion,
    postal: user::Column::AddressPostal,
    country: user::Column::AddressCountry,
};

impl IntoSortingColumn for SortableUserColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::CreatedDate => user::Column::CreatedDate.into_simple_expr(),
            Self::TotalSpent => user::Column::TotalSpent.into_simple_expr(),
            Self::Status => user::Column::Status.into_simple_expr(),
        }
    }

    fn get_tie_breaker() -> SimpleExpr {
        user::Column::Id.into_simple_expr()
    }
}

impl IntoFilterCondition for UserFilterValue {
    fn get_condition(self) -> sea_orm::Condition {
        match self {
            ListingFilterValue::Search { column, text } => {
                let column = match column {
                    UserSearchColumn::Name => user::Column::Name,
                    UserSearchColumn::Email => user::Column::Email,
                    UserSearchColumn::Phone => user::Column::Phone,
                };
                get_contains_ignore_case_condition(column, &text)
            }
            // users without orders have no status and never match a partial status set
            ListingFilterValue::Statuses(statuses) => user::Column::Status
                .is_in(statuses.into_iter().map(order_status::OrderStatus::from))
                .into_condition(),
            ListingFilterValue::CreatedDate(value) => {
                get_comparison_condition(user::Column::CreatedDate, value)
            }
            ListingFilterValue::Total(value) => {
                get_comparison_condition(user::Column::TotalSpent, value)
            }
            ListingFilterValue::Currency(currency) => {
                user::Column::Currency.eq(currency).into_condition()
            }
            ListingFilterValue::Address(condition) => get_contains_ignore_case_condition(
                address_column(condition.field, &DEFAULT_ADDRESS),
                &condition.value,
            ),
            // bought the product in any of their orders
            ListingFilterValue::ContainsProduct(product_id) => user::Column::Id
                .in_subquery(
                    Query::select()
                        .column((order::Entity, order::Column::UserId))
                        .from(order::Entity)
                        .join(
                            JoinType::InnerJoin,
                            order_line::Entity,
                            Expr::col((order_line::Entity, order_line::Column::OrderId))
                                .equals((order::Entity, order::Column::Id)),
                        )
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

impl From<UserListItemModel> for UserListItem {
    fn from(value: UserListItemModel) -> Self {
        Self {
            id: value.id,
            email: value.email,
            created_date: value.created_date,
            name: value.name,
            last_order_status: value.status.map(Into::into),
            total_spent_minor: value.total_spent,
            currency: value.currency,
        }
    }
}
