use crate::model::common::SortDirection;
use crate::model::list_query::{ListSorting, OrderSpec};
use crate::model::order::SortableOrderColumn;
use crate::model::order_status::{OrderStatus, StatusRankTable};
use crate::model::user::SortableUserColumn;

/// Business priority of order statuses, "needs attention first".
pub static STATUS_RANK: StatusRankTable = StatusRankTable::new(&[
    (OrderStatus::Pending, 1),
    (OrderStatus::Processing, 2),
    (OrderStatus::Paid, 3),
    (OrderStatus::Shipped, 4),
    (OrderStatus::Delivered, 5),
    (OrderStatus::Cancelled, 6),
    (OrderStatus::Refunded, 7),
]);

pub trait OrderStrategy<SortableColumn> {
    fn build_order(&self, direction: SortDirection) -> OrderSpec<SortableColumn>;
}

/// Direct comparison on the stored value
pub struct ColumnOrder<SortableColumn>(pub SortableColumn);

impl<SortableColumn: Copy> OrderStrategy<SortableColumn> for ColumnOrder<SortableColumn> {
    fn build_order(&self, direction: SortDirection) -> OrderSpec<SortableColumn> {
        OrderSpec::Column {
            column: self.0,
            direction,
        }
    }
}

/// Comparison on the rank of the stored status, never on its text
pub struct StatusRankOrder<SortableColumn> {
    pub column: SortableColumn,
    pub ranks: &'static StatusRankTable,
}

impl<SortableColumn: Copy> OrderStrategy<SortableColumn> for StatusRankOrder<SortableColumn> {
    fn build_order(&self, direction: SortDirection) -> OrderSpec<SortableColumn> {
        OrderSpec::StatusRank {
            column: self.column,
            ranks: self.ranks,
            direction,
        }
    }
}

pub trait SortableListColumn: Copy + Sized + 'static {
    fn order_strategy(self) -> Box<dyn OrderStrategy<Self>>;
}

impl SortableListColumn for SortableOrderColumn {
    fn order_strategy(self) -> Box<dyn OrderStrategy<Self>> {
        match self {
            Self::CreatedDate | Self::Total => Box::new(ColumnOrder(self)),
            Self::Status => Box::new(StatusRankOrder {
                column: self,
                ranks: &STATUS_RANK,
            }),
        }
    }
}

impl SortableListColumn for SortableUserColumn {
    fn order_strategy(self) -> Box<dyn OrderStrategy<Self>> {
        match self {
            Self::CreatedDate | Self::TotalSpent => Box::new(ColumnOrder(self)),
            Self::Status => Box::new(StatusRankOrder {
                column: self,
                ranks: &STATUS_RANK,
            }),
        }
    }
}

pub fn resolve_order<SortableColumn: SortableListColumn>(
    sorting: &ListSorting<SortableColumn>,
) -> OrderSpec<SortableColumn> {
    sorting.column.order_strategy().build_order(sorting.direction)
}
