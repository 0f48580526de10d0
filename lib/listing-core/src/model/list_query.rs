use super::common::SortDirection;
use super::list_filter::{ListFilterCondition, ListFilterValue};
use super::order_status::StatusRankTable;

/// Direction applied whenever a column is sorted without an explicit one
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Descending;

/// 1-based page window
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    pub page: u32,
    pub page_size: u32,
}

impl ListPagination {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListSorting<SortableColumn> {
    pub column: SortableColumn,
    pub direction: SortDirection,
}

impl<SortableColumn: PartialEq> ListSorting<SortableColumn> {
    pub fn new(column: SortableColumn) -> Self {
        Self {
            column,
            direction: DEFAULT_SORT_DIRECTION,
        }
    }

    /// Sorting that results from selecting `column` while `previous` is active:
    /// the same column flips direction, any other column starts descending.
    pub fn toggle(previous: Option<&Self>, column: SortableColumn) -> Self {
        match previous {
            Some(previous) if previous.column == column => Self {
                column,
                direction: previous.direction.reversed(),
            },
            _ => Self::new(column),
        }
    }
}

/// Resolved ordering of a listing query
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderSpec<SortableColumn> {
    /// Direct comparison on the stored column value
    Column {
        column: SortableColumn,
        direction: SortDirection,
    },
    /// Comparison on the business rank of the stored status value
    StatusRank {
        column: SortableColumn,
        ranks: &'static StatusRankTable,
        direction: SortDirection,
    },
}

impl<SortableColumn: Copy> OrderSpec<SortableColumn> {
    pub fn column(&self) -> SortableColumn {
        match self {
            Self::Column { column, .. } | Self::StatusRank { column, .. } => *column,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            Self::Column { direction, .. } | Self::StatusRank { direction, .. } => *direction,
        }
    }
}

/// Compiled, store-facing listing query: one predicate, one ordering and one
/// page window. The count and the page fetch both derive from `filtering`.
#[derive(Clone, Debug)]
pub struct ListQuery<SortableColumn, FV: ListFilterValue> {
    pub pagination: ListPagination,
    pub ordering: OrderSpec<SortableColumn>,
    pub filtering: ListFilterCondition<FV>,
}
