use shared_types::ProductId;
use strum::{Display, EnumString};
use time::Date;

use super::list_filter::{DateComparison, FilterConstraint, ListFilterValue, ValueComparison};
use super::list_query::{ListPagination, ListSorting};
use super::order_status::OrderStatus;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum TimeRangePreset {
    #[strum(serialize = "TODAY")]
    Today,
    #[strum(serialize = "7 DAYS")]
    SevenDays,
    #[strum(serialize = "1 MONTH")]
    OneMonth,
    #[strum(serialize = "THIS MONTH")]
    ThisMonth,
    #[strum(serialize = "3 MONTHS")]
    ThreeMonths,
    #[strum(serialize = "THIS YEAR")]
    ThisYear,
    #[strum(serialize = "ALL")]
    All,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum AddressField {
    Line1,
    Line2,
    City,
    Region,
    Postal,
    Country,
}

/// Case-insensitive substring match against one address field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressCondition {
    pub field: AddressField,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextSearch<SearchColumn> {
    pub column: SearchColumn,
    pub text: String,
}

/// Calendar day bounds, both inclusive
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

/// Monetary bounds in minor units, both inclusive
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AmountRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Validated listing request for one entity. Constructed per call and never
/// mutated once compilation starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListCriteria<SearchColumn, SortableColumn> {
    pub time_range: Option<TimeRangePreset>,
    pub search: FilterConstraint<TextSearch<SearchColumn>>,
    pub statuses: FilterConstraint<Vec<OrderStatus>>,
    /// Supersedes `time_range` whenever present
    pub date_range: Option<DateRange>,
    pub total_range: FilterConstraint<AmountRange>,
    pub currency: FilterConstraint<String>,
    pub address_conditions: FilterConstraint<Vec<AddressCondition>>,
    /// Every listed product must be present (contains-all)
    pub product_ids: FilterConstraint<Vec<ProductId>>,
    pub sorting: ListSorting<SortableColumn>,
    pub pagination: ListPagination,
}

/// Single store-facing constraint of a listing query
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListingFilterValue<SearchColumn> {
    Search { column: SearchColumn, text: String },
    Statuses(Vec<OrderStatus>),
    CreatedDate(DateComparison),
    Total(ValueComparison<i64>),
    Currency(String),
    Address(AddressCondition),
    /// At least one qualifying (non-free) line references the product
    ContainsProduct(ProductId),
}

impl<SearchColumn> ListFilterValue for ListingFilterValue<SearchColumn> {}
