use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use shared_types::ProductId;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::dto::{AddressConditionRequestDTO, ListCriteriaRequestDTO};
use crate::config::ListingConfig;
use crate::model::common::SortDirection;
use crate::model::list_filter::FilterConstraint;
use crate::model::list_query::{DEFAULT_SORT_DIRECTION, ListPagination, ListSorting};
use crate::model::listing::{
    AddressCondition, AddressField, AmountRange, DateRange, ListCriteria, TextSearch,
    TimeRangePreset,
};
use crate::model::order_status::OrderStatus;
use crate::service::error::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Validates and normalizes a raw listing request. Pure: the only inputs are
/// the request itself and the page size bounds.
pub fn parse_criteria<SearchColumn, SortableColumn>(
    request: ListCriteriaRequestDTO,
    config: &ListingConfig,
) -> Result<ListCriteria<SearchColumn, SortableColumn>, ValidationError>
where
    SearchColumn: FromStr,
    SortableColumn: FromStr + Default,
{
    let time_range = non_blank(request.time_range)
        .map(|value| {
            TimeRangePreset::from_str(&value).map_err(|_| ValidationError::UnknownTimeRange(value))
        })
        .transpose()?;

    let search = parse_search(request.search_column, request.search_query)?;
    let statuses = parse_statuses(request.statuses)?;
    let date_range = parse_date_range(request.date_from, request.date_to)?;
    let total_range = parse_amount_range(request.total_min, request.total_max)?;
    let currency = parse_currency(request.currency)?;
    let address_conditions = parse_address_conditions(request.address_conditions)?;
    let product_ids = parse_product_ids(request.product_ids)?;
    let sorting = parse_sorting(request.sort_column, request.sort_direction)?;
    let pagination = parse_pagination(request.page, request.limit, config)?;

    Ok(ListCriteria {
        time_range,
        search,
        statuses,
        date_range,
        total_range,
        currency,
        address_conditions,
        product_ids,
        sorting,
        pagination,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_search<SearchColumn: FromStr>(
    column: Option<String>,
    text: Option<String>,
) -> Result<FilterConstraint<TextSearch<SearchColumn>>, ValidationError> {
    let column = non_blank(column)
        .map(|value| {
            SearchColumn::from_str(&value).map_err(|_| ValidationError::UnknownSearchColumn(value))
        })
        .transpose()?;

    match (column, non_blank(text)) {
        (_, None) => Ok(FilterConstraint::NoConstraint),
        (None, Some(_)) => Err(ValidationError::MissingSearchColumn),
        (Some(column), Some(text)) => Ok(FilterConstraint::Constraint(TextSearch { column, text })),
    }
}

fn parse_statuses(
    values: Vec<String>,
) -> Result<FilterConstraint<Vec<OrderStatus>>, ValidationError> {
    let mut seen = HashSet::new();
    let mut statuses = Vec::with_capacity(values.len());

    for value in values {
        let status =
            OrderStatus::from_str(&value).map_err(|_| ValidationError::UnknownStatus(value))?;
        if seen.insert(status) {
            statuses.push(status);
        }
    }

    Ok(FilterConstraint::from_non_empty(statuses))
}

fn parse_date(field: &'static str, value: Option<String>) -> Result<Option<Date>, ValidationError> {
    non_blank(value)
        .map(|value| {
            Date::parse(value.trim(), DATE_FORMAT)
                .map_err(|_| ValidationError::InvalidDate { field, value })
        })
        .transpose()
}

fn parse_date_range(
    from: Option<String>,
    to: Option<String>,
) -> Result<Option<DateRange>, ValidationError> {
    let from = parse_date("dateFrom", from)?;
    let to = parse_date("dateTo", to)?;

    match (from, to) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) if from > to => Err(ValidationError::InvalidDateRange { from, to }),
        (from, to) => Ok(Some(DateRange { from, to })),
    }
}

fn parse_amount(field: &'static str, value: Option<String>) -> Result<Option<Decimal>, ValidationError> {
    non_blank(value)
        .map(|value| {
            Decimal::from_str(value.trim())
                .map_err(|_| ValidationError::InvalidAmount { field, value })
        })
        .transpose()
}

/// Minor units keeping the bound inclusive: minimums round up, maximums round down
fn to_minor_units(
    field: &'static str,
    amount: Decimal,
    round: fn(&Decimal) -> Decimal,
) -> Result<i64, ValidationError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| round(&scaled))
        .and_then(|minor| i64::try_from(minor).ok())
        .ok_or_else(|| ValidationError::InvalidAmount {
            field,
            value: amount.to_string(),
        })
}

fn parse_amount_range(
    min: Option<String>,
    max: Option<String>,
) -> Result<FilterConstraint<AmountRange>, ValidationError> {
    let min = parse_amount("totalMin", min)?;
    let max = parse_amount("totalMax", max)?;

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::InvalidAmountRange { min, max });
        }
    }

    if min.is_none() && max.is_none() {
        return Ok(FilterConstraint::NoConstraint);
    }

    Ok(FilterConstraint::Constraint(AmountRange {
        min: min
            .map(|min| to_minor_units("totalMin", min, Decimal::ceil))
            .transpose()?,
        max: max
            .map(|max| to_minor_units("totalMax", max, Decimal::floor))
            .transpose()?,
    }))
}

fn parse_currency(value: Option<String>) -> Result<FilterConstraint<String>, ValidationError> {
    match non_blank(value) {
        None => Ok(FilterConstraint::NoConstraint),
        Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
            Ok(FilterConstraint::Constraint(code.to_ascii_uppercase()))
        }
        Some(code) => Err(ValidationError::InvalidCurrency(code)),
    }
}

fn parse_address_conditions(
    values: Vec<AddressConditionRequestDTO>,
) -> Result<FilterConstraint<Vec<AddressCondition>>, ValidationError> {
    let mut conditions = Vec::with_capacity(values.len());

    for AddressConditionRequestDTO { r#type, value } in values {
        let field =
            AddressField::from_str(&r#type).map_err(|_| ValidationError::UnknownAddressField(r#type))?;

        // blank substrings contribute no constraint
        if value.trim().is_empty() {
            continue;
        }

        conditions.push(AddressCondition { field, value });
    }

    Ok(FilterConstraint::from_non_empty(conditions))
}

fn parse_product_ids(
    values: Vec<String>,
) -> Result<FilterConstraint<Vec<ProductId>>, ValidationError> {
    let mut seen = HashSet::new();
    let mut product_ids = Vec::with_capacity(values.len());

    for value in values {
        let id = ProductId::from_str(value.trim())
            .map_err(|_| ValidationError::InvalidProductId(value))?;
        if seen.insert(id) {
            product_ids.push(id);
        }
    }

    Ok(FilterConstraint::from_non_empty(product_ids))
}

fn parse_sorting<SortableColumn: FromStr + Default>(
    column: Option<String>,
    direction: Option<String>,
) -> Result<ListSorting<SortableColumn>, ValidationError> {
    let column = non_blank(column)
        .map(|value| {
            SortableColumn::from_str(&value).map_err(|_| ValidationError::UnknownSortColumn(value))
        })
        .transpose()?
        .unwrap_or_default();

    let direction = non_blank(direction)
        .map(|value| {
            SortDirection::from_str(&value)
                .map_err(|_| ValidationError::UnknownSortDirection(value))
        })
        .transpose()?
        .unwrap_or(DEFAULT_SORT_DIRECTION);

    Ok(ListSorting { column, direction })
}

fn parse_pagination(
    page: Option<i64>,
    limit: Option<i64>,
    config: &ListingConfig,
) -> Result<ListPagination, ValidationError> {
    let page = page.unwrap_or(1);
    let page = u32::try_from(page)
        .ok()
        .filter(|page| *page >= 1)
        .ok_or(ValidationError::InvalidPage(page))?;

    let limit = limit.unwrap_or_else(|| i64::from(config.default_page_size));
    let page_size = u32::try_from(limit)
        .ok()
        .filter(|size| (1..=config.max_page_size).contains(size))
        .ok_or(ValidationError::InvalidPageSize {
            value: limit,
            max: config.max_page_size,
        })?;

    Ok(ListPagination { page, page_size })
}
