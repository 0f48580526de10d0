use rust_decimal::Decimal;
use thiserror::Error;
use time::Date;

use crate::authorization::AuthorizationError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error("General repository error `{0}`")]
    Repository(#[from] DataLayerError),

    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Malformed listing request: `{0}`")]
    MalformedRequest(String),

    #[error("Unknown search column `{0}`")]
    UnknownSearchColumn(String),

    #[error("Search query given without search column")]
    MissingSearchColumn,

    #[error("Unknown sort column `{0}`")]
    UnknownSortColumn(String),

    #[error("Unknown sort direction `{0}`")]
    UnknownSortDirection(String),

    #[error("Unknown time range `{0}`")]
    UnknownTimeRange(String),

    #[error("Unknown status `{0}`")]
    UnknownStatus(String),

    #[error("Unknown address field `{0}`")]
    UnknownAddressField(String),

    #[error("Invalid page `{0}`, pages start at 1")]
    InvalidPage(i64),

    #[error("Invalid page size `{value}`, allowed range is 1..={max}")]
    InvalidPageSize { value: i64, max: u32 },

    #[error("Invalid date `{value}` in `{field}`, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Date range start {from} is after its end {to}")]
    InvalidDateRange { from: Date, to: Date },

    #[error("Invalid amount `{value}` in `{field}`")]
    InvalidAmount { field: &'static str, value: String },

    #[error("Amount range minimum {min} is above its maximum {max}")]
    InvalidAmountRange { min: Decimal, max: Decimal },

    #[error("Invalid currency code `{0}`")]
    InvalidCurrency(String),

    #[error("Invalid product id `{0}`")]
    InvalidProductId(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0012,
    BR_0013,
    BR_0014,
    BR_0015,
    BR_0016,
    BR_0017,
    BR_0018,
    BR_0019,
    BR_0020,
    BR_0021,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0001 => "Malformed listing request",
            ErrorCode::BR_0002 => "Unknown search column",
            ErrorCode::BR_0003 => "Missing search column",
            ErrorCode::BR_0004 => "Unknown sort column",
            ErrorCode::BR_0005 => "Unknown sort direction",
            ErrorCode::BR_0006 => "Unknown time range",
            ErrorCode::BR_0007 => "Unknown status",
            ErrorCode::BR_0008 => "Unknown address field",
            ErrorCode::BR_0009 => "Invalid pagination",
            ErrorCode::BR_0010 => "Database error",
            ErrorCode::BR_0012 => "Invalid date",
            ErrorCode::BR_0013 => "Invalid date range",
            ErrorCode::BR_0014 => "Invalid amount",
            ErrorCode::BR_0015 => "Invalid amount range",
            ErrorCode::BR_0016 => "Invalid currency",
            ErrorCode::BR_0017 => "Invalid product id",
            ErrorCode::BR_0018 => "Missing permission",
            ErrorCode::BR_0019 => "Authorization failure",
            ErrorCode::BR_0020 => "Request cancelled",
            ErrorCode::BR_0021 => "Invalid page size",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Authorization(AuthorizationError::MissingPermission(_)) => {
                ErrorCode::BR_0018
            }
            ServiceError::Authorization(AuthorizationError::Gate(_)) => ErrorCode::BR_0019,
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::Cancelled => ErrorCode::BR_0020,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedRequest(_) => ErrorCode::BR_0001,
            Self::UnknownSearchColumn(_) => ErrorCode::BR_0002,
            Self::MissingSearchColumn => ErrorCode::BR_0003,
            Self::UnknownSortColumn(_) => ErrorCode::BR_0004,
            Self::UnknownSortDirection(_) => ErrorCode::BR_0005,
            Self::UnknownTimeRange(_) => ErrorCode::BR_0006,
            Self::UnknownStatus(_) => ErrorCode::BR_0007,
            Self::UnknownAddressField(_) => ErrorCode::BR_0008,
            Self::InvalidPage(_) => ErrorCode::BR_0009,
            Self::InvalidPageSize { .. } => ErrorCode::BR_0021,
            Self::InvalidDate { .. } => ErrorCode::BR_0012,
            Self::InvalidDateRange { .. } => ErrorCode::BR_0013,
            Self::InvalidAmount { .. } => ErrorCode::BR_0014,
            Self::InvalidAmountRange { .. } => ErrorCode::BR_0015,
            Self::InvalidCurrency(_) => ErrorCode::BR_0016,
            Self::InvalidProductId(_) => ErrorCode::BR_0017,
        }
    }
}
