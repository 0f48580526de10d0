use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    #[strum(serialize = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    #[strum(serialize = "DESC")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Page of records as returned by a repository, before assembly
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetListResponse<T> {
    pub values: Vec<T>,
    pub total_items: u64,
}
