use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::service::error::ValidationError;

/// Flat listing request as received from a query string or JSON body
#[serde_as]
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCriteriaRequestDTO {
    pub time_range: Option<String>,
    pub search_column: Option<String>,
    pub search_query: Option<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub total_min: Option<String>,
    pub total_max: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub address_conditions: Vec<AddressConditionRequestDTO>,
    #[serde(default)]
    pub product_ids: Vec<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub page: Option<i64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub limit: Option<i64>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct AddressConditionRequestDTO {
    pub r#type: String,
    #[serde(default)]
    pub value: String,
}

impl ListCriteriaRequestDTO {
    /// Indexed query string form, e.g. `statuses[0]=PENDING&addressConditions[0][type]=city`
    pub fn from_query_string(query: &str) -> Result<Self, ValidationError> {
        serde_qs::from_str(query).map_err(|e| ValidationError::MalformedRequest(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::MalformedRequest(e.to_string()))
    }
}

/// Envelope shared by every listing response
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u64,
}
