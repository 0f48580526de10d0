use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

/// Status to priority mapping, lower rank sorts first ("needs attention first").
#[derive(Debug, Eq, PartialEq)]
pub struct StatusRankTable {
    entries: &'static [(OrderStatus, u32)],
}

impl StatusRankTable {
    pub const fn new(entries: &'static [(OrderStatus, u32)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(OrderStatus, u32)] {
        self.entries
    }

    pub fn rank(&self, status: OrderStatus) -> u32 {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == status)
            .map(|(_, rank)| *rank)
            .unwrap_or_else(|| self.unranked())
    }

    /// Rank of records without a status, placed after every ranked status
    pub fn unranked(&self) -> u32 {
        self.entries
            .iter()
            .map(|(_, rank)| *rank)
            .max()
            .unwrap_or_default()
            + 1
    }
}
