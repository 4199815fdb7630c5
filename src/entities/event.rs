use serde::{Deserialize, Serialize};

use super::{Country, EventType};

/// An ongoing or upcoming event from the events overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPreview {
    pub id: u64,
    pub name: String,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
    /// Absent while the venue is still "TBA".
    pub location: Option<Country>,
    pub prize_pool: Option<String>,
    pub number_of_teams: Option<u32>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastEventPreview {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
    pub location: Option<Country>,
    pub prize_pool: Option<String>,
    pub number_of_teams: Option<u32>,
}
