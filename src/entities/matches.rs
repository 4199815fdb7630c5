use serde::{Deserialize, Serialize};

use super::{Event, GameMap, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub name: String,
    pub logo: Option<String>,
}

/// What a match row shows: two teams, or a placeholder message such as
/// "Winner of upper bracket final" before the lineup is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchLineup {
    Teams { team1: MatchTeam, team2: MatchTeam },
    Info { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPreview {
    pub id: u64,
    pub date: Option<i64>,
    pub stars: Option<u8>,
    pub format: Option<String>,
    pub stage: Option<String>,
    pub event: Option<Event>,
    pub live: bool,
    pub lineup: MatchLineup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEventMatches {
    pub event: Option<Event>,
    pub matches: Vec<MatchPreview>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesOverview {
    pub live_matches: Vec<MatchPreview>,
    pub upcoming_matches_by_event: Vec<UpcomingEventMatches>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

/// A row of the map statistics listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatsPreview {
    pub map_stats_id: u64,
    pub date: Option<i64>,
    pub team1: Team,
    pub team2: Team,
    pub event: Event,
    pub map: GameMap,
    pub result: Option<Score>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTeam {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEvent {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMatchResult {
    pub id: u64,
    pub date: Option<i64>,
    pub team1: ResultTeam,
    pub team2: ResultTeam,
    pub event: ResultEvent,
    pub stars: u8,
    /// `"bo3"`, `"bo5"`, or `"bo1"` for single-map rows.
    pub format: String,
    /// Only known for single-map rows.
    pub map: Option<GameMap>,
    pub result: Score,
}
