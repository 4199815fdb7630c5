use serde::{Deserialize, Serialize};

use super::{Article, Country, TeamPlayerType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTeamPlayer {
    pub id: Option<u64>,
    pub name: String,
    pub time_on_team: Option<String>,
    pub maps_played: Option<u32>,
    #[serde(rename = "type")]
    pub player_type: Option<TeamPlayerType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTeam {
    pub id: u64,
    pub name: String,
    /// Absent when the profile shows the placeholder image.
    pub logo: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub country: Country,
    pub rank: Option<u32>,
    /// Starters, bench and substitutes, then the coach when listed.
    pub players: Vec<FullTeamPlayer>,
    /// World ranking history, oldest first.
    pub ranking_development: Vec<Option<u32>>,
    pub news: Vec<Article>,
}
