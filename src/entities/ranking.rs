use serde::{Deserialize, Serialize};

use super::{Player, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRanking {
    pub team: Team,
    pub points: Option<u32>,
    pub place: Option<u32>,
    /// Places gained since the previous ranking; zero for new teams.
    pub change: Option<i32>,
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub player: Player,
    pub teams: Vec<Team>,
    pub maps: Option<u32>,
    pub rounds: Option<u32>,
    pub kd_diff: Option<i32>,
    pub kd: Option<f64>,
    pub rating1: Option<f64>,
    pub rating2: Option<f64>,
}
