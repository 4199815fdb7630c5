use serde::{Deserialize, Serialize};

use super::{Event, GameMap, Player, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfResult {
    pub team1_rounds: u32,
    pub team2_rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResult {
    pub team1_total_rounds: u32,
    pub team2_total_rounds: u32,
    pub half_results: Vec<HalfResult>,
}

/// Round-end icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    CtWin,
    TWin,
    BombDefused,
    BombExploded,
    Stopwatch,
}

impl Outcome {
    /// Reads an icon file stem such as `"bomb_defused"`.
    pub fn from_icon(stem: &str) -> Option<Self> {
        match stem {
            "ct_win" => Some(Self::CtWin),
            "t_win" => Some(Self::TWin),
            "bomb_defused" => Some(Self::BombDefused),
            "bomb_exploded" => Some(Self::BombExploded),
            "stopwatch" => Some(Self::Stopwatch),
            _ => None,
        }
    }

    /// True when the round was won by the counter-terrorist side.
    pub fn is_ct_win(self) -> bool {
        matches!(self, Self::CtWin | Self::BombDefused | Self::Stopwatch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub outcome: Outcome,
    /// Running score after the round, e.g. `"4-2"`.
    pub score: String,
    pub t_team: Option<u64>,
    pub ct_team: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamStatPair {
    pub team1: Option<f64>,
    pub team2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostX {
    pub id: Option<u64>,
    pub name: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStatsOverview {
    pub rating: Option<TeamStatPair>,
    pub first_kills: Option<TeamStatPair>,
    pub clutches_won: Option<TeamStatPair>,
    pub most_kills: Option<MostX>,
    pub most_damage: Option<MostX>,
    pub most_assists: Option<MostX>,
    #[serde(rename = "mostAWPKills")]
    pub most_awp_kills: Option<MostX>,
    pub most_first_kills: Option<MostX>,
    #[serde(rename = "bestRating1")]
    pub best_rating1: Option<MostX>,
    #[serde(rename = "bestRating2")]
    pub best_rating2: Option<MostX>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player: Player,
    pub kills: Option<u32>,
    pub hs_kills: Option<u32>,
    pub assists: Option<u32>,
    pub flash_assists: Option<u32>,
    pub deaths: Option<u32>,
    #[serde(rename = "KAST")]
    pub kast: Option<f64>,
    pub kill_deaths_difference: Option<i32>,
    #[serde(rename = "ADR")]
    pub adr: Option<f64>,
    pub first_kills_difference: Option<i32>,
    pub rating1: Option<f64>,
    pub rating2: Option<f64>,
    pub kills_per_round: Option<f64>,
    pub deaths_per_round: Option<f64>,
    pub impact: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsByTeam {
    pub team1: Vec<PlayerStats>,
    pub team2: Vec<PlayerStats>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPerformance {
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsPerformanceOverview {
    pub team1: TeamPerformance,
    pub team2: TeamPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMatchMapStats {
    pub id: u64,
    pub match_id: Option<u64>,
    pub result: MapResult,
    pub map: GameMap,
    pub date: Option<i64>,
    pub team1: Team,
    pub team2: Team,
    pub event: Event,
    pub overview: MapStatsOverview,
    pub round_history: Vec<RoundOutcome>,
    pub player_stats: PlayerStatsByTeam,
    pub performance_overview: TeamsPerformanceOverview,
}
