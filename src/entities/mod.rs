//! Typed records produced by the extractors.
//!
//! Records are built once, returned by value and never updated in place.
//! Fields the site may omit are `Option`s; an absent number is never zero.

mod enums;
mod event;
mod feed;
mod map_stats;
mod matches;
mod ranking;
mod team;

use serde::{Deserialize, Serialize};

pub use enums::{
    BestOfFilter, ContentFilter, EventType, GameMap, GameType, MatchType, RankingFilter,
    ResultsMatchType, StreamCategory, TeamPlayerType, ThreadCategory,
};
pub use event::{EventPreview, PastEventPreview};
pub use feed::{FullStream, NewsPreview, Thread};
pub use map_stats::{
    FullMatchMapStats, HalfResult, MapResult, MapStatsOverview, MostX, Outcome, PlayerStats,
    PlayerStatsByTeam, RoundOutcome, TeamPerformance, TeamStatPair, TeamsPerformanceOverview,
};
pub use matches::{
    FullMatchResult, MatchLineup, MatchPreview, MatchStatsPreview, MatchTeam, MatchesOverview,
    ResultEvent, ResultTeam, Score, UpcomingEventMatches,
};
pub use ranking::{PlayerRanking, TeamRanking};
pub use team::{FullTeam, FullTeamPlayer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Flag code, e.g. `"SE"`.
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub name: String,
    pub link: String,
}

/// Outcome of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub records: Vec<T>,
    /// Rows that could not be parsed and were dropped.
    pub skipped: usize,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

impl<T> Listing<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends another page's rows and skip count.
    pub fn extend(&mut self, other: Listing<T>) {
        self.records.extend(other.records);
        self.skipped += other.skipped;
    }
}
