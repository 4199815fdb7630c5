//! Option records accepted by the [`Hltv`](crate::Hltv) operations.
//!
//! Each record knows how to render itself as the site-relative path of the
//! page it selects. List filters become repeated query keys
//! (`country=Brazil&country=Denmark`); absent filters are left out entirely.

use chrono::{Month, NaiveDate};
use std::fmt::Display;
use std::time::Duration;
use url::form_urlencoded;

use crate::entities::{
    BestOfFilter, ContentFilter, EventType, GameMap, GameType, MatchType, RankingFilter,
    ResultsMatchType,
};

/// Filters for the events archive.
#[derive(Debug, Clone, Default)]
pub struct PastEventsOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub prize_pool_min: Option<u64>,
    pub prize_pool_max: Option<u64>,
    pub attending_team_ids: Vec<u64>,
    pub attending_player_ids: Vec<u64>,
    /// Pause between consecutive archive pages.
    pub delay: Duration,
}

impl PastEventsOptions {
    pub(crate) fn query(&self) -> QueryString {
        QueryString::new()
            .date("startDate", self.start_date)
            .date("endDate", self.end_date)
            .opt("eventType", self.event_type.map(EventType::filter_value))
            .opt("prizeMin", self.prize_pool_min)
            .opt("prizeMax", self.prize_pool_max)
            .all("team", &self.attending_team_ids)
            .all("player", &self.attending_player_ids)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchesOptions {
    /// Day whose upcoming matches are listed; today when absent.
    pub selected_date: Option<NaiveDate>,
}

impl MatchesOptions {
    pub(crate) fn path(&self) -> String {
        QueryString::new()
            .date("selectedDate", self.selected_date)
            .path("/matches")
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchesStatsOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<MatchType>,
    pub maps: Vec<GameMap>,
    pub ranking_filter: Option<RankingFilter>,
    pub delay: Duration,
}

impl MatchesStatsOptions {
    pub(crate) fn query(&self) -> QueryString {
        QueryString::new()
            .date("startDate", self.start_date)
            .date("endDate", self.end_date)
            .opt("matchType", self.match_type.map(MatchType::filter_value))
            .all("maps", self.maps.iter().map(|m| m.filter_value()))
            .opt(
                "rankingFilter",
                self.ranking_filter.map(RankingFilter::filter_value),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResultsOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<ResultsMatchType>,
    pub maps: Vec<GameMap>,
    pub best_of: Option<BestOfFilter>,
    pub countries: Vec<String>,
    pub content_filters: Vec<ContentFilter>,
    pub event_ids: Vec<u64>,
    pub player_ids: Vec<u64>,
    pub team_ids: Vec<u64>,
    pub game: Option<GameType>,
    pub stars: Option<u8>,
    pub delay: Duration,
}

impl ResultsOptions {
    pub(crate) fn query(&self) -> QueryString {
        QueryString::new()
            .date("startDate", self.start_date)
            .date("endDate", self.end_date)
            .opt(
                "matchType",
                self.match_type.map(ResultsMatchType::filter_value),
            )
            .all("map", self.maps.iter().map(|m| m.filter_value()))
            .opt("bestOfX", self.best_of.map(BestOfFilter::filter_value))
            .all("country", &self.countries)
            .all(
                "content",
                self.content_filters.iter().map(|c| c.filter_value()),
            )
            .all("event", &self.event_ids)
            .all("player", &self.player_ids)
            .all("team", &self.team_ids)
            .opt("gameType", self.game.map(GameType::filter_value))
            .opt("stars", self.stars)
    }
}

/// Selects a ranking snapshot; the latest one when no date is given.
#[derive(Debug, Clone, Default)]
pub struct TeamRankingOptions {
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub day: Option<u32>,
    /// Country name as the site spells it, e.g. `"Brazil"`.
    pub country: Option<String>,
}

impl TeamRankingOptions {
    /// `/ranking/teams/{year}/{month}/{day}`, cut at the first absent part.
    pub(crate) fn path(&self) -> String {
        let mut path = String::from("/ranking/teams");
        let Some(year) = self.year else {
            return path;
        };
        path.push_str(&format!("/{year}"));
        let Some(month) = self.month else {
            return path;
        };
        path.push_str(&format!("/{}", month_slug(month)));
        if let Some(day) = self.day {
            path.push_str(&format!("/{day}"));
        }
        path
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRankingOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<MatchType>,
    pub ranking_filter: Option<RankingFilter>,
    pub maps: Vec<GameMap>,
    pub min_map_count: Option<u32>,
    pub countries: Vec<String>,
    pub best_of: Option<BestOfFilter>,
}

impl PlayerRankingOptions {
    pub(crate) fn path(&self) -> String {
        QueryString::new()
            .date("startDate", self.start_date)
            .date("endDate", self.end_date)
            .opt("matchType", self.match_type.map(MatchType::filter_value))
            .opt(
                "rankingFilter",
                self.ranking_filter.map(RankingFilter::filter_value),
            )
            .all("maps", self.maps.iter().map(|m| m.filter_value()))
            .opt("minMapCount", self.min_map_count)
            .all("country", &self.countries)
            .opt("bestOfX", self.best_of.map(BestOfFilter::filter_value))
            .path("/stats/players")
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsOptions {
    pub year: Option<i32>,
    pub month: Option<Month>,
    /// News of these events; takes precedence over the archive date.
    pub event_ids: Vec<u64>,
}

impl NewsOptions {
    pub(crate) fn path(&self) -> String {
        if !self.event_ids.is_empty() {
            return QueryString::new()
                .all("event", &self.event_ids)
                .path("/news/archive");
        }
        match (self.year, self.month) {
            (Some(year), Some(month)) => format!("/news/archive/{year}/{}", month_slug(month)),
            _ => "/news/archive".to_string(),
        }
    }
}

/// Month names appear lowercase in archive paths.
fn month_slug(month: Month) -> String {
    month.name().to_lowercase()
}

/// Query string builder over `application/x-www-form-urlencoded`.
pub(crate) struct QueryString {
    serializer: form_urlencoded::Serializer<'static, String>,
    empty: bool,
}

impl QueryString {
    fn new() -> Self {
        Self {
            serializer: form_urlencoded::Serializer::new(String::new()),
            empty: true,
        }
    }

    fn pair(mut self, key: &str, value: impl Display) -> Self {
        self.serializer.append_pair(key, &value.to_string());
        self.empty = false;
        self
    }

    fn opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.pair(key, value),
            None => self,
        }
    }

    fn date(self, key: &str, value: Option<NaiveDate>) -> Self {
        self.opt(key, value.map(|d| d.format("%Y-%m-%d")))
    }

    fn all<V: Display>(self, key: &str, values: impl IntoIterator<Item = V>) -> Self {
        values
            .into_iter()
            .fold(self, |query, value| query.pair(key, value))
    }

    /// `base?query`, or just `base` without parameters.
    pub(crate) fn path(mut self, base: &str) -> String {
        if self.empty {
            return base.to_string();
        }
        format!("{base}?{}", self.serializer.finish())
    }

    /// `base?query&offset=n` for one page of a paginated listing.
    pub(crate) fn page(self, base: &str, offset: u32) -> String {
        self.pair("offset", offset).path(base)
    }
}
