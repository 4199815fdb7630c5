//! Query-string records of the HTTP layer and their validation.
//!
//! List filters are comma separated (`maps=de_mirage,de_nuke`). Validation
//! happens here, before any page is fetched.

use chrono::{DateTime, Datelike, Month, NaiveDate, Utc};
use serde::de::{DeserializeOwned, IntoDeserializer, value};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::entities::{
    BestOfFilter, ContentFilter, EventType, GameMap, GameType, MatchType, RankingFilter,
    ResultsMatchType,
};
use crate::options::{
    MatchesOptions, MatchesStatsOptions, NewsOptions, PastEventsOptions, PlayerRankingOptions,
    ResultsOptions, TeamRankingOptions,
};

/// Oldest team ranking snapshot.
const FIRST_RANKING_YEAR: i32 = 2015;
/// Oldest news archive year.
const FIRST_NEWS_YEAR: i32 = 2005;
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastEventsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub prize_pool_min: Option<u64>,
    pub prize_pool_max: Option<u64>,
    pub team_ids: Option<String>,
    pub player_ids: Option<String>,
    pub delay_ms: Option<u64>,
}

impl PastEventsQuery {
    pub fn into_options(self) -> Result<PastEventsOptions, String> {
        date_range(self.start_date, self.end_date)?;
        if let (Some(min), Some(max)) = (self.prize_pool_min, self.prize_pool_max)
            && min > max
        {
            return Err("prizePoolMin must not exceed prizePoolMax".to_string());
        }
        Ok(PastEventsOptions {
            start_date: self.start_date,
            end_date: self.end_date,
            event_type: self.event_type,
            prize_pool_min: self.prize_pool_min,
            prize_pool_max: self.prize_pool_max,
            attending_team_ids: ids("teamIds", self.team_ids.as_deref())?,
            attending_player_ids: ids("playerIds", self.player_ids.as_deref())?,
            delay: delay(self.delay_ms)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesQuery {
    pub selected_date: Option<NaiveDate>,
}

impl MatchesQuery {
    pub fn into_options(self) -> MatchesOptions {
        MatchesOptions {
            selected_date: self.selected_date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesStatsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<MatchType>,
    pub maps: Option<String>,
    pub ranking_filter: Option<RankingFilter>,
    pub delay_ms: Option<u64>,
}

impl MatchesStatsQuery {
    pub fn into_options(self) -> Result<MatchesStatsOptions, String> {
        date_range(self.start_date, self.end_date)?;
        Ok(MatchesStatsOptions {
            start_date: self.start_date,
            end_date: self.end_date,
            match_type: self.match_type,
            maps: variants::<GameMap>("maps", self.maps.as_deref())?,
            ranking_filter: self.ranking_filter,
            delay: delay(self.delay_ms)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<ResultsMatchType>,
    pub maps: Option<String>,
    pub best_of: Option<BestOfFilter>,
    pub countries: Option<String>,
    pub content: Option<String>,
    pub event_ids: Option<String>,
    pub player_ids: Option<String>,
    pub team_ids: Option<String>,
    pub game: Option<GameType>,
    pub stars: Option<u8>,
    pub delay_ms: Option<u64>,
}

impl ResultsQuery {
    pub fn into_options(self) -> Result<ResultsOptions, String> {
        date_range(self.start_date, self.end_date)?;
        if let Some(stars) = self.stars
            && !(1..=5).contains(&stars)
        {
            return Err(format!("stars must be between 1 and 5, got {stars}"));
        }
        Ok(ResultsOptions {
            start_date: self.start_date,
            end_date: self.end_date,
            match_type: self.match_type,
            maps: variants::<GameMap>("maps", self.maps.as_deref())?,
            best_of: self.best_of,
            countries: words(self.countries.as_deref()),
            content_filters: variants::<ContentFilter>("content", self.content.as_deref())?,
            event_ids: ids("eventIds", self.event_ids.as_deref())?,
            player_ids: ids("playerIds", self.player_ids.as_deref())?,
            team_ids: ids("teamIds", self.team_ids.as_deref())?,
            game: self.game,
            stars: self.stars,
            delay: delay(self.delay_ms)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRankingQuery {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u32>,
    pub country: Option<String>,
}

impl TeamRankingQuery {
    pub fn into_options(self) -> Result<TeamRankingOptions, String> {
        if let Some(year) = self.year {
            year_in("year", year, FIRST_RANKING_YEAR)?;
        }
        if let Some(day) = self.day
            && !(1..=31).contains(&day)
        {
            return Err(format!("day must be between 1 and 31, got {day}"));
        }
        Ok(TeamRankingOptions {
            year: self.year,
            month: self.month.map(month).transpose()?,
            day: self.day,
            country: self.country.filter(|c| !c.trim().is_empty()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankingQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub match_type: Option<MatchType>,
    pub ranking_filter: Option<RankingFilter>,
    pub maps: Option<String>,
    pub min_map_count: Option<u32>,
    pub countries: Option<String>,
    pub best_of: Option<BestOfFilter>,
}

impl PlayerRankingQuery {
    pub fn into_options(self) -> Result<PlayerRankingOptions, String> {
        date_range(self.start_date, self.end_date)?;
        Ok(PlayerRankingOptions {
            start_date: self.start_date,
            end_date: self.end_date,
            match_type: self.match_type,
            ranking_filter: self.ranking_filter,
            maps: variants::<GameMap>("maps", self.maps.as_deref())?,
            min_map_count: self.min_map_count,
            countries: words(self.countries.as_deref()),
            best_of: self.best_of,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsQuery {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub event_ids: Option<String>,
}

impl NewsQuery {
    pub fn into_options(self) -> Result<NewsOptions, String> {
        if let Some(year) = self.year {
            year_in("year", year, FIRST_NEWS_YEAR)?;
        }
        Ok(NewsOptions {
            year: self.year,
            month: self.month.map(month).transpose()?,
            event_ids: ids("eventIds", self.event_ids.as_deref())?,
        })
    }
}

fn year_in(field: &str, year: i32, first: i32) -> Result<(), String> {
    let current = Utc::now().year();
    if (first..=current).contains(&year) {
        Ok(())
    } else {
        Err(format!(
            "{field} must be between {first} and {current}, got {year}"
        ))
    }
}

fn month(number: u8) -> Result<Month, String> {
    Month::try_from(number).map_err(|_| format!("month must be between 1 and 12, got {number}"))
}

fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), String> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err(format!("startDate {start} is after endDate {end}"))
        }
        _ => Ok(()),
    }
}

fn delay(delay_ms: Option<u64>) -> Result<Duration, String> {
    match delay_ms {
        Some(ms) if ms > MAX_DELAY_MS => {
            Err(format!("delayMs must be at most {MAX_DELAY_MS}, got {ms}"))
        }
        Some(ms) => Ok(Duration::from_millis(ms)),
        None => Ok(Duration::ZERO),
    }
}

fn words(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn ids(field: &str, raw: Option<&str>) -> Result<Vec<u64>, String> {
    words(raw)
        .iter()
        .map(|word| {
            word.parse()
                .map_err(|_| format!("{field} must be numeric ids, got {word:?}"))
        })
        .collect()
}

/// Parses each comma separated word by the variant names the enum serializes to.
fn variants<T: DeserializeOwned>(field: &str, raw: Option<&str>) -> Result<Vec<T>, String> {
    words(raw)
        .into_iter()
        .map(|word| {
            let de: value::StringDeserializer<value::Error> = word.clone().into_deserializer();
            T::deserialize(de).map_err(|_| format!("unknown {field} value {word:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_query_lists() {
        let query = ResultsQuery {
            maps: Some("de_mirage, de_nuke".to_string()),
            countries: Some("Brazil,,Denmark".to_string()),
            team_ids: Some("4608,9565".to_string()),
            content: Some("demo".to_string()),
            ..Default::default()
        };

        let opts = query.into_options().unwrap();
        assert_eq!(opts.maps, vec![GameMap::Mirage, GameMap::Nuke]);
        assert_eq!(opts.countries, vec!["Brazil", "Denmark"]);
        assert_eq!(opts.team_ids, vec![4608, 9565]);
        assert_eq!(opts.content_filters, vec![ContentFilter::Demo]);
        assert_eq!(opts.delay, Duration::ZERO);
    }

    #[test]
    fn test_results_query_rejects_bad_values() {
        let bad_map = ResultsQuery {
            maps: Some("de_nowhere".to_string()),
            ..Default::default()
        };
        assert!(bad_map.into_options().is_err());

        let bad_ids = ResultsQuery {
            event_ids: Some("12,abc".to_string()),
            ..Default::default()
        };
        assert!(bad_ids.into_options().is_err());

        let too_slow = ResultsQuery {
            delay_ms: Some(MAX_DELAY_MS + 1),
            ..Default::default()
        };
        assert!(too_slow.into_options().is_err());
    }

    #[test]
    fn test_inverted_date_range_is_rejected() {
        let query = MatchesStatsQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        assert!(query.into_options().is_err());
    }

    #[test]
    fn test_team_ranking_year_bounds() {
        let too_early = TeamRankingQuery {
            year: Some(2014),
            ..Default::default()
        };
        assert!(too_early.into_options().is_err());

        let future = TeamRankingQuery {
            year: Some(Utc::now().year() + 1),
            ..Default::default()
        };
        assert!(future.into_options().is_err());

        let valid = TeamRankingQuery {
            year: Some(2023),
            month: Some(3),
            day: Some(6),
            country: Some(" ".to_string()),
        };
        let opts = valid.into_options().unwrap();
        assert_eq!(opts.month, Some(Month::March));
        assert_eq!(opts.country, None);
    }

    #[test]
    fn test_news_month_bounds() {
        for bad in [0, 13] {
            let query = NewsQuery {
                year: Some(2020),
                month: Some(bad),
                event_ids: None,
            };
            assert!(query.into_options().is_err());
        }

        let early = NewsQuery {
            year: Some(2004),
            ..Default::default()
        };
        assert!(early.into_options().is_err());
    }
}
