//! Typed extraction of HLTV.org pages.
//!
//! [`Hltv`] is the entry point: one async operation per entity kind, each
//! returning typed records or an [`HltvError`].

pub mod api;
pub mod app_state;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod hltv;
pub mod listing;
pub mod options;
pub mod query;

pub use error::HltvError;
pub use hltv::Hltv;
pub use options::{
    MatchesOptions, MatchesStatsOptions, NewsOptions, PastEventsOptions, PlayerRankingOptions,
    ResultsOptions, TeamRankingOptions,
};
