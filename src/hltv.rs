//! The public operation surface.
//!
//! Every operation fetches markup through the configured [`PageLoader`],
//! rejects challenge pages before any parsing, and hands the markup to a pure
//! pipeline. A parsed [`Page`] never lives across an `.await`.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::entities::{
    EventPreview, FullMatchMapStats, FullMatchResult, FullStream, FullTeam, Listing,
    MatchStatsPreview, MatchesOverview, NewsPreview, PastEventPreview, PlayerRanking,
    TeamRanking, Thread,
};
use crate::error::HltvError;
use crate::extractor::{self, events::PAST_EVENT_ROWS, matches_stats::MATCH_STATS_ROWS};
use crate::extractor::{ranking::PLAYER_RANKING_ROWS, results::RESULT_ROWS};
use crate::fetcher::{FetchError, HttpPageLoader, PageLoader, RetryingLoader, classify};
use crate::listing::{self, ListingSpec, SeenIds};
use crate::options::{
    MatchesOptions, MatchesStatsOptions, NewsOptions, PastEventsOptions, PlayerRankingOptions,
    ResultsOptions, TeamRankingOptions,
};
use crate::query::Page;

pub const DEFAULT_BASE_URL: &str = "https://www.hltv.org";
pub const DEFAULT_MAX_PAGES: u32 = 250;

const PAST_EVENTS_STEP: u32 = 50;
const MATCHES_STATS_STEP: u32 = 50;
const RESULTS_STEP: u32 = 100;

/// HLTV client. Cheap to clone; clones share the loader.
#[derive(Clone)]
pub struct Hltv {
    loader: Arc<dyn PageLoader>,
    base_url: String,
    max_pages: u32,
}

impl std::fmt::Debug for Hltv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hltv")
            .field("base_url", &self.base_url)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

impl Hltv {
    pub fn new(loader: impl PageLoader + 'static) -> Self {
        Self {
            loader: Arc::new(loader),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// HTTP-backed client with retries, built from runtime configuration.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = HttpPageLoader::new(&config.loader_settings())?;
        let loader = RetryingLoader::new(http, config.fetch_retries(), config.retry_base_ms());
        Ok(Self::new(loader)
            .with_base_url(config.base_url())
            .with_max_pages(config.max_pages()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Upper bound on pages a single listing may fetch.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Loads `path` and rejects challenge pages.
    #[instrument(skip(self), fields(url))]
    async fn fetch_html(&self, path: &str) -> Result<String, HltvError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::Span::current().record("url", url.as_str());

        let markup = self.loader.load_page(&url).await?;
        if let Some(rejection) = classify(&markup) {
            warn!(%url, signature = rejection.signature, "challenge page served");
            return Err(rejection.into());
        }
        Ok(markup)
    }

    fn paged(&self, row_selector: &'static str, step: u32, delay: std::time::Duration) -> ListingSpec {
        ListingSpec::paged(row_selector, step, delay, self.max_pages)
    }

    /// Ongoing, big upcoming and small upcoming events.
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<EventPreview>, HltvError> {
        let markup = self.fetch_html("/events").await?;
        extractor::extract_events(&Page::parse(&markup))
    }

    #[instrument(skip(self, opts))]
    pub async fn get_past_events(
        &self,
        opts: &PastEventsOptions,
    ) -> Result<Listing<PastEventPreview>, HltvError> {
        let spec = self.paged(PAST_EVENT_ROWS, PAST_EVENTS_STEP, opts.delay);
        let listing = listing::collect(
            &spec,
            |offset| {
                let path = opts.query().page("/events/archive", offset);
                async move { self.fetch_html(&path).await }
            },
            extractor::extract_past_events,
        )
        .await?;

        info!(events = listing.len(), "collected past events");
        Ok(listing)
    }

    #[instrument(skip(self))]
    pub async fn get_matches(&self, opts: &MatchesOptions) -> Result<MatchesOverview, HltvError> {
        let markup = self.fetch_html(&opts.path()).await?;
        extractor::extract_matches(&Page::parse(&markup))
    }

    /// Both stats pages of one map, fetched concurrently and joined by player id.
    #[instrument(skip(self))]
    pub async fn get_match_map_stats(&self, id: u64) -> Result<FullMatchMapStats, HltvError> {
        let overview_path = format!("/stats/matches/mapstatsid/{id}/-");
        let performance_path = format!("/stats/matches/performance/mapstatsid/{id}/-");

        let (overview, performance) = tokio::try_join!(
            self.fetch_html(&overview_path),
            self.fetch_html(&performance_path),
        )?;

        extractor::extract_match_map_stats(
            id,
            &Page::parse(&overview),
            &Page::parse(&performance),
        )
    }

    #[instrument(skip(self, opts))]
    pub async fn get_matches_stats(
        &self,
        opts: &MatchesStatsOptions,
    ) -> Result<Listing<MatchStatsPreview>, HltvError> {
        let spec = self.paged(MATCH_STATS_ROWS, MATCHES_STATS_STEP, opts.delay);
        let listing = listing::collect(
            &spec,
            |offset| {
                let path = opts.query().page("/stats/matches", offset);
                async move { self.fetch_html(&path).await }
            },
            extractor::extract_matches_stats,
        )
        .await?;

        info!(matches = listing.len(), "collected match stats");
        Ok(listing)
    }

    /// Played matches, newest first, each id exactly once.
    #[instrument(skip(self, opts))]
    pub async fn get_results(
        &self,
        opts: &ResultsOptions,
    ) -> Result<Listing<FullMatchResult>, HltvError> {
        let spec = self.paged(RESULT_ROWS, RESULTS_STEP, opts.delay);
        let mut seen = SeenIds::default();

        let listing = listing::collect(
            &spec,
            |offset| {
                let path = opts.query().page("/results", offset);
                async move { self.fetch_html(&path).await }
            },
            |page| {
                let mut rows = extractor::extract_results(page)?;
                seen.retain_unseen(&mut rows.records, |result| result.id);
                Ok(rows)
            },
        )
        .await?;

        info!(
            results = listing.len(),
            skipped = listing.skipped,
            "collected results"
        );
        Ok(listing)
    }

    /// World ranking, or a country ranking when `opts.country` is set.
    ///
    /// The country ranking link is derived from the world ranking page, so
    /// that case costs two page loads.
    #[instrument(skip(self))]
    pub async fn get_team_ranking(
        &self,
        opts: &TeamRankingOptions,
    ) -> Result<Vec<TeamRanking>, HltvError> {
        let mut markup = self.fetch_html(&opts.path()).await?;

        if let Some(country) = &opts.country {
            let country_path = {
                let page = Page::parse(&markup);
                extractor::country_ranking_path(&page, country)?
            };
            markup = self.fetch_html(&country_path).await?;
        }

        extractor::extract_team_ranking(&Page::parse(&markup))
    }

    /// The player ranking table. The endpoint has no offset parameter, so
    /// this is a single-page listing.
    #[instrument(skip(self, opts))]
    pub async fn get_player_ranking(
        &self,
        opts: &PlayerRankingOptions,
    ) -> Result<Listing<PlayerRanking>, HltvError> {
        let spec = ListingSpec::single(PLAYER_RANKING_ROWS);
        listing::collect(
            &spec,
            |_| {
                let path = opts.path();
                async move { self.fetch_html(&path).await }
            },
            extractor::extract_player_ranking,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_streams(&self) -> Result<Vec<FullStream>, HltvError> {
        let markup = self.fetch_html("/").await?;
        extractor::extract_streams(&Page::parse(&markup))
    }

    #[instrument(skip(self))]
    pub async fn get_news(&self, opts: &NewsOptions) -> Result<Vec<NewsPreview>, HltvError> {
        let markup = self.fetch_html(&opts.path()).await?;
        extractor::extract_news(&Page::parse(&markup))
    }

    #[instrument(skip(self))]
    pub async fn get_recent_threads(&self) -> Result<Vec<Thread>, HltvError> {
        let markup = self.fetch_html("/").await?;
        extractor::extract_threads(&Page::parse(&markup))
    }

    /// A team profile. The slug part of the URL is ignored by the site, so a
    /// random one is sent.
    #[instrument(skip(self))]
    pub async fn get_team(&self, id: u64) -> Result<FullTeam, HltvError> {
        let path = format!("/team/{id}/{}", Uuid::new_v4().simple());
        let markup = self.fetch_html(&path).await?;
        extractor::extract_team(id, &Page::parse(&markup))
    }

    /// Resolves a team name through site search, then loads its profile.
    #[instrument(skip(self))]
    pub async fn get_team_by_name(&self, name: &str) -> Result<FullTeam, HltvError> {
        let path = format!("/search?term={}", utf8_percent_encode(name, NON_ALPHANUMERIC));
        let markup = self.fetch_html(&path).await?;
        let id = extractor::first_team_id(&markup, name)?;
        info!(id, "resolved team name");
        self.get_team(id).await
    }
}
