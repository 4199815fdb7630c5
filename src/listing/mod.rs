//! Drives listings that span several pages.
//!
//! Pages are fetched strictly one after another with a fixed delay between
//! them. A listing ends on the first page where the row selector matches
//! nothing, and fails with [`HltvError::TooManyPages`] when that never
//! happens within the configured page cap.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::entities::Listing;
use crate::error::HltvError;
use crate::query::Page;

/// Shape of one paginated endpoint.
#[derive(Debug, Clone)]
pub struct ListingSpec {
    /// Selects the repeating rows; an empty match ends the listing.
    pub row_selector: &'static str,
    /// Offset increment per page, or `None` for endpoints without paging.
    pub step: Option<u32>,
    /// Pause between consecutive page fetches.
    pub delay: Duration,
    pub max_pages: u32,
}

impl ListingSpec {
    pub fn paged(row_selector: &'static str, step: u32, delay: Duration, max_pages: u32) -> Self {
        Self {
            row_selector,
            step: Some(step),
            delay,
            max_pages,
        }
    }

    pub fn single(row_selector: &'static str) -> Self {
        Self {
            row_selector,
            step: None,
            delay: Duration::ZERO,
            max_pages: 1,
        }
    }
}

/// Collects every page of a listing.
///
/// `fetch` receives the row offset of the page to load and returns its
/// classified markup; `extract` turns one parsed page into rows. Any error
/// aborts the whole listing.
pub async fn collect<T, F, Fut, E>(
    spec: &ListingSpec,
    mut fetch: F,
    mut extract: E,
) -> Result<Listing<T>, HltvError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<String, HltvError>>,
    E: FnMut(&Page) -> Result<Listing<T>, HltvError>,
{
    let mut listing = Listing::default();
    let mut pages = 0u32;

    loop {
        let offset = spec.step.map_or(0, |step| pages * step);
        let markup = fetch(offset).await?;

        // The parsed page must not live across the next await.
        let (rows, has_rows) = {
            let page = Page::parse(&markup);
            let rows = extract(&page)?;
            (rows, page.select(spec.row_selector).exists())
        };
        debug!(
            offset,
            rows = rows.len(),
            skipped = rows.skipped,
            "collected listing page"
        );
        listing.extend(rows);
        pages += 1;

        if !has_rows || spec.step.is_none() {
            break;
        }
        if pages >= spec.max_pages {
            warn!(
                max_pages = spec.max_pages,
                selector = spec.row_selector,
                "listing still returning rows at the page cap"
            );
            return Err(HltvError::TooManyPages {
                max_pages: spec.max_pages,
            });
        }
        if !spec.delay.is_zero() {
            tokio::time::sleep(spec.delay).await;
        }
    }

    if listing.skipped > 0 {
        warn!(skipped = listing.skipped, "listing dropped unreadable rows");
    }
    Ok(listing)
}

/// Identifiers already emitted by a listing.
///
/// Some listings show a featured subset of rows ahead of the full list;
/// keeping only the first sighting of each id leaves exactly one copy.
#[derive(Debug, Default)]
pub struct SeenIds {
    ids: HashSet<u64>,
}

impl SeenIds {
    /// Drops records whose id was already seen, returning how many were dropped.
    pub fn retain_unseen<T>(&mut self, records: &mut Vec<T>, id: impl Fn(&T) -> u64) -> usize {
        let before = records.len();
        records.retain(|record| self.ids.insert(id(record)));
        before - records.len()
    }
}
