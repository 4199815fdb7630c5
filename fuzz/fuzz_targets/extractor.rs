#![no_main]

use libfuzzer_sys::fuzz_target;

use hltv_scrape::extractor::{self, first_team_id};
use hltv_scrape::fetcher::classify;
use hltv_scrape::query::Page;

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data);

    // Classification and every pipeline must tolerate arbitrary markup.
    let _ = classify(&markup);
    let _ = first_team_id(&markup, "fuzz");

    let page = Page::parse(&markup);
    let _ = extractor::extract_events(&page);
    let _ = extractor::extract_past_events(&page);
    let _ = extractor::extract_matches(&page);
    let _ = extractor::extract_match_map_stats(1, &page, &page);
    let _ = extractor::extract_matches_stats(&page);
    let _ = extractor::extract_results(&page);
    let _ = extractor::extract_team_ranking(&page);
    let _ = extractor::country_ranking_path(&page, "Brazil");
    let _ = extractor::extract_player_ranking(&page);
    let _ = extractor::extract_streams(&page);
    let _ = extractor::extract_news(&page);
    let _ = extractor::extract_threads(&page);
    let _ = extractor::extract_team(1, &page);
});
