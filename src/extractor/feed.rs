//! Home page and news archive feeds.

use chrono::{DateTime, NaiveDate};

use crate::entities::{FullStream, NewsPreview, StreamCategory, Thread, ThreadCategory};
use crate::error::HltvError;
use crate::query::Page;
use crate::query::number::{leading_int, parse_number, strip_parens};

use super::{country, text};

pub fn extract_streams(page: &Page) -> Result<Vec<FullStream>, HltvError> {
    Ok(page
        .select(".streams-stream")
        .iter()
        .map(|row| {
            let flag = row.find(".streams-flag");
            FullStream {
                name: text(&row.find(".streams-name")),
                category: StreamCategory::from_title(row.find(".streams-category").attr("title")),
                country: country(flag.attr("title"), &flag),
                link: row.data("frontpage-stream-embed-src").unwrap_or_default().to_string(),
                viewers: parse_number(&strip_parens(&row.find(".streams-viewers").text())),
            }
        })
        .collect())
}

pub fn extract_news(page: &Page) -> Result<Vec<NewsPreview>, HltvError> {
    Ok(page
        .select(".article")
        .iter()
        .map(|row| {
            let flag = row.find(".newsflag");
            NewsPreview {
                link: row.attr("href").to_string(),
                title: text(&row.find(".newstext")),
                comments: leading_int(&row.find(".newstc").children().last().text())
                    .and_then(|n| u32::try_from(n).ok()),
                date: parse_news_date(&row.find(".newsrecent").text()),
                country: country(flag.attr("alt"), &flag),
            }
        })
        .collect())
}

/// Archive dates are ISO dates (`2024-03-15`) or full timestamps; both map to
/// epoch milliseconds, dates at UTC midnight.
fn parse_news_date(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

/// Recent forum activity. The category is the activity class ending in
/// `Cat`, e.g. `matchCat`.
pub fn extract_threads(page: &Page) -> Result<Vec<Thread>, HltvError> {
    Ok(page
        .select(".activity")
        .iter()
        .map(|row| Thread {
            title: text(&row.find(".topic")),
            link: row.attr("href").to_string(),
            replies: row.contents().last().num_from_text(),
            category: row
                .classes()
                .into_iter()
                .find(|class| class.contains("Cat"))
                .and_then(ThreadCategory::from_class),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_date() {
        assert_eq!(parse_news_date("2024-03-15"), Some(1_710_460_800_000));
        assert_eq!(
            parse_news_date("2024-03-15T12:00:00Z"),
            Some(1_710_504_000_000)
        );
        assert_eq!(parse_news_date("3 hours ago"), None);
        assert_eq!(parse_news_date(""), None);
    }
}
