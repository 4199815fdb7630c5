//! Coercion of scraped text into numbers and identifiers.
//!
//! Every helper here yields `None` for empty or non-numeric input. A missing
//! number is never reported as zero.

use std::str::FromStr;
use std::sync::LazyLock;
use url::Url;

/// Site-relative links are resolved against this origin before reading them.
static LINK_BASE: LazyLock<Url> = LazyLock::new(|| Url::parse("https://www.hltv.org/").unwrap());

/// A type scraped numbers may be parsed into.
pub trait Number: FromStr {
    fn is_usable(&self) -> bool {
        true
    }
}

impl Number for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

macro_rules! integer_number {
    ($($t:ty),*) => { $(impl Number for $t {})* };
}

integer_number!(u8, u16, u32, u64, i32, i64, usize);

/// Parses trimmed text as a number.
///
/// Empty input, non-numeric input and non-finite spellings (`NaN`, `inf`)
/// all yield `None`.
pub fn parse_number<T: Number>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Rust's float grammar accepts "inf"/"NaN"; scraped numbers never contain letters
    // other than an exponent marker.
    let numeric_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars {
        return None;
    }

    trimmed.parse::<T>().ok().filter(Number::is_usable)
}

/// Parses the `index`-th `/`-separated segment of a link as an id.
///
/// `"/team/4608/natus-vincere"` has the id at index 2; `"/stats/teams/4608/x"`
/// at index 3.
pub fn id_at(href: &str, index: usize) -> Option<u64> {
    href.split('/').nth(index).and_then(parse_number)
}

/// Parses the integer prefix of a string, ignoring whatever follows it.
pub fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Removes parentheses, e.g. `"(12)"` → `"12"`.
pub fn strip_parens(raw: &str) -> String {
    raw.replace(['(', ')'], "")
}

/// Returns the file name of a link without its extension, e.g. the country
/// code of `"/img/static/flags/30x20/SE.gif"`.
pub fn file_stem(src: &str) -> Option<&str> {
    let file = src.rsplit('/').next()?;
    let stem = file.split('.').next()?;
    (!stem.is_empty()).then_some(stem)
}

/// Returns the decoded value of a query parameter inside a link, e.g. the
/// event id of `"/stats/matches?event=7148&startDate=all"`.
pub fn query_param(href: &str, name: &str) -> Option<String> {
    let link = LINK_BASE.join(href).ok()?;
    link.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_parse_number_never_panics(raw in ".*") {
            let _ = parse_number::<f64>(&raw);
            let _ = parse_number::<u64>(&raw);
            let _ = leading_int(&raw);
        }

        #[test]
        fn test_parse_number_reads_integers(n in any::<u32>()) {
            prop_assert_eq!(parse_number::<u32>(&n.to_string()), Some(n));
        }

        #[test]
        fn test_parse_number_is_finite(raw in ".*") {
            if let Some(value) = parse_number::<f64>(&raw) {
                prop_assert!(value.is_finite());
            }
        }
    }
}
