//! Detection of interstitial and block pages served in place of content.
//!
//! Anti-bot responses are well-formed HTML and would otherwise flow into the
//! extractors and come out as empty or partial records.

/// Markers only ever present on challenge, block or rate-limit pages.
const SIGNATURES: &[&str] = &[
    "error code:",
    "Sorry, you have been blocked",
    "Checking your browser before accessing",
    "Enable JavaScript and cookies to continue",
    "Attention Required! | Cloudflare",
];

/// Why a fetched page was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub signature: &'static str,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "origin served a challenge page (matched {:?})",
            self.signature
        )
    }
}

/// Scans raw markup for non-content signatures.
///
/// Any match rejects the page regardless of what else it contains.
pub fn classify(html: &str) -> Option<Rejection> {
    SIGNATURES
        .iter()
        .find(|signature| html.contains(*signature))
        .map(|signature| Rejection { signature })
}
