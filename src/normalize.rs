//! URL normalization and deduplication.
//!
//! Raw tokens from the extractors are trimmed, form-decoded and parsed;
//! anything that does not parse as an absolute URI is dropped silently.
//! Free-text scanning produces plenty of noise, so discards are not
//! reported.

use percent_encoding::percent_decode_str;
use rustc_hash::FxHashSet;
use url::Url;

/// Normalize a single raw candidate. Returns `None` when the candidate
/// does not survive normalization.
///
/// Decoding is form-component style: `+` becomes a space before the
/// percent octets are decoded, so `%2B` yields a literal `+`. The
/// decoded string itself is kept, not a reconstructed URL.
fn normalize_candidate(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let decoded = percent_decode_str(&trimmed.replace('+', " "))
        .decode_utf8()
        .ok()?
        .into_owned();

    // Url::parse only accepts absolute references, so candidates
    // without a scheme fail here along with malformed syntax.
    Url::parse(&decoded).ok()?;

    Some(decoded)
}

/// Normalize the aggregated raw links and deduplicate them, preserving
/// first-occurrence order. The result is never sorted; it reflects
/// traversal and scan order.
pub fn normalize_links<I>(raw_links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = FxHashSet::default();
    let mut links = Vec::new();

    for raw in raw_links {
        if let Some(link) = normalize_candidate(&raw) {
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }
    }

    links
}
