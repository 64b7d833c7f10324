//! Extract-or-default helpers shared by both extractors.
//!
//! The extraction contract is that a missing sub-element yields an empty
//! string, never an error. These helpers centralize that rule so the
//! per-field code stays a single call.

use scraper::{ElementRef, Selector};
use url::Url;

use crate::error_handling::{ErrorStats, ErrorType};

/// Concatenated descendant text of an element, trimmed of surrounding
/// whitespace. Markup (highlighting wrappers included) is discarded by the
/// parser's text traversal, leaving plain text.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector`, or the empty string.
///
/// A miss increments the given diagnostic counter; it is not an error.
pub fn first_text(
    scope: ElementRef,
    selector: &Selector,
    error_stats: &ErrorStats,
    miss: ErrorType,
) -> String {
    match scope.select(selector).next() {
        Some(element) => element_text(element),
        None => {
            error_stats.increment(miss);
            String::new()
        }
    }
}

/// Value of the query parameter `name` in `href`, or `None`.
///
/// Result permalinks are usually server-relative (`/showthread.php?...`), so
/// an absolute parse is tried first and a join against `base` second. Every
/// step of the chain short-circuits to `None`.
pub fn query_param(href: &str, base: &Url, name: &str) -> Option<String> {
    let parsed = Url::parse(href).or_else(|_| base.join(href)).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
