//! HTML-to-structured-data extraction.
//!
//! Two extractors share one parsing primitive (the `scraper` crate):
//! - [`extract_forum_options`] walks a search-form page into selectable
//!   forum entries, example-query hints, and a status message.
//! - [`extract_search_results`] walks a results page into ordered result
//!   records and a summary line.
//!
//! Both are pure functions over the input string. Missing elements degrade
//! field-by-field to empty strings; they never fail the call. Document
//! order is preserved everywhere: checklist order mirrors the forum
//! hierarchy, result order mirrors the server's ranking.

mod forum_options;
mod helpers;
mod search_results;

// Re-export public API
pub use forum_options::{extract_forum_options, ForumOptionsScrape};
pub use search_results::{extract_search_results, SearchResultsScrape};
