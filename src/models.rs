//! Data records produced by the extraction layer.

use std::sync::atomic::{AtomicU64, Ordering};

// Process-local identity for scraped records. Forum ids and post ids come
// from the wire and are not guaranteed unique on malformed input, so every
// record gets its own id at creation time.
static NEXT_RECORD_ID: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> u64 {
    NEXT_RECORD_ID.fetch_add(1, Ordering::Relaxed)
}

/// One selectable search-scope entry scraped from the search form.
///
/// `forum_id` is the checkbox's `value` attribute, kept as an opaque string:
/// the server treats it as a wire identifier and nothing here depends on it
/// being numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumOption {
    /// Process-local identity, assigned at creation.
    pub id: u64,
    /// Display text, trimmed of surrounding whitespace.
    pub label: String,
    /// Wire identifier from the checkbox `value` attribute (may be empty).
    pub forum_id: String,
    /// User-toggled selection state; defaults to `false`.
    pub selected: bool,
}

impl ForumOption {
    /// Creates an unselected option with a fresh process-local id.
    pub fn new(label: String, forum_id: String) -> Self {
        ForumOption {
            id: next_record_id(),
            label,
            forum_id,
            selected: false,
        }
    }
}

/// One hit on a search-results page.
///
/// Every field defaults to the empty string when its source element is
/// absent; a missing sub-element is a degraded record, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultRecord {
    /// Process-local identity, assigned at creation.
    pub id: u64,
    /// Title of the thread containing the hit.
    pub thread_title: String,
    /// Name of the forum the thread lives in.
    pub forum_title: String,
    /// Author of the matching post.
    pub author_name: String,
    /// The server-supplied "N." ordinal label, kept as text (it carries
    /// punctuation and is display data, not a number).
    pub result_ordinal: String,
    /// Matching excerpt with highlighting markup stripped to plain text.
    pub blurb: String,
    /// Free-text date/time line as rendered by the server.
    pub posted_at: String,
    /// Value of the `postid` query parameter on the hit's permalink,
    /// empty when the link or parameter is missing.
    pub post_id: String,
}

impl SearchResultRecord {
    /// Creates a record with all fields empty and a fresh process-local id.
    pub fn new() -> Self {
        SearchResultRecord {
            id: next_record_id(),
            thread_title: String::new(),
            forum_title: String::new(),
            author_name: String::new(),
            result_ordinal: String::new(),
            blurb: String::new(),
            posted_at: String::new(),
            post_id: String::new(),
        }
    }
}

impl Default for SearchResultRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// One example-query suggestion shown to the user before they search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHint {
    /// Process-local identity, assigned at creation.
    pub id: u64,
    /// Suggestion text, trimmed.
    pub text: String,
}

impl SearchHint {
    /// Creates a hint with a fresh process-local id.
    pub fn new(text: String) -> Self {
        SearchHint {
            id: next_record_id(),
            text,
        }
    }
}
