use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::SetLoggerError;
use reqwest::StatusCode;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Fatal errors from a single extraction call.
///
/// Malformed-but-tokenizable HTML never produces one of these; missing
/// elements degrade field-by-field and are only counted in [`ErrorStats`].
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Input the HTML tokenizer rejects outright.
    ///
    /// The html5ever backend used by `scraper` tokenizes any byte string,
    /// so this variant is unreachable with the current backend. It is kept
    /// so callers handle the case if the parser backend ever changes.
    #[error("input could not be tokenized as HTML")]
    #[allow(dead_code)] // Reserved for parser backends that can reject input
    UnparsableInput,
}

/// Errors from the search round-trip (encode, POST, extract).
///
/// These are recoverable: the caller keeps its prior session state and may
/// retry. Extraction is never attempted when the transport fails.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The configured base URL (or the endpoint joined onto it) is invalid.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Network-level failure from the HTTP client.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than 200 or 302.
    #[error("unexpected HTTP status: {0}")]
    UnexpectedStatus(StatusCode),

    /// The response body could not be scraped.
    #[error("scrape error: {0}")]
    Scrape(#[from] ScrapeError),
}

/// Diagnostic events recorded during extraction.
///
/// Each variant is a field or element that was expected but absent. These
/// are not failures (the record is emitted with empty fields); the counts
/// exist so a run can report how degraded its input was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// No form with the search endpoint's `action` attribute.
    SearchFormMissing,
    /// No status/message element inside the search form.
    StatusMessageMissing,
    /// No example-query hint container inside the search form.
    HintContainerMissing,
    /// A forum checkbox without a `value` attribute.
    ForumCheckboxValueMissing,
    /// A result without a thread-title element.
    ThreadTitleMissing,
    /// A result without a forum-title element.
    ForumTitleMissing,
    /// A result without an author element.
    AuthorNameMissing,
    /// A result without the server-supplied "N." ordinal.
    ResultOrdinalMissing,
    /// A result without a blurb element.
    BlurbMissing,
    /// A result without the hit-info date line.
    PostedAtMissing,
    /// A result whose permalink chain yielded no `postid` value.
    PostIdMissing,
    /// No result-summary element on a results page.
    ResultSummaryMissing,
}

impl ErrorType {
    /// Human-readable name for diagnostics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::SearchFormMissing => "Search form missing",
            ErrorType::StatusMessageMissing => "Status message missing",
            ErrorType::HintContainerMissing => "Hint container missing",
            ErrorType::ForumCheckboxValueMissing => "Forum checkbox value missing",
            ErrorType::ThreadTitleMissing => "Thread title missing",
            ErrorType::ForumTitleMissing => "Forum title missing",
            ErrorType::AuthorNameMissing => "Author name missing",
            ErrorType::ResultOrdinalMissing => "Result ordinal missing",
            ErrorType::BlurbMissing => "Blurb missing",
            ErrorType::PostedAtMissing => "Posted-at line missing",
            ErrorType::PostIdMissing => "Post id missing",
            ErrorType::ResultSummaryMissing => "Result summary missing",
        }
    }
}

/// Thread-safe counters for degraded-input diagnostics.
///
/// All counters start at zero. The struct can be shared across tasks with
/// `Arc`; increments use relaxed atomics since the counts are advisory.
pub struct ErrorStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ErrorStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    /// Records one occurrence of the given diagnostic event.
    pub fn increment(&self, error: ErrorType) {
        // All ErrorType variants are initialized in new()
        self.errors
            .get(&error)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for the given diagnostic event.
    pub fn get_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).unwrap().load(Ordering::SeqCst)
    }

    /// Logs one line per non-zero counter at debug level.
    pub fn log_summary(&self) {
        for error in ErrorType::iter() {
            let count = self.get_count(error);
            if count > 0 {
                log::debug!("{}: {}", error.as_str(), count);
            }
        }
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}
