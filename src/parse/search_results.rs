use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::DEFAULT_BASE_URL;
use crate::error_handling::{ErrorStats, ErrorType, ScrapeError};
use crate::models::SearchResultRecord;
use crate::parse::helpers::{element_text, first_text, query_param};

// CSS selector strings
const SEARCH_FORM_SELECTOR_STR: &str = "form[action='query.php']";
const RESULT_SUMMARY_SELECTOR_STR: &str = "#search_info";
const SEARCH_RESULT_SELECTOR_STR: &str = ".search_result";
const THREAD_TITLE_SELECTOR_STR: &str = ".threadtitle";
const RESULT_ORDINAL_SELECTOR_STR: &str = ".result_number";
const BLURB_SELECTOR_STR: &str = ".blurb";
const FORUM_TITLE_SELECTOR_STR: &str = ".forumtitle";
const AUTHOR_NAME_SELECTOR_STR: &str = ".username";
const POSTED_AT_SELECTOR_STR: &str = ".hit_info";

/// Query parameter on a result permalink that carries the post id.
const POST_ID_PARAM: &str = "postid";

static SEARCH_FORM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SEARCH_FORM_SELECTOR_STR).expect("Failed to parse form selector - this is a bug")
});

static RESULT_SUMMARY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_SUMMARY_SELECTOR_STR)
        .expect("Failed to parse result summary selector - this is a bug")
});

static SEARCH_RESULT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SEARCH_RESULT_SELECTOR_STR)
        .expect("Failed to parse search result selector - this is a bug")
});

static THREAD_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(THREAD_TITLE_SELECTOR_STR)
        .expect("Failed to parse thread title selector - this is a bug")
});

static RESULT_ORDINAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_ORDINAL_SELECTOR_STR)
        .expect("Failed to parse result ordinal selector - this is a bug")
});

static BLURB_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(BLURB_SELECTOR_STR).expect("Failed to parse blurb selector - this is a bug")
});

static FORUM_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FORUM_TITLE_SELECTOR_STR)
        .expect("Failed to parse forum title selector - this is a bug")
});

static AUTHOR_NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(AUTHOR_NAME_SELECTOR_STR)
        .expect("Failed to parse author name selector - this is a bug")
});

static POSTED_AT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(POSTED_AT_SELECTOR_STR)
        .expect("Failed to parse hit info selector - this is a bug")
});

static PERMALINK_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_BASE_URL).expect("Failed to parse base URL - this is a bug")
});

/// Everything scraped from one search-results page.
#[derive(Debug, Clone, Default)]
pub struct SearchResultsScrape {
    /// Result records in document order. Document order is the server's
    /// relevance/recency ranking and is preserved verbatim.
    pub results: Vec<SearchResultRecord>,
    /// The human-readable "Showing results X to Y of Z" summary line, kept
    /// as opaque text (its format is server-controlled prose), or empty.
    pub info: String,
}

/// Extracts result records and the summary line from a search-results page.
///
/// A page without the results form yields the empty scrape; a form with
/// zero result elements is the legitimate "no matches" state. Missing
/// sub-elements degrade to empty fields per record.
///
/// # Arguments
///
/// * `results_html` - The raw results page HTML
/// * `error_stats` - Diagnostic counters for absent elements
pub fn extract_search_results(
    results_html: &str,
    error_stats: &ErrorStats,
) -> Result<SearchResultsScrape, ScrapeError> {
    let document = Html::parse_document(results_html);

    let Some(form) = document.select(&SEARCH_FORM_SELECTOR).next() else {
        error_stats.increment(ErrorType::SearchFormMissing);
        return Ok(SearchResultsScrape::default());
    };

    let info = match form.select(&RESULT_SUMMARY_SELECTOR).next() {
        Some(element) => element_text(element),
        None => {
            error_stats.increment(ErrorType::ResultSummaryMissing);
            String::new()
        }
    };

    let mut results = Vec::new();
    for hit in form.select(&SEARCH_RESULT_SELECTOR) {
        let mut record = SearchResultRecord::new();

        record.thread_title = first_text(
            hit,
            &THREAD_TITLE_SELECTOR,
            error_stats,
            ErrorType::ThreadTitleMissing,
        );
        record.result_ordinal = first_text(
            hit,
            &RESULT_ORDINAL_SELECTOR,
            error_stats,
            ErrorType::ResultOrdinalMissing,
        );
        // The parser's text traversal already drops the <em> highlighting
        // wrappers, leaving the blurb as plain text.
        record.blurb = first_text(hit, &BLURB_SELECTOR, error_stats, ErrorType::BlurbMissing);
        record.forum_title = first_text(
            hit,
            &FORUM_TITLE_SELECTOR,
            error_stats,
            ErrorType::ForumTitleMissing,
        );
        record.author_name = first_text(
            hit,
            &AUTHOR_NAME_SELECTOR,
            error_stats,
            ErrorType::AuthorNameMissing,
        );
        record.posted_at = first_text(
            hit,
            &POSTED_AT_SELECTOR,
            error_stats,
            ErrorType::PostedAtMissing,
        );

        // find link -> read href -> parse URL -> find param -> read value;
        // any miss along the chain leaves post_id empty.
        record.post_id = hit
            .select(&THREAD_TITLE_SELECTOR)
            .next()
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| query_param(href, &PERMALINK_BASE, POST_ID_PARAM))
            .unwrap_or_else(|| {
                error_stats.increment(ErrorType::PostIdMissing);
                String::new()
            });

        results.push(record);
    }

    log::debug!("scraped results page: {} records", results.len());

    Ok(SearchResultsScrape { results, info })
}
