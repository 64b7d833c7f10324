use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error_handling::{ErrorStats, ErrorType, ScrapeError};
use crate::models::{ForumOption, SearchHint};
use crate::parse::helpers::element_text;

// CSS selector strings
const SEARCH_FORM_SELECTOR_STR: &str = "form[action='query.php']";
const STATUS_MESSAGE_SELECTOR_STR: &str = ".search_message";
const HINT_CONTAINER_SELECTOR_STR: &str = ".search_help";
const HINT_TERM_SELECTOR_STR: &str = ".term";
const FORUM_CHECKBOX_SELECTOR_STR: &str = ".forumcheck";

/// The server renders a convenience toggle as the first checkbox; it is a
/// UI affordance, not a forum, and is filtered out of the option list.
const SELECT_ALL_LABEL: &str = "Select All Forums";

static SEARCH_FORM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SEARCH_FORM_SELECTOR_STR).expect("Failed to parse form selector - this is a bug")
});

static STATUS_MESSAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(STATUS_MESSAGE_SELECTOR_STR)
        .expect("Failed to parse status message selector - this is a bug")
});

static HINT_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HINT_CONTAINER_SELECTOR_STR)
        .expect("Failed to parse hint container selector - this is a bug")
});

static HINT_TERM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HINT_TERM_SELECTOR_STR)
        .expect("Failed to parse hint term selector - this is a bug")
});

static FORUM_CHECKBOX_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(FORUM_CHECKBOX_SELECTOR_STR)
        .expect("Failed to parse forum checkbox selector - this is a bug")
});

/// Everything scraped from one search-form page.
#[derive(Debug, Clone, Default)]
pub struct ForumOptionsScrape {
    /// Selectable forums, in document order (the order encodes the server's
    /// forum hierarchy, parents immediately followed by their children).
    pub options: Vec<ForumOption>,
    /// Example-query suggestions, in document order.
    pub hints: Vec<SearchHint>,
    /// Trimmed text of the form's status element, or empty.
    pub status_message: String,
}

/// Extracts forum options, search hints and the status message from a
/// search-form page.
///
/// A page without the search form is a valid outcome and yields the empty
/// scrape. Missing sub-elements degrade per field; only input the tokenizer
/// rejects outright fails the call.
///
/// # Arguments
///
/// * `form_html` - The raw search-form page HTML
/// * `error_stats` - Diagnostic counters for absent elements
pub fn extract_forum_options(
    form_html: &str,
    error_stats: &ErrorStats,
) -> Result<ForumOptionsScrape, ScrapeError> {
    let document = Html::parse_document(form_html);

    let Some(form) = document.select(&SEARCH_FORM_SELECTOR).next() else {
        // "Form not found" is the legitimate empty state, not an error.
        error_stats.increment(ErrorType::SearchFormMissing);
        return Ok(ForumOptionsScrape::default());
    };

    let status_message = match form.select(&STATUS_MESSAGE_SELECTOR).next() {
        Some(element) => element_text(element),
        None => {
            error_stats.increment(ErrorType::StatusMessageMissing);
            String::new()
        }
    };

    let mut hints = Vec::new();
    match form.select(&HINT_CONTAINER_SELECTOR).next() {
        Some(container) => {
            for term in container.select(&HINT_TERM_SELECTOR) {
                hints.push(SearchHint::new(element_text(term)));
            }
        }
        None => error_stats.increment(ErrorType::HintContainerMissing),
    }

    let mut options = Vec::new();
    for checkbox in form.select(&FORUM_CHECKBOX_SELECTOR) {
        // The label lives on the enclosing container, not the input itself;
        // the input contributes no text of its own.
        let label = checkbox
            .parent()
            .and_then(ElementRef::wrap)
            .map(element_text)
            .unwrap_or_default();

        let forum_id = match checkbox.value().attr("value") {
            Some(value) => value.to_string(),
            None => {
                error_stats.increment(ErrorType::ForumCheckboxValueMissing);
                String::new()
            }
        };

        if label == SELECT_ALL_LABEL {
            continue;
        }
        options.push(ForumOption::new(label, forum_id));
    }

    log::debug!(
        "scraped search form: {} options, {} hints",
        options.len(),
        hints.len()
    );

    Ok(ForumOptionsScrape {
        options,
        hints,
        status_message,
    })
}
