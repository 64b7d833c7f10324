//! Session-scoped search state.
//!
//! The session owns the three scraped collections exclusively; consumers
//! get snapshots, never live references. Mutation happens only through the
//! `apply_*` methods, each of which swaps the fields it covers wholesale
//! (last-write-wins, no partial merge), so an overlapping rescrape can
//! never leave a half-updated view.

use crate::models::{ForumOption, SearchHint, SearchResultRecord};
use crate::parse::{ForumOptionsScrape, SearchResultsScrape};

/// In-memory search state for one app session.
///
/// Nothing here persists across launches; the whole struct is rebuilt from
/// fresh scrapes.
#[derive(Debug, Default)]
pub struct SearchSession {
    query_text: String,
    forum_options: Vec<ForumOption>,
    hints: Vec<SearchHint>,
    status_message: String,
    results: Vec<SearchResultRecord>,
    result_info: String,
}

impl SearchSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the form-derived state (options, hints, status message)
    /// with a fresh scrape. Selection state does not survive the swap: the
    /// new options arrive unselected, mirroring a fresh page load.
    pub fn apply_forum_options_scrape(&mut self, scrape: ForumOptionsScrape) {
        self.forum_options = scrape.options;
        self.hints = scrape.hints;
        self.status_message = scrape.status_message;
    }

    /// Replaces the result list and summary line as a unit. Prior results
    /// are cleared even when the new list is empty ("no matches" is a
    /// complete, valid outcome).
    pub fn apply_results_scrape(&mut self, scrape: SearchResultsScrape) {
        self.results = scrape.results;
        self.result_info = scrape.info;
    }

    /// Sets the user-entered query text.
    pub fn set_query_text(&mut self, query_text: impl Into<String>) {
        self.query_text = query_text.into();
    }

    /// The user-entered query text.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Sets the selection state of every option whose `forum_id` matches.
    /// Matching by wire id (not process-local id) mirrors the checklist UI,
    /// where duplicate ids from malformed input toggle together.
    pub fn set_selected(&mut self, forum_id: &str, selected: bool) {
        for option in &mut self.forum_options {
            if option.forum_id == forum_id {
                option.selected = selected;
            }
        }
    }

    /// Wire ids of the selected options, in checklist order.
    pub fn selected_forum_ids(&self) -> Vec<String> {
        self.forum_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.forum_id.clone())
            .collect()
    }

    /// Drops the current result list and summary, keeping form state.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.result_info.clear();
    }

    /// The forum checklist, in document order.
    pub fn forum_options(&self) -> &[ForumOption] {
        &self.forum_options
    }

    /// Example-query hints, in document order.
    pub fn hints(&self) -> &[SearchHint] {
        &self.hints
    }

    /// Status message from the search form, or empty.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Result records in server order.
    pub fn results(&self) -> &[SearchResultRecord] {
        &self.results
    }

    /// The server's result-summary line, or empty.
    pub fn result_info(&self) -> &str {
        &self.result_info
    }
}
