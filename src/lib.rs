//! forum_search library: scrapes a legacy web forum's search pages.
//!
//! The forum exposes search as HTML pages, not a JSON API. This crate
//! turns those pages into structured records:
//!
//! - [`extract_forum_options`] scrapes the search form into a flattened
//!   forum checklist, example-query hints, and a status message.
//! - [`extract_search_results`] scrapes a results page into ordered
//!   result records and a summary line.
//! - [`build_search_request_body`] encodes the POST body the search
//!   endpoint expects.
//! - [`SearchSession`] owns the scraped state for one app session;
//!   [`SearchClient`] is the HTTP collaborator for the round-trip.
//!
//! # Example
//!
//! ```no_run
//! use forum_search::{run_search, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     query: "test query".to_string(),
//!     forums: vec!["269".to_string(), "219".to_string()],
//!     ..Default::default()
//! };
//!
//! let outcome = run_search(config).await?;
//! println!("{}", outcome.info);
//! for record in &outcome.results {
//!     println!("{} {}", record.result_ordinal, record.thread_title);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod http;
pub mod initialization;
mod models;
mod parse;
mod query;
mod session;

// Re-export public API
pub use config::{Config, LogLevel};
pub use error_handling::{ErrorStats, ErrorType, InitializationError, ScrapeError, SearchError};
pub use http::SearchClient;
pub use models::{ForumOption, SearchHint, SearchResultRecord};
pub use parse::{
    extract_forum_options, extract_search_results, ForumOptionsScrape, SearchResultsScrape,
};
pub use query::build_search_request_body;
pub use run::{run_search, SearchOutcome};
pub use session::SearchSession;

// Internal run module (one full search round-trip)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::config::Config;
    use crate::error_handling::ErrorStats;
    use crate::http::SearchClient;
    use crate::initialization::init_client;
    use crate::models::SearchResultRecord;
    use crate::parse::{extract_forum_options, extract_search_results};
    use crate::session::SearchSession;

    /// Snapshot of a completed search round-trip.
    #[derive(Debug, Clone)]
    pub struct SearchOutcome {
        /// Number of selectable forums scraped from the search form.
        pub options_scraped: usize,
        /// Status message from the search form, if any.
        pub status_message: String,
        /// Result records in server order.
        pub results: Vec<SearchResultRecord>,
        /// The server's result-summary line, if any.
        pub info: String,
    }

    /// Performs one search round-trip: fetch the search form, scrape the
    /// forum checklist, POST the encoded query, scrape the results.
    ///
    /// Transport failures are returned to the caller rather than swallowed;
    /// no session state is mutated on the failing path, so a retrying
    /// caller keeps its prior view.
    ///
    /// # Errors
    ///
    /// Fails when the base URL is invalid, a request fails at the
    /// transport level, or the server answers with a status other than
    /// 200/302.
    pub async fn run_search(config: Config) -> Result<SearchOutcome> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let search_client = SearchClient::new(client, &config.base_url)
            .context("Failed to construct search client")?;

        let error_stats = ErrorStats::new();
        let mut session = SearchSession::new();
        session.set_query_text(&config.query);

        let form_html = search_client
            .fetch_search_form()
            .await
            .context("Failed to fetch search form page")?;
        let form_scrape = extract_forum_options(&form_html, &error_stats)
            .context("Failed to scrape search form page")?;
        session.apply_forum_options_scrape(form_scrape);
        info!(
            "search form scraped: {} forums, {} hints",
            session.forum_options().len(),
            session.hints().len()
        );

        for forum_id in &config.forums {
            session.set_selected(forum_id, true);
            if !session
                .forum_options()
                .iter()
                .any(|option| &option.forum_id == forum_id)
            {
                warn!("forum id {forum_id} is not in the scraped checklist; sending it anyway");
            }
        }

        // The encoder takes the caller's ids verbatim so the request stays
        // deterministic even when an id is missing from the checklist.
        let results_html = search_client
            .search(&config.query, &config.forums)
            .await
            .context("Search request failed")?;
        let results_scrape = extract_search_results(&results_html, &error_stats)
            .context("Failed to scrape results page")?;
        session.apply_results_scrape(results_scrape);

        error_stats.log_summary();

        Ok(SearchOutcome {
            options_scraped: session.forum_options().len(),
            status_message: session.status_message().to_string(),
            results: session.results().to_vec(),
            info: session.result_info().to_string(),
        })
    }
}
