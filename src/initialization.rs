//! Logger and HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the `env_logger` sink at the given level.
///
/// `RUST_LOG` still takes precedence when set, so the flag acts as a
/// default rather than an override.
pub fn init_logger(level: log::LevelFilter) -> Result<(), InitializationError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string()),
    )
    .try_init()?;
    Ok(())
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled: the search endpoint answers 302 as part of its
/// success contract and the caller must see that status rather than the
/// page it points at.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(&config.user_agent)
        .redirect(Policy::none())
        .build()?;
    Ok(Arc::new(client))
}
