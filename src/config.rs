//! Constants and command-line configuration.

use clap::{Parser, ValueEnum};

// Endpoint and wire format
/// Path of the forum search endpoint; both page shapes identify their form
/// by an `action` attribute equal to this path.
pub const SEARCH_ENDPOINT_PATH: &str = "query.php";
/// Base URL the search endpoint and result permalinks are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://forums.somethingawful.com/";
/// Content type of the encoded search request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Network timeouts
/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// The forum serves a degraded page to clients it does not recognize, so a
/// browser-like string is used. Override via the `--user-agent` flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line configuration for a one-shot search.
#[derive(Debug, Clone, Parser)]
#[command(name = "forum_search", about = "Search a legacy web forum from the command line")]
pub struct Config {
    /// Query text to search for
    #[arg(short, long)]
    pub query: String,

    /// Forum id to restrict the search to (repeatable; order is preserved)
    #[arg(short = 'f', long = "forum")]
    pub forums: Vec<String>,

    /// Base URL of the forum
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: String::new(),
            forums: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::Info,
        }
    }
}
