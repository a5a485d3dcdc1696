//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Article search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Result paging settings
    #[serde(default)]
    pub paging: PagingConfig,

    /// User-facing message strings
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(AppError::validation("search.endpoint is empty"));
        }
        if self.search.timespan.trim().is_empty() {
            return Err(AppError::validation("search.timespan is empty"));
        }
        if self.search.max_records == 0 {
            return Err(AppError::validation("search.max_records must be > 0"));
        }
        if self.search.hard_limit == 0 {
            return Err(AppError::validation("search.hard_limit must be > 0"));
        }
        if self.paging.page_size == 0 {
            return Err(AppError::validation("paging.page_size must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between consecutive clause requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Article search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Article search endpoint URL
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Maximum records requested per clause
    #[serde(default = "defaults::max_records")]
    pub max_records: u32,

    /// Recency window in provider notation (e.g. "7d")
    #[serde(default = "defaults::timespan")]
    pub timespan: String,

    /// Maximum merged articles retained per search cycle
    #[serde(default = "defaults::hard_limit")]
    pub hard_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            max_records: defaults::max_records(),
            timespan: defaults::timespan(),
            hard_limit: defaults::hard_limit(),
        }
    }
}

/// Result paging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Articles revealed per "load more" step
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
        }
    }
}

/// User-facing message strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Shown when the automatic initial load finds nothing in the window
    #[serde(default = "defaults::msg_no_recent_articles")]
    pub no_recent_articles: String,

    /// Shown when an explicit search matches nothing
    #[serde(default = "defaults::msg_no_search_results")]
    pub no_search_results: String,

    /// Shown when a fetch cycle fails unexpectedly
    #[serde(default = "defaults::msg_fetch_failed")]
    pub fetch_failed: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            no_recent_articles: defaults::msg_no_recent_articles(),
            no_search_results: defaults::msg_no_search_results(),
            fetch_failed: defaults::msg_fetch_failed(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; seaNews/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        100
    }

    // Search defaults
    pub fn endpoint() -> String {
        "https://api.gdeltproject.org/api/v2/doc/doc".into()
    }
    pub fn max_records() -> u32 {
        50
    }
    pub fn timespan() -> String {
        "7d".into()
    }
    pub fn hard_limit() -> usize {
        48
    }

    // Paging defaults
    pub fn page_size() -> usize {
        8
    }

    // Message defaults
    pub fn msg_no_recent_articles() -> String {
        "최근 7일 내 관련 기사가 없습니다.".into()
    }
    pub fn msg_no_search_results() -> String {
        "검색 결과가 없습니다.".into()
    }
    pub fn msg_fetch_failed() -> String {
        "뉴스 불러오기 실패".into()
    }
}
