//! Snapshot persistence for fetched articles.
//!
//! A snapshot is the merged result set of one search cycle together with its
//! fetch context, written as a single JSON document. Snapshots are explicit
//! exports; the session itself never persists anything across runs.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Article;

// Re-export for convenience
pub use local::LocalStorage;

/// A saved result set with its fetch context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// ISO 8601 timestamp of the fetch
    pub fetched_at: DateTime<Utc>,

    /// Query text the results were fetched for (empty = default browse)
    #[serde(default)]
    pub query: String,

    /// Total article count
    pub count: usize,

    /// The articles array
    pub articles: Vec<Article>,
}

impl Snapshot {
    pub fn new(query: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            fetched_at: Utc::now(),
            query: query.into(),
            count: articles.len(),
            articles,
        }
    }
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<()>;

    /// Load the most recent snapshot, if one exists.
    async fn load_snapshot(&self) -> Result<Option<Snapshot>>;
}
