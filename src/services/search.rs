// src/services/search.rs

//! Article search client for the GDELT Doc 2.0 API.
//!
//! Executes one composed clause per request with a fixed recency window and
//! result cap, sorted newest-first. The provider has returned the article
//! list under two different field layouts over time; normalization accepts
//! both and drops records without a usable URL.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Article, Config, UNTITLED};
use crate::utils::http;

/// A source of articles for one composed clause.
#[async_trait]
pub trait ArticleSearch: Send + Sync {
    /// Execute a single clause and return its normalized articles in
    /// provider order. Any error is a recoverable failure of this one clause.
    async fn search(&self, clause: &str) -> Result<Vec<Article>>;
}

/// HTTP client against the GDELT article search endpoint.
pub struct GdeltClient {
    client: reqwest::Client,
    endpoint: String,
    max_records: u32,
    timespan: String,
}

impl GdeltClient {
    /// Create a new client from the application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(&config.http)?,
            endpoint: config.search.endpoint.clone(),
            max_records: config.search.max_records,
            timespan: config.search.timespan.clone(),
        })
    }
}

#[async_trait]
impl ArticleSearch for GdeltClient {
    async fn search(&self, clause: &str) -> Result<Vec<Article>> {
        let max_records = self.max_records.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", clause),
                ("mode", "ArtList"),
                ("format", "json"),
                ("maxrecords", max_records.as_str()),
                ("sort", "DateDesc"),
                ("timespan", self.timespan.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::search(clause, format!("unexpected status {status}")));
        }

        // The endpoint reports query syntax errors as plain text with a 200
        // status; only a JSON body counts as a result set.
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = response.text().await?;
        if !content_type.contains("application/json") {
            return Err(AppError::search(clause, body.trim()));
        }

        let json: Value = serde_json::from_str(&body)?;
        Ok(parse_articles(&json))
    }
}

/// Normalize a provider response body into articles.
///
/// Accepts the list under either `articles` or `documents`, and per-record
/// field names from both layouts.
pub fn parse_articles(json: &Value) -> Vec<Article> {
    let raw = json
        .get("articles")
        .or_else(|| json.get("documents"))
        .and_then(Value::as_array);

    match raw {
        Some(records) => records.iter().filter_map(article_from_value).collect(),
        None => Vec::new(),
    }
}

fn article_from_value(value: &Value) -> Option<Article> {
    let url = first_str(value, &["url", "docurl"])?;
    Url::parse(url).ok()?;

    Some(Article {
        title: first_str(value, &["title", "documenttitle"])
            .unwrap_or(UNTITLED)
            .to_string(),
        url: url.to_string(),
        source: first_str(value, &["source", "sourcename", "sourcecountry"])
            .unwrap_or("")
            .to_string(),
        date: first_str(value, &["seendate", "date", "publishdate"])
            .unwrap_or("")
            .to_string(),
    })
}

/// First non-empty string value among `keys`, in priority order.
fn first_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    })
}
