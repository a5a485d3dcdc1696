// src/session.rs

//! News panel session state machine.
//!
//! Owns the query inputs, the merged result set and the visible paging
//! window. All mutation happens through the user-event methods below; a
//! fetch cycle takes `&mut self`, so two cycles can never overlap and a
//! superseded cycle can never publish stale results.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Article, Config};
use crate::query::{LanguageMode, compose};
use crate::services::{Aggregator, ArticleSearch, FetchOutcome};

/// Lifecycle state of the current fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch has run yet
    #[default]
    Idle,
    /// A fetch cycle is in flight
    Loading,
    /// The last cycle produced at least one article
    Success,
    /// The last cycle produced nothing; the message is user-facing
    Error(String),
}

/// Session state for one news panel instance.
pub struct NewsPanel<S: ArticleSearch> {
    config: Arc<Config>,
    search: S,
    query_text: String,
    language: LanguageMode,
    include_domestic: bool,
    status: FetchStatus,
    merged: Vec<Article>,
    visible_count: usize,
}

impl<S: ArticleSearch> NewsPanel<S> {
    /// Create a fresh session. No fetch runs until [`browse`](Self::browse)
    /// or [`submit`](Self::submit) is called.
    pub fn new(config: Arc<Config>, search: S) -> Self {
        let visible_count = config.paging.page_size;
        Self {
            config,
            search,
            query_text: String::new(),
            language: LanguageMode::Ko,
            include_domestic: true,
            status: FetchStatus::Idle,
            merged: Vec::new(),
            visible_count,
        }
    }

    // --- Input events ---

    /// Update the free-text query without triggering a fetch.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// Change the language mode. Takes effect on the next fetch.
    pub fn set_language(&mut self, language: LanguageMode) {
        self.language = language;
    }

    /// Toggle the domestic-source broadening (Korean mode only).
    pub fn set_include_domestic(&mut self, include: bool) {
        self.include_domestic = include;
    }

    /// Default browse: the automatic load a front end issues on mount,
    /// ignoring any typed query text.
    pub async fn browse(&mut self) {
        self.fetch("", true).await;
    }

    /// Explicit search over the current query text (Enter key or search
    /// button).
    pub async fn submit(&mut self) {
        let raw = self.query_text.clone();
        self.fetch(&raw, false).await;
    }

    /// Reveal one more page of already-fetched results. No network activity.
    pub fn load_more(&mut self) {
        if !self.can_load_more() {
            return;
        }
        self.visible_count =
            (self.visible_count + self.config.paging.page_size).min(self.merged.len());
    }

    // --- View accessors ---

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn language(&self) -> LanguageMode {
        self.language
    }

    pub fn include_domestic(&self) -> bool {
        self.include_domestic
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// All merged results of the last successful cycle.
    pub fn results(&self) -> &[Article] {
        &self.merged
    }

    /// The currently revealed slice of the merged results.
    pub fn visible(&self) -> &[Article] {
        &self.merged[..self.visible_count.min(self.merged.len())]
    }

    /// Whether the "load more" control should be shown.
    pub fn can_load_more(&self) -> bool {
        !matches!(self.status, FetchStatus::Loading) && self.merged.len() > self.visible_count
    }

    // --- Fetch cycle ---

    async fn fetch(&mut self, raw: &str, initial: bool) {
        self.status = FetchStatus::Loading;
        self.merged.clear();
        self.visible_count = self.config.paging.page_size;

        match self.run_cycle(raw).await {
            Ok(outcome) => {
                if outcome.clause_failures > 0 {
                    log::warn!(
                        "{} of {} clauses failed during this cycle",
                        outcome.clause_failures,
                        outcome.clause_total
                    );
                }
                if outcome.articles.is_empty() {
                    let message = if initial {
                        &self.config.messages.no_recent_articles
                    } else {
                        &self.config.messages.no_search_results
                    };
                    self.status = FetchStatus::Error(message.clone());
                } else {
                    self.merged = outcome.articles;
                    self.status = FetchStatus::Success;
                }
            }
            Err(error) => {
                log::warn!("Fetch cycle failed: {}", error);
                self.status = FetchStatus::Error(self.config.messages.fetch_failed.clone());
            }
        }
    }

    async fn run_cycle(&self, raw: &str) -> Result<FetchOutcome> {
        let clauses = compose(raw, self.language, self.include_domestic);
        Aggregator::new(&self.search, &self.config)
            .run(&clauses)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    /// Scripted article source that records the clauses it was asked for.
    struct ScriptedSearch {
        responses: Mutex<VecDeque<Result<Vec<Article>>>>,
        clauses: Mutex<Vec<String>>,
    }

    impl ScriptedSearch {
        fn new(responses: Vec<Result<Vec<Article>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                clauses: Mutex::new(Vec::new()),
            }
        }

        fn seen_clauses(&self) -> Vec<String> {
            self.clauses.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArticleSearch for ScriptedSearch {
        async fn search(&self, clause: &str) -> Result<Vec<Article>> {
            self.clauses.lock().unwrap().push(clause.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn article(n: usize) -> Article {
        Article {
            title: format!("article {n}"),
            url: format!("https://example.com/{n}"),
            source: String::new(),
            date: String::new(),
        }
    }

    fn articles(range: std::ops::Range<usize>) -> Vec<Article> {
        range.map(article).collect()
    }

    fn config() -> Arc<Config> {
        let mut config = Config::default();
        config.http.request_delay_ms = 0;
        Arc::new(config)
    }

    fn panel(responses: Vec<Result<Vec<Article>>>) -> NewsPanel<ScriptedSearch> {
        NewsPanel::new(config(), ScriptedSearch::new(responses))
    }

    #[tokio::test]
    async fn browse_issues_single_bundle_clause() {
        let mut panel = panel(vec![Ok(articles(0..3))]);
        panel.browse().await;

        let clauses = panel.search.seen_clauses();
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].contains("maritime"));
        assert_eq!(*panel.status(), FetchStatus::Success);
    }

    #[tokio::test]
    async fn submit_issues_two_clauses_for_user_input() {
        let mut panel = panel(vec![Ok(articles(0..2)), Ok(articles(2..4))]);
        panel.set_query_text("컨테이너");
        panel.submit().await;

        assert_eq!(panel.search.seen_clauses().len(), 2);
        assert_eq!(panel.results().len(), 4);
    }

    #[tokio::test]
    async fn empty_browse_reports_recency_window_message() {
        let mut panel = panel(vec![Ok(Vec::new())]);
        panel.browse().await;

        assert_eq!(
            *panel.status(),
            FetchStatus::Error("최근 7일 내 관련 기사가 없습니다.".to_string())
        );
        assert!(panel.results().is_empty());
    }

    #[tokio::test]
    async fn empty_search_reports_no_results_message() {
        let mut panel = panel(vec![Ok(Vec::new()), Ok(Vec::new())]);
        panel.set_query_text("파업");
        panel.submit().await;

        assert_eq!(
            *panel.status(),
            FetchStatus::Error("검색 결과가 없습니다.".to_string())
        );
    }

    #[tokio::test]
    async fn partial_clause_failure_still_succeeds() {
        let mut panel = panel(vec![
            Err(AppError::search("clause", "boom")),
            Ok(articles(0..1)),
        ]);
        panel.set_query_text("운임");
        panel.submit().await;

        assert_eq!(*panel.status(), FetchStatus::Success);
        assert_eq!(panel.results().len(), 1);
    }

    #[tokio::test]
    async fn load_more_grows_by_page_size_and_clamps() {
        let mut panel = panel(vec![Ok(articles(0..20))]);
        panel.browse().await;

        assert_eq!(panel.visible().len(), 8);
        assert!(panel.can_load_more());

        panel.load_more();
        assert_eq!(panel.visible().len(), 16);

        panel.load_more();
        assert_eq!(panel.visible().len(), 20);
        assert!(!panel.can_load_more());

        // Further clicks are no-ops.
        panel.load_more();
        assert_eq!(panel.visible().len(), 20);
    }

    #[tokio::test]
    async fn control_hidden_exactly_when_window_covers_results() {
        let mut panel = panel(vec![Ok(articles(0..8))]);
        panel.browse().await;

        assert_eq!(panel.visible().len(), 8);
        assert!(!panel.can_load_more());
    }

    #[tokio::test]
    async fn short_result_set_is_fully_visible() {
        let mut panel = panel(vec![Ok(articles(0..3))]);
        panel.browse().await;

        assert_eq!(panel.visible().len(), 3);
        assert!(!panel.can_load_more());
    }

    #[tokio::test]
    async fn new_search_resets_results_and_window() {
        let mut panel = panel(vec![
            Ok(articles(0..20)),
            Ok(articles(100..103)),
            Ok(Vec::new()),
        ]);
        panel.browse().await;
        panel.load_more();
        assert_eq!(panel.visible().len(), 16);

        panel.set_query_text("Incheon");
        panel.submit().await;

        assert_eq!(panel.results().len(), 3);
        assert_eq!(panel.visible().len(), 3);
        assert_eq!(*panel.status(), FetchStatus::Success);
    }
}
