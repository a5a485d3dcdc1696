// src/services/aggregator.rs

//! Multi-clause aggregation.
//!
//! Executes the composed clause list strictly sequentially, merging results
//! with URL-based deduplication. Articles keep first-seen order: everything
//! an earlier clause contributed precedes what a later clause adds, and
//! provider order is preserved within a clause. A failing clause is logged,
//! counted and skipped; only the merged result decides success.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::Result;
use crate::models::{Article, Config};
use crate::services::search::ArticleSearch;

/// Summary of one aggregation cycle.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Merged, URL-unique articles in first-seen order
    pub articles: Vec<Article>,
    /// Number of clauses executed or attempted
    pub clause_total: usize,
    /// Number of clauses that failed and were skipped
    pub clause_failures: usize,
}

/// Runs composed clauses against an article source and merges the results.
pub struct Aggregator<'a> {
    search: &'a dyn ArticleSearch,
    hard_limit: usize,
    request_delay: Duration,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator over the given article source.
    pub fn new(search: &'a dyn ArticleSearch, config: &Config) -> Self {
        Self {
            search,
            hard_limit: config.search.hard_limit,
            request_delay: Duration::from_millis(config.http.request_delay_ms),
        }
    }

    /// Execute all clauses in order and merge their results.
    ///
    /// Clause N+1 is not issued until clause N has completed, so at most one
    /// request is outstanding and the hard-limit short-circuit is
    /// deterministic.
    pub async fn run(&self, clauses: &[String]) -> Result<FetchOutcome> {
        let mut outcome = FetchOutcome {
            clause_total: clauses.len(),
            ..FetchOutcome::default()
        };
        let mut seen = HashSet::new();

        'clauses: for (i, clause) in clauses.iter().enumerate() {
            if i > 0 && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }

            log::debug!("Clause {}/{}: {}", i + 1, clauses.len(), clause);
            match self.search.search(clause).await {
                Ok(articles) => {
                    for article in articles {
                        if !seen.insert(article.url.clone()) {
                            continue;
                        }
                        outcome.articles.push(article);
                        if outcome.articles.len() >= self.hard_limit {
                            log::debug!(
                                "Merged article limit ({}) reached, skipping remaining clauses",
                                self.hard_limit
                            );
                            break 'clauses;
                        }
                    }
                }
                Err(error) => {
                    outcome.clause_failures += 1;
                    log::warn!("Clause failed, continuing: {}", error);
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    /// Returns one scripted response per call, in order.
    struct ScriptedSearch {
        responses: Mutex<VecDeque<Result<Vec<Article>>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSearch {
        fn new(responses: Vec<Result<Vec<Article>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ArticleSearch for ScriptedSearch {
        async fn search(&self, _clause: &str) -> Result<Vec<Article>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
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

    fn test_config() -> Config {
        let mut config = Config::default();
        config.http.request_delay_ms = 0;
        config
    }

    fn clauses(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("clause {i}")).collect()
    }

    #[tokio::test]
    async fn merges_with_url_dedup_in_first_seen_order() {
        let search = ScriptedSearch::new(vec![
            Ok(vec![article(1), article(2)]),
            Ok(vec![article(2), article(3)]),
        ]);
        let outcome = Aggregator::new(&search, &test_config())
            .run(&clauses(2))
            .await
            .unwrap();

        let urls: Vec<_> = outcome.articles.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://example.com/1",
                "https://example.com/2",
                "https://example.com/3"
            ]
        );
        assert_eq!(outcome.clause_failures, 0);
    }

    #[tokio::test]
    async fn never_exceeds_hard_limit() {
        let search = ScriptedSearch::new(vec![
            Ok((0..30).map(article).collect()),
            Ok((30..60).map(article).collect()),
        ]);
        let outcome = Aggregator::new(&search, &test_config())
            .run(&clauses(2))
            .await
            .unwrap();

        assert_eq!(outcome.articles.len(), 48);
    }

    #[tokio::test]
    async fn stops_issuing_clauses_once_limit_is_hit() {
        let search = ScriptedSearch::new(vec![
            Ok((0..50).map(article).collect()),
            Ok(vec![article(100)]),
            Ok(vec![article(101)]),
        ]);
        let outcome = Aggregator::new(&search, &test_config())
            .run(&clauses(3))
            .await
            .unwrap();

        assert_eq!(outcome.articles.len(), 48);
        assert_eq!(search.calls(), 1);
    }

    #[tokio::test]
    async fn all_clauses_failing_yields_empty_outcome() {
        let search = ScriptedSearch::new(vec![
            Err(AppError::search("clause 0", "boom")),
            Err(AppError::search("clause 1", "boom")),
        ]);
        let outcome = Aggregator::new(&search, &test_config())
            .run(&clauses(2))
            .await
            .unwrap();

        assert!(outcome.articles.is_empty());
        assert_eq!(outcome.clause_total, 2);
        assert_eq!(outcome.clause_failures, 2);
    }

    #[tokio::test]
    async fn failing_clause_does_not_abort_the_cycle() {
        let search = ScriptedSearch::new(vec![
            Err(AppError::search("clause 0", "boom")),
            Ok(vec![article(1)]),
        ]);
        let outcome = Aggregator::new(&search, &test_config())
            .run(&clauses(2))
            .await
            .unwrap();

        assert_eq!(outcome.articles.len(), 1);
        assert_eq!(outcome.clause_failures, 1);
        assert_eq!(search.calls(), 2);
    }
}
