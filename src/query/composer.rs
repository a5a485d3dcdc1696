//! Search clause composition.
//!
//! Turns `(raw input, language mode, domestic toggle)` into the ordered list
//! of clauses the aggregator executes. With user input, two progressively
//! broader clauses are issued: the expanded input under the language filter,
//! then the expanded input under the maritime bundle as a topic safety net.
//! Without input, a single bundle clause keeps the default feed on-topic.

use crate::query::filter::{LanguageMode, filter_clause};
use crate::query::synonyms::expand;

/// Fixed disjunction of shipping/logistics keywords.
pub const MARITIME_BUNDLE: &str = "(shipping OR maritime OR \"sea transport\" OR seaborne OR port OR \"port authority\" OR container OR logistics OR freight OR terminal OR vessel)";

/// Compose the clause list for one search cycle, in execution order.
pub fn compose(raw: &str, mode: LanguageMode, include_domestic: bool) -> Vec<String> {
    let filter = filter_clause(mode, include_domestic);
    let mut clauses = Vec::new();

    match expand(raw) {
        Some(user_clause) => {
            clauses.push(match filter {
                Some(f) => format!("{user_clause} AND {f}"),
                None => user_clause.clone(),
            });
            clauses.push(format!("{user_clause} AND {MARITIME_BUNDLE}"));
        }
        None => {
            clauses.push(match filter {
                Some(f) => format!("{MARITIME_BUNDLE} AND {f}"),
                None => MARITIME_BUNDLE.to_string(),
            });
        }
    }

    clauses
}
