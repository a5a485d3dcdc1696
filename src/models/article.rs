//! Article data structure.

use serde::{Deserialize, Serialize};

/// Placeholder title used when the provider omits one.
pub const UNTITLED: &str = "(제목 없음)";

/// A news article returned by the search provider.
///
/// The `url` is the natural key: two articles with the same URL are the same
/// article. `source` and `date` are optional; an empty string means the
/// provider did not supply the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Article headline
    pub title: String,

    /// Full URL to the article
    pub url: String,

    /// Publisher name or source country code
    #[serde(default)]
    pub source: String,

    /// Provider-native publication date, kept verbatim
    #[serde(default)]
    pub date: String,
}

impl Article {
    /// Format the article for display using a template.
    ///
    /// Supported placeholders:
    /// - `{title}`, `{url}`, `{source}`, `{date}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{url}", &self.url)
            .replace("{source}", &self.source)
            .replace("{date}", &self.date)
    }
}
