//! Language/region filter clause.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which language/region filter is applied to composed clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    /// Korean-language sources (optionally broadened to Korean outlets)
    #[default]
    Ko,
    /// English-language sources only
    En,
    /// No language restriction
    All,
}

impl FromStr for LanguageMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Self::Ko),
            "en" => Ok(Self::En),
            "all" => Ok(Self::All),
            other => Err(AppError::validation(format!(
                "unknown language mode '{other}' (expected ko, en or all)"
            ))),
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::All => "all",
        };
        f.write_str(s)
    }
}

/// Build the filter clause for a language mode.
///
/// `include_domestic` only matters for Korean mode: it broadens the match to
/// sources whose country code is Korea, catching domestic outlets that
/// publish in other languages.
pub fn filter_clause(mode: LanguageMode, include_domestic: bool) -> Option<&'static str> {
    match mode {
        LanguageMode::Ko if include_domestic => Some("(sourcelang:Korean OR sourcecountry:KR)"),
        LanguageMode::Ko => Some("sourcelang:Korean"),
        LanguageMode::En => Some("sourcelang:English"),
        LanguageMode::All => None,
    }
}
