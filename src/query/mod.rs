//! Query composition layer.
//!
//! Maps raw user input plus the language/domestic toggles to the ordered
//! clause list executed by the aggregator:
//! - Language/region filter (`filter`)
//! - Synonym expansion over a trigger table (`synonyms`)
//! - Final clause assembly with the maritime bundle (`composer`)

mod composer;
mod filter;
mod synonyms;

pub use composer::{MARITIME_BUNDLE, compose};
pub use filter::{LanguageMode, filter_clause};
pub use synonyms::expand;
