// src/utils/mod.rs

//! Shared utilities.

pub mod http;

use unicode_segmentation::UnicodeSegmentation;

/// Truncate to at most `max` grapheme clusters, appending an ellipsis when
/// anything was cut. Byte- or char-based truncation would split Hangul
/// syllables composed of multiple code points.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    let mut graphemes = s.graphemes(true);
    let truncated: String = graphemes.by_ref().take(max).collect();
    if graphemes.next().is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}
