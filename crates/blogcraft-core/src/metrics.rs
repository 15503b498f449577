//! Document metrics: word count, character count, reading time.

use crate::text::utf16_len;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Reading speed used when none is configured, in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Metrics derived from a post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of characters (Unicode scalar values), markup and whitespace included.
    pub char_count: usize,
    /// Number of UTF-16 code units, the length a browser text field reports.
    pub utf16_count: usize,
    /// Number of user-perceived characters (extended grapheme clusters).
    pub grapheme_count: usize,
    /// Estimated reading time, rounded up to whole minutes.
    pub reading_time_minutes: usize,
}

/// Compute metrics at the default reading speed.
///
/// ```rust
/// use blogcraft_core::compute_metrics;
///
/// let m = compute_metrics("a b c");
/// assert_eq!((m.word_count, m.char_count, m.reading_time_minutes), (3, 5, 1));
/// ```
pub fn compute_metrics(body: &str) -> Metrics {
    compute_metrics_with(body, DEFAULT_WORDS_PER_MINUTE)
}

/// Compute metrics at `words_per_minute`; `0` means [`DEFAULT_WORDS_PER_MINUTE`].
pub fn compute_metrics_with(body: &str, words_per_minute: u32) -> Metrics {
    let word_count = body.split_whitespace().count();
    Metrics {
        word_count,
        char_count: body.chars().count(),
        utf16_count: utf16_len(body),
        grapheme_count: body.graphemes(true).count(),
        reading_time_minutes: reading_time_minutes(word_count, words_per_minute),
    }
}

/// `ceil(word_count / words_per_minute)`; zero words read in zero minutes.
pub fn reading_time_minutes(word_count: usize, words_per_minute: u32) -> usize {
    let wpm = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        wpm => wpm,
    };
    word_count.div_ceil(wpm as usize)
}
