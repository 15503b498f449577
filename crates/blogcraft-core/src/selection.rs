//! Selections over the body buffer.

use crate::text::{char_len, char_offset_from_utf16, utf16_offset_from_char};

/// A selected range of the body, in character offsets.
///
/// A well-formed selection satisfies `start <= end <= char_len(body)`. Operations accept
/// anything and repair it with [`Selection::clamp_to`] first, so a stale selection from the UI
/// never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    /// Start character offset (inclusive).
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
}

impl Selection {
    /// Create a selection.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Build a selection from UTF-16 offsets into `text`, as a browser reports
    /// `selectionStart`/`selectionEnd`.
    pub fn from_utf16(text: &str, start: usize, end: usize) -> Self {
        Self {
            start: char_offset_from_utf16(text, start),
            end: char_offset_from_utf16(text, end),
        }
    }

    /// This selection as UTF-16 offsets into `text`.
    pub fn to_utf16(self, text: &str) -> (usize, usize) {
        (
            utf16_offset_from_char(text, self.start),
            utf16_offset_from_char(text, self.end),
        )
    }

    /// A collapsed selection (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if nothing is selected.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the selection spans no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize so that `start <= end`.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Normalize, then clamp both ends to a text of `len` characters.
    pub fn clamp_to(self, len: usize) -> Self {
        let normalized = self.normalize();
        Self {
            start: normalized.start.min(len),
            end: normalized.end.min(len),
        }
    }

    /// Clamp against the given body.
    pub fn clamp_to_text(self, text: &str) -> Self {
        self.clamp_to(char_len(text))
    }
}

impl From<std::ops::Range<usize>> for Selection {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Selection> for std::ops::Range<usize> {
    fn from(s: Selection) -> Self {
        s.start..s.end
    }
}
