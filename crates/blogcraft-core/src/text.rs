//! Character-offset helpers shared by the markup engine and the session.
//!
//! Every public offset in this crate counts Unicode scalar values (`char`s), not bytes, so that
//! multi-byte text (emoji, CJK) can be addressed with the same numbers a UI reports.

/// Byte position of the `char_offset`-th character; past the end means `text.len()`.
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Byte range of the characters in `[start, end)`, normalized and clamped.
fn byte_range(text: &str, start: usize, end: usize) -> std::ops::Range<usize> {
    let (start, end) = (start.min(end), start.max(end));
    let start_byte = byte_offset(text, start);
    let end_byte = start_byte + byte_offset(&text[start_byte..], end - start);
    start_byte..end_byte
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Replace the characters in `[start, end)` with `insertion`, returning the new string.
///
/// Offsets past the end clamp to the end; a reversed range is swapped first.
pub fn splice(text: &str, start: usize, end: usize, insertion: &str) -> String {
    let range = byte_range(text, start, end);
    let mut out = String::with_capacity(text.len() - range.len() + insertion.len());
    out.push_str(&text[..range.start]);
    out.push_str(insertion);
    out.push_str(&text[range.end..]);
    out
}

/// The characters in `[start, end)`, clamped like [`splice`].
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    &text[byte_range(text, start, end)]
}

/// Number of UTF-16 code units in `text`, the length a browser reports.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Convert a UTF-16 offset (as reported by a browser text field) to a character offset.
///
/// An offset inside a surrogate pair rounds up to the next character; offsets past the end clamp
/// to the end.
pub fn char_offset_from_utf16(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.chars().enumerate() {
        if units >= utf16_offset {
            return index;
        }
        units += ch.len_utf16();
    }
    char_len(text)
}

/// Convert a character offset to a UTF-16 offset, clamped to the end.
pub fn utf16_offset_from_char(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
