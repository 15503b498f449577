//! Tag input parsing.

/// Split a comma-separated tag input into trimmed tags.
///
/// Empty segments are kept as empty strings, so the output always has one entry per comma plus
/// one.
///
/// ```rust
/// use blogcraft_core::parse_tags;
///
/// assert_eq!(parse_tags("a, b ,,c"), ["a", "b", "", "c"]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}
