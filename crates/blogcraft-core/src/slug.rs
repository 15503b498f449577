//! URL slug derivation.

/// Derive a URL slug from a post title.
///
/// Lowercases the title, collapses every run of characters outside `[a-z0-9]` into a single
/// `-`, then drops a leading and a trailing `-`.
///
/// ```rust
/// use blogcraft_core::derive_slug;
///
/// assert_eq!(derive_slug("Hello, World!"), "hello-world");
/// assert_eq!(derive_slug("   "), "");
/// ```
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }

    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

/// Returns `true` if `text` is already in slug form (deriving it again changes nothing).
pub fn is_slug(text: &str) -> bool {
    derive_slug(text) == text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(derive_slug("Rust -- the  Book"), "rust-the-book");
        assert_eq!(derive_slug("--a--"), "a");
        assert_eq!(derive_slug("-"), "");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(derive_slug("Café Olé"), "caf-ol");
        assert_eq!(derive_slug("日本 2024"), "2024");
    }

    #[test]
    fn test_idempotent() {
        for title in ["Hello, World!", "  x  y ", "A/B/C", "", "already-a-slug"] {
            let once = derive_slug(title);
            assert_eq!(derive_slug(&once), once);
            assert!(is_slug(&once));
        }
    }
}
