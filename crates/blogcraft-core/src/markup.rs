//! Markup Engine
//!
//! Selection-scoped markup insertion over the plain-text body.
//!
//! # Overview
//!
//! Every operation is a pure function: it takes the current body and a [`Selection`] (or a
//! caret offset) and returns a new body. Each one is a single splice,
//! `body[..start] + insertion + body[end..]`, with offsets counted in characters.
//!
//! - **Emphasis**: [`wrap_selection`] wraps the selected text in `**` or `*`
//! - **Block prefixes**: [`prefix_selection`] puts `# `, `## `, `\n- ` or `\n> ` before it
//! - **Links**: [`wrap_as_link`] produces `[text](url)` with a literal `url` placeholder
//! - **Insertion**: [`insert_at_cursor`], [`insert_image_reference`], [`insert_video_reference`]
//!
//! A collapsed selection is a valid input and yields an empty span (`****`, `# `, `[](url)`).
//! URIs are never validated; whatever the caller passes lands in the body verbatim.
//!
//! # Example
//!
//! ```rust
//! use blogcraft_core::{Emphasis, Selection, wrap_selection};
//!
//! let body = wrap_selection("hello world", Selection::new(6, 11), Emphasis::Bold);
//! assert_eq!(body, "hello **world**");
//! ```

use crate::selection::Selection;
use crate::text::{char_len, slice_chars, splice};

/// The destination written by [`wrap_as_link`]. The user is expected to overwrite it.
pub const LINK_PLACEHOLDER: &str = "url";

/// The emoji offered by the editor's emoji picker, in display order.
pub const EMOJI_PALETTE: [&str; 15] = [
    "😊", "😂", "❤️", "👍", "🎉", "🔥", "✨", "💡", "📝", "🚀", "💻", "🎨", "📸", "🌟", "⭐",
];

/// Inline emphasis markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
}

impl Emphasis {
    /// The marker placed on both sides of the text.
    pub fn marker(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
        }
    }
}

/// Line-level prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockPrefix {
    /// `# `
    H1,
    /// `## `
    H2,
    /// `\n- `
    List,
    /// `\n> `
    Quote,
}

impl BlockPrefix {
    /// The literal inserted before the selected text.
    pub fn prefix(self) -> &'static str {
        match self {
            BlockPrefix::H1 => "# ",
            BlockPrefix::H2 => "## ",
            BlockPrefix::List => "\n- ",
            BlockPrefix::Quote => "\n> ",
        }
    }
}

/// A toolbar formatting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Bold emphasis.
    Bold,
    /// Italic emphasis.
    Italic,
    /// Level-1 heading prefix.
    H1,
    /// Level-2 heading prefix.
    H2,
    /// List item prefix.
    List,
    /// Blockquote prefix.
    Quote,
    /// Link with a placeholder destination.
    Link,
}

impl Format {
    /// All formats, in toolbar order.
    pub const ALL: [Format; 7] = [
        Format::Bold,
        Format::Italic,
        Format::H1,
        Format::H2,
        Format::List,
        Format::Quote,
        Format::Link,
    ];

    /// The markup that replaces `selected`.
    pub fn markup(self, selected: &str) -> String {
        match self {
            Format::Bold => emphasis_markup(Emphasis::Bold, selected),
            Format::Italic => emphasis_markup(Emphasis::Italic, selected),
            Format::H1 => prefix_markup(BlockPrefix::H1, selected),
            Format::H2 => prefix_markup(BlockPrefix::H2, selected),
            Format::List => prefix_markup(BlockPrefix::List, selected),
            Format::Quote => prefix_markup(BlockPrefix::Quote, selected),
            Format::Link => format!("[{selected}]({LINK_PLACEHOLDER})"),
        }
    }

    /// Apply this format to the selection.
    pub fn apply(self, body: &str, selection: Selection) -> String {
        self.apply_with_caret(body, selection).text
    }

    /// Apply this format and report where the caret should land.
    pub fn apply_with_caret(self, body: &str, selection: Selection) -> MarkupEdit {
        replace_selection(body, selection, |selected| self.markup(selected))
    }
}

/// The result of an edit: the new body plus the caret offset just after the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupEdit {
    /// The new body.
    pub text: String,
    /// Character offset immediately after the inserted markup.
    pub caret: usize,
}

/// Apply a toolbar format to the selection.
pub fn apply_format(body: &str, selection: Selection, format: Format) -> String {
    format.apply(body, selection)
}

/// Wrap the selected text in bold or italic markers.
pub fn wrap_selection(body: &str, selection: Selection, emphasis: Emphasis) -> String {
    replace_selection(body, selection, |selected| emphasis_markup(emphasis, selected)).text
}

/// Put a heading, list or quote prefix directly before the selected text.
pub fn prefix_selection(body: &str, selection: Selection, prefix: BlockPrefix) -> String {
    replace_selection(body, selection, |selected| prefix_markup(prefix, selected)).text
}

/// Turn the selected text into a link pointing at [`LINK_PLACEHOLDER`].
pub fn wrap_as_link(body: &str, selection: Selection) -> String {
    Format::Link.apply(body, selection)
}

/// Insert `literal` at `caret` with no added whitespace.
pub fn insert_at_cursor(body: &str, caret: usize, literal: &str) -> String {
    splice(body, caret, caret, literal)
}

/// Insert an emoji at `caret`.
pub fn insert_emoji(body: &str, caret: usize, emoji: &str) -> String {
    insert_at_cursor(body, caret, emoji)
}

/// Insert an image reference, on its own line, at `caret`.
pub fn insert_image_reference(body: &str, caret: usize, alt_text: &str, uri: &str) -> String {
    insert_at_cursor(body, caret, &image_reference(alt_text, uri))
}

/// Insert a video reference, on its own line, at `caret`.
pub fn insert_video_reference(body: &str, caret: usize, uri: &str) -> String {
    insert_at_cursor(body, caret, &video_reference(uri))
}

/// `"\n![alt](uri)\n"`
pub fn image_reference(alt_text: &str, uri: &str) -> String {
    format!("\n![{alt_text}]({uri})\n")
}

/// `"\n[video](uri)\n"`
pub fn video_reference(uri: &str) -> String {
    format!("\n[video]({uri})\n")
}

fn emphasis_markup(emphasis: Emphasis, selected: &str) -> String {
    let marker = emphasis.marker();
    format!("{marker}{selected}{marker}")
}

fn prefix_markup(prefix: BlockPrefix, selected: &str) -> String {
    format!("{}{selected}", prefix.prefix())
}

fn replace_selection(
    body: &str,
    selection: Selection,
    build: impl FnOnce(&str) -> String,
) -> MarkupEdit {
    let selection = selection.clamp_to_text(body);
    let selected = slice_chars(body, selection.start, selection.end);
    let insertion = build(selected);
    let caret = selection.start + char_len(&insertion);

    MarkupEdit {
        text: splice(body, selection.start, selection.end, &insertion),
        caret,
    }
}
