//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// Options that control how a preview is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// If `true`, HTML-escape the body before any substitution pass runs.
    ///
    /// Off by default: the body is treated as trusted markup, so raw HTML typed into the body
    /// reaches the preview unchanged. Turn this on for anything other than a local,
    /// single-user tool.
    pub escape_html: bool,
    /// `class` attributes attached to the generated elements.
    pub classes: PreviewClasses,
}

impl PreviewOptions {
    /// Enable or disable the escaping pass.
    pub fn with_escape_html(mut self, escape_html: bool) -> Self {
        self.escape_html = escape_html;
        self
    }

    /// Replace the element classes.
    pub fn with_classes(mut self, classes: PreviewClasses) -> Self {
        self.classes = classes;
        self
    }
}

/// Optional `class` attribute values for the block and inline elements the renderer emits.
///
/// `None` (or an empty string) omits the attribute entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewClasses {
    /// `<h1>`
    pub heading1: Option<String>,
    /// `<h2>`
    pub heading2: Option<String>,
    /// `<li>`
    pub list_item: Option<String>,
    /// `<blockquote>`
    pub blockquote: Option<String>,
    /// `<a>`
    pub link: Option<String>,
    /// `<img>`
    pub image: Option<String>,
}

impl PreviewClasses {
    /// The Tailwind utility classes the BlogCraft web UI styles its preview with.
    pub fn tailwind() -> Self {
        Self {
            heading1: Some("text-4xl font-bold mt-8 mb-4".to_string()),
            heading2: Some("text-3xl font-bold mt-6 mb-3".to_string()),
            list_item: Some("ml-6".to_string()),
            blockquote: Some("border-l-4 border-blue-500 pl-4 italic my-4".to_string()),
            link: Some("text-blue-600 underline".to_string()),
            image: Some("max-w-full rounded-lg my-4".to_string()),
        }
    }
}
