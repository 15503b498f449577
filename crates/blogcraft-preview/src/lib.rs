#![warn(missing_docs)]
//! `blogcraft-preview` - the live-preview renderer for BlogCraft post bodies.
//!
//! The post format is a deliberately small markdown-like dialect. It is *not* parsed with a
//! grammar: the renderer applies a fixed, ordered list of regex substitutions, each one scanning
//! the output of the one before it.
//!
//! | # | Pass        | Input                | Output                          |
//! |---|-------------|----------------------|---------------------------------|
//! | 1 | bold        | `**X**`              | `<strong>X</strong>`            |
//! | 2 | italic      | `*X*`                | `<em>X</em>`                    |
//! | 3 | heading 1   | `# X` (line)         | `<h1>X</h1>`                    |
//! | 4 | heading 2   | `## X` (line)        | `<h2>X</h2>`                    |
//! | 5 | list item   | `- X` (line)         | `<li>X</li>`                    |
//! | 6 | blockquote  | `> X` (line)         | `<blockquote>X</blockquote>`    |
//! | 7 | link        | `[text](dest)`       | `<a href="dest">text</a>`       |
//! | 8 | image       | `![alt](src)`        | `<img src="src" alt="alt" />`   |
//! | 9 | line break  | `\n`                 | `<br />`                        |
//!
//! Markup that does not match (an unclosed `**`, a lone `[`) is left in place as literal text.
//!
//! ```rust
//! use blogcraft_preview::render_preview;
//!
//! let html = render_preview("**bold** and *italic*");
//! assert_eq!(html.as_str(), "<strong>bold</strong> and <em>italic</em>");
//! ```

pub mod options;
pub mod pass;

pub use options::{PreviewClasses, PreviewOptions};
pub use pass::{PassKind, RenderPass};

use std::borrow::Cow;
use std::sync::LazyLock;

/// Errors raised while building a [`PreviewRenderer`].
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A pass pattern failed to compile.
    #[error("failed to compile the {pass} pass: {source}")]
    Pattern {
        /// The pass whose pattern failed.
        pass: PassKind,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Rendered preview markup.
///
/// The contents are trusted HTML meant to be inserted as-is. Unless the renderer was built with
/// [`PreviewOptions::escape_html`], user text inside it was *not* escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreviewHtml(String);

impl PreviewHtml {
    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for PreviewHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PreviewHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A preview renderer with its passes compiled once.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    options: PreviewOptions,
    passes: Vec<RenderPass>,
}

impl PreviewRenderer {
    /// Compile all passes for the given options.
    pub fn new(options: PreviewOptions) -> Result<Self, PreviewError> {
        let passes = PassKind::ORDER
            .iter()
            .map(|&pass| {
                RenderPass::new(pass, options.escape_html)
                    .map_err(|source| PreviewError::Pattern { pass, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { options, passes })
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// The compiled passes, in application order.
    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    /// Render `body` into preview markup.
    pub fn render(&self, body: &str) -> PreviewHtml {
        let mut text: Cow<'_, str> = if self.options.escape_html {
            Cow::Owned(escape(body))
        } else {
            Cow::Borrowed(body)
        };

        for pass in &self.passes {
            let next = pass.apply(&text, &self.options.classes);
            if let Cow::Owned(rewritten) = next {
                tracing::trace!(
                    pass = pass.kind().name(),
                    before = text.len(),
                    after = rewritten.len(),
                    "preview pass rewrote text"
                );
                text = Cow::Owned(rewritten);
            }
        }

        PreviewHtml(text.into_owned())
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        DEFAULT_RENDERER.clone()
    }
}

static DEFAULT_RENDERER: LazyLock<PreviewRenderer> = LazyLock::new(|| {
    PreviewRenderer::new(PreviewOptions::default()).expect("built-in preview patterns compile")
});

/// Render `body` with the default options (no escaping, no classes).
pub fn render_preview(body: &str) -> PreviewHtml {
    DEFAULT_RENDERER.render(body)
}

fn escape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    // Writing into a `String` cannot fail.
    let _ = pulldown_cmark_escape::escape_html(&mut out, body);
    out
}
