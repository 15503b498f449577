//! The individual substitution passes that make up a preview render.
//!
//! Each pass is a regex plus a [`PassKind`] that knows how to build the replacement markup from
//! the captures. Passes are applied one after another, each one scanning the output of the
//! previous pass, so the order in [`PassKind::ORDER`] is part of the format's semantics.

use crate::options::PreviewClasses;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// The kind of a substitution pass, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// `**X**` -> `<strong>X</strong>`
    Bold,
    /// `*X*` -> `<em>X</em>`
    Italic,
    /// `# X` at line start -> `<h1>X</h1>`
    Heading1,
    /// `## X` at line start -> `<h2>X</h2>`
    Heading2,
    /// `- X` at line start -> `<li>X</li>` (never wrapped in a list container)
    ListItem,
    /// `> X` at line start -> `<blockquote>X</blockquote>`
    Blockquote,
    /// `[text](dest)` -> `<a href="dest">text</a>`
    Link,
    /// `![alt](src)` -> `<img src="src" alt="alt" />`
    Image,
    /// Every remaining `\n` -> `<br />`
    LineBreak,
}

impl PassKind {
    /// All passes in the order they must run.
    pub const ORDER: [PassKind; 9] = [
        PassKind::Bold,
        PassKind::Italic,
        PassKind::Heading1,
        PassKind::Heading2,
        PassKind::ListItem,
        PassKind::Blockquote,
        PassKind::Link,
        PassKind::Image,
        PassKind::LineBreak,
    ];

    /// Short lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            PassKind::Bold => "bold",
            PassKind::Italic => "italic",
            PassKind::Heading1 => "heading1",
            PassKind::Heading2 => "heading2",
            PassKind::ListItem => "list-item",
            PassKind::Blockquote => "blockquote",
            PassKind::Link => "link",
            PassKind::Image => "image",
            PassKind::LineBreak => "line-break",
        }
    }

    /// The regex source for this pass.
    ///
    /// `escaped` is true when the body went through HTML escaping first; the blockquote marker
    /// `>` then reads `&gt;`. Every pattern runs in CRLF mode, so `.` never matches `\r` and `$`
    /// stops before a `\r\n`.
    pub fn pattern(self, escaped: bool) -> &'static str {
        match self {
            PassKind::Bold => r"(?R)\*\*(.+?)\*\*",
            PassKind::Italic => r"(?R)\*(.+?)\*",
            PassKind::Heading1 => r"(?mR)^# (.+)$",
            PassKind::Heading2 => r"(?mR)^## (.+)$",
            PassKind::ListItem => r"(?mR)^- (.+)$",
            PassKind::Blockquote if escaped => r"(?mR)^&gt; (.+)$",
            PassKind::Blockquote => r"(?mR)^> (.+)$",
            // The optional `!` lets the link pass see image markup and leave it alone.
            PassKind::Link => r"(?R)!?\[(.+?)\]\((.+?)\)",
            PassKind::Image => r"(?R)!\[(.+?)\]\((.+?)\)",
            PassKind::LineBreak => r"\n",
        }
    }
}

impl std::fmt::Display for PassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled substitution pass.
#[derive(Debug, Clone)]
pub struct RenderPass {
    kind: PassKind,
    regex: Regex,
}

impl RenderPass {
    /// Compile the pass of the given kind.
    pub fn new(kind: PassKind, escaped: bool) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            regex: Regex::new(kind.pattern(escaped))?,
        })
    }

    /// The kind of this pass.
    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Apply the pass to `text`. Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str, classes: &PreviewClasses) -> Cow<'t, str> {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| self.replacement(caps, classes))
    }

    fn replacement(&self, caps: &Captures<'_>, classes: &PreviewClasses) -> String {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        match self.kind {
            PassKind::Bold => format!("<strong>{}</strong>", group(1)),
            PassKind::Italic => format!("<em>{}</em>", group(1)),
            PassKind::Heading1 => element("h1", classes.heading1.as_deref(), group(1)),
            PassKind::Heading2 => element("h2", classes.heading2.as_deref(), group(1)),
            PassKind::ListItem => element("li", classes.list_item.as_deref(), group(1)),
            PassKind::Blockquote => {
                element("blockquote", classes.blockquote.as_deref(), group(1))
            }
            PassKind::Link => {
                let whole = group(0);
                if whole.starts_with('!') {
                    // Image markup; the image pass handles it.
                    return whole.to_string();
                }
                format!(
                    "<a href=\"{}\"{}>{}</a>",
                    group(2),
                    class_attr(classes.link.as_deref()),
                    group(1)
                )
            }
            PassKind::Image => format!(
                "<img src=\"{}\" alt=\"{}\"{} />",
                group(2),
                group(1),
                class_attr(classes.image.as_deref())
            ),
            PassKind::LineBreak => "<br />".to_string(),
        }
    }
}

fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(class) if !class.is_empty() => format!(" class=\"{class}\""),
        _ => String::new(),
    }
}

fn element(tag: &str, class: Option<&str>, inner: &str) -> String {
    format!("<{tag}{}>{inner}</{tag}>", class_attr(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: PassKind, text: &str) -> String {
        RenderPass::new(kind, false)
            .unwrap()
            .apply(text, &PreviewClasses::default())
            .into_owned()
    }

    #[test]
    fn test_bold_is_non_greedy_and_single_line() {
        assert_eq!(
            run(PassKind::Bold, "**a** b **c**"),
            "<strong>a</strong> b <strong>c</strong>"
        );
        assert_eq!(run(PassKind::Bold, "**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_link_pass_leaves_image_markup_alone() {
        assert_eq!(run(PassKind::Link, "![alt](x.png)"), "![alt](x.png)");
        assert_eq!(
            run(PassKind::Link, "[a](b)[c](d)"),
            "<a href=\"b\">a</a><a href=\"d\">c</a>"
        );
    }

    #[test]
    fn test_line_passes_only_match_at_line_start() {
        assert_eq!(run(PassKind::Heading1, "x # y"), "x # y");
        assert_eq!(run(PassKind::Heading1, "## y"), "## y");
        assert_eq!(run(PassKind::ListItem, "a\n- b"), "a\n<li>b</li>");
    }

    #[test]
    fn test_classes_are_emitted_when_configured() {
        let classes = PreviewClasses {
            heading1: Some("title".to_string()),
            ..PreviewClasses::default()
        };
        let pass = RenderPass::new(PassKind::Heading1, false).unwrap();
        assert_eq!(pass.apply("# Hi", &classes), "<h1 class=\"title\">Hi</h1>");
    }
}
