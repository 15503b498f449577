//! The document being composed.

use crate::style::StyleSpec;
use serde::{Deserialize, Serialize};

/// A blog post under composition.
///
/// Treated as an immutable value per version: the session builds a new `Document` for every
/// edit instead of mutating one in place, so derived values can never go stale against it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Post title.
    pub title: String,
    /// Optional subtitle (empty when unset).
    pub subtitle: String,
    /// The markdown-like body buffer.
    pub body: String,
    /// SEO title.
    pub meta_title: String,
    /// SEO description.
    pub meta_description: String,
    /// Parsed tags, in input order.
    pub tags: Vec<String>,
    /// URL slug.
    pub slug: String,
    /// Thumbnail image as a data URI.
    pub thumbnail: Option<String>,
    /// Styling of the rendered post.
    pub styling: StyleSpec,
}

impl Document {
    /// An empty document with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy with `f` applied.
    pub fn with(&self, f: impl FnOnce(&mut Document)) -> Self {
        let mut next = self.clone();
        f(&mut next);
        next
    }
}
