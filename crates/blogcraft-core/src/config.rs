//! Session configuration.
//!
//! All fields have defaults, so a config file only needs the keys it changes:
//!
//! ```json
//! {
//!   "words_per_minute": 250,
//!   "slug_policy": "follow_until_edited",
//!   "preview": { "escape_html": true }
//! }
//! ```

use crate::error::ConfigError;
use crate::metrics::DEFAULT_WORDS_PER_MINUTE;
use blogcraft_preview::PreviewOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the slug relates to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugPolicy {
    /// Every title change re-derives the slug, overwriting manual edits.
    #[default]
    AlwaysFollowTitle,
    /// The slug follows the title until it is edited by hand; after that it stays put until
    /// [`ComposerSession::reset_slug`](crate::ComposerSession::reset_slug).
    FollowUntilEdited,
}

/// Configuration of a [`ComposerSession`](crate::ComposerSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Reading speed for the reading-time estimate.
    pub words_per_minute: u32,
    /// Slug ownership policy.
    pub slug_policy: SlugPolicy,
    /// Preview renderer options.
    pub preview: PreviewOptions,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            slug_policy: SlugPolicy::default(),
            preview: PreviewOptions::default(),
        }
    }
}

impl ComposerConfig {
    /// Parse a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Set the slug policy.
    pub fn with_slug_policy(mut self, slug_policy: SlugPolicy) -> Self {
        self.slug_policy = slug_policy;
        self
    }

    /// Set the preview options.
    pub fn with_preview(mut self, preview: PreviewOptions) -> Self {
        self.preview = preview;
        self
    }
}
