//! The record handed to persistence on save or publish.
//!
//! Building the record is in scope; sending or storing it is up to the host.

use crate::document::Document;
use crate::metrics::{DEFAULT_WORDS_PER_MINUTE, compute_metrics_with};
use crate::style::StyleSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the record is a draft or a published article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Saved draft.
    Draft,
    /// Published article.
    Published,
}

/// A flat, serializable snapshot of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Post title.
    pub title: String,
    /// Subtitle.
    pub subtitle: String,
    /// Body buffer.
    pub body: String,
    /// SEO title.
    pub meta_title: String,
    /// SEO description.
    pub meta_description: String,
    /// Tags.
    pub tags: Vec<String>,
    /// URL slug.
    pub slug: String,
    /// Thumbnail data URI.
    pub thumbnail: Option<String>,
    /// Styling.
    pub styling: StyleSpec,
    /// Word count of the body.
    pub word_count: usize,
    /// Reading time in minutes.
    pub reading_time: usize,
    /// Draft or published.
    pub status: RecordStatus,
    /// When the record was built.
    pub timestamp: DateTime<Utc>,
}

impl ArticleRecord {
    /// Build a record of `document` at the default reading speed.
    pub fn new(document: &Document, status: RecordStatus, timestamp: DateTime<Utc>) -> Self {
        Self::with_reading_speed(document, status, timestamp, DEFAULT_WORDS_PER_MINUTE)
    }

    /// Build a record using a configured reading speed.
    pub fn with_reading_speed(
        document: &Document,
        status: RecordStatus,
        timestamp: DateTime<Utc>,
        words_per_minute: u32,
    ) -> Self {
        let metrics = compute_metrics_with(&document.body, words_per_minute);
        Self {
            title: document.title.clone(),
            subtitle: document.subtitle.clone(),
            body: document.body.clone(),
            meta_title: document.meta_title.clone(),
            meta_description: document.meta_description.clone(),
            tags: document.tags.clone(),
            slug: document.slug.clone(),
            thumbnail: document.thumbnail.clone(),
            styling: document.styling.clone(),
            word_count: metrics.word_count,
            reading_time: metrics.reading_time_minutes,
            status,
            timestamp,
        }
    }

    /// A draft record.
    pub fn draft(document: &Document, timestamp: DateTime<Utc>) -> Self {
        Self::new(document, RecordStatus::Draft, timestamp)
    }

    /// A published record.
    pub fn published(document: &Document, timestamp: DateTime<Utc>) -> Self {
        Self::new(document, RecordStatus::Published, timestamp)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
