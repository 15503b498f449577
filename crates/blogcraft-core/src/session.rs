//! Editing Session
//!
//! [`ComposerSession`] is the single owner of the document being composed.
//!
//! # Overview
//!
//! The session follows a "replace, then re-derive" model:
//!
//! 1. Every setter or markup operation builds a new [`Document`] value and swaps it in
//! 2. If the new value differs from the old one, the version number is incremented and all
//!    subscribers are notified with a [`DocumentChange`]
//! 3. Derived values ([`metrics`](ComposerSession::metrics),
//!    [`preview`](ComposerSession::preview)) are recomputed from the current document on every
//!    call; nothing derived is cached, so nothing can go stale
//!
//! The slug is the one derived value that is also stored, because the user can edit it. How a
//! title change treats a hand-edited slug is governed by [`SlugPolicy`].
//!
//! # Example
//!
//! ```rust
//! use blogcraft_core::{ComposerSession, Format, Selection};
//!
//! let mut session = ComposerSession::new();
//! session.set_title("Hello, World!");
//! session.set_body("hello world");
//! session.apply_format(Format::Bold, Selection::new(6, 11));
//!
//! assert_eq!(session.document().slug, "hello-world");
//! assert_eq!(session.document().body, "hello **world**");
//! assert_eq!(session.preview().as_str(), "hello <strong>world</strong>");
//! assert_eq!(session.version(), 3);
//! ```

use crate::config::{ComposerConfig, SlugPolicy};
use crate::document::Document;
use crate::error::{ConfigError, StyleError};
use crate::markup::{self, Format};
use crate::media::{FileUpload, MediaAsset, MediaLibrary};
use crate::metrics::{Metrics, compute_metrics_with};
use crate::record::{ArticleRecord, RecordStatus};
use crate::selection::Selection;
use crate::slug::derive_slug;
use crate::style::{Alignment, FontFamily, FontSize, HexColor, StyleSpec};
use crate::tags::parse_tags;
use crate::text::char_len;
use blogcraft_preview::{PreviewHtml, PreviewRenderer};
use chrono::{DateTime, Utc};

/// Which part of the document an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Title (and possibly the derived slug).
    Title,
    /// Subtitle.
    Subtitle,
    /// Body buffer.
    Body,
    /// SEO title or description.
    Meta,
    /// Tags.
    Tags,
    /// Manual slug edit or reset.
    Slug,
    /// Styling.
    Styling,
    /// Thumbnail.
    Thumbnail,
    /// Media upload (library and body).
    Media,
}

/// Change record passed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentChange {
    /// What changed.
    pub kind: ChangeKind,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
}

/// Change callback type.
pub type DocumentChangeCallback = Box<dyn FnMut(&DocumentChange) + Send>;

/// Everything the preview pane shows, derived from one document version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Current slug.
    pub slug: String,
    /// Body metrics.
    pub metrics: Metrics,
    /// Rendered body.
    pub preview: PreviewHtml,
}

/// A single-user editing session.
pub struct ComposerSession {
    config: ComposerConfig,
    renderer: PreviewRenderer,
    document: Document,
    tags_input: String,
    media: MediaLibrary,
    version: u64,
    is_modified: bool,
    slug_edited: bool,
    callbacks: Vec<DocumentChangeCallback>,
}

impl std::fmt::Debug for ComposerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposerSession")
            .field("config", &self.config)
            .field("document", &self.document)
            .field("media", &self.media.len())
            .field("version", &self.version)
            .field("is_modified", &self.is_modified)
            .field("slug_edited", &self.slug_edited)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Default for ComposerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerSession {
    /// A session with an empty document and the default configuration.
    pub fn new() -> Self {
        Self::from_parts(ComposerConfig::default(), PreviewRenderer::default())
    }

    /// A session with an empty document and the given configuration.
    pub fn with_config(config: ComposerConfig) -> Result<Self, ConfigError> {
        let renderer = PreviewRenderer::new(config.preview.clone())?;
        Ok(Self::from_parts(config, renderer))
    }

    fn from_parts(config: ComposerConfig, renderer: PreviewRenderer) -> Self {
        let tags_input = String::new();
        let document = Document::new().with(|doc| doc.tags = parse_tags(&tags_input));
        Self {
            config,
            renderer,
            document,
            tags_input,
            media: MediaLibrary::new(),
            version: 0,
            is_modified: false,
            slug_edited: false,
            callbacks: Vec::new(),
        }
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The session configuration.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Uploaded media, in upload order.
    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }

    /// The raw tag input, as typed.
    pub fn tags_input(&self) -> &str {
        &self.tags_input
    }

    /// Current version; incremented on every effective change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` if the document changed since creation or the last
    /// [`mark_saved`](Self::mark_saved).
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Returns `true` if the slug was edited by hand and is currently detached from the title.
    pub fn is_slug_detached(&self) -> bool {
        self.slug_edited && self.config.slug_policy == SlugPolicy::FollowUntilEdited
    }

    /// Subscribe to document changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&DocumentChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if the document changed since `version`.
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Mark the document as saved.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    // Text fields

    /// Set the title and, depending on the [`SlugPolicy`], re-derive the slug.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        let follow = !self.is_slug_detached();
        let next = self.document.with(|doc| {
            if follow {
                doc.slug = derive_slug(&title);
            }
            doc.title = title;
        });
        self.replace_document(ChangeKind::Title, next)
    }

    /// Set the subtitle.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> bool {
        let subtitle = subtitle.into();
        let next = self.document.with(|doc| doc.subtitle = subtitle);
        self.replace_document(ChangeKind::Subtitle, next)
    }

    /// Replace the whole body.
    pub fn set_body(&mut self, body: impl Into<String>) -> bool {
        let body = body.into();
        let next = self.document.with(|doc| doc.body = body);
        self.replace_document(ChangeKind::Body, next)
    }

    /// Set the SEO title.
    pub fn set_meta_title(&mut self, meta_title: impl Into<String>) -> bool {
        let meta_title = meta_title.into();
        let next = self.document.with(|doc| doc.meta_title = meta_title);
        self.replace_document(ChangeKind::Meta, next)
    }

    /// Set the SEO description.
    pub fn set_meta_description(&mut self, meta_description: impl Into<String>) -> bool {
        let meta_description = meta_description.into();
        let next = self
            .document
            .with(|doc| doc.meta_description = meta_description);
        self.replace_document(ChangeKind::Meta, next)
    }

    /// Set the comma-separated tag input; the document's tags are re-parsed from it.
    pub fn set_tags_input(&mut self, input: impl Into<String>) -> bool {
        self.tags_input = input.into();
        let tags = parse_tags(&self.tags_input);
        let next = self.document.with(|doc| doc.tags = tags);
        self.replace_document(ChangeKind::Tags, next)
    }

    /// Edit the slug by hand.
    ///
    /// With [`SlugPolicy::AlwaysFollowTitle`] the edit lasts until the next title change.
    pub fn set_slug(&mut self, slug: impl Into<String>) -> bool {
        let slug = slug.into();
        self.slug_edited = true;
        let next = self.document.with(|doc| doc.slug = slug);
        self.replace_document(ChangeKind::Slug, next)
    }

    /// Re-attach the slug to the title and re-derive it.
    pub fn reset_slug(&mut self) -> bool {
        self.slug_edited = false;
        let slug = derive_slug(&self.document.title);
        let next = self.document.with(|doc| doc.slug = slug);
        self.replace_document(ChangeKind::Slug, next)
    }

    // Styling

    /// Replace the styling wholesale.
    pub fn set_styling(&mut self, styling: StyleSpec) -> bool {
        let next = self.document.with(|doc| doc.styling = styling);
        self.replace_document(ChangeKind::Styling, next)
    }

    /// Set the font size in pixels.
    pub fn set_font_size(&mut self, px: u32) -> Result<bool, StyleError> {
        let size = FontSize::new(px)?;
        Ok(self.update_styling(|styling| styling.font_size = size))
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, family: FontFamily) -> bool {
        self.update_styling(|styling| styling.font_family = family)
    }

    /// Set the text color from `#rrggbb`.
    pub fn set_text_color(&mut self, color: &str) -> Result<bool, StyleError> {
        let color = HexColor::parse(color)?;
        Ok(self.update_styling(|styling| styling.text_color = color))
    }

    /// Set the background color from `#rrggbb`.
    pub fn set_background_color(&mut self, color: &str) -> Result<bool, StyleError> {
        let color = HexColor::parse(color)?;
        Ok(self.update_styling(|styling| styling.background_color = color))
    }

    /// Set the alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) -> bool {
        self.update_styling(|styling| styling.alignment = alignment)
    }

    fn update_styling(&mut self, f: impl FnOnce(&mut StyleSpec)) -> bool {
        let next = self.document.with(|doc| f(&mut doc.styling));
        self.replace_document(ChangeKind::Styling, next)
    }

    // Markup

    /// Apply a toolbar format to `selection`, returning the caret offset after the markup.
    pub fn apply_format(&mut self, format: Format, selection: Selection) -> usize {
        let edit = format.apply_with_caret(&self.document.body, selection);
        self.replace_body(edit.text);
        edit.caret
    }

    /// Insert literal text at `caret`.
    pub fn insert_text(&mut self, caret: usize, literal: &str) -> bool {
        let body = markup::insert_at_cursor(&self.document.body, caret, literal);
        self.replace_body(body)
    }

    /// Insert an emoji at `caret`.
    pub fn insert_emoji(&mut self, caret: usize, emoji: &str) -> bool {
        let body = markup::insert_emoji(&self.document.body, caret, emoji);
        self.replace_body(body)
    }

    fn replace_body(&mut self, body: String) -> bool {
        let next = self.document.with(|doc| doc.body = body);
        self.replace_document(ChangeKind::Body, next)
    }

    // Media

    /// Add an uploaded image to the library and append a reference to the end of the body.
    ///
    /// Non-image uploads are ignored and `None` is returned; the session is left untouched.
    pub fn attach_image(&mut self, upload: &FileUpload) -> Option<&MediaAsset> {
        let caret = char_len(&self.document.body);
        self.insert_image_at(upload, caret)
    }

    /// Add an uploaded image to the library and insert a reference at `caret`.
    pub fn insert_image_at(&mut self, upload: &FileUpload, caret: usize) -> Option<&MediaAsset> {
        let asset = MediaAsset::from_upload(upload)?;
        let body =
            markup::insert_image_reference(&self.document.body, caret, &asset.name, &asset.uri);
        self.media.push(asset);

        let next = self.document.with(|doc| doc.body = body);
        self.replace_document(ChangeKind::Media, next);
        self.media.iter().last()
    }

    /// Use an uploaded image as the thumbnail. Non-image uploads are ignored.
    pub fn set_thumbnail(&mut self, upload: &FileUpload) -> bool {
        let Some(asset) = MediaAsset::from_upload(upload) else {
            return false;
        };
        let next = self.document.with(|doc| doc.thumbnail = Some(asset.uri));
        self.replace_document(ChangeKind::Thumbnail, next)
    }

    /// Remove the thumbnail.
    pub fn clear_thumbnail(&mut self) -> bool {
        let next = self.document.with(|doc| doc.thumbnail = None);
        self.replace_document(ChangeKind::Thumbnail, next)
    }

    /// Append a video reference to the end of the body.
    ///
    /// `None` (a cancelled prompt) and empty input are no-ops.
    pub fn embed_video(&mut self, url: Option<&str>) -> bool {
        let Some(url) = url.filter(|url| !url.is_empty()) else {
            return false;
        };
        let caret = char_len(&self.document.body);
        let body = markup::insert_video_reference(&self.document.body, caret, url);
        self.replace_body(body)
    }

    // Derived values

    /// Metrics of the current body.
    pub fn metrics(&self) -> Metrics {
        compute_metrics_with(&self.document.body, self.config.words_per_minute)
    }

    /// Rendered preview of the current body.
    pub fn preview(&self) -> PreviewHtml {
        self.renderer.render(&self.document.body)
    }

    /// Slug, metrics and preview of the current version.
    pub fn derived(&self) -> DerivedView {
        DerivedView {
            slug: self.document.slug.clone(),
            metrics: self.metrics(),
            preview: self.preview(),
        }
    }

    // Records

    /// Build a draft record.
    pub fn save_draft(&self, now: DateTime<Utc>) -> ArticleRecord {
        self.record(RecordStatus::Draft, now)
    }

    /// Build a published record.
    pub fn publish(&self, now: DateTime<Utc>) -> ArticleRecord {
        self.record(RecordStatus::Published, now)
    }

    fn record(&self, status: RecordStatus, now: DateTime<Utc>) -> ArticleRecord {
        ArticleRecord::with_reading_speed(
            &self.document,
            status,
            now,
            self.config.words_per_minute,
        )
    }

    fn replace_document(&mut self, kind: ChangeKind, next: Document) -> bool {
        if next == self.document {
            return false;
        }

        self.document = next;
        self.is_modified = true;

        let old_version = self.version;
        self.version += 1;
        tracing::debug!(?kind, version = self.version, "document updated");

        let change = DocumentChange {
            kind,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
        true
    }
}
