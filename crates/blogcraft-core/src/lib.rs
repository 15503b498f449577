#![warn(missing_docs)]
//! BlogCraft Core - Headless Blog Post Composition Engine
//!
//! # Overview
//!
//! `blogcraft-core` is the text-editing and rendering engine behind the BlogCraft post composer.
//! It holds no UI: the host owns the form fields, pickers and file dialogs, and calls into this
//! crate with plain strings and character offsets.
//!
//! # Core Features
//!
//! - **Markup Engine**: selection-scoped bold/italic/heading/list/quote/link markup, emoji,
//!   image and video references, each a single splice over the body
//! - **Live Preview**: ordered-pass rendering into trusted HTML (see `blogcraft-preview`)
//! - **Metrics**: word count, character count, reading time
//! - **Slugs**: URL slug derivation from the title
//! - **Session**: a single-owner document with versioning, change notifications and
//!   full re-derivation on every edit
//! - **Records**: draft/published snapshots ready for serialization
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ComposerSession (versioning, callbacks)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  ArticleRecord / Tags / Media               │  ← Boundaries
//! ├─────────────────────────────────────────────┤
//! │  Markup Engine   │  Preview Renderer        │  ← Text transforms
//! ├─────────────────────────────────────────────┤
//! │  Slug Deriver    │  Metrics Calculator      │  ← Pure derivations
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use blogcraft_core::{BlockPrefix, Selection, compute_metrics, derive_slug, prefix_selection};
//! use blogcraft_core::render_preview;
//!
//! let body = prefix_selection("", Selection::caret(0), BlockPrefix::H1);
//! assert_eq!(body, "# ");
//!
//! assert_eq!(derive_slug("Hello, World!"), "hello-world");
//! assert_eq!(compute_metrics("a b c").word_count, 3);
//! assert_eq!(render_preview("# Title").as_str(), "<h1>Title</h1>");
//! ```
//!
//! # Module Description
//!
//! - [`slug`] - slug derivation
//! - [`metrics`] - word/char counts and reading time
//! - [`markup`] - selection-based markup insertion
//! - [`style`] / [`document`] - the document model
//! - [`media`] - uploads and the media library
//! - [`tags`] - tag input parsing
//! - [`record`] - save/publish records
//! - [`config`] - session configuration
//! - [`session`] - the editing session
//!
//! # Offsets
//!
//! All offsets are character offsets (Unicode scalar values). Out-of-range offsets clamp to the
//! end of the body and reversed selections are normalized, so no text operation can fail.

pub mod config;
pub mod document;
mod error;
pub mod markup;
pub mod media;
pub mod metrics;
pub mod record;
mod selection;
pub mod session;
pub mod slug;
pub mod style;
pub mod tags;
pub mod text;

pub use config::{ComposerConfig, SlugPolicy};
pub use document::Document;
pub use error::{ConfigError, StyleError};
pub use markup::{
    BlockPrefix, EMOJI_PALETTE, Emphasis, Format, LINK_PLACEHOLDER, MarkupEdit, apply_format,
    insert_at_cursor, insert_emoji, insert_image_reference, insert_video_reference,
    prefix_selection, wrap_as_link, wrap_selection,
};
pub use media::{FileUpload, MediaAsset, MediaKind, MediaLibrary};
pub use metrics::{DEFAULT_WORDS_PER_MINUTE, Metrics, compute_metrics, compute_metrics_with};
pub use record::{ArticleRecord, RecordStatus};
pub use selection::Selection;
pub use session::{ChangeKind, ComposerSession, DerivedView, DocumentChange};
pub use slug::derive_slug;
pub use style::{Alignment, FontFamily, FontSize, HexColor, StyleSpec};
pub use tags::parse_tags;

pub use blogcraft_preview::{PreviewHtml, PreviewOptions, PreviewRenderer, render_preview};
