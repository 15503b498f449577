//! Uploaded media.
//!
//! The host reads a user-selected file and hands the bytes over as a [`FileUpload`]. Only files
//! whose declared MIME type is an image type are accepted; anything else is dropped without an
//! error, and the caller sees `None`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A file selected by the user, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name as reported by the host.
    pub name: String,
    /// Declared MIME type (e.g. `image/png`).
    pub declared_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Create an upload.
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }

    /// Returns `true` if the declared type is an `image/*` type.
    pub fn is_image(&self) -> bool {
        self.declared_type.starts_with("image/")
    }

    /// Encode the contents as a base64 `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.declared_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Kind of a media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// An image.
    Image,
}

/// An uploaded asset, referenced from the body by its URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Asset kind.
    pub kind: MediaKind,
    /// `data:` URI of the contents.
    pub uri: String,
    /// Original file name.
    pub name: String,
}

impl MediaAsset {
    /// Build an image asset from an upload, or `None` if the upload is not an image.
    pub fn from_upload(upload: &FileUpload) -> Option<Self> {
        if !upload.is_image() {
            tracing::debug!(
                name = %upload.name,
                declared_type = %upload.declared_type,
                "ignoring non-image upload"
            );
            return None;
        }

        Some(Self {
            kind: MediaKind::Image,
            uri: upload.to_data_uri(),
            name: upload.name.clone(),
        })
    }
}

/// The session's append-only list of uploaded assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaLibrary {
    assets: Vec<MediaAsset>,
}

impl MediaLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset.
    pub fn push(&mut self, asset: MediaAsset) {
        self.assets.push(asset);
    }

    /// The asset at `index`.
    pub fn get(&self, index: usize) -> Option<&MediaAsset> {
        self.assets.get(index)
    }

    /// Iterate in upload order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaAsset> {
        self.assets.iter()
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if nothing was uploaded.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<'a> IntoIterator for &'a MediaLibrary {
    type Item = &'a MediaAsset;
    type IntoIter = std::slice::Iter<'a, MediaAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
