use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced when validating styling values.
pub enum StyleError {
    /// Font size outside the supported pixel range.
    #[error("font size {0}px is outside {min}..={max}px", min = crate::style::FontSize::MIN, max = crate::style::FontSize::MAX)]
    FontSizeOutOfRange(u32),

    /// Not a `#rrggbb` color.
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    /// Font family name not offered by the editor.
    #[error("unknown font family '{0}'")]
    UnknownFontFamily(String),

    /// Alignment other than left/center/right.
    #[error("unknown alignment '{0}'")]
    UnknownAlignment(String),
}

#[derive(Debug, Error)]
/// Errors produced while loading a [`ComposerConfig`](crate::ComposerConfig).
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config document is not valid JSON for the expected shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The preview renderer rejected the configured options.
    #[error(transparent)]
    Preview(#[from] blogcraft_preview::PreviewError),
}
