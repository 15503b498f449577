//! Post styling values.
//!
//! [`StyleSpec`] is a plain value: the host renders the preview container with it, and it is
//! carried into the saved record. Each field is a small validated type so that an out-of-range
//! font size or a malformed color is rejected at the setter instead of at render time.

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Font size in pixels, within [`FontSize::MIN`]..=[`FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    /// Smallest supported size.
    pub const MIN: u32 = 12;
    /// Largest supported size.
    pub const MAX: u32 = 24;

    /// Validate a pixel size.
    pub fn new(px: u32) -> Result<Self, StyleError> {
        if (Self::MIN..=Self::MAX).contains(&px) {
            Ok(Self(px))
        } else {
            Err(StyleError::FontSizeOutOfRange(px))
        }
    }

    /// The size in pixels.
    pub fn px(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = StyleError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(px)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// The font families offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Inter
    #[default]
    Inter,
    /// Georgia
    Georgia,
    /// Courier New
    #[serde(rename = "Courier New")]
    CourierNew,
    /// Arial
    Arial,
}

impl FontFamily {
    /// All families, in picker order.
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Inter,
        FontFamily::Georgia,
        FontFamily::CourierNew,
        FontFamily::Arial,
    ];

    /// The CSS family name.
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Georgia => "Georgia",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Arial => "Arial",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for FontFamily {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.css_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StyleError::UnknownFontFamily(s.to_string()))
    }
}

/// An RGB color written as `#rrggbb`. Stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate a `#rrggbb` color.
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(StyleError::InvalidColor(s.to_string()))
        }
    }

    /// The color as `#rrggbb`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// Text alignment of the post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

impl Alignment {
    /// The CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(StyleError::UnknownAlignment(s.to_string())),
        }
    }
}

/// Styling applied to the rendered post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    /// Body font size.
    pub font_size: FontSize,
    /// Body font family.
    pub font_family: FontFamily,
    /// Text color.
    pub text_color: HexColor,
    /// Background color.
    #[serde(rename = "bgColor")]
    pub background_color: HexColor,
    /// Text alignment.
    pub alignment: Alignment,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            font_family: FontFamily::default(),
            text_color: HexColor("#1f2937".to_string()),
            background_color: HexColor("#ffffff".to_string()),
            alignment: Alignment::default(),
        }
    }
}

impl StyleSpec {
    /// Inline CSS for the preview container.
    pub fn to_css(&self) -> String {
        format!(
            "font-size: {}px; font-family: {}; color: {}; background-color: {}; text-align: {};",
            self.font_size.px(),
            self.font_family.css_name(),
            self.text_color,
            self.background_color,
            self.alignment.as_str()
        )
    }
}
