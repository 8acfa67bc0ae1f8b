// src/models/properties.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::RgbColor;
use crate::models::link::Link;

/// Represents the styling that can be applied to a text run.
/// Unset properties are inherited from the placeholder the run lives in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Whether the text is rendered as bold.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Whether the text is italicized.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// The font family of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// The size of the text's font, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// The foreground color of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,

    /// The hyperlink destination of the text. If unset, there is no link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// The text alignment for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Left,
    Center,
    Right,
}
