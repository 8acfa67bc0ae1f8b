//! Immutable settings for one conversion: geometry constants, font sizes and the
//! named color palette consulted by style tags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::Result;
use crate::models::colors::RgbColor;
use crate::models::common::{inches, Emu};

/// Colors applied to syntax-highlighted code tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeColors {
    /// Keywords and operators.
    pub keyword: RgbColor,
    /// Names that are functions.
    pub function: RgbColor,
    /// Literals (strings, numbers).
    pub literal: RgbColor,
    /// Comments.
    pub comment: RgbColor,
}

impl Default for CodeColors {
    fn default() -> Self {
        Self {
            keyword: RgbColor::new(0x00, 0x70, 0xC0),
            function: RgbColor::new(0x79, 0x5E, 0x26),
            literal: RgbColor::new(0xA3, 0x15, 0x15),
            comment: RgbColor::new(0x80, 0x80, 0x80),
        }
    }
}

/// Conversion settings. Built once per conversion and passed by reference to
/// every component that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertConfig {
    /// Height reserved for the title region when centering pictures.
    pub title_buffer: Emu,
    /// Distance kept from the slide edges by block-quote shapes.
    pub margin: Emu,
    /// Height of one table row.
    pub table_row_height: Emu,
    /// Block-quote shapes are twice this tall.
    pub block_quote_unit: Emu,
    /// Font size, in points, for the `tiny` tag.
    pub tiny_font_size: f64,
    /// Font size, in points, for the `small` tag.
    pub small_font_size: f64,
    /// Font family for `monospace` and code tokens.
    pub monospace_font: String,
    /// Named colors usable as style tags (`red`) and highlight tags (`red-hl`).
    pub palette: IndexMap<String, RgbColor>,
    pub code_colors: CodeColors,
    /// Severity tags and the highlight tag each one stands for.
    pub severity: IndexMap<String, String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let palette = [
            ("black", RgbColor::new(0x00, 0x00, 0x00)),
            ("white", RgbColor::new(0xFF, 0xFF, 0xFF)),
            ("gray", RgbColor::new(0x80, 0x80, 0x80)),
            ("red", RgbColor::new(0xC0, 0x00, 0x00)),
            ("orange", RgbColor::new(0xED, 0x7D, 0x31)),
            ("yellow", RgbColor::new(0xFF, 0xC0, 0x00)),
            ("green", RgbColor::new(0x70, 0xAD, 0x47)),
            ("blue", RgbColor::new(0x44, 0x72, 0xC4)),
            ("purple", RgbColor::new(0x70, 0x30, 0xA0)),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        let severity = [
            ("showstopper", "red-hl"),
            ("high", "orange-hl"),
            ("medium", "yellow-hl"),
            ("med", "yellow-hl"),
            ("low", "green-hl"),
        ]
        .into_iter()
        .map(|(tag, highlight)| (tag.to_string(), highlight.to_string()))
        .collect();

        Self {
            title_buffer: inches(2.0),
            margin: inches(1.0),
            table_row_height: inches(0.4),
            block_quote_unit: inches(1.0),
            tiny_font_size: 16.0,
            small_font_size: 24.0,
            monospace_font: "Courier New".to_string(),
            palette,
            code_colors: CodeColors::default(),
            severity,
        }
    }
}

impl ConvertConfig {
    /// Parses a JSON configuration; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn palette_color(&self, name: &str) -> Option<RgbColor> {
        self.palette.get(name).copied()
    }
}
