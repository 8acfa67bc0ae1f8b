// src/models/text_element.rs

use serde::{Deserialize, Serialize};

use crate::models::bullet::BulletMode;
use crate::models::properties::{Alignment, TextStyle};

/// Represents a segment of text with consistent styling within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content of this run.
    pub content: String,
    /// The styling applied to this run.
    #[serde(default)]
    pub style: TextStyle,
}

/// A paragraph of a text frame: an ordered list of runs plus paragraph level properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// The indent (outline) level, 0 for the outermost.
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub bullet: BulletMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Paragraph {
    /// Appends an empty run and returns it for the caller to fill.
    pub fn add_run(&mut self) -> &mut TextRun {
        self.runs.push(TextRun::default());
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// The concatenated content of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.content.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|run| run.content.is_empty())
    }
}
