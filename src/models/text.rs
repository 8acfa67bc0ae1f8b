// src/models/text.rs

use serde::{Deserialize, Serialize};

use crate::models::text_element::Paragraph;

/// Represents the textual content of a placeholder, shape or table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Appends a new, empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// The paragraph new runs are appended to. A frame always has at least one
    /// paragraph once it is written to, so an empty frame gets one here.
    pub fn last_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            return self.add_paragraph();
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// True when no run in the frame carries any text.
    pub fn is_blank(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_blank)
    }

    /// Paragraph texts joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
