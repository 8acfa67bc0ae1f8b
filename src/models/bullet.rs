use serde::{Deserialize, Serialize};

/// How a paragraph is marked.
/// Derived from the `a:buNone` / `a:buChar` / `a:buAutoNum` choice of DrawingML paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BulletMode {
    /// No bullet, even when the placeholder would otherwise supply one.
    #[default]
    None,
    /// The placeholder's bullet glyph for the paragraph's level.
    Bullet,
    /// Arabic numbering followed by a period, counting from `start_at`.
    #[serde(rename_all = "camelCase")]
    AutoNumber { start_at: u32 },
}
