use serde::{Deserialize, Serialize};

use crate::models::text::TextFrame;

/// The type of a free-floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    /// Text box shape.
    TextBox,
    /// Rectangle shape.
    Rectangle,
    /// Round corner rectangle shape.
    RoundRectangle,
}

/// A page element kind representing an auto shape with its own text frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub shape_type: ShapeType,
    pub text: TextFrame,
}
