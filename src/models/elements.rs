// src/models/elements.rs

use serde::{Deserialize, Serialize};

use crate::models::common::Frame;
use crate::models::picture::Picture;
use crate::models::shape::Shape;
use crate::models::table::Table;

/// The specific kind of page element.
/// The JSON representation uses the variant name as the key (`"table": {...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageElementKind {
    Picture(Picture),
    Table(Table),
    Shape(Shape),
}

/// A free-floating visual element on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    /// Object ID, unique within the presentation.
    pub object_id: String,
    /// Position and size of the element.
    pub frame: Frame,
    #[serde(flatten)]
    pub element_kind: PageElementKind,
}

impl PageElement {
    pub fn as_table(&self) -> Option<&Table> {
        match &self.element_kind {
            PageElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.element_kind {
            PageElementKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut Shape> {
        match &mut self.element_kind {
            PageElementKind::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_picture(&self) -> Option<&Picture> {
        match &self.element_kind {
            PageElementKind::Picture(picture) => Some(picture),
            _ => None,
        }
    }
}
