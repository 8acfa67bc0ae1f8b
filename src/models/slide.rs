// src/models/slide.rs

use serde::{Deserialize, Serialize};

use crate::models::common::{Emu, Frame};
use crate::models::elements::{PageElement, PageElementKind};
use crate::models::picture::Picture;
use crate::models::placeholder::{LayoutKind, Placeholder};
use crate::models::shape::{Shape, ShapeType};
use crate::models::table::Table;
use crate::models::text::TextFrame;

/// A slide in a presentation.
/// The layout is fixed at creation and determines how many body placeholders exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// The object ID for this slide.
    pub object_id: String,

    pub layout: LayoutKind,

    /// Text of the title placeholder, once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Geometry of the title placeholder.
    pub title_frame: Frame,

    /// Body placeholders, in layout order.
    pub placeholders: Vec<Placeholder>,

    /// Pictures, tables and shapes, in insertion order.
    pub page_elements: Vec<PageElement>,
}

impl Slide {
    pub(crate) fn new(object_id: String, layout: LayoutKind, width: Emu, height: Emu) -> Self {
        Self {
            object_id,
            layout,
            title: None,
            title_frame: layout.title_frame(width, height),
            placeholders: layout.body_placeholders(width, height),
            page_elements: Vec::new(),
        }
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = Some(text.into());
    }

    pub fn body(&self, index: usize) -> Option<&Placeholder> {
        self.placeholders.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Placeholder> {
        self.placeholders.get_mut(index)
    }

    /// Text frame of a body placeholder.
    pub fn body_text_mut(&mut self, index: usize) -> Option<&mut TextFrame> {
        self.placeholders.get_mut(index).map(|p| &mut p.text)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut PageElement> {
        self.page_elements.get_mut(index)
    }

    /// Adds a picture at the given frame and returns its element index.
    pub fn add_picture(&mut self, picture: Picture, frame: Frame) -> usize {
        self.push_element(frame, PageElementKind::Picture(picture))
    }

    /// Adds an empty `rows` x `columns` table filling `frame`; returns its element index.
    pub fn add_table(&mut self, rows: usize, columns: usize, frame: Frame) -> usize {
        let table = Table::new(rows, columns, frame.width);
        self.push_element(frame, PageElementKind::Table(table))
    }

    /// Adds an auto shape with an empty text frame; returns its element index.
    pub fn add_shape(&mut self, shape_type: ShapeType, frame: Frame) -> usize {
        let shape = Shape {
            shape_type,
            text: TextFrame::default(),
        };
        self.push_element(frame, PageElementKind::Shape(shape))
    }

    /// Iterates over the tables on the slide.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.page_elements.iter().filter_map(PageElement::as_table)
    }

    /// Iterates over the pictures on the slide with their frames.
    pub fn pictures(&self) -> impl Iterator<Item = (&Picture, &Frame)> {
        self.page_elements
            .iter()
            .filter_map(|e| e.as_picture().map(|p| (p, &e.frame)))
    }

    fn push_element(&mut self, frame: Frame, element_kind: PageElementKind) -> usize {
        let index = self.page_elements.len();
        self.page_elements.push(PageElement {
            object_id: format!("{}_e{}", self.object_id, index + 1),
            frame,
            element_kind,
        });
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::inches;

    fn slide(layout: LayoutKind) -> Slide {
        Slide::new("s1".into(), layout, 9_144_000, 6_858_000)
    }

    #[test]
    fn elements_get_sequential_ids() {
        let mut s = slide(LayoutKind::Content);
        let first = s.add_shape(ShapeType::RoundRectangle, Frame::default());
        let second = s.add_table(2, 2, Frame::new(0, 0, inches(4.0), inches(1.0)));
        assert_eq!((first, second), (0, 1));
        assert_eq!(s.page_elements[1].object_id, "s1_e2");
        assert_eq!(s.tables().count(), 1);
    }

    #[test]
    fn body_count_follows_layout() {
        assert_eq!(slide(LayoutKind::TwoContent).placeholders.len(), 2);
        assert!(slide(LayoutKind::Content).body(1).is_none());
    }
}
