//! Picks the text container the next paragraph or run goes to.

use super::error::{Result, TranslateError};
use super::walker::Translator;
use crate::models::table::TableCell;
use crate::models::text::TextFrame;

/// A destination for text on the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    /// A table cell: element index, row and column.
    Cell { element: usize, row: usize, column: usize },
    /// The text of a shape, by element index.
    Shape(usize),
    /// A body placeholder, by position.
    Body(usize),
}

impl Translator<'_> {
    /// Active table cell first, then an open block-quote shape, then the
    /// secondary body for float-right content of a two-content slide, else the
    /// primary body.
    pub(super) fn resolve_region(&self) -> Region {
        if let Some(cursor) = &self.state.table {
            if let Some((row, column)) = cursor.active_cell() {
                return Region::Cell {
                    element: cursor.element,
                    row,
                    column,
                };
            }
        }
        if let Some(shape) = self.state.block_quote {
            return Region::Shape(shape);
        }
        Region::Body(self.body_index())
    }

    pub(super) fn body_index(&self) -> usize {
        let has_second = self
            .deck
            .current_slide()
            .is_some_and(|slide| slide.body(1).is_some());
        if has_second && self.state.styles.wants_secondary_body() {
            1
        } else {
            0
        }
    }

    pub(super) fn region_text_mut(&mut self, region: Region) -> Result<&mut TextFrame> {
        match region {
            Region::Cell { .. } => Ok(&mut self.region_cell_mut(region)?.text),
            Region::Shape(index) => self
                .deck
                .current_slide_mut()
                .and_then(|slide| slide.element_mut(index))
                .and_then(|element| element.as_shape_mut())
                .map(|shape| &mut shape.text)
                .ok_or_else(|| TranslateError::MissingRegion(format!("shape {index}"))),
            Region::Body(index) => self
                .deck
                .current_slide_mut()
                .and_then(|slide| slide.body_text_mut(index))
                .ok_or_else(|| TranslateError::MissingRegion(format!("body {index}"))),
        }
    }

    pub(super) fn region_cell_mut(&mut self, region: Region) -> Result<&mut TableCell> {
        let Region::Cell { element, row, column } = region else {
            return Err(TranslateError::OutsideTable { tag: "entry".into() });
        };
        self.deck
            .current_slide_mut()
            .and_then(|slide| slide.element_mut(element))
            .and_then(|element| element.as_table_mut())
            .and_then(|table| table.cell_mut(row, column))
            .ok_or_else(|| TranslateError::MissingRegion(format!("cell ({row}, {column})")))
    }
}
