//! Mutable state carried across one traversal.

use super::error::{Result, TranslateError};
use super::lists::ListState;
use super::styles::StyleStack;
use super::table::TableCursor;

/// Where the section/slide state machine stands.
/// The depth of an open body slide is `TraversalState::section_depth`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SlidePhase {
    #[default]
    NoSlide,
    /// Inside the leading title/subtitle region of the document.
    TitleSlideOpen,
    BodySlideOpen,
}

/// Created fresh per conversion and dropped when it ends.
#[derive(Debug, Default)]
pub(crate) struct TraversalState {
    pub section_depth: usize,
    pub phase: SlidePhase,
    pub styles: StyleStack,
    pub lists: ListState,
    /// The table being filled, if any.
    pub table: Option<TableCursor>,
    /// Table groups entered but not emitted; their exits must leave `table` alone.
    pub skipped_tables: usize,
    /// Element index of the block-quote shape receiving text.
    pub block_quote: Option<usize>,
    pub saved_block_quotes: Vec<Option<usize>>,
    pub bold_depth: u32,
    pub italic_depth: u32,
    /// Hyperlink targets of the enclosing references, innermost last.
    pub links: Vec<Option<String>>,
    pub definition_depth: u32,
}

impl TraversalState {
    pub(crate) fn title_slide_active(&self) -> bool {
        self.phase == SlidePhase::TitleSlideOpen
    }

    pub(crate) fn enter_section(&mut self) {
        self.section_depth += 1;
    }

    pub(crate) fn exit_section(&mut self) -> Result<()> {
        self.section_depth = self
            .section_depth
            .checked_sub(1)
            .ok_or(TranslateError::SectionUnderflow)?;
        Ok(())
    }

    /// The innermost hyperlink target.
    pub(crate) fn active_link(&self) -> Option<&str> {
        self.links.iter().rev().find_map(|l| l.as_deref())
    }

    pub(crate) fn enter_block_quote(&mut self, shape: Option<usize>) {
        self.saved_block_quotes.push(self.block_quote);
        if shape.is_some() {
            self.block_quote = shape;
        }
    }

    pub(crate) fn exit_block_quote(&mut self) -> Result<()> {
        self.block_quote = self
            .saved_block_quotes
            .pop()
            .ok_or(TranslateError::BlockQuoteUnderflow)?;
        Ok(())
    }
}
