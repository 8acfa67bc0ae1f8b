//! Paragraph creation and run emission into the resolved region.

use super::error::{ConversionWarning, Result};
use super::region::Region;
use super::styles::resolve_styles;
use super::walker::Translator;
use crate::doctree::NodeKind;
use crate::models::bullet::BulletMode;
use crate::models::link::Link;
use crate::models::properties::{Alignment, TextStyle};

/// Paragraph-level properties for a paragraph about to be started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ParagraphSpec {
    pub bullet: BulletMode,
    pub level: u32,
    pub alignment: Option<Alignment>,
}

impl ParagraphSpec {
    pub(crate) fn aligned(alignment: Alignment) -> Self {
        Self {
            bullet: BulletMode::None,
            level: 0,
            alignment: Some(alignment),
        }
    }
}

impl Translator<'_> {
    /// Marker and indent from the enclosing lists and definitions.
    pub(super) fn list_paragraph(&self) -> ParagraphSpec {
        ParagraphSpec {
            bullet: self.state.lists.bullet(),
            level: self.state.lists.depth() + self.state.definition_depth,
            alignment: None,
        }
    }

    /// Indented like a list paragraph but never marked.
    pub(super) fn plain_paragraph(&self) -> ParagraphSpec {
        ParagraphSpec {
            bullet: BulletMode::None,
            ..self.list_paragraph()
        }
    }

    /// Starts a paragraph in the resolved region. The first paragraph written
    /// on a fresh title slide reuses the empty subtitle paragraph.
    pub(super) fn begin_paragraph(&mut self, kind: &NodeKind, spec: ParagraphSpec) -> Result<()> {
        if !self.require_slide(kind) {
            return Ok(());
        }
        let reuse_blank = self.state.title_slide_active();
        let region = self.resolve_region();
        let frame = self.region_text_mut(region)?;
        let paragraph = if reuse_blank && frame.is_blank() {
            frame.last_paragraph_mut()
        } else {
            frame.add_paragraph()
        };
        paragraph.bullet = spec.bullet;
        paragraph.level = spec.level;
        paragraph.alignment = spec.alignment;
        Ok(())
    }

    /// Appends `text` to the resolved region. Each line break starts a new
    /// unmarked paragraph that keeps the previous paragraph's indent.
    pub(super) fn emit_text(&mut self, text: &str) -> Result<()> {
        if !self.require_slide(&NodeKind::Text) {
            return Ok(());
        }
        let region = self.resolve_region();
        let in_cell = matches!(region, Region::Cell { .. });
        let effects = resolve_styles(self.state.styles.active(), in_cell, self.config);
        for tag in effects.unrecognized {
            self.warn_style(tag);
        }
        let style = TextStyle {
            bold: self.state.bold_depth > 0,
            italic: self.state.italic_depth > 0,
            font_family: effects.font_family,
            font_size: effects.font_size,
            color: effects.color,
            link: self.state.active_link().map(|url| Link::Url(url.to_string())),
        };

        let frame = self.region_text_mut(region)?;
        for (i, line) in text.split('\n').enumerate() {
            let paragraph = if i == 0 {
                frame.last_paragraph_mut()
            } else {
                let previous = frame.last_paragraph_mut();
                let (level, alignment) = (previous.level, previous.alignment);
                let paragraph = frame.add_paragraph();
                paragraph.level = level;
                paragraph.alignment = alignment;
                paragraph
            };
            if !line.is_empty() {
                let run = paragraph.add_run();
                run.content = line.to_string();
                run.style = style.clone();
            }
        }

        if let Some(fill) = effects.cell_fill {
            self.region_cell_mut(region)?.background = Some(fill);
        }
        Ok(())
    }

    /// A bold, unmarked paragraph holding `text`.
    pub(super) fn emit_heading(&mut self, kind: &NodeKind, text: &str) -> Result<()> {
        self.begin_paragraph(kind, self.plain_paragraph())?;
        self.state.bold_depth += 1;
        let emitted = self.emit_text(text);
        self.state.bold_depth -= 1;
        emitted
    }

    fn require_slide(&mut self, kind: &NodeKind) -> bool {
        if self.deck.current_slide().is_some() {
            return true;
        }
        self.warn(ConversionWarning::NoSlide {
            tag: kind.tag().to_string(),
        });
        false
    }
}
