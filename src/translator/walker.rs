//! Depth-first walk of the document tree with an enter and an exit step per node.

use std::collections::HashSet;
use std::path::PathBuf;

use super::constants::{LAYOUT_TAG_PREFIX, MONOSPACE, STATUS_LABEL};
use super::emit::ParagraphSpec;
use super::error::{ConversionWarning, Result};
use super::lists::ListKind;
use super::state::{SlidePhase, TraversalState};
use crate::config::ConvertConfig;
use crate::doctree::{Node, NodeKind};
use crate::fetch::ImageFetcher;
use crate::models::common::Frame;
use crate::models::placeholder::LayoutKind;
use crate::models::presentation::Presentation;
use crate::models::properties::Alignment;
use crate::models::shape::ShapeType;

/// Result of entering a node. A fault is the `Err` side of the enter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitAction {
    Continue,
    /// The node consumed its subtree; its exit step still runs.
    SkipChildren,
}

/// One conversion in progress. Owns the deck until the walk completes.
pub(crate) struct Translator<'a> {
    pub(super) deck: Presentation,
    pub(super) state: TraversalState,
    pub(super) config: &'a ConvertConfig,
    pub(super) fetcher: &'a dyn ImageFetcher,
    /// Directory local image paths are resolved against.
    pub(super) base_dir: PathBuf,
    pub(super) warnings: Vec<ConversionWarning>,
    reported_styles: HashSet<String>,
}

/// Tags a node pushes: its classes plus any implied by its kind.
fn style_tags(node: &Node) -> Vec<String> {
    let mut tags = node.classes.clone();
    if matches!(
        node.kind,
        NodeKind::Literal | NodeKind::TitleReference | NodeKind::LiteralBlock
    ) {
        tags.push(MONOSPACE.to_string());
    }
    tags
}

/// Layout named by the last `pptx-` tag of a section; an unrecognized one means the default.
fn section_layout(node: &Node) -> LayoutKind {
    node.classes
        .iter()
        .rev()
        .find(|tag| tag.starts_with(LAYOUT_TAG_PREFIX))
        .and_then(|tag| LayoutKind::from_style_tag(tag))
        .unwrap_or_default()
}

impl<'a> Translator<'a> {
    pub(crate) fn new(
        deck: Presentation,
        config: &'a ConvertConfig,
        fetcher: &'a dyn ImageFetcher,
        base_dir: PathBuf,
    ) -> Self {
        Self {
            deck,
            state: TraversalState::default(),
            config,
            fetcher,
            base_dir,
            warnings: Vec::new(),
            reported_styles: HashSet::new(),
        }
    }

    pub(crate) fn finish(self) -> (Presentation, Vec<ConversionWarning>) {
        (self.deck, self.warnings)
    }

    /// Visits `node` and its subtree. The node's style tags are popped on
    /// every path out, including a fault.
    pub(crate) fn walk(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<()> {
        let frame = self.state.styles.push(style_tags(node));
        let visited = self.visit(node, parent);
        let popped = self.state.styles.pop(frame);
        visited.and(popped)
    }

    fn visit(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<()> {
        log::debug!("enter <{}>", node.kind);
        if self.enter(node, parent)? == VisitAction::Continue {
            for child in &node.children {
                self.walk(child, Some(&node.kind))?;
            }
        }
        log::debug!("exit <{}>", node.kind);
        self.exit(node)
    }

    fn enter(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<VisitAction> {
        use NodeKind::*;
        use VisitAction::*;

        let action = match &node.kind {
            TGroup => return self.enter_table_group(node),
            Section => {
                self.enter_section(node);
                Continue
            }
            Title => {
                self.enter_title(node, parent)?;
                SkipChildren
            }
            Subtitle | Term | LiteralBlock => {
                self.begin_paragraph(&node.kind, self.plain_paragraph())?;
                Continue
            }
            Paragraph => {
                self.begin_paragraph(&node.kind, self.list_paragraph())?;
                Continue
            }
            Text => {
                if let Some(text) = &node.text {
                    self.emit_text(text)?;
                }
                SkipChildren
            }
            BulletList => {
                self.state.lists.enter(ListKind::Bullet);
                Continue
            }
            EnumeratedList => {
                self.state.lists.enter(ListKind::Numbered);
                Continue
            }
            Definition => {
                self.state.definition_depth += 1;
                Continue
            }
            BlockQuote => {
                self.enter_block_quote(node);
                Continue
            }
            Attribution => self.aligned(node, Alignment::Right)?,
            Caption => self.aligned(node, Alignment::Center)?,
            Author | Date | Version | Copyright => self.aligned(node, Alignment::Left)?,
            Status => {
                self.aligned(node, Alignment::Left)?;
                self.emit_text(STATUS_LABEL)?;
                Continue
            }
            Row => {
                self.enter_row()?;
                Continue
            }
            Entry => return self.enter_entry(node),
            Reference => {
                self.state.links.push(node.attr("refuri").map(str::to_string));
                Continue
            }
            Strong => {
                self.state.bold_depth += 1;
                Continue
            }
            Emphasis => {
                self.state.italic_depth += 1;
                Continue
            }
            Image => {
                self.insert_image(node);
                SkipChildren
            }
            SubstitutionDefinition | Comment | SystemMessage => SkipChildren,
            Document | Table | ColSpec | THead | TBody | ListItem | DefinitionList
            | DefinitionListItem | Topic | TitleReference | Literal | Inline | Container
            | Figure | Docinfo | Decoration | Header | Footer | Target | Transition => Continue,
            Unknown(tag) => {
                self.warn(ConversionWarning::UnknownNode { tag: tag.clone() });
                Continue
            }
        };
        Ok(action)
    }

    fn exit(&mut self, node: &Node) -> Result<()> {
        use NodeKind::*;

        match &node.kind {
            Section => self.state.exit_section()?,
            BulletList | EnumeratedList => self.state.lists.exit()?,
            Definition => self.state.definition_depth = self.state.definition_depth.saturating_sub(1),
            BlockQuote => self.state.exit_block_quote()?,
            TGroup => self.exit_table_group()?,
            Row => self.exit_row()?,
            Entry => self.exit_entry(node)?,
            Reference => {
                self.state.links.pop();
            }
            Strong => self.state.bold_depth = self.state.bold_depth.saturating_sub(1),
            Emphasis => self.state.italic_depth = self.state.italic_depth.saturating_sub(1),
            _ => {}
        }
        Ok(())
    }

    /// A top-level section opens a new slide; deeper ones add to it.
    fn enter_section(&mut self, node: &Node) {
        if self.state.section_depth == 0 {
            let layout = section_layout(node);
            let slide = self.deck.add_slide(layout);
            log::debug!("New {:?} slide {}", layout, slide.object_id);
            self.state.phase = SlidePhase::BodySlideOpen;
            self.state.block_quote = None;
        }
        self.state.enter_section();
    }

    fn enter_title(&mut self, node: &Node, parent: Option<&NodeKind>) -> Result<()> {
        let text = node.flattened_text();
        let in_topic = parent == Some(&NodeKind::Topic);
        match self.state.section_depth {
            0 if !in_topic && self.deck.slides.is_empty() => {
                self.deck.add_slide(LayoutKind::Title).set_title(text.clone());
                self.deck.title = Some(text);
                self.state.phase = SlidePhase::TitleSlideOpen;
            }
            1 => match self.deck.current_slide_mut() {
                Some(slide) => slide.set_title(text),
                None => self.warn(ConversionWarning::NoSlide {
                    tag: node.kind.tag().to_string(),
                }),
            },
            _ => self.emit_heading(&node.kind, &text)?,
        }
        Ok(())
    }

    /// Opens a rounded box along the bottom of the slide for the quote's text.
    fn enter_block_quote(&mut self, node: &Node) {
        let (width, height) = (self.deck.slide_width(), self.deck.slide_height());
        let (margin, unit) = (self.config.margin, self.config.block_quote_unit);
        let shape = match self.deck.current_slide_mut() {
            Some(slide) => Some(slide.add_shape(
                ShapeType::RoundRectangle,
                Frame::new(
                    margin,
                    height - margin - 2 * unit,
                    width - 2 * margin,
                    2 * unit,
                ),
            )),
            None => {
                self.warn(ConversionWarning::NoSlide {
                    tag: node.kind.tag().to_string(),
                });
                None
            }
        };
        self.state.enter_block_quote(shape);
    }

    fn aligned(&mut self, node: &Node, alignment: Alignment) -> Result<VisitAction> {
        self.begin_paragraph(&node.kind, ParagraphSpec::aligned(alignment))?;
        Ok(VisitAction::Continue)
    }

    /// Logs and records a recoverable problem.
    pub(super) fn warn(&mut self, warning: ConversionWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Reports an unrecognized style tag once per conversion.
    pub(super) fn warn_style(&mut self, tag: String) {
        if self.reported_styles.insert(tag.clone()) {
            self.warn(ConversionWarning::UnknownStyle { tag });
        }
    }
}
