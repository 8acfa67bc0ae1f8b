//! Translation of a document tree into a slide deck.
//!
//! The walker visits the tree depth first. Top-level sections become slides,
//! deeper content is appended to the slide of its enclosing section. Problems
//! local to one node are recorded as [`ConversionWarning`]s and the walk goes
//! on; a [`TranslateError`] means the walker and the tree disagree about
//! nesting, and no deck is produced.

mod constants;
mod emit;
mod error;
mod lists;
mod picture;
mod region;
mod state;
mod styles;
mod table;
mod walker;

use std::path::{Path, PathBuf};

use crate::config::ConvertConfig;
use crate::doctree::Node;
use crate::fetch::{HttpFetcher, ImageFetcher};
use crate::models::presentation::Presentation;
use walker::Translator;

pub use error::{ConversionWarning, Result, TranslateError};

/// A finished deck and everything that was skipped or degraded on the way.
#[derive(Debug)]
pub struct Translation {
    pub presentation: Presentation,
    pub warnings: Vec<ConversionWarning>,
}

/// Converts document trees with a fixed configuration and image fetcher.
pub struct Converter {
    config: ConvertConfig,
    fetcher: Box<dyn ImageFetcher>,
    template: Option<Presentation>,
}

/// Builder for creating a `Converter`.
#[derive(Default)]
pub struct ConverterBuilder {
    config: Option<ConvertConfig>,
    fetcher: Option<Box<dyn ImageFetcher>>,
    template: Option<Presentation>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_config(mut self, config: ConvertConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the collaborator used for remote image references.
    pub fn set_fetcher(mut self, fetcher: impl ImageFetcher + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Seeds every conversion with a copy of `template` (page size, existing slides).
    pub fn set_template(mut self, template: Presentation) -> Self {
        self.template = Some(template);
        self
    }

    /// Builds the `Converter`.
    /// Without an explicit fetcher an HTTP client is created, which can fail.
    pub fn build(self) -> crate::errors::Result<Converter> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(HttpFetcher::new()?),
        };
        Ok(Converter {
            config: self.config.unwrap_or_default(),
            fetcher,
            template: self.template,
        })
    }
}

impl Converter {
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts one document tree into a fresh deck.
    pub fn convert(&self, root: &Node) -> Result<Translation> {
        let deck = self.template.clone().unwrap_or_default();
        convert_document(root, deck, &self.config, &*self.fetcher)
    }
}

/// Walks `root` into `deck`.
///
/// Local image paths resolve against the directory of the document's `source`
/// attribute, or the working directory when the document came from stdin.
pub fn convert_document(
    root: &Node,
    deck: Presentation,
    config: &ConvertConfig,
    fetcher: &dyn ImageFetcher,
) -> Result<Translation> {
    let mut translator = Translator::new(deck, config, fetcher, base_dir(root));
    translator.walk(root, None)?;
    let (presentation, warnings) = translator.finish();
    log::debug!(
        "Converted {} slides with {} warnings",
        presentation.slides.len(),
        warnings.len()
    );
    Ok(Translation {
        presentation,
        warnings,
    })
}

fn base_dir(root: &Node) -> PathBuf {
    root.attr("source")
        .filter(|source| *source != "<stdin>")
        .and_then(|source| Path::new(source).parent())
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctree::NodeKind;
    use crate::fetch::{FetchError, OfflineFetcher};
    use crate::models::bullet::BulletMode;
    use crate::models::placeholder::LayoutKind;
    use crate::models::properties::Alignment;
    use crate::models::shape::ShapeType;

    fn convert(root: &Node) -> Result<Translation> {
        convert_document(root, Presentation::new(), &ConvertConfig::default(), &OfflineFetcher)
    }

    fn text_node(kind: NodeKind, text: &str) -> Node {
        Node::new(kind).with_child(Node::text(text))
    }

    fn para(text: &str) -> Node {
        text_node(NodeKind::Paragraph, text)
    }

    fn section(title: &str, children: impl IntoIterator<Item = Node>) -> Node {
        Node::new(NodeKind::Section)
            .with_child(text_node(NodeKind::Title, title))
            .with_children(children)
    }

    fn document(children: impl IntoIterator<Item = Node>) -> Node {
        Node::new(NodeKind::Document).with_children(children)
    }

    #[test]
    fn subtitle_fills_the_blank_subtitle_paragraph() {
        let root = document([
            text_node(NodeKind::Title, "Deck"),
            text_node(NodeKind::Subtitle, "Sub"),
            Node::new(NodeKind::Docinfo)
                .with_child(text_node(NodeKind::Author, "Ann"))
                .with_child(text_node(NodeKind::Status, "draft")),
        ]);
        let deck = convert(&root).unwrap().presentation;

        assert_eq!(deck.title.as_deref(), Some("Deck"));
        let subtitle = &deck.slides[0].placeholders[0].text;
        assert_eq!(subtitle.paragraphs.len(), 3);
        assert_eq!(subtitle.paragraphs[0].text(), "Sub");
        assert_eq!(subtitle.paragraphs[1].text(), "Ann");
        assert_eq!(subtitle.paragraphs[1].alignment, Some(Alignment::Left));
        assert_eq!(subtitle.paragraphs[2].text(), "Status: draft");
    }

    #[test]
    fn float_right_goes_to_the_second_body() {
        let root = document([section(
            "Two",
            [
                para("left"),
                Node::new(NodeKind::Container)
                    .with_classes(["float-right"])
                    .with_child(para("right")),
            ],
        )
        .with_classes(["pptx-two-content"])]);
        let deck = convert(&root).unwrap().presentation;

        let slide = &deck.slides[0];
        assert_eq!(slide.layout, LayoutKind::TwoContent);
        assert_eq!(slide.placeholders[0].text.text(), "left");
        assert_eq!(slide.placeholders[1].text.text(), "right");
    }

    #[test]
    fn float_right_without_second_body_stays_in_the_first() {
        let root = document([section(
            "One",
            [Node::new(NodeKind::Container)
                .with_classes(["two-content", "float-right"])
                .with_child(para("right"))],
        )]);
        let deck = convert(&root).unwrap().presentation;
        assert_eq!(deck.slides[0].placeholders[0].text.text(), "right");
    }

    #[test]
    fn block_quote_text_goes_into_a_shape() {
        let root = document([section(
            "Quote",
            [
                Node::new(NodeKind::BlockQuote)
                    .with_child(para("wise words"))
                    .with_child(text_node(NodeKind::Attribution, "someone")),
                para("after"),
            ],
        )]);
        let deck = convert(&root).unwrap().presentation;

        let slide = &deck.slides[0];
        let element = &slide.page_elements[0];
        let config = ConvertConfig::default();
        assert_eq!(element.frame.left, config.margin);
        assert_eq!(element.frame.height, 2 * config.block_quote_unit);
        assert_eq!(element.frame.bottom(), deck.slide_height() - config.margin);

        let crate::models::elements::PageElementKind::Shape(shape) = &element.element_kind else {
            panic!("expected a shape");
        };
        assert_eq!(shape.shape_type, ShapeType::RoundRectangle);
        assert_eq!(shape.text.text(), "wise words\nsomeone");
        assert_eq!(shape.text.paragraphs[1].alignment, Some(Alignment::Right));
        assert_eq!(slide.placeholders[0].text.text(), "after");
    }

    #[test]
    fn line_breaks_start_unmarked_paragraphs() {
        let root = document([section(
            "Code",
            [Node::new(NodeKind::BulletList).with_child(
                Node::new(NodeKind::ListItem).with_child(
                    Node::new(NodeKind::LiteralBlock).with_child(Node::text("fn main() {\n\n}")),
                ),
            )],
        )]);
        let deck = convert(&root).unwrap().presentation;

        let body = &deck.slides[0].placeholders[0].text;
        assert_eq!(body.paragraphs.len(), 3);
        assert!(body.paragraphs.iter().all(|p| p.bullet == BulletMode::None));
        assert!(body.paragraphs[1].runs.is_empty());
        let run = &body.paragraphs[2].runs[0];
        assert_eq!(run.content, "}");
        assert_eq!(run.style.font_family.as_deref(), Some("Courier New"));
    }

    #[test]
    fn inline_markup_sets_run_flags() {
        let root = document([section(
            "Inline",
            [Node::new(NodeKind::Paragraph)
                .with_child(Node::text("a "))
                .with_child(text_node(NodeKind::Strong, "b"))
                .with_child(text_node(NodeKind::Emphasis, "c"))
                .with_child(text_node(NodeKind::Literal, "d"))],
        )]);
        let deck = convert(&root).unwrap().presentation;

        let runs = &deck.slides[0].placeholders[0].text.paragraphs[0].runs;
        assert_eq!(runs.len(), 4);
        assert!(!runs[0].style.bold && runs[1].style.bold);
        assert!(runs[2].style.italic && !runs[2].style.bold);
        assert_eq!(runs[3].style.font_family.as_deref(), Some("Courier New"));
        assert_eq!(runs[0].style.font_family, None);
    }

    fn topic(title: &str, body: &str) -> Node {
        Node::new(NodeKind::Topic)
            .with_child(text_node(NodeKind::Title, title))
            .with_child(para(body))
    }

    #[test]
    fn topic_title_inside_a_section_sets_the_slide_title() {
        let root = document([section("Slide", [topic("Aside", "body")])]);
        let deck = convert(&root).unwrap().presentation;

        let slide = &deck.slides[0];
        assert_eq!(slide.title.as_deref(), Some("Aside"));
        assert_eq!(slide.placeholders[0].text.text(), "body");
    }

    #[test]
    fn top_level_topic_title_is_a_bold_paragraph() {
        let root = document([section("Slide", [para("x")]), topic("Note", "n")]);
        let deck = convert(&root).unwrap().presentation;

        let slide = &deck.slides[0];
        assert_eq!(slide.title.as_deref(), Some("Slide"));
        let body = &slide.placeholders[0].text;
        assert_eq!(body.text(), "x\nNote\nn");
        let heading = body.paragraphs.iter().find(|p| p.text() == "Note").unwrap();
        assert_eq!(heading.bullet, BulletMode::None);
        assert!(heading.runs.iter().all(|run| run.style.bold));
    }

    #[test]
    fn definitions_are_indented() {
        let root = document([section(
            "Terms",
            [Node::new(NodeKind::DefinitionList).with_child(
                Node::new(NodeKind::DefinitionListItem)
                    .with_child(text_node(NodeKind::Term, "word"))
                    .with_child(Node::new(NodeKind::Definition).with_child(para("meaning"))),
            )],
        )]);
        let deck = convert(&root).unwrap().presentation;

        let body = &deck.slides[0].placeholders[0].text;
        assert_eq!((body.paragraphs[0].text().as_str(), body.paragraphs[0].level), ("word", 0));
        assert_eq!((body.paragraphs[1].text().as_str(), body.paragraphs[1].level), ("meaning", 1));
    }

    #[test]
    fn unknown_nodes_and_styles_warn_once_and_pass_through() {
        let root = document([section(
            "Odd",
            [
                Node::new(NodeKind::Unknown("sidebar".into())).with_child(para("kept")),
                para("x").with_classes(["sparkly"]),
                para("y").with_classes(["sparkly"]),
            ],
        )]);
        let translation = convert(&root).unwrap();

        assert_eq!(
            translation.presentation.slides[0].placeholders[0].text.text(),
            "kept\nx\ny"
        );
        assert_eq!(
            translation.warnings,
            vec![
                ConversionWarning::UnknownNode { tag: "sidebar".into() },
                ConversionWarning::UnknownStyle { tag: "sparkly".into() },
            ]
        );
    }

    #[test]
    fn highlight_fills_the_cell() {
        let entry = Node::new(NodeKind::Entry)
            .with_classes(["red-hl"])
            .with_child(para("hot"));
        let group = Node::new(NodeKind::TGroup)
            .with_attr("cols", "1")
            .with_child(Node::new(NodeKind::ColSpec).with_attr("colwidth", "100"))
            .with_child(
                Node::new(NodeKind::TBody).with_child(Node::new(NodeKind::Row).with_child(entry)),
            );
        let root = document([section("T", [Node::new(NodeKind::Table).with_child(group)])]);
        let translation = convert(&root).unwrap();

        let table = translation.presentation.slides[0].tables().next().unwrap();
        let cell = table.cell(0, 0).unwrap();
        assert_eq!(cell.text.text(), "hot");
        assert_eq!(cell.background, ConvertConfig::default().palette_color("red"));
        assert_eq!(cell.text.paragraphs[0].runs[0].style.color, None);
        assert!(translation.warnings.is_empty());
    }

    #[test]
    fn text_before_any_slide_is_dropped_with_a_warning() {
        let root = document([para("orphan")]);
        let translation = convert(&root).unwrap();
        assert!(translation.presentation.slides.is_empty());
        assert!(translation
            .warnings
            .iter()
            .all(|w| matches!(w, ConversionWarning::NoSlide { .. })));
        assert!(!translation.warnings.is_empty());
    }

    #[test]
    fn row_outside_a_table_aborts() {
        let root = document([section("Bad", [Node::new(NodeKind::Row)])]);
        let err = convert(&root).unwrap_err();
        assert_eq!(err, TranslateError::OutsideTable { tag: "row".into() });
    }

    #[test]
    fn builder_uses_the_template_page_size() {
        struct Refusing;
        impl ImageFetcher for Refusing {
            fn fetch(&self, reference: &str) -> std::result::Result<Vec<u8>, FetchError> {
                Err(FetchError::Unsupported(reference.to_string()))
            }
        }

        let converter = ConverterBuilder::new()
            .set_fetcher(Refusing)
            .set_template(Presentation::with_size(12_192_000, 6_858_000))
            .build()
            .unwrap();
        let translation = converter.convert(&document([section("Wide", [])])).unwrap();
        assert_eq!(translation.presentation.slide_width(), 12_192_000);
        assert_eq!(translation.presentation.slides.len(), 1);
    }

    #[test]
    fn base_dir_comes_from_the_source_attribute() {
        let root = document([]).with_attr("source", "/docs/talk/slides.rst");
        assert_eq!(base_dir(&root), PathBuf::from("/docs/talk"));
        let stdin = document([]).with_attr("source", "<stdin>");
        assert_eq!(base_dir(&stdin), PathBuf::new());
    }
}
