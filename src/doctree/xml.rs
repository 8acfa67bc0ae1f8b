//! Loads the XML doctree docutils writes (`rst2xml`, `writer_name="xml"`).

use roxmltree::{Document, ParsingOptions};

use super::error::{DoctreeError, Result};
use super::node::{Node, NodeKind};

/// Parses a docutils XML doctree into a [`Node`] tree rooted at the `document` element.
///
/// The `classes` attribute is split on whitespace into style tags; every other
/// attribute is kept verbatim. Whitespace-only text between block elements is
/// dropped, while text inside text elements (paragraphs, literals, ...) is kept
/// exactly as written.
pub fn parse_docutils_xml(xml: &str) -> Result<Node> {
    // docutils emits a DOCTYPE line, which roxmltree refuses by default.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = doc.root_element();
    if root.tag_name().name() != "document" {
        return Err(DoctreeError::UnexpectedRoot(root.tag_name().name().to_string()));
    }
    Ok(convert_element(root))
}

fn convert_element(element: roxmltree::Node) -> Node {
    let kind = NodeKind::from_tag(element.tag_name().name());
    let keep_whitespace = kind.is_text_element();
    let mut node = Node::new(kind);

    for attribute in element.attributes() {
        if attribute.name() == "classes" {
            node.classes = attribute
                .value()
                .split_whitespace()
                .map(str::to_string)
                .collect();
        } else {
            node.attributes
                .insert(attribute.name().to_string(), attribute.value().to_string());
        }
    }

    for child in element.children() {
        if child.is_element() {
            node.children.push(convert_element(child));
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            if keep_whitespace || !text.trim().is_empty() {
                node.children.push(Node::text(text));
            }
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE document PUBLIC "+//IDN docutils.sourceforge.net//DTD Docutils Generic//EN//XML" "http://docutils.sourceforge.net/docs/ref/docutils.dtd">
<document ids="title" names="title" source="/talks/deck.rst" title="Title">
    <title>Title</title>
    <section classes="pptx-segue extra" ids="intro" names="intro">
        <title>Intro</title>
        <paragraph>Hello <strong>big</strong> world</paragraph>
    </section>
</document>
"#;

    #[test]
    fn parses_structure_classes_and_attributes() {
        let document = parse_docutils_xml(SAMPLE).unwrap();
        assert_eq!(document.kind, NodeKind::Document);
        assert_eq!(document.attr("source"), Some("/talks/deck.rst"));
        assert_eq!(document.children.len(), 2);

        let section = &document.children[1];
        assert_eq!(section.kind, NodeKind::Section);
        assert_eq!(section.classes, vec!["pptx-segue", "extra"]);
        assert!(section.attributes.get("classes").is_none());

        let paragraph = &section.children[1];
        assert_eq!(paragraph.children.len(), 3);
        assert_eq!(paragraph.flattened_text(), "Hello big world");
    }

    #[test]
    fn rejects_non_document_roots() {
        let err = parse_docutils_xml("<section/>").unwrap_err();
        assert!(matches!(err, DoctreeError::UnexpectedRoot(tag) if tag == "section"));
    }

    #[test]
    fn reports_malformed_xml() {
        assert!(matches!(
            parse_docutils_xml("<document><title></document>"),
            Err(DoctreeError::Xml(_))
        ));
    }
}
