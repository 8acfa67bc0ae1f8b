//! The read-only document tree consumed by the translator.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The discriminator of a tree node.
/// Tag names follow the docutils doctree vocabulary; anything else lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Document,
    Section,
    Title,
    Subtitle,
    Paragraph,
    Text,
    BulletList,
    EnumeratedList,
    ListItem,
    DefinitionList,
    DefinitionListItem,
    Term,
    Definition,
    BlockQuote,
    Attribution,
    Topic,
    Table,
    TGroup,
    ColSpec,
    THead,
    TBody,
    Row,
    Entry,
    Reference,
    TitleReference,
    Strong,
    Emphasis,
    Literal,
    LiteralBlock,
    Inline,
    Container,
    Image,
    Figure,
    Caption,
    Docinfo,
    Author,
    Date,
    Version,
    Status,
    Copyright,
    Decoration,
    Header,
    Footer,
    SubstitutionDefinition,
    Target,
    Transition,
    Comment,
    SystemMessage,
    /// A tag with no defined translation.
    Unknown(String),
}

impl NodeKind {
    /// Maps a docutils tag name to a node kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "document" => NodeKind::Document,
            "section" => NodeKind::Section,
            "title" => NodeKind::Title,
            "subtitle" => NodeKind::Subtitle,
            "paragraph" => NodeKind::Paragraph,
            "#text" => NodeKind::Text,
            "bullet_list" => NodeKind::BulletList,
            "enumerated_list" => NodeKind::EnumeratedList,
            "list_item" => NodeKind::ListItem,
            "definition_list" => NodeKind::DefinitionList,
            "definition_list_item" => NodeKind::DefinitionListItem,
            "term" => NodeKind::Term,
            "definition" => NodeKind::Definition,
            "block_quote" => NodeKind::BlockQuote,
            "attribution" => NodeKind::Attribution,
            "topic" => NodeKind::Topic,
            "table" => NodeKind::Table,
            "tgroup" => NodeKind::TGroup,
            "colspec" => NodeKind::ColSpec,
            "thead" => NodeKind::THead,
            "tbody" => NodeKind::TBody,
            "row" => NodeKind::Row,
            "entry" => NodeKind::Entry,
            "reference" => NodeKind::Reference,
            "title_reference" => NodeKind::TitleReference,
            "strong" => NodeKind::Strong,
            "emphasis" => NodeKind::Emphasis,
            "literal" => NodeKind::Literal,
            "literal_block" => NodeKind::LiteralBlock,
            "inline" => NodeKind::Inline,
            "container" => NodeKind::Container,
            "image" => NodeKind::Image,
            "figure" => NodeKind::Figure,
            "caption" => NodeKind::Caption,
            "docinfo" => NodeKind::Docinfo,
            "author" => NodeKind::Author,
            "date" => NodeKind::Date,
            "version" => NodeKind::Version,
            "status" => NodeKind::Status,
            "copyright" => NodeKind::Copyright,
            "decoration" => NodeKind::Decoration,
            "header" => NodeKind::Header,
            "footer" => NodeKind::Footer,
            "substitution_definition" => NodeKind::SubstitutionDefinition,
            "target" => NodeKind::Target,
            "transition" => NodeKind::Transition,
            "comment" => NodeKind::Comment,
            "system_message" => NodeKind::SystemMessage,
            other => NodeKind::Unknown(other.to_string()),
        }
    }

    /// The docutils tag name of this kind.
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Section => "section",
            NodeKind::Title => "title",
            NodeKind::Subtitle => "subtitle",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "#text",
            NodeKind::BulletList => "bullet_list",
            NodeKind::EnumeratedList => "enumerated_list",
            NodeKind::ListItem => "list_item",
            NodeKind::DefinitionList => "definition_list",
            NodeKind::DefinitionListItem => "definition_list_item",
            NodeKind::Term => "term",
            NodeKind::Definition => "definition",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::Attribution => "attribution",
            NodeKind::Topic => "topic",
            NodeKind::Table => "table",
            NodeKind::TGroup => "tgroup",
            NodeKind::ColSpec => "colspec",
            NodeKind::THead => "thead",
            NodeKind::TBody => "tbody",
            NodeKind::Row => "row",
            NodeKind::Entry => "entry",
            NodeKind::Reference => "reference",
            NodeKind::TitleReference => "title_reference",
            NodeKind::Strong => "strong",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Literal => "literal",
            NodeKind::LiteralBlock => "literal_block",
            NodeKind::Inline => "inline",
            NodeKind::Container => "container",
            NodeKind::Image => "image",
            NodeKind::Figure => "figure",
            NodeKind::Caption => "caption",
            NodeKind::Docinfo => "docinfo",
            NodeKind::Author => "author",
            NodeKind::Date => "date",
            NodeKind::Version => "version",
            NodeKind::Status => "status",
            NodeKind::Copyright => "copyright",
            NodeKind::Decoration => "decoration",
            NodeKind::Header => "header",
            NodeKind::Footer => "footer",
            NodeKind::SubstitutionDefinition => "substitution_definition",
            NodeKind::Target => "target",
            NodeKind::Transition => "transition",
            NodeKind::Comment => "comment",
            NodeKind::SystemMessage => "system_message",
            NodeKind::Unknown(tag) => tag,
        }
    }

    /// Text elements hold inline content; their flattened text is joined without
    /// separators, and whitespace between their children is significant.
    pub fn is_text_element(&self) -> bool {
        matches!(
            self,
            NodeKind::Title
                | NodeKind::Subtitle
                | NodeKind::Paragraph
                | NodeKind::Term
                | NodeKind::Attribution
                | NodeKind::Reference
                | NodeKind::TitleReference
                | NodeKind::Strong
                | NodeKind::Emphasis
                | NodeKind::Literal
                | NodeKind::LiteralBlock
                | NodeKind::Inline
                | NodeKind::Caption
                | NodeKind::Author
                | NodeKind::Date
                | NodeKind::Version
                | NodeKind::Status
                | NodeKind::Copyright
                | NodeKind::Comment
                | NodeKind::Target
        )
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::from_tag(&tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One node of the source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub kind: NodeKind,

    /// Author-attached style tags (the docutils `classes` attribute).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Kind specific attributes (`uri`, `refuri`, `colwidth`, `cols`, `source`, ...).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Literal content of a `Text` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// An element node with no children, classes or attributes.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            classes: Vec::new(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// A leaf text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Parses an integer attribute, ignoring values that do not parse.
    pub fn attr_usize(&self, name: &str) -> Option<usize> {
        self.attr(name).and_then(|v| v.trim().parse().ok())
    }

    /// Parses a numeric attribute, ignoring values that do not parse.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(|v| v.trim().parse().ok())
    }

    /// All descendant text with structure discarded. Children of block
    /// containers are separated by a blank line, inline content is concatenated.
    pub fn flattened_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        let separator = if self.kind.is_text_element() { "" } else { "\n\n" };
        self.children
            .iter()
            .map(Node::flattened_text)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Children of the given kind.
    pub fn children_of<'a>(&'a self, kind: &'a NodeKind) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| &c.kind == kind)
    }
}
