use thiserror::Error;

/// Fatal traversal-state consistency faults.
///
/// These mean the walker and the tree disagree about nesting; the conversion is
/// abandoned and no deck is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("List exit without a matching list enter")]
    ListUnderflow,
    #[error("Section exit without a matching section enter")]
    SectionUnderflow,
    #[error("Block quote exit without a matching block quote enter")]
    BlockQuoteUnderflow,
    #[error("Style tags popped out of order: pushed {expected:?}, found {found:?}")]
    StyleMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("<{tag}> used the table cursor outside an active table")]
    OutsideTable { tag: String },
    #[error("<{tag}> used the table cursor outside an active row")]
    OutsideRow { tag: String },
    #[error("The current slide has no {0}")]
    MissingRegion(String),
}

/// A specialized Result type for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// A recoverable, node-local problem. The node is skipped or degraded and the
/// traversal carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    #[error("No translation for <{tag}>; visiting its children unchanged")]
    UnknownNode { tag: String },
    #[error("Could not load image {reference}: {reason}")]
    ImageUnavailable { reference: String, reason: String },
    #[error("Malformed table: {reason}")]
    MalformedTable { reason: String },
    #[error("<{tag}> appeared before any slide exists; dropped")]
    NoSlide { tag: String },
    #[error("Unrecognized style tag {tag:?} ignored")]
    UnknownStyle { tag: String },
}
