use thiserror::Error;

/// Errors that can occur while loading a source tree.
#[derive(Error, Debug)]
pub enum DoctreeError {
    #[error("Malformed doctree XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Expected a <document> root element, found <{0}>")]
    UnexpectedRoot(String),
}

/// A specialized Result type for doctree loading.
pub type Result<T> = std::result::Result<T, DoctreeError>;
