use thiserror::Error;

use crate::doctree::DoctreeError;
use crate::fetch::FetchError;
use crate::translator::TranslateError;

/// Represents errors that can occur anywhere between loading a doctree and
/// producing a deck.
#[derive(Error, Debug)]
pub enum Rst2SlidesError {
    /// The source tree could not be loaded.
    #[error("Failed to load doctree: {0}")]
    Doctree(#[from] DoctreeError),

    /// The translator hit a consistency fault and produced no deck.
    #[error("Conversion aborted: {0}")]
    Translate(#[from] TranslateError),

    /// The image fetcher could not be set up.
    #[error("Image fetcher error: {0}")]
    Fetch(#[from] FetchError),

    /// Error occurred while (de)serializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred, e.g. while reading a config or doctree file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, Rst2SlidesError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, Rst2SlidesError>;
