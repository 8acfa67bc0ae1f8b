//! Retrieval of remote image bytes.

use std::time::Duration;
use thiserror::Error;

/// Why an image could not be obtained.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error originating from the underlying HTTP client (`reqwest`).
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not an image format we can size.
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Remote fetching is disabled or unsupported for this reference.
    #[error("Cannot fetch {0}")]
    Unsupported(String),
}

/// Gives the bytes behind an image reference, or a typed failure.
///
/// Every call blocks; a slow fetch only delays the node that asked for it.
pub trait ImageFetcher {
    fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches `http(s)://` references with a blocking `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        log::debug!("Fetching image {}", reference);
        let response = self.client.get(reference).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: reference.to_string(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Refuses every remote reference. Useful for offline conversions.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetcher;

impl ImageFetcher for OfflineFetcher {
    fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Unsupported(reference.to_string()))
    }
}
