pub mod config;
pub mod converters;
pub mod doctree;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod translator;

pub use config::ConvertConfig;
pub use converters::outline;
pub use doctree::{parse_docutils_xml, Node, NodeKind};
pub use errors::{Result, Rst2SlidesError};
pub use fetch::{FetchError, HttpFetcher, ImageFetcher, OfflineFetcher};
pub use models::presentation::Presentation;
pub use translator::{
    convert_document, ConversionWarning, Converter, ConverterBuilder, TranslateError, Translation,
};
