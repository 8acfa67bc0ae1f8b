use serde::{Deserialize, Serialize};

/// A page element kind representing an embedded picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    /// Where the picture came from: a URL or a resolved file path.
    pub source: String,
    /// Native pixel width of the image.
    pub pixel_width: u32,
    /// Native pixel height of the image.
    pub pixel_height: u32,
    /// The encoded image bytes. Not serialized.
    #[serde(skip)]
    pub data: Vec<u8>,
}
