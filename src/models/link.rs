use serde::{Deserialize, Serialize};

/// A hypertext link attached to a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Link {
    /// A link to the external web page at this URL.
    Url(String),
}
