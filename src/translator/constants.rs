//! Style tag names with fixed meaning to the translator.

/// Selects the fixed-width font family.
pub const MONOSPACE: &str = "monospace";

/// Font size tags.
pub const TINY: &str = "tiny";
pub const SMALL: &str = "small";

/// Code token tags emitted by syntax highlighting.
pub const KEYWORD: &str = "keyword";
pub const OPERATOR: &str = "operator";
pub const NAME: &str = "name";
pub const LITERAL: &str = "literal";
pub const COMMENT: &str = "comment";
pub const PUNCTUATION: &str = "punctuation";
/// Qualifies `name`: the name is a function.
pub const FUNCTION: &str = "function";

/// Suffix turning a palette color into a highlight tag (`red-hl`).
pub const HIGHLIGHT_SUFFIX: &str = "-hl";

/// Either marks a two-content section; together with `float-right` text goes
/// to the second body.
pub const TWO_CONTENT_MARKERS: [&str; 2] = ["pptx-two-content", "two-content"];
pub const FLOAT_RIGHT: &str = "float-right";

/// Prefix of section tags that choose a slide layout.
pub const LAYOUT_TAG_PREFIX: &str = "pptx-";

/// Leading run written for a `status` docinfo field.
pub const STATUS_LABEL: &str = "Status: ";

/// Pictures are sized at this resolution when the image carries none we read.
pub const DEFAULT_IMAGE_DPI: f64 = 72.0;
