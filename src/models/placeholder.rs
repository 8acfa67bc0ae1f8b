use serde::{Deserialize, Serialize};

use crate::models::common::{Emu, Frame};
use crate::models::text::TextFrame;

/// The slide templates a deck can instantiate.
/// Indices follow the stock 4:3 template's slide layout order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutKind {
    /// Centered title with a subtitle box.
    Title,
    /// Title and one body region.
    #[default]
    Content,
    /// Section header: title with a short text region above it.
    Segue,
    /// Title and two side-by-side body regions.
    TwoContent,
}

/// The type of a body placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceholderType {
    /// Body text placeholder.
    Body,
    /// Subtitle placeholder of a title slide.
    Subtitle,
}

/// A text placeholder on a slide, with its own geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(rename = "type")]
    pub placeholder_type: PlaceholderType,
    /// The placeholder index within the layout (1 for the first body).
    pub index: u32,
    pub frame: Frame,
    pub text: TextFrame,
}

// Reference geometry, in EMU, of the stock 10in x 7.5in template.
const REFERENCE_WIDTH: Emu = 9_144_000;
const REFERENCE_HEIGHT: Emu = 6_858_000;

const TITLE_SLIDE_TITLE: Frame = Frame { left: 685_800, top: 2_130_425, width: 7_772_400, height: 1_470_025 };
const TITLE_SLIDE_SUBTITLE: Frame = Frame { left: 1_371_600, top: 3_886_200, width: 6_400_800, height: 1_752_600 };
const CONTENT_TITLE: Frame = Frame { left: 457_200, top: 274_638, width: 8_229_600, height: 1_143_000 };
const CONTENT_BODY: Frame = Frame { left: 457_200, top: 1_600_200, width: 8_229_600, height: 4_525_963 };
const SEGUE_TITLE: Frame = Frame { left: 722_313, top: 4_406_900, width: 7_772_400, height: 1_362_075 };
const SEGUE_BODY: Frame = Frame { left: 722_313, top: 2_906_713, width: 7_772_400, height: 1_500_187 };
const TWO_CONTENT_LEFT: Frame = Frame { left: 457_200, top: 1_600_200, width: 4_038_600, height: 4_525_963 };
const TWO_CONTENT_RIGHT: Frame = Frame { left: 4_648_200, top: 1_600_200, width: 4_038_600, height: 4_525_963 };

impl LayoutKind {
    /// Maps a section style tag to a layout, if the tag names one.
    pub fn from_style_tag(tag: &str) -> Option<Self> {
        match tag {
            "pptx-content" => Some(LayoutKind::Content),
            "pptx-segue" => Some(LayoutKind::Segue),
            "pptx-two-content" => Some(LayoutKind::TwoContent),
            _ => None,
        }
    }

    /// Title placeholder geometry scaled to the given slide size.
    pub fn title_frame(&self, slide_width: Emu, slide_height: Emu) -> Frame {
        let frame = match self {
            LayoutKind::Title => TITLE_SLIDE_TITLE,
            LayoutKind::Segue => SEGUE_TITLE,
            LayoutKind::Content | LayoutKind::TwoContent => CONTENT_TITLE,
        };
        scale_to(frame, slide_width, slide_height)
    }

    /// Fresh, empty body placeholders for a new slide of this layout.
    pub fn body_placeholders(&self, slide_width: Emu, slide_height: Emu) -> Vec<Placeholder> {
        let frames: &[Frame] = match self {
            LayoutKind::Title => &[TITLE_SLIDE_SUBTITLE],
            LayoutKind::Content => &[CONTENT_BODY],
            LayoutKind::Segue => &[SEGUE_BODY],
            LayoutKind::TwoContent => &[TWO_CONTENT_LEFT, TWO_CONTENT_RIGHT],
        };
        let placeholder_type = match self {
            LayoutKind::Title => PlaceholderType::Subtitle,
            _ => PlaceholderType::Body,
        };
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| Placeholder {
                placeholder_type,
                index: i as u32 + 1,
                frame: scale_to(*frame, slide_width, slide_height),
                text: TextFrame::default(),
            })
            .collect()
    }
}

fn scale_to(frame: Frame, slide_width: Emu, slide_height: Emu) -> Frame {
    if slide_width == REFERENCE_WIDTH && slide_height == REFERENCE_HEIGHT {
        return frame;
    }
    frame.scaled(
        slide_width as f64 / REFERENCE_WIDTH as f64,
        slide_height as f64 / REFERENCE_HEIGHT as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_content_has_two_bodies() {
        let bodies = LayoutKind::TwoContent.body_placeholders(REFERENCE_WIDTH, REFERENCE_HEIGHT);
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[1].index, 2);
        assert!(bodies[1].frame.left > bodies[0].frame.left);
        let segue = LayoutKind::Segue.body_placeholders(REFERENCE_WIDTH, REFERENCE_HEIGHT);
        assert_eq!(segue.len(), 1);
    }

    #[test]
    fn title_layout_body_is_a_subtitle() {
        let bodies = LayoutKind::Title.body_placeholders(REFERENCE_WIDTH, REFERENCE_HEIGHT);
        assert_eq!(bodies[0].placeholder_type, PlaceholderType::Subtitle);
    }

    #[test]
    fn geometry_scales_with_slide_size() {
        let wide = LayoutKind::Content.body_placeholders(REFERENCE_WIDTH * 2, REFERENCE_HEIGHT);
        assert_eq!(wide[0].frame.width, CONTENT_BODY.width * 2);
        assert_eq!(wide[0].frame.height, CONTENT_BODY.height);
    }

    #[test]
    fn style_tags_select_layouts() {
        assert_eq!(LayoutKind::from_style_tag("pptx-segue"), Some(LayoutKind::Segue));
        assert_eq!(LayoutKind::from_style_tag("pptx-two-content"), Some(LayoutKind::TwoContent));
        assert_eq!(LayoutKind::from_style_tag("pptx-content"), Some(LayoutKind::Content));
        assert_eq!(LayoutKind::from_style_tag("pptx-unknown"), None);
    }
}
