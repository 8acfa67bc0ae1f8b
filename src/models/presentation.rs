use serde::{Deserialize, Serialize};

use crate::models::common::{inches, Emu, Size};
use crate::models::placeholder::LayoutKind;
use crate::models::slide::Slide;

/// A slide deck under construction.
/// Slides are only ever appended; only the last slide is mutated while building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// The size of every slide in the deck.
    pub page_size: Size,

    /// The title of the presentation, taken from the title slide if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The slides in the presentation, in order.
    pub slides: Vec<Slide>,
}

impl Default for Presentation {
    /// An empty deck with the stock 10in x 7.5in page size.
    fn default() -> Self {
        Self::with_size(inches(10.0), inches(7.5))
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: Emu, height: Emu) -> Self {
        Self {
            page_size: Size { width, height },
            title: None,
            slides: Vec::new(),
        }
    }

    pub fn slide_width(&self) -> Emu {
        self.page_size.width
    }

    pub fn slide_height(&self) -> Emu {
        self.page_size.height
    }

    /// Appends a new slide of the given layout and returns it.
    pub fn add_slide(&mut self, layout: LayoutKind) -> &mut Slide {
        let object_id = format!("slide{}", self.slides.len() + 1);
        let slide = Slide::new(object_id, layout, self.page_size.width, self.page_size.height);
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// The slide currently being built.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.last()
    }

    pub fn current_slide_mut(&mut self) -> Option<&mut Slide> {
        self.slides.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_slide_appends_and_becomes_current() {
        let mut deck = Presentation::new();
        assert!(deck.current_slide().is_none());
        deck.add_slide(LayoutKind::Title);
        deck.add_slide(LayoutKind::Segue).set_title("Intro");

        assert_eq!(deck.slides.len(), 2);
        let current = deck.current_slide().unwrap();
        assert_eq!(current.layout, LayoutKind::Segue);
        assert_eq!(current.title.as_deref(), Some("Intro"));
        assert_eq!(current.object_id, "slide2");
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let mut deck = Presentation::new();
        deck.add_slide(LayoutKind::Content).set_title("Hello");
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["pageSize"]["width"], 9_144_000);
        assert_eq!(json["slides"][0]["layout"], "CONTENT");
        assert_eq!(json["slides"][0]["title"], "Hello");
    }
}
