//! Picture insertion: load the bytes, size them and center them on the slide.

use image::ImageReader;
use std::io::Cursor;

use super::constants::DEFAULT_IMAGE_DPI;
use super::error::ConversionWarning;
use super::walker::Translator;
use crate::doctree::Node;
use crate::fetch::FetchError;
use crate::models::common::{Emu, Frame, EMU_PER_INCH};
use crate::models::picture::Picture;

/// Remote references are recognized by their scheme separator.
fn is_remote(reference: &str) -> bool {
    reference.contains("://")
}

/// EMU extent of `pixels` at the assumed resolution.
fn pixels_to_emu(pixels: u32) -> Emu {
    (pixels as f64 * EMU_PER_INCH as f64 / DEFAULT_IMAGE_DPI).round() as Emu
}

/// Horizontally centered on the slide; vertically centered in the area below
/// the title buffer.
pub(crate) fn centered(width: Emu, height: Emu, slide_width: Emu, slide_height: Emu, title_buffer: Emu) -> Frame {
    Frame::new(
        (slide_width - width) / 2,
        (slide_height - title_buffer - height) / 2 + title_buffer,
        width,
        height,
    )
}

impl Translator<'_> {
    /// Adds the picture behind an image node. Every failure is a warning.
    pub(super) fn insert_image(&mut self, node: &Node) {
        let Some(reference) = node.attr("uri") else {
            self.warn(ConversionWarning::ImageUnavailable {
                reference: String::new(),
                reason: "image has no uri".into(),
            });
            return;
        };
        if self.deck.current_slide().is_none() {
            self.warn(ConversionWarning::NoSlide {
                tag: node.kind.tag().to_string(),
            });
            return;
        }

        let picture = match self.load_image(reference) {
            Ok(picture) => picture,
            Err(err) => {
                self.warn(ConversionWarning::ImageUnavailable {
                    reference: reference.to_string(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        let width = pixels_to_emu(picture.pixel_width);
        let height = pixels_to_emu(picture.pixel_height);
        let (slide_width, slide_height) = (self.deck.slide_width(), self.deck.slide_height());
        let title_buffer = self.config.title_buffer;
        if let Some(slide) = self.deck.current_slide_mut() {
            let index = slide.add_picture(picture, Frame::new(0, 0, width, height));
            if let Some(element) = slide.element_mut(index) {
                element.frame = centered(width, height, slide_width, slide_height, title_buffer);
                log::debug!("Placed picture {} at {:?}", element.object_id, element.frame);
            }
        }
    }

    fn load_image(&self, reference: &str) -> Result<Picture, FetchError> {
        let (source, data) = if is_remote(reference) {
            (reference.to_string(), self.fetcher.fetch(reference)?)
        } else {
            let path = self.base_dir.join(reference);
            let data = std::fs::read(&path)?;
            (path.display().to_string(), data)
        };
        let (pixel_width, pixel_height) = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Picture {
            source,
            pixel_width,
            pixel_height,
            data,
        })
    }
}
