use serde::{Deserialize, Serialize};

/// English Metric Units. 1 EMU = 1/914400 inch = 1/12700 pt.
pub type Emu = i64;

pub const EMU_PER_INCH: Emu = 914_400;
pub const EMU_PER_PT: Emu = 12_700;

/// Converts inches to EMU, rounding to the nearest unit.
pub fn inches(value: f64) -> Emu {
    (value * EMU_PER_INCH as f64).round() as Emu
}

/// Converts points to EMU, rounding to the nearest unit.
pub fn points(value: f64) -> Emu {
    (value * EMU_PER_PT as f64).round() as Emu
}

/// Position and extent of an element on a slide, all in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// The bottom edge (`top + height`).
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }

    /// Scales every component by independent horizontal and vertical factors.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Self {
            left: (self.left as f64 * sx).round() as Emu,
            top: (self.top as f64 * sy).round() as Emu,
            width: (self.width as f64 * sx).round() as Emu,
            height: (self.height as f64 * sy).round() as Emu,
        }
    }
}

/// A width and height in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: Emu,
    pub height: Emu,
}
