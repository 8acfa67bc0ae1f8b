use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit RGB color.
/// Serialized as a six digit hex string (`"C00000"`), the form slide XML uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Error produced when a string is not a valid `RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid RGB hex color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for RgbColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!("C00000".parse::<RgbColor>(), Ok(RgbColor::new(0xC0, 0, 0)));
        assert_eq!("#4472c4".parse::<RgbColor>(), Ok(RgbColor::new(0x44, 0x72, 0xC4)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("C0000".parse::<RgbColor>().is_err());
        assert!("GG0000".parse::<RgbColor>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(1, 2, 255)).unwrap();
        assert_eq!(json, "\"0102FF\"");
        let back: RgbColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RgbColor::new(1, 2, 255));
    }
}
