// Color Palette
// The fixed 12-slot palette available to tabs, plus the ColorToken boundary type
//
// Usage:
//   let token = ColorToken::parse(Some("color-03"));   // Palette(Color03)
//   let token = ColorToken::parse(Some("#ff00aa"));    // Literal("#ff00aa")
//   let token = ColorToken::parse(Some("color-99"));   // Unset (unknown slot)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Substring that marks a value as a palette reference rather than a raw CSS color
pub const PALETTE_MARKER: &str = "color-";

/// CSS class prefix emitted for palette-backed colors
pub const CLASS_PREFIX: &str = "tc-";

/// Error returned when a palette reference does not name one of the 12 slots
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette color `{0}`")]
pub struct PaletteColorError(pub String);

/// One of the twelve predefined palette slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Color01,
    Color02,
    Color03,
    Color04,
    Color05,
    Color06,
    Color07,
    Color08,
    Color09,
    Color10,
    Color11,
    Color12,
}

impl PaletteColor {
    /// All palette slots, in order
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Color01,
        PaletteColor::Color02,
        PaletteColor::Color03,
        PaletteColor::Color04,
        PaletteColor::Color05,
        PaletteColor::Color06,
        PaletteColor::Color07,
        PaletteColor::Color08,
        PaletteColor::Color09,
        PaletteColor::Color10,
        PaletteColor::Color11,
        PaletteColor::Color12,
    ];

    /// The palette identifier string, e.g. "color-01"
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Color01 => "color-01",
            PaletteColor::Color02 => "color-02",
            PaletteColor::Color03 => "color-03",
            PaletteColor::Color04 => "color-04",
            PaletteColor::Color05 => "color-05",
            PaletteColor::Color06 => "color-06",
            PaletteColor::Color07 => "color-07",
            PaletteColor::Color08 => "color-08",
            PaletteColor::Color09 => "color-09",
            PaletteColor::Color10 => "color-10",
            PaletteColor::Color11 => "color-11",
            PaletteColor::Color12 => "color-12",
        }
    }

    /// CSS class applied for a palette background, e.g. "tc-color-01"
    pub fn background_class(&self) -> String {
        format!("{}{}", CLASS_PREFIX, self.as_str())
    }

    /// CSS class applied for a palette label color, e.g. "tc-text-color-01"
    pub fn label_class(&self) -> String {
        format!("{}text-{}", CLASS_PREFIX, self.as_str())
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteColor {
    type Err = PaletteColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteColor::ALL
            .iter()
            .find(|slot| slot.as_str() == s)
            .copied()
            .ok_or_else(|| PaletteColorError(s.to_string()))
    }
}

/// A color input resolved once at the boundary
///
/// Inputs arrive as loose strings; this is the only place that decides whether
/// a value is a palette reference, a raw CSS color, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorToken {
    /// A validated palette slot
    Palette(PaletteColor),
    /// A raw CSS color keyword / hex string, passed through unchanged
    Literal(String),
    /// No color, or an unknown palette reference
    #[default]
    Unset,
}

impl ColorToken {
    /// Classify a raw input value
    ///
    /// A value containing the palette marker must name a real slot; anything
    /// else containing the marker degrades to `Unset` rather than leaking an
    /// unknown identifier downstream. Values without the marker are raw CSS
    /// colors and pass through as-is.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => ColorToken::Unset,
            Some(raw) if raw.is_empty() => ColorToken::Unset,
            Some(raw) if raw.contains(PALETTE_MARKER) => match raw.parse::<PaletteColor>() {
                Ok(slot) => ColorToken::Palette(slot),
                Err(err) => {
                    log::debug!("{err}, color left unset");
                    ColorToken::Unset
                }
            },
            Some(raw) => ColorToken::Literal(raw.to_string()),
        }
    }

    /// True when no color is carried
    pub fn is_unset(&self) -> bool {
        matches!(self, ColorToken::Unset)
    }

    /// The raw identifier/value, or "" when unset
    pub fn raw(&self) -> &str {
        match self {
            ColorToken::Palette(slot) => slot.as_str(),
            ColorToken::Literal(value) => value,
            ColorToken::Unset => "",
        }
    }
}
