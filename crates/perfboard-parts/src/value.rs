//! Physical-unit value parsing and resistor color codes.
//!
//! Presentation-side utilities, deliberately outside the geometry core so
//! they can be tested on their own. Unlike the usual "fall back to 1k"
//! behavior of hobbyist tools, unparsable input is a typed error.

use perfboard_core::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure for resistance/capacitance strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("empty value string")]
    Empty,
    #[error("unparsable value `{0}`")]
    Unparsable(String),
    #[error("value must be positive, got `{0}`")]
    NonPositive(String),
}

/// Parse a resistance string like `"470"`, `"4.7k"`, `"1M"` or `"2,2k"`
/// (comma decimal separator) into ohms. The unit suffix `Ohm` is ignored.
pub fn parse_resistance(input: &str) -> Result<f64, ValueError> {
    let cleaned = input.trim().trim_end_matches("Ohm").trim().replace(',', ".");
    if cleaned.is_empty() {
        return Err(ValueError::Empty);
    }
    let lower = cleaned.to_lowercase();
    // `m`/`M` both mean mega here; milliohm parts do not appear on perfboard.
    let (digits, multiplier) = if let Some(stripped) = lower.strip_suffix('k') {
        (stripped, 1e3)
    } else if let Some(stripped) = lower.strip_suffix('m') {
        (stripped, 1e6)
    } else {
        (lower.as_str(), 1.0)
    };
    let value: f64 = digits
        .trim()
        .parse()
        .map_err(|_| ValueError::Unparsable(input.to_string()))?;
    if value <= 0.0 || !value.is_finite() {
        return Err(ValueError::NonPositive(input.to_string()));
    }
    Ok(value * multiplier)
}

/// Parse a capacitance string like `"100u"`, `"22n"`, `"10p"` or `"4.7m"`
/// into farads. A trailing `F` is ignored.
pub fn parse_capacitance(input: &str) -> Result<f64, ValueError> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Err(ValueError::Empty);
    }
    let lower = cleaned.to_lowercase();
    let lower = lower.strip_suffix('f').unwrap_or(&lower);
    let (digits, multiplier) = if let Some(s) = lower.strip_suffix('p') {
        (s, 1e-12)
    } else if let Some(s) = lower.strip_suffix('n') {
        (s, 1e-9)
    } else if let Some(s) = lower.strip_suffix('u').or_else(|| lower.strip_suffix('µ')) {
        (s, 1e-6)
    } else if let Some(s) = lower.strip_suffix('m') {
        (s, 1e-3)
    } else {
        (lower, 1.0)
    };
    let value: f64 = digits
        .trim()
        .parse()
        .map_err(|_| ValueError::Unparsable(input.to_string()))?;
    if value <= 0.0 || !value.is_finite() {
        return Err(ValueError::NonPositive(input.to_string()));
    }
    Ok(value * multiplier)
}

/// One ring of the 4-band resistor color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
}

impl Band {
    fn digit(digit: u32) -> Self {
        match digit {
            0 => Self::Black,
            1 => Self::Brown,
            2 => Self::Red,
            3 => Self::Orange,
            4 => Self::Yellow,
            5 => Self::Green,
            6 => Self::Blue,
            7 => Self::Violet,
            8 => Self::Gray,
            _ => Self::White,
        }
    }

    /// Paint color for the band.
    pub fn color(self) -> Rgba {
        match self {
            Self::Black => Rgba::opaque(0, 0, 0),
            Self::Brown => Rgba::opaque(150, 75, 0),
            Self::Red => Rgba::opaque(255, 0, 0),
            Self::Orange => Rgba::opaque(255, 165, 0),
            Self::Yellow => Rgba::opaque(255, 255, 0),
            Self::Green => Rgba::opaque(0, 128, 0),
            Self::Blue => Rgba::opaque(0, 0, 255),
            Self::Violet => Rgba::opaque(238, 130, 238),
            Self::Gray => Rgba::opaque(128, 128, 128),
            Self::White => Rgba::opaque(255, 255, 255),
            Self::Gold => Rgba::opaque(255, 215, 0),
        }
    }
}

/// 4-band color code for a +/-5% resistor: two significant digits, a decade
/// multiplier, and a gold tolerance ring. Values are normalized to two
/// significant digits first, so `4.7k` reads yellow-violet-red.
pub fn color_bands(ohms: f64) -> [Band; 4] {
    let ohms = ohms.max(0.0);
    if ohms < 1.0 {
        return [Band::Black, Band::Black, Band::Black, Band::Gold];
    }
    let mut exponent = 0u32;
    let mut significand = ohms;
    while significand >= 100.0 {
        significand /= 10.0;
        exponent += 1;
    }
    while significand < 10.0 {
        significand *= 10.0;
        // Sub-10-ohm values borrow a digit from the multiplier.
        if exponent == 0 {
            break;
        }
        exponent -= 1;
    }
    let two_digits = significand.round() as u32;
    [
        Band::digit(two_digits / 10),
        Band::digit(two_digits % 10),
        Band::digit(exponent.min(9)),
        Band::Gold,
    ]
}
