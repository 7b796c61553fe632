//! Dual in-line chip packages.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba, STANDARD_PITCH_MM};
use serde::{Deserialize, Serialize};

const BODY_SLATE: Rgba = Rgba::opaque(47, 79, 79);
const NOTCH_GRAY: Rgba = Rgba::opaque(110, 110, 110);
const PIN1_WHITE: Rgba = Rgba::opaque(255, 255, 255);

/// Placement orientation. Diagonals are kept for parity with the size
/// presets even though most parts sit horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    DiagonalUp,
    DiagonalDown,
}

impl Orientation {
    pub fn angle_deg(self) -> f64 {
        match self {
            Self::Horizontal => 0.0,
            Self::Vertical => 90.0,
            Self::DiagonalUp => 45.0,
            Self::DiagonalDown => -45.0,
        }
    }
}

/// DIP package sizes. Display names and typical-chip notes live in the
/// labels table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DipPackage {
    Dip4,
    Dip6,
    #[default]
    Dip8,
    Dip10,
    Dip12,
    Dip14,
    Dip16,
    Dip18,
    Dip20,
    Dip22,
    Dip24,
    Dip28,
    Dip40,
}

impl DipPackage {
    pub fn pin_count(self) -> u32 {
        match self {
            Self::Dip4 => 4,
            Self::Dip6 => 6,
            Self::Dip8 => 8,
            Self::Dip10 => 10,
            Self::Dip12 => 12,
            Self::Dip14 => 14,
            Self::Dip16 => 16,
            Self::Dip18 => 18,
            Self::Dip20 => 20,
            Self::Dip22 => 22,
            Self::Dip24 => 24,
            Self::Dip28 => 28,
            Self::Dip40 => 40,
        }
    }

    pub fn pins_per_side(self) -> u32 {
        self.pin_count() / 2
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DipChip {
    package: DipPackage,
    orientation: Orientation,
}

impl DipChip {
    pub fn new(package: DipPackage, orientation: Orientation) -> Self {
        Self {
            package,
            orientation,
        }
    }

    pub fn package(&self) -> DipPackage {
        self.package
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Body size before orientation: one pin row per long side, pins on the
    /// standard 2.54 mm pitch plus end margins.
    fn body_mm(&self) -> Size {
        let long = self.package.pins_per_side() as f64 * STANDARD_PITCH_MM + 2.0;
        let short = 10.0;
        match self.orientation {
            Orientation::Vertical => Size::new(long, short),
            _ => Size::new(short, long),
        }
    }
}

impl Component for DipChip {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let body = self.body_mm();
        let w = body.width * PX_PER_MM * scale;
        let h = body.height * PX_PER_MM * scale;
        let pins_per_side = self.package.pins_per_side();
        let pin_len = 3.0 * scale;

        let mut out = Vec::with_capacity(pins_per_side as usize * 2 + 3);
        out.push(Primitive::rect(
            Rect::new(0.0, 0.0, w, h),
            BODY_SLATE,
            palette::OUTLINE,
            1.0 * scale,
        ));
        // Pin-1 marker and orientation notch.
        out.push(Primitive::circle(
            Point::new(w * 0.15, h * 0.15),
            2.0 * scale,
            PIN1_WHITE,
            palette::OUTLINE,
            0.5 * scale,
        ));
        out.push(Primitive::filled_rect(
            Rect::new(w * 0.4, 0.0, w * 0.6, 3.0 * scale),
            NOTCH_GRAY,
        ));

        let vertical = self.orientation == Orientation::Vertical;
        for i in 0..pins_per_side {
            let t = (i + 1) as f64 / (pins_per_side + 1) as f64;
            if vertical {
                // Pin rows along the top and bottom edges.
                let x = w * t;
                out.push(Primitive::segment(
                    Point::new(x, -pin_len),
                    Point::new(x, 0.0),
                    palette::PIN_SILVER,
                    1.0 * scale,
                ));
                out.push(Primitive::segment(
                    Point::new(x, h),
                    Point::new(x, h + pin_len),
                    palette::PIN_SILVER,
                    1.0 * scale,
                ));
            } else {
                let y = h * t;
                out.push(Primitive::segment(
                    Point::new(-pin_len, y),
                    Point::new(0.0, y),
                    palette::PIN_SILVER,
                    1.0 * scale,
                ));
                out.push(Primitive::segment(
                    Point::new(w, y),
                    Point::new(w + pin_len, y),
                    palette::PIN_SILVER,
                    1.0 * scale,
                ));
            }
        }
        out
    }

    fn pin_count(&self) -> u32 {
        self.package.pin_count()
    }

    fn footprint(&self) -> Size {
        self.body_mm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_rows_match_package() {
        let chip = DipChip::new(DipPackage::Dip8, Orientation::Horizontal);
        let pins = chip
            .render(1.0)
            .iter()
            .filter(|p| matches!(p, Primitive::Segment(_)))
            .count();
        assert_eq!(pins, 8);
        assert_eq!(chip.pin_count(), 8);
    }

    #[test]
    fn test_vertical_swaps_footprint() {
        let horizontal = DipChip::new(DipPackage::Dip16, Orientation::Horizontal).footprint();
        let vertical = DipChip::new(DipPackage::Dip16, Orientation::Vertical).footprint();
        assert_eq!(horizontal.width, vertical.height);
        assert_eq!(horizontal.height, vertical.width);
    }

    #[test]
    fn test_footprint_grows_with_pins() {
        let small = DipChip::new(DipPackage::Dip8, Orientation::Horizontal).footprint();
        let large = DipChip::new(DipPackage::Dip40, Orientation::Horizontal).footprint();
        assert!(large.height > small.height);
    }

    #[test]
    fn test_orientation_angles() {
        assert_eq!(Orientation::Horizontal.angle_deg(), 0.0);
        assert_eq!(Orientation::Vertical.angle_deg(), 90.0);
        assert_eq!(Orientation::DiagonalDown.angle_deg(), -45.0);
    }
}
