//! Through-hole resistor with a computed 4-band color code.

use crate::value::color_bands;
use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const BODY_FILL: Rgba = Rgba::opaque(211, 211, 211);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resistor {
    ohms: f64,
    length_mm: f64,
    width_mm: f64,
}

impl Resistor {
    /// Standard axial body, 9 x 3 mm.
    pub fn new(ohms: f64) -> Self {
        Self::with_body(ohms, 9.0, 3.0)
    }

    pub fn with_body(ohms: f64, length_mm: f64, width_mm: f64) -> Self {
        Self {
            ohms,
            length_mm,
            width_mm,
        }
    }

    pub fn ohms(&self) -> f64 {
        self.ohms
    }
}

impl Component for Resistor {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let length = self.length_mm * PX_PER_MM * scale;
        let width = self.width_mm * PX_PER_MM * scale;
        let band_w = length / 12.0;
        let gap_w = length / 24.0;
        let lead_len = length / 4.0;

        let mut out = Vec::with_capacity(7);
        out.push(Primitive::rect(
            Rect::new(0.0, 0.0, length, width),
            BODY_FILL,
            palette::OUTLINE,
            1.0 * scale,
        ));

        let mut x = band_w;
        for band in color_bands(self.ohms) {
            out.push(Primitive::filled_rect(
                Rect::new(x, 0.0, x + band_w, width),
                band.color(),
            ));
            x += band_w + gap_w;
        }

        let lead_y = width / 2.0;
        out.push(Primitive::segment(
            Point::new(-lead_len, lead_y),
            Point::new(0.0, lead_y),
            palette::PIN_SILVER,
            1.0 * scale,
        ));
        out.push(Primitive::segment(
            Point::new(length, lead_y),
            Point::new(length + lead_len, lead_y),
            palette::PIN_SILVER,
            1.0 * scale,
        ));
        out
    }

    fn pin_count(&self) -> u32 {
        2
    }

    fn footprint(&self) -> Size {
        Size::new(self.length_mm, self.width_mm)
    }
}
