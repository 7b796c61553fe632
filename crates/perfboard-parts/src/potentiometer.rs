//! Rotary potentiometer.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const BODY_BLUE: Rgba = Rgba::opaque(30, 60, 160);
const SHAFT_GRAY: Rgba = Rgba::opaque(200, 200, 200);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Potentiometer {
    max_ohms: f64,
    body_mm: f64,
}

impl Potentiometer {
    /// Standard 9 mm trimmer body.
    pub fn new(max_ohms: f64) -> Self {
        Self {
            max_ohms,
            body_mm: 9.0,
        }
    }

    pub fn max_ohms(&self) -> f64 {
        self.max_ohms
    }
}

impl Component for Potentiometer {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let s = self.body_mm * PX_PER_MM * scale;
        let leg_len = 2.5 * PX_PER_MM * scale;
        let center = Point::new(s / 2.0, s / 2.0);

        let mut out = vec![
            Primitive::rect(
                Rect::new(0.0, 0.0, s, s),
                BODY_BLUE,
                palette::OUTLINE,
                1.0 * scale,
            ),
            // Adjustment shaft.
            Primitive::circle(center, s * 0.3, SHAFT_GRAY, palette::OUTLINE, 1.0 * scale),
            Primitive::segment(
                center,
                Point::new(s / 2.0, s * 0.2),
                palette::OUTLINE,
                1.0 * scale,
            ),
        ];
        for i in 0..3 {
            let x = s * (0.2 + 0.3 * i as f64);
            out.push(Primitive::segment(
                Point::new(x, s),
                Point::new(x, s + leg_len),
                palette::PIN_SILVER,
                1.0 * scale,
            ));
        }
        out
    }

    fn pin_count(&self) -> u32 {
        3
    }

    fn footprint(&self) -> Size {
        Size::new(self.body_mm, self.body_mm)
    }
}
