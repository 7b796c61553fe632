//! Axial diode with a cathode stripe.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const BODY_DARK: Rgba = Rgba::opaque(40, 40, 40);
const STRIPE_WHITE: Rgba = Rgba::opaque(245, 245, 245);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiodeKind {
    #[default]
    Rectifier,
    Zener,
    Schottky,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diode {
    kind: DiodeKind,
    length_mm: f64,
    width_mm: f64,
}

impl Diode {
    /// DO-41 style body, 6 x 2.5 mm.
    pub fn new(kind: DiodeKind) -> Self {
        Self {
            kind,
            length_mm: 6.0,
            width_mm: 2.5,
        }
    }

    pub fn kind(&self) -> DiodeKind {
        self.kind
    }
}

impl Component for Diode {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let length = self.length_mm * PX_PER_MM * scale;
        let width = self.width_mm * PX_PER_MM * scale;
        let lead_len = length / 3.0;
        let lead_y = width / 2.0;

        vec![
            Primitive::rect(
                Rect::new(0.0, 0.0, length, width),
                BODY_DARK,
                palette::OUTLINE,
                1.0 * scale,
            ),
            // Cathode stripe near the right end.
            Primitive::filled_rect(
                Rect::new(length * 0.85, 0.0, length * 0.95, width),
                STRIPE_WHITE,
            ),
            Primitive::segment(
                Point::new(-lead_len, lead_y),
                Point::new(0.0, lead_y),
                palette::PIN_SILVER,
                1.0 * scale,
            ),
            Primitive::segment(
                Point::new(length, lead_y),
                Point::new(length + lead_len, lead_y),
                palette::PIN_SILVER,
                1.0 * scale,
            ),
        ]
    }

    fn pin_count(&self) -> u32 {
        2
    }

    fn footprint(&self) -> Size {
        Size::new(self.length_mm, self.width_mm)
    }
}
