//! TO-92 transistor.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const CASE_BLACK: Rgba = Rgba::opaque(30, 30, 30);
const FLAT_GRAY: Rgba = Rgba::opaque(70, 70, 70);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransistorPolarity {
    #[default]
    Npn,
    Pnp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transistor {
    polarity: TransistorPolarity,
    /// TO-92 can diameter in millimeters.
    diameter_mm: f64,
}

impl Transistor {
    pub fn new(polarity: TransistorPolarity) -> Self {
        Self {
            polarity,
            diameter_mm: 5.0,
        }
    }

    pub fn polarity(&self) -> TransistorPolarity {
        self.polarity
    }
}

impl Component for Transistor {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let d = self.diameter_mm * PX_PER_MM * scale;
        let r = d / 2.0;
        let center = Point::new(r, r);
        let leg_len = 3.0 * PX_PER_MM * scale;

        let mut out = vec![
            Primitive::circle(center, r, CASE_BLACK, palette::OUTLINE, 1.0 * scale),
            // Flat face of the TO-92 can.
            Primitive::filled_rect(Rect::new(0.0, d * 0.8, d, d), FLAT_GRAY),
        ];
        // Emitter, base, collector legs.
        for i in 0..3 {
            let x = d * (0.25 + 0.25 * i as f64);
            out.push(Primitive::segment(
                Point::new(x, d),
                Point::new(x, d + leg_len),
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
        Size::new(self.diameter_mm, self.diameter_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_legs() {
        let prims = Transistor::new(TransistorPolarity::Npn).render(1.0);
        let legs = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Segment(_)))
            .count();
        assert_eq!(legs, 3);
        assert_eq!(Transistor::new(TransistorPolarity::Pnp).pin_count(), 3);
    }
}
