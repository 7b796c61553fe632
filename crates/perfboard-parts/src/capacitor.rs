//! Capacitor variants: electrolytic can, ceramic disc, film box.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const ELECTROLYTIC_BLUE: Rgba = Rgba::opaque(0, 0, 139);
const CERAMIC_YELLOW: Rgba = Rgba::opaque(255, 255, 224);
const FILM_BLUE: Rgba = Rgba::opaque(173, 216, 230);
const MARK_WHITE: Rgba = Rgba::opaque(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapacitorStyle {
    #[default]
    Electrolytic,
    Ceramic,
    Film,
}

impl CapacitorStyle {
    /// Body footprint in millimeters.
    fn body_mm(self) -> Size {
        match self {
            Self::Electrolytic => Size::new(8.0, 8.0),
            Self::Ceramic => Size::new(5.0, 4.0),
            Self::Film => Size::new(10.0, 5.0),
        }
    }

    fn fill(self) -> Rgba {
        match self {
            Self::Electrolytic => ELECTROLYTIC_BLUE,
            Self::Ceramic => CERAMIC_YELLOW,
            Self::Film => FILM_BLUE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capacitor {
    farads: f64,
    style: CapacitorStyle,
}

impl Capacitor {
    pub fn new(farads: f64, style: CapacitorStyle) -> Self {
        Self { farads, style }
    }

    pub fn farads(&self) -> f64 {
        self.farads
    }

    pub fn style(&self) -> CapacitorStyle {
        self.style
    }
}

impl Component for Capacitor {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let body = self.style.body_mm();
        let w = body.width * PX_PER_MM * scale;
        let h = body.height * PX_PER_MM * scale;
        let lead_len = w / 4.0;
        let lead_y = h / 2.0;

        let mut out = Vec::with_capacity(5);
        match self.style {
            CapacitorStyle::Electrolytic => {
                // Cylindrical can seen from above, plus a polarity mark.
                let r = h / 2.0;
                out.push(Primitive::circle(
                    Point::new(r, r),
                    r,
                    self.style.fill(),
                    palette::OUTLINE,
                    1.0 * scale,
                ));
                let arm = r / 3.0;
                out.push(Primitive::segment(
                    Point::new(r - arm, r * 0.45),
                    Point::new(r + arm, r * 0.45),
                    MARK_WHITE,
                    2.0 * scale,
                ));
                out.push(Primitive::segment(
                    Point::new(r, r * 0.45 - arm),
                    Point::new(r, r * 0.45 + arm),
                    MARK_WHITE,
                    2.0 * scale,
                ));
            }
            CapacitorStyle::Ceramic | CapacitorStyle::Film => {
                out.push(Primitive::rect(
                    Rect::new(0.0, 0.0, w, h),
                    self.style.fill(),
                    palette::OUTLINE,
                    1.0 * scale,
                ));
            }
        }

        out.push(Primitive::segment(
            Point::new(-lead_len, lead_y),
            Point::new(0.0, lead_y),
            palette::PIN_SILVER,
            1.0 * scale,
        ));
        out.push(Primitive::segment(
            Point::new(w, lead_y),
            Point::new(w + lead_len, lead_y),
            palette::PIN_SILVER,
            1.0 * scale,
        ));
        out
    }

    fn pin_count(&self) -> u32 {
        2
    }

    fn footprint(&self) -> Size {
        self.style.body_mm()
    }
}
