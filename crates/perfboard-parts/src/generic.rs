//! Fallback part for components without a dedicated rendering.

use kurbo::{Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const BODY_GRAY: Rgba = Rgba::opaque(130, 130, 130);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericPart {
    width_mm: f64,
    height_mm: f64,
    pins: u32,
}

impl GenericPart {
    pub fn new(width_mm: f64, height_mm: f64, pins: u32) -> Self {
        Self {
            width_mm,
            height_mm,
            pins,
        }
    }
}

impl Component for GenericPart {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        vec![Primitive::rect(
            Rect::new(
                0.0,
                0.0,
                self.width_mm * PX_PER_MM * scale,
                self.height_mm * PX_PER_MM * scale,
            ),
            BODY_GRAY,
            palette::OUTLINE,
            1.0 * scale,
        )]
    }

    fn pin_count(&self) -> u32 {
        self.pins
    }

    fn footprint(&self) -> Size {
        Size::new(self.width_mm, self.height_mm)
    }
}
