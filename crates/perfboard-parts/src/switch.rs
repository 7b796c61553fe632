//! Slide switch.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const BODY_GRAY: Rgba = Rgba::opaque(160, 160, 160);
const SLIDER_DARK: Rgba = Rgba::opaque(60, 60, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchPosition {
    #[default]
    Off,
    On,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switch {
    position: SwitchPosition,
    length_mm: f64,
    width_mm: f64,
}

impl Switch {
    pub fn new() -> Self {
        Self {
            position: SwitchPosition::Off,
            length_mm: 9.0,
            width_mm: 4.0,
        }
    }

    pub fn position(&self) -> SwitchPosition {
        self.position
    }

    pub fn toggle(&mut self) {
        self.position = match self.position {
            SwitchPosition::Off => SwitchPosition::On,
            SwitchPosition::On => SwitchPosition::Off,
        };
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Switch {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let w = self.length_mm * PX_PER_MM * scale;
        let h = self.width_mm * PX_PER_MM * scale;
        let leg_len = 2.0 * PX_PER_MM * scale;

        // Slider sits at one end or the other.
        let slider_x = match self.position {
            SwitchPosition::Off => w * 0.1,
            SwitchPosition::On => w * 0.55,
        };

        let mut out = vec![
            Primitive::rect(
                Rect::new(0.0, 0.0, w, h),
                BODY_GRAY,
                palette::OUTLINE,
                1.0 * scale,
            ),
            Primitive::filled_rect(
                Rect::new(slider_x, h * 0.2, slider_x + w * 0.35, h * 0.8),
                SLIDER_DARK,
            ),
        ];
        for i in 0..3 {
            let x = w * (0.2 + 0.3 * i as f64);
            out.push(Primitive::segment(
                Point::new(x, h),
                Point::new(x, h + leg_len),
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
        Size::new(self.length_mm, self.width_mm)
    }
}
