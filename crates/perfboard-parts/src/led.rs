//! LED packages: 3 mm / 5 mm domes, SMD chip, high-power emitter.

use kurbo::{Point, Rect, Size};
use perfboard_core::primitives::{Primitive, palette};
use perfboard_core::{Component, PX_PER_MM, Rgba};
use serde::{Deserialize, Serialize};

const DOME_STROKE: Rgba = Rgba::opaque(128, 128, 128);
const DARK_CORE: Rgba = Rgba::opaque(64, 64, 64);
const SMD_BODY: Rgba = Rgba::opaque(255, 255, 255);
const HEATSINK: Rgba = Rgba::opaque(80, 80, 80);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LedSize {
    Mm3,
    #[default]
    Mm5,
    Smd,
    HighPower,
}

impl LedSize {
    /// Package footprint in millimeters.
    fn body_mm(self) -> Size {
        match self {
            Self::Mm3 => Size::new(3.0, 3.0),
            Self::Mm5 => Size::new(5.0, 5.0),
            Self::Smd => Size::new(2.0, 1.25),
            Self::HighPower => Size::new(8.0, 8.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LedColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Rgb,
}

impl LedColor {
    pub fn color(self) -> Rgba {
        match self {
            Self::Red => Rgba::opaque(255, 0, 0),
            Self::Green => Rgba::opaque(0, 255, 0),
            Self::Blue => Rgba::opaque(0, 0, 255),
            Self::Yellow => Rgba::opaque(255, 255, 0),
            Self::White => Rgba::opaque(255, 255, 255),
            Self::Rgb => Rgba::opaque(255, 0, 255),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Led {
    size: LedSize,
    color: LedColor,
    /// Whether the emitting core is drawn lit.
    lit: bool,
}

impl Led {
    pub fn new(size: LedSize, color: LedColor) -> Self {
        Self {
            size,
            color,
            lit: false,
        }
    }

    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }

    fn core_color(&self) -> Rgba {
        if self.lit { self.color.color() } else { DARK_CORE }
    }
}

impl Component for Led {
    fn render(&self, scale: f64) -> Vec<Primitive> {
        let body = self.size.body_mm();
        let w = body.width * PX_PER_MM * scale;
        let h = body.height * PX_PER_MM * scale;

        match self.size {
            LedSize::Mm3 | LedSize::Mm5 => {
                let r = w / 2.0;
                let center = Point::new(r, r);
                vec![
                    Primitive::circle(center, r, self.color.color(), DOME_STROKE, 1.0 * scale),
                    Primitive::circle(
                        center,
                        r / 3.0,
                        self.core_color(),
                        DOME_STROKE,
                        0.5 * scale,
                    ),
                    // Anode and cathode legs below the dome.
                    Primitive::segment(
                        Point::new(r * 0.6, h),
                        Point::new(r * 0.6, h + 3.0 * PX_PER_MM * scale),
                        palette::PIN_SILVER,
                        1.0 * scale,
                    ),
                    Primitive::segment(
                        Point::new(r * 1.4, h),
                        Point::new(r * 1.4, h + 2.0 * PX_PER_MM * scale),
                        palette::PIN_SILVER,
                        1.0 * scale,
                    ),
                ]
            }
            LedSize::Smd => vec![
                Primitive::rect(
                    Rect::new(0.0, 0.0, w, h),
                    SMD_BODY,
                    palette::OUTLINE,
                    0.5 * scale,
                ),
                Primitive::filled_rect(
                    Rect::new(w * 0.3, h * 0.3, w * 0.7, h * 0.7),
                    self.core_color(),
                ),
            ],
            LedSize::HighPower => vec![
                Primitive::rect(
                    Rect::new(0.0, 0.0, w, h),
                    HEATSINK,
                    palette::OUTLINE,
                    1.0 * scale,
                ),
                Primitive::filled_rect(
                    Rect::new(w * 0.25, h * 0.25, w * 0.75, h * 0.75),
                    self.core_color(),
                ),
                Primitive::circle(
                    Point::new(w / 2.0, h / 2.0),
                    w * 0.3,
                    self.color.color(),
                    DOME_STROKE,
                    0.5 * scale,
                ),
            ],
        }
    }

    fn pin_count(&self) -> u32 {
        match self.size {
            LedSize::HighPower => 4,
            _ => 2,
        }
    }

    fn footprint(&self) -> Size {
        self.size.body_mm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dome_has_legs() {
        let prims = Led::new(LedSize::Mm5, LedColor::Red).render(1.0);
        assert_eq!(prims.len(), 4);
    }

    #[test]
    fn test_smd_is_flat() {
        let prims = Led::new(LedSize::Smd, LedColor::Green).render(1.0);
        assert_eq!(prims.len(), 2);
        assert_eq!(
            Led::new(LedSize::Smd, LedColor::Green).footprint(),
            Size::new(2.0, 1.25)
        );
    }

    #[test]
    fn test_lit_core_uses_led_color() {
        let mut led = Led::new(LedSize::Mm5, LedColor::Blue);
        led.set_lit(true);
        let Primitive::Circle(core) = &led.render(1.0)[1] else {
            panic!("expected core circle");
        };
        assert_eq!(core.fill, Some(LedColor::Blue.color()));
    }

    #[test]
    fn test_high_power_pin_count() {
        assert_eq!(Led::new(LedSize::HighPower, LedColor::White).pin_count(), 4);
    }
}
