//! Renderer-agnostic visual primitives.
//!
//! The core never draws; every model produces an ordered list of these
//! primitives (back to front) and the rendering surface interprets them.

use kurbo::{Circle, Line, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Board and part palette.
pub mod palette {
    use super::Rgba;

    pub const BOARD_GREEN: Rgba = Rgba::opaque(144, 238, 144);
    pub const BOARD_BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const HOLE_GRAY: Rgba = Rgba::opaque(128, 128, 128);
    pub const COPPER: Rgba = Rgba::opaque(184, 115, 51);
    pub const WIRE_RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const PIN_SILVER: Rgba = Rgba::opaque(192, 192, 192);
    pub const OUTLINE: Rgba = Rgba::black();
}

/// A filled and/or stroked rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrim {
    pub rect: Rect,
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: f64,
}

/// A filled and/or stroked circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrim {
    pub circle: Circle,
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub stroke_width: f64,
}

/// A stroked line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPrim {
    pub line: Line,
    pub stroke: Rgba,
    pub stroke_width: f64,
}

/// One drawable element. Lists of primitives are ordered back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Rect(RectPrim),
    Circle(CirclePrim),
    Segment(SegmentPrim),
}

impl Primitive {
    /// Filled rectangle with an outline.
    pub fn rect(rect: Rect, fill: Rgba, stroke: Rgba, stroke_width: f64) -> Self {
        Self::Rect(RectPrim {
            rect,
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width,
        })
    }

    /// Fill-only rectangle.
    pub fn filled_rect(rect: Rect, fill: Rgba) -> Self {
        Self::Rect(RectPrim {
            rect,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        })
    }

    /// Filled circle with an outline.
    pub fn circle(center: Point, radius: f64, fill: Rgba, stroke: Rgba, stroke_width: f64) -> Self {
        Self::Circle(CirclePrim {
            circle: Circle::new(center, radius),
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width,
        })
    }

    /// Stroked line segment.
    pub fn segment(from: Point, to: Point, stroke: Rgba, stroke_width: f64) -> Self {
        Self::Segment(SegmentPrim {
            line: Line::new(from, to),
            stroke,
            stroke_width,
        })
    }

    /// Translate the primitive by an offset, in place.
    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Self::Rect(p) => p.rect = p.rect + offset,
            Self::Circle(p) => p.circle.center += offset,
            Self::Segment(p) => {
                p.line.p0 += offset;
                p.line.p1 += offset;
            }
        }
    }

    /// Bounding box of the primitive, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(p) => p.rect,
            Self::Circle(p) => {
                let c = p.circle.center;
                let r = p.circle.radius;
                Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
            }
            Self::Segment(p) => Rect::from_points(p.line.p0, p.line.p1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_rect() {
        let mut prim = Primitive::filled_rect(Rect::new(0.0, 0.0, 10.0, 10.0), palette::COPPER);
        prim.translate(Vec2::new(5.0, 7.0));
        assert_eq!(prim.bounds(), Rect::new(5.0, 7.0, 15.0, 17.0));
    }

    #[test]
    fn test_translate_segment() {
        let mut prim = Primitive::segment(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            palette::WIRE_RED,
            1.0,
        );
        prim.translate(Vec2::new(1.0, 1.0));
        assert_eq!(prim.bounds(), Rect::new(1.0, 1.0, 5.0, 1.0));
    }

    #[test]
    fn test_circle_bounds() {
        let prim = Primitive::circle(
            Point::new(10.0, 10.0),
            2.5,
            palette::HOLE_GRAY,
            palette::OUTLINE,
            1.0,
        );
        assert_eq!(prim.bounds(), Rect::new(7.5, 7.5, 12.5, 12.5));
    }

    #[test]
    fn test_color_roundtrip() {
        let rgba = palette::COPPER;
        let color: Color = rgba.into();
        let back: Rgba = color.into();
        assert_eq!(back, rgba);
    }
}
