//! The polymorphic component capability.
//!
//! Concrete parts (resistors, chips, ...) live outside the core; the placement
//! engine only needs this narrow surface. Footprints are physical millimeter
//! sizes; `render` produces primitives in local pixel coordinates with the
//! part's origin at (0, 0).

use crate::primitives::Primitive;
use kurbo::Size;
use std::fmt::Debug;

/// A placeable electronic component.
pub trait Component: Debug + Send + Sync {
    /// Visual description of the part at the given scale factor, back to
    /// front, origin at the part's top-left corner.
    fn render(&self, scale: f64) -> Vec<Primitive>;

    /// Number of electrical pins.
    fn pin_count(&self) -> u32;

    /// Physical size the part occupies on the board, in millimeters.
    fn footprint(&self) -> Size;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::primitives::{Primitive, palette};
    use kurbo::Rect;

    /// Minimal two-pin part used by placement tests.
    #[derive(Debug, Clone)]
    pub struct TestPart {
        pub footprint: Size,
    }

    impl TestPart {
        pub fn new() -> Self {
            Self {
                footprint: Size::new(10.0, 5.0),
            }
        }
    }

    impl Component for TestPart {
        fn render(&self, scale: f64) -> Vec<Primitive> {
            vec![Primitive::filled_rect(
                Rect::new(
                    0.0,
                    0.0,
                    self.footprint.width * scale,
                    self.footprint.height * scale,
                ),
                palette::PIN_SILVER,
            )]
        }

        fn pin_count(&self) -> u32 {
            2
        }

        fn footprint(&self) -> Size {
            self.footprint
        }
    }
}
