//! Jumper wire lifecycle: committed wires plus one in-progress draft.

use crate::coords;
use crate::primitives::{Primitive, palette};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Wire stroke width in render pixels at scale 1.0.
const WIRE_WIDTH_PX: f64 = 1.5;

/// A committed jumper between two board points, in millimeters.
/// Immutable once committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub start_mm: Point,
    pub end_mm: Point,
}

/// The drawing state machine: Idle (no draft) or Drawing (one draft wire
/// whose open end follows the pointer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireModel {
    jumpers: Vec<Wire>,
    draft: Option<Wire>,
}

impl WireModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new draft anchored at the given point. If a draft is already in
    /// progress it is discarded and drawing restarts from the new anchor; the
    /// half-drawn wire never reaches the committed list.
    pub fn start_wire(&mut self, x_mm: f64, y_mm: f64) {
        if self.draft.is_some() {
            log::debug!("discarding in-progress draft wire, restarting at ({x_mm}, {y_mm})");
        }
        let anchor = Point::new(x_mm, y_mm);
        self.draft = Some(Wire {
            start_mm: anchor,
            end_mm: anchor,
        });
    }

    /// Move the draft's open end. No-op when Idle.
    pub fn update_wire(&mut self, x_mm: f64, y_mm: f64) {
        if let Some(draft) = &mut self.draft {
            draft.end_mm = Point::new(x_mm, y_mm);
        }
    }

    /// Commit the draft with the given end point. No-op when Idle.
    pub fn finish_wire(&mut self, x_mm: f64, y_mm: f64) {
        if let Some(mut draft) = self.draft.take() {
            draft.end_mm = Point::new(x_mm, y_mm);
            self.jumpers.push(draft);
        }
    }

    /// Drop all committed wires. An active draft is unaffected.
    pub fn clear_wires(&mut self) {
        self.jumpers.clear();
    }

    pub fn jumpers(&self) -> &[Wire] {
        &self.jumpers
    }

    pub fn draft(&self) -> Option<&Wire> {
        self.draft.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Visual description of committed wires followed by the draft preview.
    /// Endpoints are aligned to the hole grid of the given spacing.
    pub fn render(&self, hole_spacing_mm: f64, scale: f64) -> Vec<Primitive> {
        let width = WIRE_WIDTH_PX * scale;
        let to_px = |p: Point| {
            Point::new(
                coords::hole_aligned_px(p.x, hole_spacing_mm, scale),
                coords::hole_aligned_px(p.y, hole_spacing_mm, scale),
            )
        };
        self.jumpers
            .iter()
            .chain(self.draft.as_ref())
            .map(|wire| {
                Primitive::segment(to_px(wire.start_mm), to_px(wire.end_mm), palette::WIRE_RED, width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_finish_commits_one() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.finish_wire(10.0, 10.0);

        assert_eq!(wires.jumpers().len(), 1);
        assert_eq!(wires.jumpers()[0].start_mm, Point::new(5.0, 5.0));
        assert_eq!(wires.jumpers()[0].end_mm, Point::new(10.0, 10.0));
        assert!(!wires.is_drawing());
    }

    #[test]
    fn test_finish_without_start_is_noop() {
        let mut wires = WireModel::new();
        wires.finish_wire(10.0, 10.0);
        assert!(wires.jumpers().is_empty());
    }

    #[test]
    fn test_update_without_start_is_noop() {
        let mut wires = WireModel::new();
        wires.update_wire(3.0, 3.0);
        assert!(!wires.is_drawing());
        assert!(wires.jumpers().is_empty());
    }

    #[test]
    fn test_update_moves_open_end() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.update_wire(7.0, 8.0);
        let draft = wires.draft().unwrap();
        assert_eq!(draft.start_mm, Point::new(5.0, 5.0));
        assert_eq!(draft.end_mm, Point::new(7.0, 8.0));
        // Still uncommitted.
        assert!(wires.jumpers().is_empty());
    }

    #[test]
    fn test_restart_discards_previous_draft() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.start_wire(20.0, 20.0);
        wires.finish_wire(25.0, 25.0);

        assert_eq!(wires.jumpers().len(), 1);
        assert_eq!(wires.jumpers()[0].start_mm, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_clear_keeps_draft() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.finish_wire(10.0, 10.0);
        wires.start_wire(12.0, 12.0);

        wires.clear_wires();
        assert!(wires.jumpers().is_empty());
        assert!(wires.is_drawing());
    }

    #[test]
    fn test_render_includes_draft_last() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.finish_wire(10.0, 10.0);
        wires.start_wire(12.0, 12.0);
        wires.update_wire(15.0, 15.0);

        let prims = wires.render(2.54, 1.0);
        assert_eq!(prims.len(), 2);
    }

    #[test]
    fn test_render_aligns_to_holes() {
        let mut wires = WireModel::new();
        wires.start_wire(5.0, 5.0);
        wires.finish_wire(10.0, 10.0);

        let prims = wires.render(2.54, 1.0);
        let Primitive::Segment(seg) = &prims[0] else {
            panic!("expected segment");
        };
        // (5, 5) mm is hole (0, 0); (10, 10) mm rounds to hole (2, 2).
        let margin = coords::margin_px();
        let pitch_px = 2.54 * coords::PX_PER_MM;
        assert!((seg.line.p0.x - margin).abs() < 1e-9);
        assert!((seg.line.p1.x - (margin + 2.0 * pitch_px)).abs() < 1e-9);
    }
}
