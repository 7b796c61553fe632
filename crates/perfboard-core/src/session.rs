//! One design session: board, wires and placement behind a single facade.
//!
//! The UI layer translates device events into render-surface pixels and calls
//! the entry points here; everything completes synchronously before the next
//! event, so readers always see a fully rebuilt snapshot.

use crate::board::{Board, BoardSide, BoardType};
use crate::component::Component;
use crate::coords;
use crate::placement::{PlacedComponentId, PlacementEngine};
use crate::primitives::Primitive;
use crate::wire::WireModel;
use kurbo::Point;

/// A single perfboard design in progress.
#[derive(Debug)]
pub struct Session {
    board: Board,
    wires: WireModel,
    placement: PlacementEngine,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Session {
    pub fn new(board: Board) -> Self {
        let mut placement = PlacementEngine::new();
        placement.set_board_scale(board.scale_factor());
        Self {
            board,
            wires: WireModel::new(),
            placement,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn wires(&self) -> &WireModel {
        &self.wires
    }

    pub fn wires_mut(&mut self) -> &mut WireModel {
        &mut self.wires
    }

    pub fn placement(&self) -> &PlacementEngine {
        &self.placement
    }

    pub fn placement_mut(&mut self) -> &mut PlacementEngine {
        &mut self.placement
    }

    // Board parameter changes funnel through here so the placement engine
    // stays in sync with the scale new placements inherit.

    pub fn set_board_type(&mut self, board_type: BoardType) {
        self.board.set_type(board_type);
    }

    pub fn set_board_side(&mut self, side: BoardSide) {
        self.board.set_side(side);
    }

    pub fn set_dimensions(&mut self, width_mm: f64, height_mm: f64, hole_spacing_mm: f64) {
        self.board.set_dimensions(width_mm, height_mm, hole_spacing_mm);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.board.set_scale_factor(scale_factor);
        self.placement.set_board_scale(self.board.scale_factor());
    }

    /// Place a component from the part library at a pixel position.
    pub fn add_component(
        &mut self,
        component: Box<dyn Component>,
        x_px: f64,
        y_px: f64,
    ) -> PlacedComponentId {
        self.placement.add_component(component, x_px, y_px)
    }

    // Wire-drawing gesture, in surface pixels.

    pub fn pointer_pressed(&mut self, x_px: f64, y_px: f64) {
        let (x_mm, y_mm) = self.px_to_mm(x_px, y_px);
        self.wires.start_wire(x_mm, y_mm);
    }

    pub fn pointer_dragged(&mut self, x_px: f64, y_px: f64) {
        let (x_mm, y_mm) = self.px_to_mm(x_px, y_px);
        self.wires.update_wire(x_mm, y_mm);
    }

    pub fn pointer_released(&mut self, x_px: f64, y_px: f64) {
        let (x_mm, y_mm) = self.px_to_mm(x_px, y_px);
        self.wires.finish_wire(x_mm, y_mm);
    }

    fn px_to_mm(&self, x_px: f64, y_px: f64) -> (f64, f64) {
        (
            x_px / (coords::PX_PER_MM * self.board.scale_factor()),
            y_px / (coords::PX_PER_MM * self.board.scale_factor()),
        )
    }

    /// The full visual description: board surface, then placed components,
    /// then wires (committed plus draft preview) on top.
    pub fn render(&self) -> Vec<Primitive> {
        let mut out = self.board.primitives().to_vec();
        out.extend(self.placement.render());
        out.extend(
            self.wires
                .render(self.board.hole_spacing_mm(), self.board.scale_factor()),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::testing::TestPart;

    #[test]
    fn test_wire_gesture_roundtrip() {
        let mut session = Session::default();
        // 20 px at scale 1.0 is 5 mm.
        session.pointer_pressed(20.0, 20.0);
        session.pointer_dragged(30.0, 30.0);
        session.pointer_released(40.0, 40.0);

        let jumpers = session.wires().jumpers();
        assert_eq!(jumpers.len(), 1);
        assert_eq!(jumpers[0].start_mm, Point::new(5.0, 5.0));
        assert_eq!(jumpers[0].end_mm, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut session = Session::default();
        session.pointer_released(40.0, 40.0);
        assert!(session.wires().jumpers().is_empty());
    }

    #[test]
    fn test_scale_change_propagates_to_placement() {
        let mut session = Session::default();
        session.set_scale_factor(2.0);
        let id = session.add_component(Box::new(TestPart::new()), 50.0, 50.0);
        assert!((session.placement().get(id).unwrap().scale() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejected_scale_leaves_placement_scale() {
        let mut session = Session::default();
        session.set_scale_factor(-1.0);
        let id = session.add_component(Box::new(TestPart::new()), 50.0, 50.0);
        assert!((session.placement().get(id).unwrap().scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_orders_board_parts_wires() {
        let mut session = Session::default();
        session.add_component(Box::new(TestPart::new()), 50.0, 50.0);
        session.pointer_pressed(20.0, 20.0);
        session.pointer_released(40.0, 40.0);

        let board_len = session.board().primitives().len();
        let all = session.render();
        // One part primitive and one wire segment on top of the board.
        assert_eq!(all.len(), board_len + 2);
        assert!(matches!(all.last().unwrap(), Primitive::Segment(_)));
    }

    #[test]
    fn test_render_deterministic() {
        let mut session = Session::default();
        session.add_component(Box::new(TestPart::new()), 50.0, 50.0);
        assert_eq!(session.render(), session.render());
    }
}
