//! Board geometry model: parameters, hole grid and visual regeneration.

use crate::coords::{self, MARGIN_MM, PX_PER_MM};
use crate::primitives::{Primitive, palette};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Hole radius in render pixels at scale 1.0.
const HOLE_RADIUS_PX: f64 = 2.5;
/// Copper strip stroke width in render pixels at scale 1.0.
const STRIP_WIDTH_PX: f64 = 3.0;
/// Stripboard copper runs on every second hole row.
const STRIP_ROW_STEP: usize = 2;
/// Mixed boards carry a vertical strip on every third hole column.
const STRIP_COL_STEP: usize = 3;

/// Kind of prototyping board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardType {
    /// Plain dot board, isolated pads only.
    #[default]
    Perforated,
    /// Continuous copper strips along hole rows.
    Stripboard,
    /// Dot board with a vertical bus strip every third column.
    Mixed,
}

/// Copper side configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardSide {
    #[default]
    Single,
    Double,
}

/// Common off-the-shelf board dimensions. Presentation strings live in the
/// parts crate; the core only needs the tag and its physical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardSize {
    Size50x70,
    Size70x90,
    #[default]
    Size100x100,
    Size100x160,
    Size160x100,
    Custom,
}

impl BoardSize {
    /// Width and height in millimeters, `None` for [`BoardSize::Custom`].
    pub fn dimensions_mm(self) -> Option<(f64, f64)> {
        match self {
            Self::Size50x70 => Some((50.0, 70.0)),
            Self::Size70x90 => Some((70.0, 90.0)),
            Self::Size100x100 => Some((100.0, 100.0)),
            Self::Size100x160 => Some((100.0, 160.0)),
            Self::Size160x100 => Some((160.0, 100.0)),
            Self::Custom => None,
        }
    }
}

/// The board surface: physical parameters plus the derived primitive list.
///
/// Every mutation goes through a setter and triggers a full rebuild of the
/// primitives from scratch. There is no incremental diffing; the grid is small
/// enough that O(rows x cols) per change is cheap, and a full rebuild keeps
/// every read a consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    board_type: BoardType,
    side: BoardSide,
    width_mm: f64,
    height_mm: f64,
    hole_spacing_mm: f64,
    scale_factor: f64,
    #[serde(skip)]
    primitives: Vec<Primitive>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardType::Perforated, BoardSide::Single, 100.0, 100.0, 2.54)
    }
}

impl Board {
    /// Create a board and build its initial geometry. Non-positive dimensions
    /// fall back to the default 100x100 mm board.
    pub fn new(
        board_type: BoardType,
        side: BoardSide,
        width_mm: f64,
        height_mm: f64,
        hole_spacing_mm: f64,
    ) -> Self {
        let valid = dimensions_valid(width_mm, height_mm, hole_spacing_mm);
        if !valid {
            log::warn!(
                "invalid board dimensions {width_mm}x{height_mm} spacing {hole_spacing_mm}, \
                 falling back to 100x100/2.54"
            );
        }
        let mut board = Self {
            board_type,
            side,
            width_mm: if valid { width_mm } else { 100.0 },
            height_mm: if valid { height_mm } else { 100.0 },
            hole_spacing_mm: if valid { hole_spacing_mm } else { 2.54 },
            scale_factor: 1.0,
            primitives: Vec::new(),
        };
        board.rebuild();
        board
    }

    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    pub fn side(&self) -> BoardSide {
        self.side
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn hole_spacing_mm(&self) -> f64 {
        self.hole_spacing_mm
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Set the board type and regenerate.
    pub fn set_type(&mut self, board_type: BoardType) {
        self.board_type = board_type;
        self.rebuild();
    }

    /// Set the side configuration and regenerate.
    pub fn set_side(&mut self, side: BoardSide) {
        self.side = side;
        self.rebuild();
    }

    /// Update physical dimensions. This is the input-validation firewall for
    /// all physical values: if any value is not strictly positive (or not
    /// finite) the whole call is ignored and the previous geometry stays.
    pub fn set_dimensions(&mut self, width_mm: f64, height_mm: f64, hole_spacing_mm: f64) {
        if !dimensions_valid(width_mm, height_mm, hole_spacing_mm) {
            log::warn!(
                "ignoring board dimensions {width_mm}x{height_mm} spacing {hole_spacing_mm}"
            );
            return;
        }
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self.hole_spacing_mm = hole_spacing_mm;
        self.rebuild();
    }

    /// Update the zoom factor. Hole radius, stroke widths and hole spacing all
    /// scale uniformly. Same validation rule as [`Board::set_dimensions`].
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if !(scale_factor > 0.0) || !scale_factor.is_finite() {
            log::warn!("ignoring board scale factor {scale_factor}");
            return;
        }
        self.scale_factor = scale_factor;
        self.rebuild();
    }

    /// Number of hole rows: floor of the margin-trimmed height over the
    /// spacing. Remainder space is unused margin, never a partial hole.
    pub fn rows(&self) -> usize {
        inner_count(self.height_mm, self.hole_spacing_mm)
    }

    /// Number of hole columns, analogous to [`Board::rows`].
    pub fn cols(&self) -> usize {
        inner_count(self.width_mm, self.hole_spacing_mm)
    }

    /// Center of hole (row, col) in render pixels.
    pub fn hole_center(&self, row: usize, col: usize) -> Point {
        let spacing_px = self.spacing_px();
        Point::new(
            coords::margin_px() + col as f64 * spacing_px,
            coords::margin_px() + row as f64 * spacing_px,
        )
    }

    /// All hole centers, row-major. Derived on demand, never stored.
    pub fn hole_grid(&self) -> Vec<Point> {
        let (rows, cols) = (self.rows(), self.cols());
        let mut holes = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                holes.push(self.hole_center(i, j));
            }
        }
        holes
    }

    /// The current visual description, back to front.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Board outline size in render pixels.
    pub fn size_px(&self) -> kurbo::Size {
        kurbo::Size::new(self.width_mm * PX_PER_MM, self.height_mm * PX_PER_MM)
    }

    fn spacing_px(&self) -> f64 {
        self.hole_spacing_mm * PX_PER_MM * self.scale_factor
    }

    /// Regenerate the primitive list from the current parameters. Setters call
    /// this automatically; call it once after deserializing a board, since the
    /// derived geometry is not part of the serialized form.
    pub fn rebuild(&mut self) {
        self.primitives = self.build_primitives();
        log::debug!(
            "rebuilt board geometry: {} primitives, {}x{} holes",
            self.primitives.len(),
            self.rows(),
            self.cols()
        );
    }

    /// Build the full primitive list from current state. Pure with respect to
    /// the board parameters: identical state yields an identical list.
    pub fn build_primitives(&self) -> Vec<Primitive> {
        let size = self.size_px();
        let margin = coords::margin_px();
        let spacing = self.spacing_px();
        let hole_radius = HOLE_RADIUS_PX * self.scale_factor;
        let (rows, cols) = (self.rows(), self.cols());

        let mut out = Vec::with_capacity(rows * cols + rows + 2);

        // Double-sided boards get a backing fill behind the substrate.
        if self.side == BoardSide::Double {
            out.push(Primitive::filled_rect(
                Rect::new(0.0, 0.0, size.width, size.height),
                palette::BOARD_BLUE,
            ));
        }

        out.push(Primitive::rect(
            Rect::new(0.0, 0.0, size.width, size.height),
            palette::BOARD_GREEN,
            palette::OUTLINE,
            1.0 * self.scale_factor,
        ));

        for i in 0..rows {
            for j in 0..cols {
                out.push(Primitive::circle(
                    self.hole_center(i, j),
                    hole_radius,
                    palette::HOLE_GRAY,
                    palette::OUTLINE,
                    1.0 * self.scale_factor,
                ));
            }
        }

        match self.board_type {
            BoardType::Perforated => {}
            BoardType::Stripboard => {
                for i in (0..rows).step_by(STRIP_ROW_STEP) {
                    let y = margin + i as f64 * spacing;
                    out.push(Primitive::segment(
                        Point::new(margin, y),
                        Point::new(size.width - margin, y),
                        palette::COPPER,
                        STRIP_WIDTH_PX * self.scale_factor,
                    ));
                }
            }
            BoardType::Mixed => {
                for j in (0..cols).step_by(STRIP_COL_STEP) {
                    let x = margin + j as f64 * spacing;
                    out.push(Primitive::segment(
                        Point::new(x, margin),
                        Point::new(x, size.height - margin),
                        palette::COPPER,
                        STRIP_WIDTH_PX * self.scale_factor,
                    ));
                }
            }
        }

        out
    }
}

fn dimensions_valid(width_mm: f64, height_mm: f64, hole_spacing_mm: f64) -> bool {
    // `v > 0.0` is false for NaN, so non-finite garbage is rejected too.
    width_mm > 0.0
        && height_mm > 0.0
        && hole_spacing_mm > 0.0
        && width_mm.is_finite()
        && height_mm.is_finite()
        && hole_spacing_mm.is_finite()
}

fn inner_count(outer_mm: f64, spacing_mm: f64) -> usize {
    let inner = outer_mm - 2.0 * MARGIN_MM;
    if inner <= 0.0 {
        return 0;
    }
    (inner / spacing_mm) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_board() -> Board {
        Board::new(BoardType::Perforated, BoardSide::Single, 100.0, 100.0, 2.54)
    }

    #[test]
    fn test_grid_counts() {
        let board = standard_board();
        // floor((100 - 2*5) / 2.54) = floor(35.43) = 35
        assert_eq!(board.rows(), 35);
        assert_eq!(board.cols(), 35);
        assert_eq!(board.hole_grid().len(), 35 * 35);
    }

    #[test]
    fn test_grid_counts_rectangular() {
        let board = Board::new(BoardType::Perforated, BoardSide::Single, 160.0, 100.0, 2.54);
        assert_eq!(board.cols(), (150.0_f64 / 2.54) as usize);
        assert_eq!(board.rows(), 35);
    }

    #[test]
    fn test_hole_centers_on_grid() {
        let board = standard_board();
        let p = board.hole_center(2, 3);
        let spacing = 2.54 * PX_PER_MM;
        assert!((p.x - (coords::margin_px() + 3.0 * spacing)).abs() < 1e-9);
        assert!((p.y - (coords::margin_px() + 2.0 * spacing)).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let mut board = standard_board();
        let before = board.primitives().to_vec();

        board.set_dimensions(-10.0, 100.0, 2.54);
        assert!((board.width_mm() - 100.0).abs() < f64::EPSILON);
        assert_eq!(board.primitives(), &before[..]);

        board.set_dimensions(100.0, 0.0, 2.54);
        assert!((board.height_mm() - 100.0).abs() < f64::EPSILON);

        board.set_dimensions(100.0, 100.0, f64::NAN);
        assert!((board.hole_spacing_mm() - 2.54).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let mut board = standard_board();
        board.set_scale_factor(0.0);
        assert!((board.scale_factor() - 1.0).abs() < f64::EPSILON);
        board.set_scale_factor(-2.0);
        assert!((board.scale_factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let board = standard_board();
        assert_eq!(board.build_primitives(), board.build_primitives());
    }

    #[test]
    fn test_setters_regenerate() {
        let mut board = standard_board();
        let plain = board.primitives().len();

        board.set_type(BoardType::Stripboard);
        // Strips on every second row add ceil(35 / 2) = 18 segments.
        assert_eq!(board.primitives().len(), plain + 18);

        board.set_type(BoardType::Mixed);
        // Vertical strips on every third column: ceil(35 / 3) = 12.
        assert_eq!(board.primitives().len(), plain + 12);

        board.set_type(BoardType::Perforated);
        assert_eq!(board.primitives().len(), plain);
    }

    #[test]
    fn test_double_side_adds_backing() {
        let mut board = standard_board();
        let single = board.primitives().len();
        board.set_side(BoardSide::Double);
        assert_eq!(board.primitives().len(), single + 1);
        // Backing rect is the bottom-most primitive.
        assert!(matches!(board.primitives()[0], Primitive::Rect(_)));
    }

    #[test]
    fn test_scale_rescales_spacing() {
        let mut board = standard_board();
        let at_one = board.hole_center(1, 1);
        board.set_scale_factor(2.0);
        let at_two = board.hole_center(1, 1);
        let margin = coords::margin_px();
        assert!(((at_two.x - margin) - 2.0 * (at_one.x - margin)).abs() < 1e-9);
    }

    #[test]
    fn test_board_size_presets() {
        assert_eq!(BoardSize::Size100x160.dimensions_mm(), Some((100.0, 160.0)));
        assert_eq!(BoardSize::Custom.dimensions_mm(), None);
    }

    #[test]
    fn test_serde_roundtrip_rebuilds_geometry() {
        let mut board = Board::new(BoardType::Stripboard, BoardSide::Double, 70.0, 90.0, 2.54);
        board.set_scale_factor(1.5);

        let json = serde_json::to_string(&board).unwrap();
        let mut restored: Board = serde_json::from_str(&json).unwrap();
        assert!(restored.primitives().is_empty());

        restored.rebuild();
        assert_eq!(restored.primitives(), board.primitives());
        assert!((restored.scale_factor() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tiny_board_has_no_holes() {
        let board = Board::new(BoardType::Perforated, BoardSide::Single, 8.0, 8.0, 2.54);
        // Inner dimension is negative; grid collapses to zero, board rect stays.
        assert_eq!(board.rows(), 0);
        assert_eq!(board.cols(), 0);
        assert_eq!(board.primitives().len(), 1);
    }
}
