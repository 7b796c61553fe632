//! Conversions between physical millimeters and render-surface pixels.
//!
//! All functions here are pure: the result depends only on the arguments and
//! the fixed constants below, so they are safe to call from any number of
//! concurrent readers.

/// Render pixels per physical millimeter at scale 1.0.
pub const PX_PER_MM: f64 = 4.0;

/// Fixed border inset where no holes are placed, in millimeters.
pub const MARGIN_MM: f64 = 5.0;

/// Standard perfboard hole pitch (0.1 inch), in millimeters.
pub const STANDARD_PITCH_MM: f64 = 2.54;

/// Margin width in render pixels. The margin is part of the board outline and
/// does not scale with the zoom factor.
pub fn margin_px() -> f64 {
    MARGIN_MM * PX_PER_MM
}

/// Convert a millimeter X coordinate to a render-pixel coordinate.
pub fn to_render_x(x_mm: f64, scale: f64) -> f64 {
    margin_px() + x_mm * PX_PER_MM * scale
}

/// Convert a millimeter Y coordinate to a render-pixel coordinate.
pub fn to_render_y(y_mm: f64, scale: f64) -> f64 {
    margin_px() + y_mm * PX_PER_MM * scale
}

/// Inverse of [`to_render_x`].
pub fn from_render_x(x_px: f64, scale: f64) -> f64 {
    (x_px - margin_px()) / (PX_PER_MM * scale)
}

/// Inverse of [`to_render_y`].
pub fn from_render_y(y_px: f64, scale: f64) -> f64 {
    (y_px - margin_px()) / (PX_PER_MM * scale)
}

/// Grid index of the hole nearest to a millimeter coordinate, clamped so that
/// positions inside the top/left margin map to index 0 rather than a negative
/// row or column.
pub fn grid_index(mm: f64, spacing_mm: f64) -> usize {
    let idx = ((mm - MARGIN_MM) / spacing_mm).round();
    if idx > 0.0 { idx as usize } else { 0 }
}

/// Render-pixel position of the hole whose grid cell contains the given
/// millimeter coordinate. Used for hole-aligned drawing such as jumper
/// endpoints, where free-floating positions would miss the grid.
pub fn hole_aligned_px(mm: f64, spacing_mm: f64, scale: f64) -> f64 {
    let spacing_px = spacing_mm * PX_PER_MM * scale;
    margin_px() + grid_index(mm, spacing_mm) as f64 * spacing_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_render_identity_scale() {
        let px = to_render_x(10.0, 1.0);
        assert!((px - (margin_px() + 40.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        for &scale in &[0.5, 1.0, 1.6, 3.0] {
            for &mm in &[0.0, 2.54, 17.3, 95.0] {
                let px = to_render_x(mm, scale);
                let back = from_render_x(px, scale);
                assert!((back - mm).abs() < 1e-9, "mm={mm} scale={scale}");
            }
        }
    }

    #[test]
    fn test_roundtrip_y() {
        let px = to_render_y(42.0, 2.0);
        assert!((from_render_y(px, 2.0) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_grid_index_rounds_to_nearest() {
        // 5.0 mm margin, 2.54 mm pitch: hole 1 sits at 7.54 mm.
        assert_eq!(grid_index(7.54, STANDARD_PITCH_MM), 1);
        assert_eq!(grid_index(6.9, STANDARD_PITCH_MM), 1);
        assert_eq!(grid_index(6.0, STANDARD_PITCH_MM), 0);
    }

    #[test]
    fn test_grid_index_clamps_margin() {
        // Anything left of the margin clamps to column 0.
        assert_eq!(grid_index(0.0, STANDARD_PITCH_MM), 0);
        assert_eq!(grid_index(-25.0, STANDARD_PITCH_MM), 0);
    }

    #[test]
    fn test_hole_aligned_px_lands_on_grid() {
        let px = hole_aligned_px(10.0, STANDARD_PITCH_MM, 1.0);
        // Index round((10-5)/2.54) = 2, so margin + 2 * pitch_px.
        let expected = margin_px() + 2.0 * STANDARD_PITCH_MM * PX_PER_MM;
        assert!((px - expected).abs() < 1e-9);
    }
}
