//! Toroidal redraw helpers.
//!
//! Every shape is drawn at its home position and at the eight copies shifted by one tile
//! width in each direction, so content leaving one edge reappears at the opposite edge.
use glam::Vec2;

/// Spacing between background grid dots.
pub const DOT_SPACING: f32 = 40.0;
/// Background dot diameter range, `[min, max)`, drawn once per pass.
pub const DOT_DIAMETER_RANGE: (f32, f32) = (6.0, 9.0);

/// The 3×3 lattice `{-W, 0, W}²`, column-major like the redraw loop.
pub fn wrap_offsets(tile_size: f32) -> [Vec2; 9] {
    let steps = [-tile_size, 0.0, tile_size];
    let mut out = [Vec2::ZERO; 9];
    for (i, dx) in steps.iter().enumerate() {
        for (j, dy) in steps.iter().enumerate() {
            out[i * 3 + j] = Vec2::new(*dx, *dy);
        }
    }
    out
}

/// Background grid positions from one cell before the tile to two cells past its far edge.
pub fn dot_grid_centers(tile_size: f32, spacing: f32) -> Vec<Vec2> {
    if spacing <= 0.0 || tile_size <= 0.0 {
        return Vec::new();
    }
    let end = tile_size + 2.0 * spacing;
    let axis: Vec<f32> = (0..)
        .map(|i| -spacing + i as f32 * spacing)
        .take_while(|v| *v < end)
        .collect();
    let mut out = Vec::with_capacity(axis.len() * axis.len());
    for &x in &axis {
        for &y in &axis {
            out.push(Vec2::new(x, y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn offsets_cover_the_lattice_once() {
        let offsets = wrap_offsets(600.0);
        let unique: HashSet<(i32, i32)> = offsets
            .iter()
            .map(|o| (o.x as i32, o.y as i32))
            .collect();
        assert_eq!(unique.len(), 9);
        for o in offsets {
            assert!([-600.0, 0.0, 600.0].contains(&o.x));
            assert!([-600.0, 0.0, 600.0].contains(&o.y));
        }
        assert!(offsets.contains(&Vec2::ZERO));
    }

    #[test]
    fn dot_grid_spans_a_margin_beyond_each_edge() {
        let centers = dot_grid_centers(600.0, 40.0);
        // -40, 0, 40, ..., 640
        assert_eq!(centers.len(), 18 * 18);
        let min_x = centers.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
        let max_x = centers.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min_x, -40.0);
        assert_eq!(max_x, 640.0);
    }

    #[test]
    fn dot_grid_is_empty_for_degenerate_input() {
        assert!(dot_grid_centers(600.0, 0.0).is_empty());
        assert!(dot_grid_centers(0.0, 40.0).is_empty());
    }
}
