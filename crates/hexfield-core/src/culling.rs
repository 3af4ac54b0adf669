//! Visible-tile culling: the index rectangle worth drawing for a viewport.

use glam::Vec2;

use crate::camera::ViewTransform;
use crate::geom::{Point, Range};
use crate::grid::TileGrid;

/// The index rectangle of tiles that may be visible through `viewport`.
///
/// Maps both viewport corners to world space, pads by one tile on every side
/// (stagger and wedge overlap mean a tile's box can poke into the viewport
/// from a neighboring coarse cell), locates the padded corners on the
/// lattice and clamps to the grid bounds. Purely a draw-cost optimization:
/// the result may over-include tiles but never omits a visible one.
///
/// Degenerate transforms that produce non-finite corners fall back to the
/// full grid bounds.
pub fn visible_range(grid: &TileGrid, view: &impl ViewTransform, viewport: Vec2) -> Range {
    let full = grid.bounds();
    let margin = grid.tile_size();

    let min_world = view.screen_to_world(Vec2::ZERO) - margin;
    let max_world = view.screen_to_world(viewport) + margin;
    if !min_world.is_finite() || !max_world.is_finite() {
        log::debug!("culling fell back to full bounds: non-finite corner");
        return full;
    }

    let lo = grid.layout().locate(min_world);
    let hi = grid.layout().locate(max_world);

    // Half-open on the far corner; clamping absorbs corner misses.
    Range::new(lo.x, lo.y, hi.x + 1, hi.y + 1).intersect(full)
}
