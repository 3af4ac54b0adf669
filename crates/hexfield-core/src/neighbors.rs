//! Hex adjacency offsets for the doublewidth offset layout.
//!
//! Even and odd columns have different diagonal neighbors because odd columns
//! sit half a tile lower. Offsets are relative `(dx, dy)` index deltas.

use crate::geom::Point;

/// Neighbor offsets for even columns.
const EVEN_COLUMN: [Point; 6] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(-1, -1),
    Point::new(-1, 0),
];

/// Neighbor offsets for odd columns (staggered down).
const ODD_COLUMN: [Point; 6] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(-1, 0),
    Point::new(-1, 1),
];

/// The six relative offsets for the column parity of `p`.
#[inline]
pub fn offsets_for(p: Point) -> &'static [Point; 6] {
    if p.odd_column() { &ODD_COLUMN } else { &EVEN_COLUMN }
}

/// The six hex-adjacent indices of `p`, unclamped.
///
/// Bounds filtering against a grid is done lazily by
/// [`TileGrid::neighbors`](crate::TileGrid::neighbors).
pub fn adjacent(p: Point) -> impl Iterator<Item = Point> {
    offsets_for(p).iter().map(move |&d| p + d)
}
