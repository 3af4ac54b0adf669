//! Hex lattice metrics and world-point → tile-index resolution.
//!
//! Tiles are flat-top hexagons stored in a rectangular array with odd columns
//! shifted down by half a tile height (doublewidth offset layout). Each hex
//! occupies a `tile_size` bounding box; the box of column `x + 1` overlaps the
//! box of column `x` by the width of the slanted wedge, so the horizontal
//! stride between columns is `(W + w) / 2` where `w` is the narrow width.
//!
//! Resolving a world point to an index is mostly a rectangular bucketing, but
//! a point landing in the wedge strip can belong to either of two adjacent
//! columns; [`HexLayout::locate`] settles it by testing the point against the
//! coarse cell's diagonal edge.

use glam::Vec2;

use crate::config::MapConfig;
use crate::geom::Point;

/// Pure placement and picking math for one lattice parameterization.
///
/// Carries no tile data; bounds checking against an actual grid is the
/// caller's job ([`TileGrid::pick`](crate::TileGrid::pick)).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLayout {
    tile_size: Vec2,
    width_scale: f32,
}

impl HexLayout {
    /// Build a layout from a validated configuration.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            width_scale: config.width_scale,
        }
    }

    /// Full bounding-box size of one tile.
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Narrow hex width `w = W * width_scale`.
    #[inline]
    pub fn narrow_width(&self) -> f32 {
        self.tile_size.x * self.width_scale
    }

    /// Horizontal stride between columns, `(W + w) / 2`.
    ///
    /// Equals `0.75 * W` at the default `width_scale` of one half.
    #[inline]
    pub fn column_stride(&self) -> f32 {
        (self.tile_size.x + self.narrow_width()) * 0.5
    }

    /// Width of the wedge strip shared between adjacent columns, `(W - w) / 2`.
    #[inline]
    pub fn wedge_width(&self) -> f32 {
        (self.tile_size.x - self.narrow_width()) * 0.5
    }

    /// World-space origin of the bounding box of tile `index`.
    ///
    /// Columns step by [`column_stride`](Self::column_stride); odd columns
    /// sit half a tile height lower than even ones.
    pub fn origin(&self, index: Point) -> Vec2 {
        let stagger = if index.odd_column() {
            self.tile_size.y * 0.5
        } else {
            0.0
        };
        Vec2::new(
            self.column_stride() * index.x as f32,
            self.tile_size.y * index.y as f32 + stagger,
        )
    }

    /// World-space center of tile `index`.
    #[inline]
    pub fn center(&self, index: Point) -> Vec2 {
        self.origin(index) + self.tile_size * 0.5
    }

    /// Resolve a world point to the index of the hex containing it.
    ///
    /// The result is *unclamped*: points outside a particular grid come back
    /// as out-of-range indices (possibly negative), for the grid to reject.
    pub fn locate(&self, p: Vec2) -> Point {
        let h = self.tile_size.y;
        let stride = self.column_stride();
        let wedge = self.wedge_width();

        // Coarse bucketing: stride-wide columns, half-height rows.
        let mut i = (p.x / stride).floor() as i32;
        let mut j = (p.y * 2.0 / h).floor() as i32;

        // Offsets local to the coarse cell.
        let u = p.x - stride * i as f32;
        let v = p.y - h * j as f32 * 0.5;

        let mut even_col = i & 1 == 0;
        // Orientation of the slanted hex edge crossing this coarse cell:
        // rising when (i + j) is even, falling otherwise.
        let upper = (i + j) & 1 == 0;

        if u < wedge {
            // Ambiguous wedge strip: the point belongs to column i - 1 when
            // it falls on the far side of the diagonal.
            let un = u / wedge;
            let vn = v * 2.0 / h;
            if (!upper && vn > un) || (upper && (1.0 - vn) > un) {
                i -= 1;
                even_col = !even_col;
            }
        }

        // Odd columns sit half a tile lower; undo the stagger before
        // collapsing half-rows into rows.
        if !even_col {
            j -= 1;
        }

        Point::new(i, j.div_euclid(2))
    }
}
