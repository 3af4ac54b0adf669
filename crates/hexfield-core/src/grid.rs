//! The [`TileGrid`] — the rectangular tile array behind the hex lattice.

use std::ops::{Index, IndexMut};

use glam::Vec2;

use crate::config::{ConfigError, MapConfig};
use crate::geom::{Point, Range};
use crate::layout::HexLayout;
use crate::neighbors;
use crate::tile::{Tile, TileKind};

/// A staggered hex-tile map with flat row-major storage.
///
/// Tile positions are computed once at build. Reconfiguration means building
/// a fresh grid; a `TileGrid` is never resized in place.
#[derive(Clone, Debug)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    size: Point,
    layout: HexLayout,
}

impl TileGrid {
    /// Build a grid from `config`, computing every tile position.
    ///
    /// Fails with [`ConfigError`] on non-positive counts or tile dimensions.
    pub fn new(config: &MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = HexLayout::new(config);

        let mut tiles = Vec::with_capacity((config.count_x * config.count_y) as usize);
        for y in 0..config.count_y {
            for x in 0..config.count_x {
                let index = Point::new(x, y);
                tiles.push(Tile::new(index, layout.origin(index)));
            }
        }

        log::debug!(
            "built {}x{} tile grid, tile size {}x{}",
            config.count_x,
            config.count_y,
            config.tile_size.x,
            config.tile_size.y
        );

        Ok(Self {
            tiles,
            size: Point::new(config.count_x, config.count_y),
            layout,
        })
    }

    /// Grid dimensions as (columns, rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// The full index rectangle of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }

    /// The lattice metrics this grid was built with.
    #[inline]
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Full bounding-box size of one tile.
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        self.layout.tile_size()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.size.x && p.y < self.size.y {
            Some((p.y * self.size.x + p.x) as usize)
        } else {
            None
        }
    }

    /// The tile at index `p`, or `None` outside bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.idx(p).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at index `p`, or `None` outside bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.idx(p).map(move |i| &mut self.tiles[i])
    }

    /// Set the terrain kind of the tile at `p`, in place.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside bounds, like direct indexing.
    pub fn set_kind(&mut self, p: Point, kind: TileKind) {
        self[p].kind = kind;
    }

    /// Resolve a world point to the tile containing it.
    ///
    /// A point outside the grid's staggered extent is a miss (`None`), a
    /// valid "no selection" outcome.
    pub fn pick(&self, world: Vec2) -> Option<&Tile> {
        self.get(self.layout.locate(world))
    }

    /// The in-bounds hex neighbors of `p`, produced lazily.
    ///
    /// Up to six indices, each valid hex-adjacent tile exactly once; no
    /// ordering guarantee.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        neighbors::adjacent(p).filter(|&n| self.idx(n).is_some())
    }

    /// Iterate over all tiles, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl Index<Point> for TileGrid {
    type Output = Tile;

    /// Direct tile access. Out-of-range indices are a programmer error.
    fn index(&self, p: Point) -> &Tile {
        match self.idx(p) {
            Some(i) => &self.tiles[i],
            None => panic!("tile index {p} out of range for {} grid", self.size),
        }
    }
}

impl IndexMut<Point> for TileGrid {
    fn index_mut(&mut self, p: Point) -> &mut Tile {
        match self.idx(p) {
            Some(i) => &mut self.tiles[i],
            None => panic!("tile index {p} out of range for {} grid", self.size),
        }
    }
}
