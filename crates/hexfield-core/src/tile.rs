//! The [`Tile`] type and its walkability flag.

use std::hash::{Hash, Hasher};

use glam::Vec2;

use crate::geom::Point;

/// Terrain class of a tile. Editing collaborators toggle this in place;
/// everything else about a tile is fixed at grid build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Walkable,
    Wall,
}

impl TileKind {
    /// The other kind.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            TileKind::Walkable => TileKind::Wall,
            TileKind::Wall => TileKind::Walkable,
        }
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, TileKind::Walkable)
    }
}

/// A single hex tile.
///
/// Identity is the grid index alone: two tiles compare and hash equal iff
/// their indices match, regardless of `kind`. `position` is the world-space
/// origin of the tile's bounding box, computed once when the grid is built.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    index: Point,
    position: Vec2,
    /// Terrain class, mutable through [`TileGrid`](crate::TileGrid).
    pub kind: TileKind,
}

impl Tile {
    pub(crate) fn new(index: Point, position: Vec2) -> Self {
        Self {
            index,
            position,
            kind: TileKind::Walkable,
        }
    }

    /// Grid index of this tile.
    #[inline]
    pub fn index(&self) -> Point {
        self.index
    }

    /// World-space origin of the tile's bounding box.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}
