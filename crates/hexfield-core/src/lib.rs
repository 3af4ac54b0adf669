//! **hexfield-core** — staggered hex-tile map model.
//!
//! This crate provides the spatial core of a hex map sandbox: the tile
//! lattice ([`TileGrid`]), world-point → tile resolution with wedge
//! disambiguation ([`HexLayout`]), parity-keyed adjacency, a pan/zoom
//! [`Camera2D`], and viewport culling ([`visible_range`]).
//!
//! Rendering, input polling and the game loop are external collaborators:
//! they read tiles and overlay state from here and feed back discrete
//! world-space queries.

pub mod camera;
pub mod config;
pub mod culling;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod neighbors;
pub mod tile;

pub use camera::{Camera2D, ViewTransform};
pub use config::{ConfigError, MapConfig};
pub use culling::visible_range;
pub use geom::{Point, Range};
pub use glam::Vec2;
pub use grid::TileGrid;
pub use layout::HexLayout;
pub use tile::{Tile, TileKind};
