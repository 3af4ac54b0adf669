//! Map configuration and load-time validation.

use std::fmt;

use glam::Vec2;

/// Configuration for building a [`TileGrid`](crate::TileGrid).
///
/// `width_scale` controls the narrow-wedge width as a fraction of the full
/// tile width and must lie strictly inside (0, 1). At the default `0.5` the
/// horizontal column stride works out to `0.75 * tile width`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Number of tile columns.
    pub count_x: i32,
    /// Number of tile rows.
    pub count_y: i32,
    /// Full tile bounding-box size in world units.
    pub tile_size: Vec2,
    /// Narrow hex width as a fraction of `tile_size.x`, in (0, 1).
    pub width_scale: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            count_x: 10,
            count_y: 10,
            tile_size: Vec2::new(64.0, 32.0),
            width_scale: 0.5,
        }
    }
}

impl MapConfig {
    /// Check the configuration for use with [`TileGrid::new`](crate::TileGrid::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count_x <= 0 || self.count_y <= 0 {
            return Err(ConfigError::BadTileCount {
                count_x: self.count_x,
                count_y: self.count_y,
            });
        }
        if !(self.tile_size.x > 0.0) || !(self.tile_size.y > 0.0) {
            return Err(ConfigError::BadTileSize {
                width: self.tile_size.x,
                height: self.tile_size.y,
            });
        }
        if !(self.width_scale > 0.0 && self.width_scale < 1.0) {
            return Err(ConfigError::BadWidthScale(self.width_scale));
        }
        Ok(())
    }
}

/// Errors raised by [`MapConfig::validate`] at grid load.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tile count is zero or negative.
    BadTileCount { count_x: i32, count_y: i32 },
    /// A tile dimension is zero, negative, or NaN.
    BadTileSize { width: f32, height: f32 },
    /// `width_scale` is outside (0, 1) or NaN.
    BadWidthScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BadTileCount { count_x, count_y } => {
                write!(f, "tile counts must be positive, got {count_x}x{count_y}")
            }
            ConfigError::BadTileSize { width, height } => {
                write!(f, "tile size must be positive, got {width}x{height}")
            }
            ConfigError::BadWidthScale(s) => {
                write!(f, "width scale must be in (0, 1), got {s}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
