//! The interactive map session: selection, editing, and path requests.

use std::collections::VecDeque;

use hexfield_core::{ConfigError, MapConfig, Point, TileGrid, Vec2};
use hexfield_paths::{Path, SearchLimits, SearchOutcome, find_path_limited, hex_steps};

/// How many endpoints a path request takes.
const ENDPOINT_SLOTS: usize = 2;

/// One editing/querying session over a tile grid.
///
/// Single-threaded and frame-driven: `hover` runs every frame, edits happen
/// between frames, and a search runs only on an explicit [`commit_path`]
/// (never interleaved with an edit).
///
/// [`commit_path`]: MapSession::commit_path
pub struct MapSession {
    grid: TileGrid,
    hover: Option<Point>,
    endpoints: VecDeque<Point>,
    found: Option<Path<Point>>,
    limits: SearchLimits,
}

impl MapSession {
    /// Build a session over a freshly loaded grid.
    pub fn new(config: &MapConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: TileGrid::new(config)?,
            hover: None,
            endpoints: VecDeque::with_capacity(ENDPOINT_SLOTS),
            found: None,
            limits: SearchLimits::UNLIMITED,
        })
    }

    /// Cap how many nodes a single path commit may expand.
    pub fn set_search_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// The grid being edited.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Mutable grid access for editing collaborators.
    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    /// Replace the grid wholesale (reconfiguration), clearing all overlay
    /// state that referred to the old one.
    pub fn reload(&mut self, config: &MapConfig) -> Result<(), ConfigError> {
        self.grid = TileGrid::new(config)?;
        self.hover = None;
        self.endpoints.clear();
        self.found = None;
        Ok(())
    }

    /// Per-frame hover pick. A miss clears the hover; never an error.
    pub fn hover(&mut self, world: Vec2) -> Option<Point> {
        self.hover = self.grid.pick(world).map(|t| t.index());
        self.hover
    }

    /// The currently hovered tile, if any.
    pub fn hover_tile(&self) -> Option<Point> {
        self.hover
    }

    /// Flip the terrain kind under `world`. Misses are ignored.
    pub fn toggle_wall(&mut self, world: Vec2) {
        if let Some(idx) = self.grid.pick(world).map(|t| t.index()) {
            let kind = self.grid[idx].kind.toggled();
            self.grid.set_kind(idx, kind);
        }
    }

    /// Select or deselect a path endpoint under `world`.
    ///
    /// Clicking a selected endpoint removes it; otherwise the tile is added
    /// while fewer than two endpoints are set. Misses are ignored.
    pub fn toggle_endpoint(&mut self, world: Vec2) {
        let Some(idx) = self.grid.pick(world).map(|t| t.index()) else {
            return;
        };
        if let Some(pos) = self.endpoints.iter().position(|&e| e == idx) {
            self.endpoints.remove(pos);
        } else if self.endpoints.len() < ENDPOINT_SLOTS {
            self.endpoints.push_back(idx);
        }
    }

    /// The selected endpoints, oldest first.
    pub fn endpoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.endpoints.iter().copied()
    }

    /// Run a path query between the two selected endpoints.
    ///
    /// Unit cost per step; walls are filtered inside the neighbor function;
    /// the estimate is the exact hex-step distance. Returns whether a path
    /// was found. With fewer than two endpoints this is a no-op.
    pub fn commit_path(&mut self) -> bool {
        let (&start, &goal) = match (self.endpoints.front(), self.endpoints.back()) {
            (Some(a), Some(b)) if self.endpoints.len() == ENDPOINT_SLOTS => (a, b),
            _ => return false,
        };

        let grid = &self.grid;
        let outcome = find_path_limited(
            start,
            goal,
            |_, _| 1.0,
            |a, b| hex_steps(*a, *b) as f64,
            |p: &Point| {
                grid.neighbors(*p)
                    .filter(|&n| grid[n].kind.is_walkable())
                    .collect::<Vec<_>>()
            },
            self.limits,
        );

        match outcome {
            SearchOutcome::Found(path) => {
                log::debug!(
                    "path {start} -> {goal}: {} steps, cost {}",
                    path.len() - 1,
                    path.total_cost()
                );
                self.found = Some(path);
                true
            }
            SearchOutcome::NoPath => {
                log::debug!("path {start} -> {goal}: unreachable");
                self.found = None;
                false
            }
            SearchOutcome::LimitReached => {
                log::warn!("path {start} -> {goal}: expansion budget exhausted");
                self.found = None;
                false
            }
        }
    }

    /// The path found by the last commit, if any. Renderers draw this as the
    /// overlay, destination first.
    pub fn found_path(&self) -> Option<&Path<Point>> {
        self.found.as_ref()
    }

    /// Drop the current path overlay.
    pub fn clear_path(&mut self) {
        self.found = None;
    }
}
