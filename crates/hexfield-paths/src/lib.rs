//! **hexfield-paths** — informed path search for hex maps.
//!
//! This crate provides:
//!
//! - [`find_path`] / [`find_path_limited`] — A* over an *implicit* graph,
//!   generic over any equality-comparable node type, with caller-injected
//!   step-cost, heuristic and neighbor functions.
//! - [`Path`] — a persistent, prepend-only path with `Rc` structural
//!   sharing, so branching during search is O(1).
//! - [`hex_steps`] — the admissible step-distance heuristic for the
//!   doublewidth offset layout of `hexfield-core`.
//!
//! The searcher knows nothing about tiles or walls: obstacle filtering lives
//! entirely inside the injected neighbor function.

mod astar;
mod distance;
mod path;
mod queue;

pub use astar::{SearchLimits, SearchOutcome, find_path, find_path_limited};
pub use distance::{euclidean, hex_steps};
pub use path::{Path, Steps};
