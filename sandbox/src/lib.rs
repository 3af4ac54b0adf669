//! Sandbox session state for a hex map editor.
//!
//! An input layer drives [`MapSession`] with discrete world-space queries
//! (hover, wall toggle, endpoint selection, path commit); a renderer reads
//! the grid plus the selection and path overlay back out. No input polling
//! or drawing happens here.

pub mod session;

pub use session::MapSession;
