//! Shared types for the snapshot viewer.
//!
//! # Invariants
//! - Grid coordinates are simulation-space integers with Z up.
//! - World positions are renderer-space, right-handed, Y up.

pub mod types;

pub use types::{BLOCK_SIZE, BlockKind, GRID_OFFSET, GridCoord, Layer, ParseBlockKindError, grid_to_world};
