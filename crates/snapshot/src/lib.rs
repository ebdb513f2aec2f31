//! Snapshots: per-frame JSON files describing the simulation state.
//!
//! # Invariants
//! - A frame is the file `<index>.json` inside the data directory.
//! - A missing frame is not an error; it loads as `None`.
//! - Renumbering never overwrites sources and fails before copying anything
//!   when a file name has no numeric prefix.

mod renumber;
mod snapshot;
mod store;

pub use renumber::{RenumberedFile, plan_renumber, renumber};
pub use snapshot::{Creature, Food, Snapshot};
pub use store::FrameStore;

use std::path::PathBuf;

/// Errors from snapshot loading and renumbering.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("file name {0:?} has no numeric frame prefix")]
    InvalidFrameName(String),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("source and target are the same directory: {0}")]
    SameDirectory(PathBuf),
}

pub fn crate_info() -> &'static str {
    "snakeview-snapshot v0.1.0"
}
