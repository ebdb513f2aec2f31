//! Viewer controller: owns the frame index, layer visibility and the block
//! kind used for placement, and turns [`Action`](snakeview_input::Action)s
//! into scene changes.
//!
//! # Invariants
//! - The frame index only changes when the target frame loads.
//! - A missing or malformed frame leaves the current scene on screen.
//! - Reach is measured from the camera to the center of the hit block.

mod config;
mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use viewer::Viewer;
