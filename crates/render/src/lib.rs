//! Renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the scene; they never add or remove blocks.
//! - Output depends only on the scene and the view.
//!
//! The GPU renderer lives in `snakeview-render-wgpu`; the text renderer here
//! backs the CLI `show` command and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "snakeview-render v0.1.0"
}
