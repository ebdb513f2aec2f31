//! wgpu render backend for snakeview.
//!
//! Draws a grid floor and one instanced, flat-colored cube per scene block,
//! lit by a fixed sun plus ambient term. The camera is a first-person fly
//! camera driven by WASD and mouse look.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - Camera motion is independent of frame loading.

mod camera;
mod gpu;
mod shaders;

pub use camera::FlyCamera;
pub use gpu::WgpuRenderer;
