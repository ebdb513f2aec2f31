//! Scene: the set of block instances currently on screen.
//!
//! # Invariants
//! - Regeneration is a full rebuild: every block, including ones placed by
//!   hand, is dropped before the snapshot is re-instanced.
//! - Block ids are never reused within a scene.
//! - Picking tests every block; there is no spatial index.

mod layers;
mod pick;
pub mod scene;

pub use layers::Layers;
pub use pick::{Ray, RayHit};
pub use scene::{BlockId, BlockInstance, Scene};
