//! Developer tooling: scene inspector and frame directory audit.
//!
//! # Invariants
//! - Tools only read; they never change a scene or a data directory.

mod audit;
mod inspector;

pub use audit::{FrameAudit, FrameProblem, audit_frames};
pub use inspector::{BlockInfo, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "snakeview-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
