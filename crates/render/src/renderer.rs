use glam::Vec3;
use snakeview_common::BlockKind;
use snakeview_scene::{BlockId, Scene};
use std::fmt::Write;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Unit look direction.
    pub forward: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Block to draw highlighted (the current pick target).
    pub highlighted: Option<BlockId>,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 3.0, 0.0),
            forward: Vec3::NEG_Z,
            fov_degrees: 80.0,
            highlighted: None,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable listing of the scene.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        // Writing into a String cannot fail.
        let mut out = String::new();
        let _ = writeln!(out, "=== Scene ({} blocks) ===", scene.len());
        let counts: Vec<String> = BlockKind::ALL
            .iter()
            .map(|k| format!("{k}={}", scene.count(*k)))
            .collect();
        let _ = writeln!(out, "Kinds: {}", counts.join(" "));
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) forward=({:.2}, {:.2}, {:.2}) fov={:.0}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.forward.x,
            view.forward.y,
            view.forward.z,
            view.fov_degrees
        );

        for (id, block) in scene.blocks() {
            let p = block.position;
            let marker = if view.highlighted == Some(*id) { '*' } else { ' ' };
            let _ = writeln!(
                out,
                " {marker}[{:>5}] {:<5} pos=({:.1}, {:.1}, {:.1})",
                id.0, block.kind, p.x, p.y, p.z
            );
        }

        out
    }
}
