use crate::ViewerConfig;
use glam::Vec3;
use snakeview_common::{BLOCK_SIZE, BlockKind, Layer};
use snakeview_input::Action;
use snakeview_scene::{BlockId, BlockInstance, Layers, Scene};
use snakeview_snapshot::FrameStore;

/// Frame stepping, layer filtering and hand editing over a [`Scene`].
///
/// Holds no windowing state: callers pass the camera origin and look
/// direction to the block operations.
#[derive(Debug)]
pub struct Viewer {
    store: FrameStore,
    config: ViewerConfig,
    scene: Scene,
    layers: Layers,
    frame: usize,
    selected: BlockKind,
}

impl Viewer {
    /// Create a viewer on `config.start_frame` and load it.
    pub fn new(store: FrameStore, config: ViewerConfig) -> Self {
        let mut viewer = Self {
            store,
            frame: config.start_frame,
            config,
            scene: Scene::new(),
            layers: Layers::default(),
            selected: BlockKind::Snake,
        };
        viewer.regenerate();
        viewer
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn selected(&self) -> BlockKind {
        self.selected
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    /// Rebuild the scene from the current frame. Returns `false` and leaves
    /// the scene untouched if the frame is missing or malformed.
    pub fn regenerate(&mut self) -> bool {
        self.load_frame(self.frame)
    }

    fn load_frame(&mut self, index: usize) -> bool {
        match self.store.load(index) {
            Ok(Some(snapshot)) => {
                self.scene.regenerate(&snapshot, &self.layers);
                self.frame = index;
                true
            }
            // The store already logged the missing path.
            Ok(None) => false,
            Err(e) => {
                tracing::error!(frame = index, "failed to load frame: {e}");
                false
            }
        }
    }

    /// Step forward. The index only moves if the next frame loads.
    pub fn next_frame(&mut self) -> bool {
        let Some(index) = self.frame.checked_add(1) else {
            return false;
        };
        let loaded = self.load_frame(index);
        if loaded {
            tracing::info!(frame = self.frame, "next frame");
        }
        loaded
    }

    /// Step back. No-op on frame 0.
    pub fn previous_frame(&mut self) -> bool {
        let Some(index) = self.frame.checked_sub(1) else {
            return false;
        };
        let loaded = self.load_frame(index);
        if loaded {
            tracing::info!(frame = self.frame, "previous frame");
        }
        loaded
    }

    /// Flip a layer and rebuild. Returns the layer's new visibility.
    pub fn toggle_layer(&mut self, layer: Layer) -> bool {
        let visible = self.layers.toggle(layer);
        tracing::debug!(%layer, visible, "layer toggled");
        self.regenerate();
        visible
    }

    pub fn select_block(&mut self, kind: BlockKind) {
        self.selected = kind;
        tracing::debug!(%kind, "block selected");
    }

    /// Block under the crosshair that is close enough to remove.
    pub fn target(&self, origin: Vec3, direction: Vec3) -> Option<BlockId> {
        let hit = self.scene.raycast(origin, direction)?;
        (hit.position.distance(origin) < self.config.remove_reach).then_some(hit.id)
    }

    /// Remove the block under the crosshair if it is within remove reach.
    pub fn remove_block(&mut self, origin: Vec3, direction: Vec3) -> Option<BlockInstance> {
        let id = self.target(origin, direction)?;
        let removed = self.scene.remove(id)?;
        tracing::debug!(id = id.0, kind = %removed.kind, "block removed");
        Some(removed)
    }

    /// Place the selected kind against the face of the block under the
    /// crosshair, if that block is within place reach.
    pub fn place_block(&mut self, origin: Vec3, direction: Vec3) -> Option<BlockId> {
        let hit = self.scene.raycast(origin, direction)?;
        if hit.position.distance(origin) >= self.config.place_reach {
            return None;
        }
        let position = hit.position + hit.normal * BLOCK_SIZE;
        let id = self.scene.place(self.selected, position);
        tracing::debug!(id = id.0, kind = %self.selected, ?position, "block placed");
        Some(id)
    }

    /// Run a scene-level action. Returns whether the scene changed.
    ///
    /// Mouse capture and HUD toggling belong to the window and are ignored.
    pub fn apply(&mut self, action: Action, origin: Vec3, direction: Vec3) -> bool {
        match action {
            Action::NextFrame => self.next_frame(),
            Action::PreviousFrame => self.previous_frame(),
            Action::ToggleLayer(layer) => {
                self.toggle_layer(layer);
                true
            }
            Action::SelectBlock(kind) => {
                self.select_block(kind);
                false
            }
            Action::RemoveBlock => self.remove_block(origin, direction).is_some(),
            Action::PlaceBlock => self.place_block(origin, direction).is_some(),
            Action::CaptureMouse | Action::ReleaseMouse | Action::ToggleHud | Action::Noop => {
                false
            }
        }
    }
}
