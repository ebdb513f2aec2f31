use crate::Layers;
use crate::pick::{Ray, RayHit};
use glam::Vec3;
use snakeview_common::{BlockKind, GridCoord, Layer, grid_to_world};
use snakeview_snapshot::Snapshot;
use std::collections::BTreeMap;

/// Identifier of a block instance, unique for the lifetime of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// A rendered block: its id, kind and the world-space center of its cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInstance {
    pub id: BlockId,
    pub kind: BlockKind,
    pub position: Vec3,
}

/// The blocks currently on screen.
///
/// Uses BTreeMap so iteration follows creation order (ids are monotonic),
/// which keeps render order and pick tie-breaking stable.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    blocks: BTreeMap<BlockId, BlockInstance>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks in the scene.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks of one kind.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.values().filter(|b| b.kind == kind).count()
    }

    /// Read-only access to all blocks, in id order.
    pub fn blocks(&self) -> &BTreeMap<BlockId, BlockInstance> {
        &self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockInstance> {
        self.blocks.get(&id)
    }

    /// Add a block centered at `position`. Returns its id.
    pub fn place(&mut self, kind: BlockKind, position: Vec3) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(id, BlockInstance { id, kind, position });
        id
    }

    /// Add a block at a simulation grid cell.
    pub fn place_at_cell(&mut self, kind: BlockKind, cell: GridCoord) -> BlockId {
        self.place(kind, grid_to_world(cell))
    }

    /// Remove a block. Returns it if it existed.
    pub fn remove(&mut self, id: BlockId) -> Option<BlockInstance> {
        self.blocks.remove(&id)
    }

    /// Drop every block. Ids keep counting up.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Throw away the current blocks and instance `snapshot` from scratch,
    /// honoring layer visibility and skipping creatures that are not alive.
    pub fn regenerate(&mut self, snapshot: &Snapshot, layers: &Layers) {
        self.clear();

        if layers.is_visible(Layer::Fences) {
            for cell in &snapshot.fences {
                self.place_at_cell(Layer::Fences.block_kind(), *cell);
            }
        }
        if layers.is_visible(Layer::Food) {
            for food in &snapshot.food {
                self.place_at_cell(Layer::Food.block_kind(), food.c);
            }
        }
        if layers.is_visible(Layer::Snakes) {
            for snake in snapshot.alive_snakes() {
                for cell in &snake.geometry {
                    self.place_at_cell(Layer::Snakes.block_kind(), *cell);
                }
            }
        }
        if layers.is_visible(Layer::Enemies) {
            for enemy in snapshot.alive_enemies() {
                for cell in &enemy.geometry {
                    self.place_at_cell(Layer::Enemies.block_kind(), *cell);
                }
            }
        }

        tracing::debug!(blocks = self.blocks.len(), "scene regenerated");
    }

    /// Nearest block hit by a ray from `origin` along `direction`.
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        let ray = Ray::new(origin, direction)?;
        let mut best: Option<RayHit> = None;
        for (id, block) in &self.blocks {
            let Some((distance, normal)) = ray.intersect_block(block.position) else {
                continue;
            };
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(RayHit {
                    id: *id,
                    position: block.position,
                    distance,
                    normal,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakeview_snapshot::{Creature, Food};

    fn sample() -> Snapshot {
        Snapshot {
            fences: vec![GridCoord::new(0, 0, 0), GridCoord::new(1, 0, 0)],
            food: vec![Food {
                c: GridCoord::new(5, 5, 1),
            }],
            snakes: vec![
                Creature {
                    status: "alive".into(),
                    geometry: vec![GridCoord::new(2, 2, 1), GridCoord::new(2, 3, 1)],
                },
                Creature {
                    status: "dead".into(),
                    geometry: vec![GridCoord::new(9, 9, 1)],
                },
            ],
            enemies: vec![Creature {
                status: "alive".into(),
                geometry: vec![GridCoord::new(7, 7, 2)],
            }],
        }
    }

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
    }

    #[test]
    fn regenerate_instances_every_visible_category() {
        let mut scene = Scene::new();
        scene.regenerate(&sample(), &Layers::default());
        assert_eq!(scene.len(), 6);
        assert_eq!(scene.count(BlockKind::Sand), 2);
        assert_eq!(scene.count(BlockKind::Food), 1);
        assert_eq!(scene.count(BlockKind::Snake), 2);
        assert_eq!(scene.count(BlockKind::Enemy), 1);
    }

    #[test]
    fn dead_creatures_are_skipped() {
        let mut scene = Scene::new();
        scene.regenerate(&sample(), &Layers::default());
        let dead = grid_to_world(GridCoord::new(9, 9, 1));
        assert!(scene.blocks().values().all(|b| b.position != dead));
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let mut layers = Layers::default();
        layers.toggle(Layer::Fences);
        layers.toggle(Layer::Enemies);
        let mut scene = Scene::new();
        scene.regenerate(&sample(), &layers);
        assert_eq!(scene.count(BlockKind::Sand), 0);
        assert_eq!(scene.count(BlockKind::Enemy), 0);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn regenerate_drops_placed_blocks() {
        let mut scene = Scene::new();
        let placed = scene.place(BlockKind::Food, Vec3::new(100.0, 0.0, 0.0));
        scene.regenerate(&sample(), &Layers::default());
        assert!(scene.get(placed).is_none());
        assert_eq!(scene.len(), 6);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut scene = Scene::new();
        let a = scene.place(BlockKind::Snake, Vec3::ZERO);
        scene.clear();
        let b = scene.place(BlockKind::Snake, Vec3::ZERO);
        assert_ne!(a, b);
    }

    #[test]
    fn remove_returns_block() {
        let mut scene = Scene::new();
        let id = scene.place(BlockKind::Enemy, Vec3::new(1.0, 2.0, 3.0));
        let removed = scene.remove(id).unwrap();
        assert_eq!(removed.kind, BlockKind::Enemy);
        assert!(scene.remove(id).is_none());
    }

    #[test]
    fn raycast_picks_nearest_block() {
        let mut scene = Scene::new();
        let far = scene.place(BlockKind::Sand, Vec3::new(0.0, 0.0, -10.0));
        let near = scene.place(BlockKind::Sand, Vec3::new(0.0, 0.0, -4.0));
        let hit = scene.raycast(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_eq!(hit.id, near);
        assert_ne!(hit.id, far);
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(hit.position, Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn placed_block_carries_its_id() {
        let mut scene = Scene::new();
        let a = scene.place(BlockKind::Sand, Vec3::ZERO);
        let b = scene.place(BlockKind::Food, Vec3::X);
        assert_eq!(scene.get(a).unwrap().id, a);
        assert_eq!(scene.get(b).unwrap().id, b);
        assert!(scene.blocks().iter().all(|(key, block)| *key == block.id));
        assert_eq!(scene.remove(a).unwrap().id, a);
    }

    #[test]
    fn raycast_tie_goes_to_lower_id() {
        let mut scene = Scene::new();
        let first = scene.place(BlockKind::Sand, Vec3::new(0.0, 0.0, -4.0));
        let second = scene.place(BlockKind::Food, Vec3::new(0.0, 0.0, -4.0));
        let hit = scene.raycast(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_eq!(hit.id, first);
        assert_ne!(hit.id, second);
    }

    #[test]
    fn raycast_misses_when_looking_away() {
        let mut scene = Scene::new();
        scene.place(BlockKind::Sand, Vec3::new(0.0, 0.0, -4.0));
        assert!(scene.raycast(Vec3::ZERO, Vec3::Z).is_none());
    }

    #[test]
    fn raycast_on_empty_scene_is_none() {
        assert!(Scene::new().raycast(Vec3::ZERO, Vec3::X).is_none());
    }
}
