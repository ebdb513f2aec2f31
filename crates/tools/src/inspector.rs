use glam::Vec3;
use snakeview_common::BlockKind;
use snakeview_scene::{BlockId, Scene};
use std::fmt;

/// Read-only queries over a scene, for the HUD and the CLI.
pub struct SceneInspector;

impl SceneInspector {
    pub fn summary(scene: &Scene) -> SceneSummary {
        let mut per_kind = [0; 4];
        for block in scene.blocks().values() {
            per_kind[kind_slot(block.kind)] += 1;
        }
        SceneSummary {
            total: scene.len(),
            per_kind,
        }
    }

    pub fn inspect_block(scene: &Scene, id: BlockId) -> Option<BlockInfo> {
        scene.get(id).map(|block| BlockInfo {
            id,
            kind: block.kind,
            position: block.position,
        })
    }

    /// Every block id, in creation order.
    pub fn list_blocks(scene: &Scene) -> Vec<BlockId> {
        scene.blocks().keys().copied().collect()
    }
}

fn kind_slot(kind: BlockKind) -> usize {
    BlockKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default()
}

/// Block counts of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSummary {
    pub total: usize,
    per_kind: [usize; 4],
}

impl SceneSummary {
    pub fn count(&self, kind: BlockKind) -> usize {
        self.per_kind[kind_slot(kind)]
    }
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blocks={}", self.total)?;
        for kind in BlockKind::ALL {
            write!(f, " {kind}={}", self.count(kind))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockInfo {
    pub id: BlockId,
    pub kind: BlockKind,
    pub position: Vec3,
}

impl fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block [{}] {} pos=({:.2}, {:.2}, {:.2})",
            self.id.0, self.kind, self.position.x, self.position.y, self.position.z,
        )
    }
}
