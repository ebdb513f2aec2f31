use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge length of a rendered block in world units.
pub const BLOCK_SIZE: f32 = 2.0;

/// Shift applied to the horizontal grid axes so the arena sits around the origin.
pub const GRID_OFFSET: f32 = 20.0;

/// Kind of a rendered block. Fences are drawn as `Sand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Snake,
    Enemy,
    Sand,
    Food,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Snake,
        BlockKind::Enemy,
        BlockKind::Sand,
        BlockKind::Food,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Snake => "snake",
            BlockKind::Enemy => "enemy",
            BlockKind::Sand => "sand",
            BlockKind::Food => "food",
        }
    }

    /// Linear RGBA display color.
    pub fn color(self) -> [f32; 4] {
        match self {
            BlockKind::Snake => [0.2, 0.75, 0.25, 1.0],
            BlockKind::Enemy => [0.85, 0.2, 0.2, 1.0],
            BlockKind::Sand => [0.9, 0.85, 0.55, 1.0],
            BlockKind::Food => [1.0, 0.6, 0.1, 1.0],
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown block kind: {0}")]
pub struct ParseBlockKindError(pub String);

impl FromStr for BlockKind {
    type Err = ParseBlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBlockKindError(s.to_string()))
    }
}

/// One of the four snapshot categories, each independently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Fences,
    Food,
    Snakes,
    Enemies,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Fences, Layer::Food, Layer::Snakes, Layer::Enemies];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Fences => "fences",
            Layer::Food => "food",
            Layer::Snakes => "snakes",
            Layer::Enemies => "enemies",
        }
    }

    /// Block kind used to draw entries of this layer.
    pub fn block_kind(self) -> BlockKind {
        match self {
            Layer::Fences => BlockKind::Sand,
            Layer::Food => BlockKind::Food,
            Layer::Snakes => BlockKind::Snake,
            Layer::Enemies => BlockKind::Enemy,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer cell coordinate in simulation space (`[x, y, z]`, Z up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridCoord(pub [i32; 3]);

impl GridCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    pub fn x(self) -> i32 {
        self.0[0]
    }

    pub fn y(self) -> i32 {
        self.0[1]
    }

    pub fn z(self) -> i32 {
        self.0[2]
    }
}

/// Center of the block for a grid cell, in renderer space.
///
/// Simulation `(x, y, z)` lands at `(2x - 20, 2z, 20 - 2y)`: simulation Z
/// becomes world Y and simulation Y runs along world -Z, which keeps the
/// frame right-handed.
pub fn grid_to_world(coord: GridCoord) -> Vec3 {
    Vec3::new(
        coord.x() as f32 * BLOCK_SIZE - GRID_OFFSET,
        coord.z() as f32 * BLOCK_SIZE,
        GRID_OFFSET - coord.y() as f32 * BLOCK_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_origin_maps_to_arena_corner() {
        let p = grid_to_world(GridCoord::new(0, 0, 0));
        assert_eq!(p, Vec3::new(-20.0, 0.0, 20.0));
    }

    #[test]
    fn simulation_z_is_world_up() {
        let low = grid_to_world(GridCoord::new(3, 4, 0));
        let high = grid_to_world(GridCoord::new(3, 4, 5));
        assert_eq!(high - low, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn neighbouring_cells_are_one_block_apart() {
        let a = grid_to_world(GridCoord::new(10, 10, 1));
        let b = grid_to_world(GridCoord::new(11, 10, 1));
        let c = grid_to_world(GridCoord::new(10, 11, 1));
        assert_eq!((b - a).length(), BLOCK_SIZE);
        assert_eq!((c - a).length(), BLOCK_SIZE);
    }

    #[test]
    fn block_kind_parse_roundtrip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.name().parse::<BlockKind>().unwrap(), kind);
        }
        assert_eq!("FOOD".parse::<BlockKind>().unwrap(), BlockKind::Food);
        assert!("lava".parse::<BlockKind>().is_err());
    }

    #[test]
    fn fences_are_drawn_as_sand() {
        assert_eq!(Layer::Fences.block_kind(), BlockKind::Sand);
        assert_eq!(Layer::Snakes.block_kind(), BlockKind::Snake);
    }

    #[test]
    fn grid_coord_deserializes_from_array() {
        let c: GridCoord = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(c, GridCoord::new(1, 2, 3));
    }
}
