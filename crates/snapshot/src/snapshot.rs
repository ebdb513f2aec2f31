use serde::{Deserialize, Serialize};
use snakeview_common::GridCoord;

const ALIVE: &str = "alive";

/// One frame of the simulation as written by the simulator.
///
/// Unknown fields are ignored and a missing category reads as empty, so
/// snapshots from newer simulator versions still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub fences: Vec<GridCoord>,
    #[serde(default)]
    pub food: Vec<Food>,
    #[serde(default)]
    pub snakes: Vec<Creature>,
    #[serde(default)]
    pub enemies: Vec<Creature>,
}

/// A food item; `c` is its cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub c: GridCoord,
}

/// A snake or enemy: its status and the cells its body occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub status: String,
    #[serde(default)]
    pub geometry: Vec<GridCoord>,
}

impl Creature {
    pub fn is_alive(&self) -> bool {
        self.status == ALIVE
    }
}

impl Snapshot {
    /// Parse a snapshot, tolerating a leading UTF-8 byte order mark.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        serde_json::from_str(text)
    }

    pub fn alive_snakes(&self) -> impl Iterator<Item = &Creature> {
        self.snakes.iter().filter(|s| s.is_alive())
    }

    pub fn alive_enemies(&self) -> impl Iterator<Item = &Creature> {
        self.enemies.iter().filter(|e| e.is_alive())
    }
}
