use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    /// The first room listed is where the player starts.
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub player: PlayerDef,
}

/// Player character settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_health")]
    pub health: u32,
    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            description: String::new(),
            health: default_health(),
            inventory_capacity: default_inventory_capacity(),
        }
    }
}

fn default_health() -> u32 {
    100
}

fn default_inventory_capacity() -> usize {
    10
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// One-way passage out of a room. A return path needs its own `ExitDef` on the other side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    /// Id of the room the item starts in.
    pub room: Id,
    #[serde(default)]
    pub takeable: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Compass directions accepted in `ExitDef::direction`.
pub const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];
