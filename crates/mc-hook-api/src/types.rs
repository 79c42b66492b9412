//! Payload types shared by event families (decoupled from any host binary).

use serde::{Deserialize, Serialize};

/// World-space position or motion vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

/// Snapshot of an online player, passed to listeners in events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub uuid: String,
    pub runtime_id: u64,
    pub position: Vec3,
    pub gamemode: GameMode,
    pub health: f32,
}

/// Reference to a non-player (or player) entity by runtime id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub runtime_id: u64,
    /// Namespaced type id, e.g. `minecraft:zombie`.
    pub entity_type: String,
}

impl EntityRef {
    pub fn new(runtime_id: u64, entity_type: impl Into<String>) -> Self {
        Self {
            runtime_id,
            entity_type: entity_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    pub count: u8,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, count: u8) -> Self {
        Self {
            item_id: item_id.into(),
            count,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id.is_empty()
    }
}

/// Cause of damage for EntityDamage and EntityDeath events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageCause {
    Attack,
    Projectile,
    Fall,
    Drowning,
    Lava,
    Fire,
    Explosion,
    Suffocation,
    Starvation,
    Void,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Main,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Head,
    Chest,
    Legs,
    Feet,
}

/// Chunk coordinates (block coordinates divided by 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn containing(pos: BlockPos) -> Self {
        Self::new(pos.x >> 4, pos.z >> 4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractAction {
    LeftClickBlock,
    RightClickBlock,
    LeftClickAir,
    RightClickAir,
    /// Pressure plates, farmland and similar.
    Physical,
}

impl InteractAction {
    pub fn is_left_click(self) -> bool {
        matches!(self, Self::LeftClickBlock | Self::LeftClickAir)
    }

    pub fn is_right_click(self) -> bool {
        matches!(self, Self::RightClickBlock | Self::RightClickAir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animation {
    ArmSwing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishState {
    Fishing,
    CaughtFish,
    CaughtEntity,
    InGround,
    FailedAttempt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionAction {
    Added,
    Changed,
    Removed,
    /// Every effect removed at once; the event carries no effect.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionEffect {
    pub effect_id: String,
    pub duration_ticks: i32,
    pub amplifier: u8,
}

/// What a projectile hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HitTarget {
    Block { pos: BlockPos, face: BlockFace },
    Entity(EntityRef),
    Miss,
}
