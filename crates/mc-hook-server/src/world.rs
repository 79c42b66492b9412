//! In-memory host world. Every mutating operation is an intercepted call site:
//! it fires the Pre, applies the values listeners left on it, and fires the
//! Post only when the change actually happened.

use std::collections::HashMap;

use mc_hook_api::{
    DamageCause, EntityDamagePost, EntityDamagePre, EntityDeathPost, EntityDeathPre, EntityRef,
    EntityRegainHealthPost, EntityRegainHealthPre, GameMode, Packet, PacketReceivePost,
    PacketReceivePre, PlayerChangedWorld, PlayerChatPost, PlayerChatPre, PlayerInfo, PlayerJoin,
    PlayerQuit, PlayerRespawnPost, PlayerRespawnPre, PlayerTeleportPost, PlayerTeleportPre, Vec3,
};
use mc_hook_bus::{EventBus, HookOutcome};
use thiserror::Error;
use tracing::{debug, info};

const PLAYER_MAX_HEALTH: f32 = 20.0;
pub const SPAWN: Vec3 = Vec3::new(0.5, 64.0, 0.5);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("unknown entity: {0}")]
    UnknownEntity(u64),

    #[error("entity {0} is not a player")]
    NotAPlayer(u64),

    #[error("entity {0} is dead")]
    Dead(u64),

    #[error("player {0} is alive")]
    Alive(u64),

    #[error("invalid amount: {0}")]
    InvalidAmount(f32),

    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

struct Profile {
    name: String,
    uuid: String,
    gamemode: GameMode,
}

struct Living {
    entity: EntityRef,
    profile: Option<Profile>,
    health: f32,
    max_health: f32,
    position: Vec3,
    level: String,
}

impl Living {
    fn player_info(&self) -> Option<PlayerInfo> {
        self.profile.as_ref().map(|p| PlayerInfo {
            name: p.name.clone(),
            uuid: p.uuid.clone(),
            runtime_id: self.entity.runtime_id,
            position: self.position,
            gamemode: p.gamemode,
            health: self.health,
        })
    }
}

pub struct HostWorld {
    bus: EventBus,
    levels: Vec<String>,
    default_level: String,
    living: HashMap<u64, Living>,
    next_runtime_id: u64,
    chat_log: Vec<String>,
    inbound: Vec<(u64, Packet)>,
}

impl HostWorld {
    pub fn new(bus: EventBus, default_level: impl Into<String>) -> Self {
        let default_level = default_level.into();
        let mut levels = vec![default_level.clone()];
        for extra in ["minecraft:the_nether", "minecraft:the_end"] {
            if !levels.iter().any(|l| l == extra) {
                levels.push(extra.to_string());
            }
        }
        Self {
            bus,
            levels,
            default_level,
            living: HashMap::new(),
            next_runtime_id: 1,
            chat_log: Vec::new(),
            inbound: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_runtime_id;
        self.next_runtime_id += 1;
        id
    }

    // ─── Population ──────────────────────────────────────────────────────────

    /// Add a player at spawn and fire `PlayerJoin`. Returns the runtime id.
    pub fn join(&mut self, name: &str) -> u64 {
        let id = self.allocate_id();
        let living = Living {
            entity: EntityRef::new(id, "minecraft:player"),
            profile: Some(Profile {
                name: name.to_string(),
                uuid: format!("00000000-0000-0000-0000-{id:012x}"),
                gamemode: GameMode::Survival,
            }),
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            position: SPAWN,
            level: self.default_level.clone(),
        };
        let player = living.player_info();
        self.living.insert(id, living);
        info!("{name} joined (runtime id {id})");
        if let Some(player) = player {
            self.bus.fire_post(PlayerJoin { player });
        }
        id
    }

    /// Remove a player and fire `PlayerQuit`.
    pub fn quit(&mut self, id: u64) -> Result<(), WorldError> {
        let player = self.player(id)?;
        self.living.remove(&id);
        info!("{} left", player.name);
        self.bus.fire_post(PlayerQuit { player });
        Ok(())
    }

    pub fn spawn_mob(&mut self, entity_type: &str, position: Vec3, max_health: f32) -> u64 {
        let id = self.allocate_id();
        self.living.insert(
            id,
            Living {
                entity: EntityRef::new(id, entity_type),
                profile: None,
                health: max_health,
                max_health,
                position,
                level: self.default_level.clone(),
            },
        );
        debug!(entity_type, id, "Mob spawned");
        id
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    pub fn contains(&self, id: u64) -> bool {
        self.living.contains_key(&id)
    }

    pub fn health(&self, id: u64) -> Option<f32> {
        self.living.get(&id).map(|l| l.health)
    }

    pub fn position(&self, id: u64) -> Option<(String, Vec3)> {
        self.living.get(&id).map(|l| (l.level.clone(), l.position))
    }

    pub fn player(&self, id: u64) -> Result<PlayerInfo, WorldError> {
        let living = self.living.get(&id).ok_or(WorldError::UnknownEntity(id))?;
        living.player_info().ok_or(WorldError::NotAPlayer(id))
    }

    pub fn players(&self) -> Vec<PlayerInfo> {
        self.living.values().filter_map(Living::player_info).collect()
    }

    pub fn chat_log(&self) -> &[String] {
        &self.chat_log
    }

    /// Drain packets accepted by `receive_packet`.
    pub fn take_inbound(&mut self) -> Vec<(u64, Packet)> {
        std::mem::take(&mut self.inbound)
    }

    // ─── Intercepted operations ──────────────────────────────────────────────

    /// Damage an entity. Returns the remaining health. Reaching zero runs the
    /// death hook.
    pub fn hurt(
        &mut self,
        id: u64,
        cause: DamageCause,
        amount: f32,
    ) -> HookOutcome<f32, WorldError> {
        let Some(living) = self.living.get(&id) else {
            return HookOutcome::Failed(WorldError::UnknownEntity(id));
        };
        if living.health <= 0.0 {
            return HookOutcome::Failed(WorldError::Dead(id));
        }
        let pre = EntityDamagePre::new(living.entity.clone(), living.player_info(), cause, amount);

        let bus = self.bus.clone();
        let outcome = bus.guard(
            pre,
            |pre| {
                if !pre.damage.is_finite() || pre.damage < 0.0 {
                    return Err(WorldError::InvalidAmount(pre.damage));
                }
                let living = self
                    .living
                    .get_mut(&id)
                    .ok_or(WorldError::UnknownEntity(id))?;
                living.health = (living.health - pre.damage).max(0.0);
                Ok(living.health)
            },
            |pre, _| EntityDamagePost::from(pre),
        );

        if let HookOutcome::Completed(health) = outcome {
            if health <= 0.0 {
                self.die(id, cause);
            }
        }
        outcome
    }

    /// Death hook. Cancelling it leaves the entity in the world at zero health.
    fn die(&mut self, id: u64, cause: DamageCause) -> HookOutcome<(), WorldError> {
        let Some(living) = self.living.get(&id) else {
            return HookOutcome::Failed(WorldError::UnknownEntity(id));
        };
        let pre = EntityDeathPre::new(living.entity.clone(), living.player_info(), cause);

        let bus = self.bus.clone();
        bus.guard(
            pre,
            |_| {
                let is_player = self
                    .living
                    .get(&id)
                    .ok_or(WorldError::UnknownEntity(id))?
                    .profile
                    .is_some();
                if !is_player {
                    self.living.remove(&id);
                }
                debug!(id, ?cause, "Entity died");
                Ok(())
            },
            |pre, _| EntityDeathPost::from(pre),
        )
    }

    /// Restore health, clamped to max. Dead entities cannot heal.
    pub fn heal(&mut self, id: u64, amount: f32) -> HookOutcome<f32, WorldError> {
        let Some(living) = self.living.get(&id) else {
            return HookOutcome::Failed(WorldError::UnknownEntity(id));
        };
        if living.health <= 0.0 {
            return HookOutcome::Failed(WorldError::Dead(id));
        }
        let pre = EntityRegainHealthPre::new(living.entity.clone(), living.player_info(), amount);

        let bus = self.bus.clone();
        bus.guard(
            pre,
            |pre| {
                if !pre.amount.is_finite() || pre.amount < 0.0 {
                    return Err(WorldError::InvalidAmount(pre.amount));
                }
                let living = self
                    .living
                    .get_mut(&id)
                    .ok_or(WorldError::UnknownEntity(id))?;
                living.health = (living.health + pre.amount).min(living.max_health);
                Ok(living.health)
            },
            |pre, _| EntityRegainHealthPost::from(pre),
        )
    }

    /// Heal every damaged, living player by `amount`. Returns how many healed.
    pub fn regenerate(&mut self, amount: f32) -> usize {
        let ids: Vec<u64> = self
            .living
            .values()
            .filter(|l| l.profile.is_some() && l.health > 0.0 && l.health < l.max_health)
            .map(|l| l.entity.runtime_id)
            .collect();
        ids.into_iter()
            .filter(|&id| matches!(self.heal(id, amount), HookOutcome::Completed(_)))
            .count()
    }

    /// Move a player, possibly across levels. Listeners may redirect it.
    pub fn teleport_player(
        &mut self,
        id: u64,
        to_level: &str,
        to: Vec3,
    ) -> HookOutcome<(String, Vec3), WorldError> {
        let (player, origin_level, origin) = match (self.player(id), self.living.get(&id)) {
            (Ok(player), Some(living)) => (player, living.level.clone(), living.position),
            (Err(err), _) => return HookOutcome::Failed(err),
            (Ok(_), None) => return HookOutcome::Failed(WorldError::UnknownEntity(id)),
        };
        let pre = PlayerTeleportPre::new(
            player,
            origin_level.clone(),
            origin,
            to_level.to_string(),
            to,
        );

        let bus = self.bus.clone();
        let outcome = bus.guard(
            pre,
            |pre| {
                if !self.levels.iter().any(|l| *l == pre.to_level) {
                    return Err(WorldError::UnknownLevel(pre.to_level.clone()));
                }
                let living = self
                    .living
                    .get_mut(&id)
                    .ok_or(WorldError::UnknownEntity(id))?;
                living.level = pre.to_level.clone();
                living.position = pre.to;
                Ok((living.level.clone(), living.position))
            },
            |pre, _| PlayerTeleportPost::from(pre),
        );

        if let HookOutcome::Completed((level, _)) = &outcome {
            if *level != origin_level {
                self.changed_world(id, origin_level);
            }
        }
        outcome
    }

    fn changed_world(&self, id: u64, origin_level: String) {
        let (Ok(player), Some(living)) = (self.player(id), self.living.get(&id)) else {
            return;
        };
        info!("{} moved from {origin_level} to {}", player.name, living.level);
        self.bus.fire_post(PlayerChangedWorld {
            player,
            origin_level,
            level: living.level.clone(),
        });
    }

    /// Bring a dead player back at full health. Listeners may move the
    /// respawn point; it defaults to the world spawn.
    pub fn respawn(&mut self, id: u64) -> HookOutcome<(String, Vec3), WorldError> {
        let player = match self.player(id) {
            Ok(player) => player,
            Err(err) => return HookOutcome::Failed(err),
        };
        if player.health > 0.0 {
            return HookOutcome::Failed(WorldError::Alive(id));
        }
        let pre = PlayerRespawnPre::new(player, self.default_level.clone(), SPAWN);

        let bus = self.bus.clone();
        bus.guard(
            pre,
            |pre| {
                if !self.levels.iter().any(|l| *l == pre.level) {
                    return Err(WorldError::UnknownLevel(pre.level.clone()));
                }
                let living = self
                    .living
                    .get_mut(&id)
                    .ok_or(WorldError::UnknownEntity(id))?;
                living.health = living.max_health;
                living.level = pre.level.clone();
                living.position = pre.position;
                debug!(id, level = %living.level, "Player respawned");
                Ok((living.level.clone(), living.position))
            },
            |pre, _| PlayerRespawnPost::from(pre),
        )
    }

    /// Broadcast a chat line from a player.
    pub fn chat(&mut self, id: u64, message: &str) -> HookOutcome<(), WorldError> {
        let player = match self.player(id) {
            Ok(player) => player,
            Err(err) => return HookOutcome::Failed(err),
        };
        let pre = PlayerChatPre::new(player, message.to_string());

        let bus = self.bus.clone();
        bus.guard(
            pre,
            |pre| {
                let line = format!("<{}> {}", pre.player().name, pre.message());
                info!("{line}");
                self.chat_log.push(line);
                Ok(())
            },
            |pre, _| PlayerChatPost::from(pre),
        )
    }

    /// Accept an inbound packet from a player. On a real host this runs on the
    /// network thread.
    pub fn receive_packet(&mut self, id: u64, packet: Packet) -> HookOutcome<(), WorldError> {
        let player = match self.player(id) {
            Ok(player) => player,
            Err(err) => return HookOutcome::Failed(err),
        };
        let pre = PacketReceivePre::new(player, packet);

        let bus = self.bus.clone();
        bus.guard(
            pre,
            |pre| {
                self.inbound.push((id, pre.packet().clone()));
                Ok(())
            },
            |pre, _| PacketReceivePost::from(pre),
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
