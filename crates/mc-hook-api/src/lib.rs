//! Hook API: event traits, payload types, and every Pre/Post event family.
//!
//! This crate only describes events. Dispatch lives in mc-hook-bus, and the
//! host-side call sites that build these events live outside the core.
//!
//! Every intercepted operation is modelled as two concrete types:
//! - `XxxPre`: fired before the operation; cancellable; fields a listener may
//!   override are `pub`, everything else is read through getters.
//! - `XxxPost`: fired after the operation completed; read-only.

#[macro_use]
mod macros;

pub mod entity;
pub mod inventory;
pub mod lifecycle;
pub mod packet;
pub mod player;
pub mod types;
pub mod vehicle;
pub mod world;

use std::any::Any;

pub use entity::*;
pub use inventory::*;
pub use lifecycle::*;
pub use packet::*;
pub use player::*;
pub use types::*;
pub use vehicle::*;
pub use world::*;

// ─── Event traits ────────────────────────────────────────────────────────────

/// When an event is fired relative to the operation it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the operation runs. Cancellation and mutation are meaningful.
    Pre,
    /// After the operation completed. Informational only.
    Post,
}

/// Something that happened, or is about to happen, inside the host.
///
/// Listeners are keyed by the concrete type, so each Pre and Post is its own
/// event with its own listener list.
pub trait Event: Any + Send + 'static {
    /// Stable name used in log output, e.g. `"EntityDamagePre"`.
    fn name(&self) -> &'static str;

    fn phase(&self) -> Phase;

    /// Whether a listener cancelled this event. Always `false` for events that
    /// are not [`Cancellable`].
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// An event whose operation can be suppressed by a listener.
pub trait Cancellable: Event {
    fn set_cancelled(&mut self, cancelled: bool);

    /// Cancel the event. Dispatch stops after the current listener returns.
    fn cancel(&mut self) {
        self.set_cancelled(true);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> PlayerInfo {
        PlayerInfo {
            name: "TestPlayer".into(),
            uuid: "00000000-0000-0000-0000-000000000001".into(),
            runtime_id: 1,
            position: Vec3::new(0.5, 65.62, 0.5),
            gamemode: GameMode::Survival,
            health: 20.0,
        }
    }

    fn zombie() -> EntityRef {
        EntityRef::new(7, "minecraft:zombie")
    }

    #[test]
    fn pre_starts_uncancelled() {
        let pre = EntityDamagePre::new(zombie(), None, DamageCause::Fall, 4.0);
        assert!(!pre.is_cancelled());
        assert_eq!(pre.phase(), Phase::Pre);
        assert_eq!(pre.name(), "EntityDamagePre");
    }

    #[test]
    fn cancel_sets_flag() {
        let mut pre = PlayerChatPre::new(test_player(), "hello".into());
        pre.cancel();
        assert!(pre.is_cancelled());
        pre.set_cancelled(false);
        assert!(!pre.is_cancelled());
    }

    #[test]
    fn mutable_fields_are_public_on_pre() {
        let mut pre = EntityRegainHealthPre::new(zombie(), None, 1.0);
        pre.amount = 3.5;
        assert_eq!(pre.amount, 3.5);
        assert_eq!(pre.entity().runtime_id, 7);
    }

    #[test]
    fn post_carries_applied_values() {
        let mut pre = EntityDamagePre::new(
            zombie(),
            Some(test_player()),
            DamageCause::Attack,
            10.0,
        );
        pre.damage = 7.5;
        let post = EntityDamagePost::from(pre);
        assert_eq!(post.phase(), Phase::Post);
        assert_eq!(*post.damage(), 7.5);
        assert_eq!(*post.cause(), DamageCause::Attack);
        assert_eq!(post.player().as_ref().map(|p| p.name.as_str()), Some("TestPlayer"));
        assert!(!post.is_cancelled());
    }

    #[test]
    fn lifecycle_events_are_post_phase() {
        assert_eq!(ServerStarted.phase(), Phase::Post);
        assert_eq!(ServerTick { tick: 3 }.name(), "ServerTick");
        assert!(!PlayerJoin { player: test_player() }.is_cancelled());
    }

    #[test]
    fn packet_direction_matches_event() {
        let packet = Packet::new(0x09, bytes::Bytes::from_static(b"hi"));
        let pre = PacketReceivePre::new(test_player(), packet.clone());
        assert_eq!(pre.packet().id, 0x09);
        assert_eq!(PacketReceivePre::DIRECTION, PacketDirection::Receive);
        assert_eq!(PacketSendPre::DIRECTION, PacketDirection::Send);
    }

    #[test]
    fn teleport_destination_is_mutable() {
        let mut pre = PlayerTeleportPre::new(
            test_player(),
            "minecraft:overworld".into(),
            Vec3::new(0.0, 64.0, 0.0),
            "minecraft:the_nether".into(),
            Vec3::new(8.0, 70.0, 8.0),
        );
        pre.to_level = "minecraft:overworld".into();
        pre.to = Vec3::new(1.0, 64.0, 1.0);
        let post = PlayerTeleportPost::from(pre);
        assert_eq!(post.to_level(), "minecraft:overworld");
        assert_eq!(*post.origin_level(), "minecraft:overworld");
        assert_eq!(post.to().x, 1.0);
    }

    #[test]
    fn post_from_pre_for_families_with_an_origin() {
        let origin = Vec3::new(1.0, 64.0, 1.0);
        let to = Vec3::new(9.0, 70.0, 9.0);

        let entity = EntityTeleportPost::from(EntityTeleportPre::new(zombie(), origin, to));
        assert_eq!((*entity.origin(), *entity.to()), (origin, to));

        let moved: PlayerMovePost = PlayerMovePre::new(test_player(), origin, to).into();
        assert_eq!((*moved.origin(), *moved.to()), (origin, to));

        let teleported = PlayerTeleportPost::from(PlayerTeleportPre::new(
            test_player(),
            "minecraft:overworld".into(),
            origin,
            "minecraft:the_end".into(),
            to,
        ));
        assert_eq!(*teleported.origin(), origin);
        assert_eq!(teleported.to_level(), "minecraft:the_end");
    }

    #[test]
    fn respawn_point_is_mutable() {
        let mut pre = PlayerRespawnPre::new(
            test_player(),
            "minecraft:overworld".into(),
            Vec3::new(0.5, 64.0, 0.5),
        );
        pre.level = "minecraft:the_nether".into();
        let post = PlayerRespawnPost::from(pre);
        assert_eq!(post.level(), "minecraft:the_nether");
        assert_eq!(post.name(), "PlayerRespawnPost");
    }

    #[test]
    fn sign_lines_carry_through() {
        let mut pre = SignChangePre::new(
            test_player(),
            "minecraft:overworld".into(),
            BlockPos::new(3, 64, -2),
            true,
            vec!["".into(); 4],
        );
        pre.lines[0] = "Welcome".into();
        let post = SignChangePost::from(pre);
        assert_eq!(post.lines()[0], "Welcome");
        assert!(*post.front());
    }

    #[test]
    fn chunk_containing_block() {
        assert_eq!(ChunkPos::containing(BlockPos::new(17, 0, -1)), ChunkPos::new(1, -1));
        assert_eq!(ChunkPos::containing(BlockPos::new(0, 0, 15)), ChunkPos::new(0, 0));
    }

    #[test]
    fn interact_action_click_sides() {
        assert!(InteractAction::LeftClickAir.is_left_click());
        assert!(InteractAction::RightClickBlock.is_right_click());
        assert!(!InteractAction::Physical.is_left_click());
        assert!(!InteractAction::Physical.is_right_click());
    }

    #[test]
    fn vehicle_damage_is_mutable_and_cancellable() {
        let mut pre = VehicleDamagePre::new(
            EntityRef::new(40, "minecraft:boat"),
            None,
            Some(test_player()),
            DamageCause::Attack,
            4.0,
        );
        pre.damage = 0.0;
        pre.cancel();
        assert!(pre.is_cancelled());
        assert_eq!(*VehicleDamagePost::from(pre).damage(), 0.0);
    }

    #[test]
    fn changed_world_is_post_only() {
        let event = PlayerChangedWorld {
            player: test_player(),
            origin_level: "minecraft:overworld".into(),
            level: "minecraft:the_nether".into(),
        };
        assert_eq!(event.phase(), Phase::Post);
        assert!(!event.is_cancelled());
    }
}
