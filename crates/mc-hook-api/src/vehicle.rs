//! Vehicle events (boats, minecarts).

use crate::types::{DamageCause, EntityRef, PlayerInfo};

hook_event! {
    /// A vehicle takes damage.
    VehicleDamagePre / VehicleDamagePost {
        fixed {
            vehicle: EntityRef,
            attacker: Option<EntityRef>,
            /// Set when the attacker is a player.
            player: Option<PlayerInfo>,
            cause: DamageCause,
        }
        mutable {
            damage: f32,
        }
    }
}

hook_event! {
    /// An entity boards a vehicle.
    VehicleEnterPre / VehicleEnterPost {
        fixed {
            vehicle: EntityRef,
            passenger: EntityRef,
            player: Option<PlayerInfo>,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity leaves a vehicle.
    VehicleExitPre / VehicleExitPost {
        fixed {
            vehicle: EntityRef,
            passenger: EntityRef,
            player: Option<PlayerInfo>,
        }
        mutable {}
    }
}
