//! Entity events.

use crate::types::{
    BlockPos, DamageCause, EntityRef, Hand, HitTarget, PlayerInfo, PotionAction, PotionEffect,
    Vec3,
};

hook_event! {
    /// A living entity takes damage.
    EntityDamagePre / EntityDamagePost {
        fixed {
            entity: EntityRef,
            /// Set when the damaged entity is a player.
            player: Option<PlayerInfo>,
            cause: DamageCause,
        }
        mutable {
            /// Damage to apply, before armor.
            damage: f32,
        }
    }
}

hook_event! {
    /// A living entity regains health.
    EntityRegainHealthPre / EntityRegainHealthPost {
        fixed {
            entity: EntityRef,
            player: Option<PlayerInfo>,
        }
        mutable {
            amount: f32,
        }
    }
}

hook_event! {
    /// A living entity dies.
    EntityDeathPre / EntityDeathPost {
        fixed {
            entity: EntityRef,
            player: Option<PlayerInfo>,
            cause: DamageCause,
        }
        mutable {}
    }
}

hook_event! {
    /// A totem saves an entity from death.
    EntityResurrectPre / EntityResurrectPost {
        fixed {
            entity: EntityRef,
            player: Option<PlayerInfo>,
            /// Hand holding the totem, if any.
            hand: Option<Hand>,
            cause: DamageCause,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity is added to a level.
    EntitySpawnPre / EntitySpawnPost {
        fixed {
            entity: EntityRef,
            position: Vec3,
        }
        mutable {}
    }
}

hook_event! {
    /// A mob selects a new target. `None` clears the target.
    EntityTargetPre / EntityTargetPost {
        fixed {
            entity: EntityRef,
            target: Option<EntityRef>,
        }
        mutable {}
    }
}

hook_event! {
    /// A non-player entity is teleported.
    EntityTeleportPre / EntityTeleportPost {
        fixed {
            entity: EntityRef,
            origin: Vec3,
        }
        mutable {
            to: Vec3,
        }
    }
}

hook_event! {
    /// A living entity is knocked back.
    EntityKnockbackPre / EntityKnockbackPost {
        fixed {
            entity: EntityRef,
            player: Option<PlayerInfo>,
        }
        mutable {
            power: f64,
            dx: f64,
            dz: f64,
        }
    }
}

hook_event! {
    /// An entity's remaining air supply changes.
    EntityAirChangePre / EntityAirChangePost {
        fixed {
            entity: EntityRef,
        }
        mutable {
            amount: i32,
        }
    }
}

hook_event! {
    /// An entity catches fire.
    EntityCombustPre / EntityCombustPost {
        fixed {
            entity: EntityRef,
        }
        mutable {
            /// Burn time in ticks.
            duration: i32,
        }
    }
}

hook_event! {
    /// Two animals produce offspring.
    EntityBreedPre / EntityBreedPost {
        fixed {
            mother: EntityRef,
            father: EntityRef,
            child: Option<EntityRef>,
            breeder: Option<PlayerInfo>,
        }
        mutable {}
    }
}

hook_event! {
    /// An animal enters love mode.
    EntityEnterLoveModePre / EntityEnterLoveModePost {
        fixed {
            entity: EntityRef,
            trigger: Option<PlayerInfo>,
        }
        mutable {}
    }
}

hook_event! {
    /// A player tames an animal.
    EntityTamePre / EntityTamePost {
        fixed {
            entity: EntityRef,
            owner: PlayerInfo,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity changes a block (endermen, falling sand, trampling).
    EntityChangeBlockPre / EntityChangeBlockPost {
        fixed {
            entity: EntityRef,
            pos: BlockPos,
            old_block: String,
            new_block: String,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity touches a portal block.
    EntityEnterPortalPre / EntityEnterPortalPost {
        fixed {
            entity: EntityRef,
            pos: BlockPos,
        }
        mutable {}
    }
}

hook_event! {
    /// An explosion caused by an entity, or by nothing in particular.
    EntityExplodePre / EntityExplodePost {
        fixed {
            entity: Option<EntityRef>,
            center: Vec3,
            radius: f32,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity starts riding another.
    EntityMountPre / EntityMountPost {
        fixed {
            entity: EntityRef,
            mount: EntityRef,
        }
        mutable {}
    }
}

hook_event! {
    /// An entity stops riding another.
    EntityDismountPre / EntityDismountPost {
        fixed {
            entity: EntityRef,
            dismounted: EntityRef,
        }
        mutable {}
    }
}

hook_event! {
    /// A potion effect is added, changed or removed.
    EntityPotionEffectPre / EntityPotionEffectPost {
        fixed {
            entity: EntityRef,
            player: Option<PlayerInfo>,
            source: Option<EntityRef>,
            action: PotionAction,
        }
        mutable {
            /// `None` for [`PotionAction::Cleared`].
            effect: Option<PotionEffect>,
        }
    }
}

hook_event! {
    /// A projectile is fired.
    ProjectileLaunchPre / ProjectileLaunchPost {
        fixed {
            projectile: EntityRef,
            shooter: Option<EntityRef>,
        }
        mutable {}
    }
}

hook_event! {
    /// A projectile hits something.
    ProjectileHitPre / ProjectileHitPost {
        fixed {
            projectile: EntityRef,
            hit: HitTarget,
        }
        mutable {}
    }
}
