//! Player events.

use crate::types::{
    Animation, BlockFace, BlockPos, EntityRef, EquipmentSlot, FishState, GameMode, Hand,
    InteractAction, ItemStack, PlayerInfo, Vec3,
};

hook_event! {
    /// A player sends a chat message.
    PlayerChatPre / PlayerChatPost {
        fixed {
            player: PlayerInfo,
            message: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A player runs a command (without the leading slash).
    PlayerCommandPre / PlayerCommandPost {
        fixed {
            player: PlayerInfo,
            command: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A player moves.
    PlayerMovePre / PlayerMovePost {
        fixed {
            player: PlayerInfo,
            origin: Vec3,
        }
        mutable {
            to: Vec3,
        }
    }
}

hook_event! {
    /// A player is teleported, possibly across levels.
    PlayerTeleportPre / PlayerTeleportPost {
        fixed {
            player: PlayerInfo,
            origin_level: String,
            origin: Vec3,
        }
        mutable {
            to_level: String,
            to: Vec3,
        }
    }
}

hook_event! {
    /// A dead player respawns. Listeners may move the respawn point.
    PlayerRespawnPre / PlayerRespawnPost {
        fixed {
            player: PlayerInfo,
        }
        mutable {
            level: String,
            position: Vec3,
        }
    }
}

hook_event! {
    /// A player is disconnected by the server.
    PlayerKickPre / PlayerKickPost {
        fixed {
            player: PlayerInfo,
        }
        mutable {
            reason: String,
        }
    }
}

hook_event! {
    /// A player switches game mode.
    PlayerGameModeChangePre / PlayerGameModeChangePost {
        fixed {
            player: PlayerInfo,
            old_mode: GameMode,
            new_mode: GameMode,
        }
        mutable {}
    }
}

hook_event! {
    /// A player clicks a block or the air, or triggers a physical interaction.
    PlayerInteractPre / PlayerInteractPost {
        fixed {
            player: PlayerInfo,
            action: InteractAction,
            item: ItemStack,
            hand: Option<Hand>,
            /// Clicked block id; `None` for air.
            block: Option<String>,
            block_pos: Option<BlockPos>,
            block_face: Option<BlockFace>,
        }
        mutable {}
    }
}

hook_event! {
    /// A player right-clicks an entity.
    PlayerInteractEntityPre / PlayerInteractEntityPost {
        fixed {
            player: PlayerInfo,
            entity: EntityRef,
            hand: Option<Hand>,
        }
        mutable {}
    }
}

hook_event! {
    /// A player swaps or edits equipment on an armor stand.
    PlayerArmorStandManipulatePre / PlayerArmorStandManipulatePost {
        fixed {
            player: PlayerInfo,
            armor_stand: EntityRef,
            hand: Hand,
            slot: EquipmentSlot,
        }
        mutable {}
    }
}

hook_event! {
    /// A player shears an entity.
    PlayerShearEntityPre / PlayerShearEntityPost {
        fixed {
            player: PlayerInfo,
            entity: EntityRef,
            hand: Hand,
            item: ItemStack,
        }
        mutable {}
    }
}

hook_event! {
    /// A player drops an item from the inventory.
    PlayerDropItemPre / PlayerDropItemPost {
        fixed {
            player: PlayerInfo,
            item: ItemStack,
            /// Whole stack rather than a single item.
            drop_all: bool,
        }
        mutable {}
    }
}

hook_event! {
    /// A player picks up an item entity.
    PlayerPickupItemPre / PlayerPickupItemPost {
        fixed {
            player: PlayerInfo,
            item_entity: EntityRef,
            item: ItemStack,
        }
        mutable {}
    }
}

hook_event! {
    /// A player finishes eating or drinking.
    PlayerItemConsumePre / PlayerItemConsumePost {
        fixed {
            player: PlayerInfo,
        }
        mutable {
            item: ItemStack,
        }
    }
}

hook_event! {
    /// A player changes the selected hotbar slot.
    PlayerItemHeldPre / PlayerItemHeldPost {
        fixed {
            player: PlayerInfo,
            previous_slot: i32,
        }
        mutable {
            new_slot: i32,
        }
    }
}

hook_event! {
    /// A player swaps main-hand and off-hand items.
    PlayerSwapHandItemsPre / PlayerSwapHandItemsPost {
        fixed {
            player: PlayerInfo,
        }
        mutable {}
    }
}

hook_event! {
    /// A player empties a bucket.
    PlayerBucketEmptyPre / PlayerBucketEmptyPost {
        fixed {
            player: PlayerInfo,
            hand: Hand,
            pos: BlockPos,
            item: ItemStack,
        }
        mutable {
            /// Block placed by the bucket.
            block: String,
        }
    }
}

hook_event! {
    /// A player fills a bucket.
    PlayerBucketFillPre / PlayerBucketFillPost {
        fixed {
            player: PlayerInfo,
            hand: Hand,
            pos: BlockPos,
            block: String,
        }
        mutable {
            /// Filled bucket given to the player.
            item: ItemStack,
        }
    }
}

hook_event! {
    /// A player's food level changes.
    FoodLevelChangePre / FoodLevelChangePost {
        fixed {
            player: PlayerInfo,
            /// Item eaten, if that caused the change.
            item: Option<ItemStack>,
        }
        mutable {
            food_level: i32,
        }
    }
}

hook_event! {
    /// A player gains or loses experience points.
    PlayerExpChangePre / PlayerExpChangePost {
        fixed {
            player: PlayerInfo,
        }
        mutable {
            amount: i32,
        }
    }
}

hook_event! {
    /// A player's experience level changes.
    PlayerLevelChangePre / PlayerLevelChangePost {
        fixed {
            player: PlayerInfo,
            old_level: i32,
        }
        mutable {
            new_level: i32,
        }
    }
}

hook_event! {
    /// A player completes an advancement criterion.
    PlayerAdvancementDonePre / PlayerAdvancementDonePost {
        fixed {
            player: PlayerInfo,
            advancement: String,
            criterion: String,
        }
        mutable {}
    }
}

hook_event! {
    PlayerAnimationPre / PlayerAnimationPost {
        fixed {
            player: PlayerInfo,
            animation: Animation,
            hand: Hand,
        }
        mutable {}
    }
}

hook_event! {
    /// A player tries to sleep.
    PlayerBedEnterPre / PlayerBedEnterPost {
        fixed {
            player: PlayerInfo,
            bed: String,
            bed_pos: BlockPos,
        }
        mutable {}
    }
}

hook_event! {
    /// A player gets out of bed.
    PlayerBedLeavePre / PlayerBedLeavePost {
        fixed {
            player: PlayerInfo,
            bed: String,
            bed_pos: BlockPos,
        }
        mutable {}
    }
}

hook_event! {
    /// Fishing rod state change.
    PlayerFishPre / PlayerFishPost {
        fixed {
            player: PlayerInfo,
            hook: EntityRef,
            state: FishState,
        }
        mutable {}
    }
}

hook_event! {
    PlayerToggleFlightPre / PlayerToggleFlightPost {
        fixed {
            player: PlayerInfo,
            flying: bool,
        }
        mutable {}
    }
}

hook_event! {
    PlayerToggleSneakPre / PlayerToggleSneakPost {
        fixed {
            player: PlayerInfo,
            sneaking: bool,
        }
        mutable {}
    }
}

hook_event! {
    PlayerToggleSprintPre / PlayerToggleSprintPost {
        fixed {
            player: PlayerInfo,
            sprinting: bool,
        }
        mutable {}
    }
}
