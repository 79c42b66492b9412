//! Container events.

use crate::types::{ItemStack, PlayerInfo};

hook_event! {
    /// A player opens a container.
    InventoryOpenPre / InventoryOpenPost {
        fixed {
            player: PlayerInfo,
            container_id: i32,
            /// Menu type, e.g. `minecraft:chest`.
            kind: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A player clicks a container slot.
    InventoryClickPre / InventoryClickPost {
        fixed {
            player: PlayerInfo,
            container_id: i32,
        }
        mutable {
            slot: i32,
            button: i32,
            /// Item on the cursor.
            carried: ItemStack,
        }
    }
}

hook_event! {
    /// A player closes a container.
    InventoryClosePre / InventoryClosePost {
        fixed {
            player: PlayerInfo,
            container_id: i32,
        }
        mutable {}
    }
}
