//! Block, chunk and weather events. Block ids are namespaced strings such as
//! `minecraft:stone`.

use crate::types::{BlockFace, BlockPos, ChunkPos, EntityRef, ItemStack, PlayerInfo, Vec3};

hook_event! {
    /// A player places a block.
    BlockPlacePre / BlockPlacePost {
        fixed {
            player: PlayerInfo,
            pos: BlockPos,
            block: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A player starts breaking a block.
    BlockDamagePre / BlockDamagePost {
        fixed {
            player: PlayerInfo,
            level: String,
            pos: BlockPos,
            block: String,
            face: BlockFace,
            item_in_hand: ItemStack,
        }
        mutable {
            /// Break the block immediately instead of starting the dig.
            insta_break: bool,
        }
    }
}

hook_event! {
    /// A block is destroyed by fire.
    BlockBurnPre / BlockBurnPost {
        fixed {
            level: String,
            pos: BlockPos,
            block: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A block catches fire.
    BlockIgnitePre / BlockIgnitePost {
        fixed {
            level: String,
            pos: BlockPos,
            block: String,
            /// What lit it, e.g. `lava`, `spread`, `flint_and_steel`.
            cause: String,
        }
        mutable {}
    }
}

hook_event! {
    /// An explosion not caused by an entity (beds, respawn anchors).
    BlockExplodePre / BlockExplodePost {
        fixed {
            level: String,
            center: Vec3,
            radius: f32,
        }
        mutable {}
    }
}

hook_event! {
    /// A dispenser or dropper fires.
    BlockDispensePre / BlockDispensePost {
        fixed {
            level: String,
            pos: BlockPos,
            block: String,
            direction: BlockFace,
        }
        mutable {
            item: ItemStack,
        }
    }
}

hook_event! {
    /// A block forms naturally (snow, ice, concrete, obsidian).
    BlockFormPre / BlockFormPost {
        fixed {
            level: String,
            pos: BlockPos,
            old_block: String,
        }
        mutable {
            new_block: String,
        }
    }
}

hook_event! {
    /// A fluid flows into a neighbouring block.
    BlockFromToPre / BlockFromToPost {
        fixed {
            level: String,
            source: BlockPos,
            target: BlockPos,
        }
        mutable {
            fluid: String,
        }
    }
}

hook_event! {
    /// A piston pulls blocks back.
    BlockPistonRetractPre / BlockPistonRetractPost {
        fixed {
            level: String,
            piston_pos: BlockPos,
            blocks: Vec<BlockPos>,
            direction: BlockFace,
        }
        mutable {}
    }
}

hook_event! {
    /// Leaves disappear away from any log.
    LeavesDecayPre / LeavesDecayPost {
        fixed {
            level: String,
            pos: BlockPos,
            block: String,
        }
        mutable {}
    }
}

hook_event! {
    /// A player edits a sign.
    SignChangePre / SignChangePost {
        fixed {
            player: PlayerInfo,
            level: String,
            pos: BlockPos,
            /// Front or back side of the sign.
            front: bool,
        }
        mutable {
            lines: Vec<String>,
        }
    }
}

hook_event! {
    /// A nether or end portal is created.
    PortalCreatePre / PortalCreatePost {
        fixed {
            level: String,
            blocks: Vec<BlockPos>,
            reason: String,
            creator: Option<EntityRef>,
        }
        mutable {}
    }
}

hook_event! {
    LightningStrikePre / LightningStrikePost {
        fixed {
            level: String,
            bolt: EntityRef,
            position: Vec3,
        }
        mutable {}
    }
}

hook_event! {
    /// A chunk is loaded into a level.
    ChunkLoadPre / ChunkLoadPost {
        fixed {
            level: String,
            chunk: ChunkPos,
        }
        mutable {}
    }
}

hook_event! {
    /// A chunk is unloaded from a level.
    ChunkUnloadPre / ChunkUnloadPost {
        fixed {
            level: String,
            chunk: ChunkPos,
        }
        mutable {}
    }
}

hook_event! {
    /// Weather in a level changes.
    WeatherChangePre / WeatherChangePost {
        fixed {
            level: String,
            raining: bool,
            thundering: bool,
        }
        mutable {}
    }
}
