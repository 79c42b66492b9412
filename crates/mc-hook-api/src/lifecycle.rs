//! Single-phase lifecycle events. None of these can be cancelled.

use crate::types::PlayerInfo;
use crate::{Event, Phase};

/// Host finished starting; plugins are enabled.
#[derive(Debug, Clone, Copy)]
pub struct ServerStarted;

/// Host is shutting down.
#[derive(Debug, Clone, Copy)]
pub struct ServerStopping;

/// Start of a main-loop tick.
#[derive(Debug, Clone, Copy)]
pub struct ServerTick {
    /// Ticks since start, beginning at 1.
    pub tick: u64,
}

#[derive(Debug, Clone)]
pub struct PlayerJoin {
    pub player: PlayerInfo,
}

#[derive(Debug, Clone)]
pub struct PlayerQuit {
    pub player: PlayerInfo,
}

/// A player arrived in another level. Fired after the move, never cancellable.
#[derive(Debug, Clone)]
pub struct PlayerChangedWorld {
    pub player: PlayerInfo,
    pub origin_level: String,
    pub level: String,
}

macro_rules! lifecycle_event {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Event for $ty {
                fn name(&self) -> &'static str {
                    stringify!($ty)
                }

                fn phase(&self) -> Phase {
                    Phase::Post
                }
            }
        )*
    };
}

lifecycle_event!(
    ServerStarted,
    ServerStopping,
    ServerTick,
    PlayerJoin,
    PlayerQuit,
    PlayerChangedWorld,
);
