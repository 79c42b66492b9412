//! Lifecycle bridge: fires server-level events from the main loop.

use mc_hook_api::{ServerStarted, ServerStopping, ServerTick};
use mc_hook_bus::EventBus;
use tracing::info;

pub struct Bridge {
    bus: EventBus,
    tick: u64,
    started: bool,
}

impl Bridge {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            tick: 0,
            started: false,
        }
    }

    /// Host finished starting (plugins are enabled by now).
    pub fn server_started(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("Server started");
        self.bus.fire_post(ServerStarted);
    }

    /// Start of a main-loop tick. Returns the new tick count.
    pub fn tick(&mut self) -> u64 {
        self.tick += 1;
        self.bus.fire_post(ServerTick { tick: self.tick });
        self.tick
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn server_stopping(&mut self) {
        info!("Server stopping after {} ticks", self.tick);
        self.bus.fire_post(ServerStopping);
    }
}
