use std::time::Duration;

use serde::Deserialize;

/// Bus tuning, read from the `[bus]` section of the host config.
#[derive(Debug, Clone, Deserialize)]
pub struct BusConfig {
    /// Warn when a single listener runs longer than this. 0 = disabled.
    #[serde(default = "default_slow_listener_warn_ms")]
    pub slow_listener_warn_ms: u64,
}

fn default_slow_listener_warn_ms() -> u64 {
    50
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            slow_listener_warn_ms: default_slow_listener_warn_ms(),
        }
    }
}

impl BusConfig {
    pub fn slow_listener_threshold(&self) -> Option<Duration> {
        match self.slow_listener_warn_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
