//! Plugins shipped with the host. Each is configured from its own
//! `config.json` and only talks to the game through bus listeners.

use mc_hook_api::{Cancellable, EntityDamagePre, PacketReceivePre, PlayerChatPre};
use mc_hook_bus::{ListenerError, Plugin, PluginInfo, Subscriber, EARLY, LATE};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

fn info_for(name: &str, description: &str) -> PluginInfo {
    PluginInfo {
        name: name.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        description: description.into(),
        author: "mc-hook".into(),
    }
}

/// Parse a plugin config, keeping the current one if the value doesn't fit.
fn parse_config<T: for<'de> Deserialize<'de>>(plugin: &str, value: serde_json::Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Invalid config for {plugin}, keeping defaults: {e}");
            None
        }
    }
}

// ─── ChatFilter ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatFilterConfig {
    #[serde(default)]
    pub blocked_words: Vec<String>,
}

/// Cancels chat messages containing a blocked word (case-insensitive).
#[derive(Default)]
pub struct ChatFilter {
    config: ChatFilterConfig,
}

impl Plugin for ChatFilter {
    fn info(&self) -> PluginInfo {
        info_for("ChatFilter", "Blocks chat messages containing configured words")
    }

    fn on_enable(&mut self, events: &Subscriber) {
        let blocked: Vec<String> = self
            .config
            .blocked_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        if blocked.is_empty() {
            return;
        }
        events.listen(EARLY, move |e: &mut PlayerChatPre| {
            let message = e.message().to_lowercase();
            if blocked.iter().any(|w| message.contains(w.as_str())) {
                info!("Blocked chat from {}", e.player().name);
                e.cancel();
            }
        });
    }

    fn default_config(&self) -> Option<serde_json::Value> {
        serde_json::to_value(ChatFilterConfig::default()).ok()
    }

    fn load_config(&mut self, config: serde_json::Value) {
        if let Some(config) = parse_config("ChatFilter", config) {
            self.config = config;
        }
    }
}

// ─── DamageScaler ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageScalerConfig {
    pub multiplier: f32,
}

impl Default for DamageScalerConfig {
    fn default() -> Self {
        Self { multiplier: 1.0 }
    }
}

/// Multiplies all incoming entity damage.
#[derive(Default)]
pub struct DamageScaler {
    config: DamageScalerConfig,
}

impl Plugin for DamageScaler {
    fn info(&self) -> PluginInfo {
        info_for("DamageScaler", "Scales entity damage by a constant factor")
    }

    fn on_enable(&mut self, events: &Subscriber) {
        let multiplier = self.config.multiplier;
        if multiplier == 1.0 {
            return;
        }
        events.try_listen(LATE, move |e: &mut EntityDamagePre| {
            let scaled = e.damage * multiplier;
            if !scaled.is_finite() {
                return Err(ListenerError::msg(format!(
                    "damage {} x {multiplier} is not finite",
                    e.damage
                )));
            }
            e.damage = scaled;
            Ok::<_, ListenerError>(())
        });
    }

    fn default_config(&self) -> Option<serde_json::Value> {
        serde_json::to_value(DamageScalerConfig::default()).ok()
    }

    fn load_config(&mut self, config: serde_json::Value) {
        let Some(config) = parse_config::<DamageScalerConfig>("DamageScaler", config) else {
            return;
        };
        if config.multiplier.is_finite() && config.multiplier >= 0.0 {
            self.config = config;
        } else {
            warn!("DamageScaler multiplier must be >= 0, got {}", config.multiplier);
        }
    }
}

// ─── PacketFilter ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacketFilterConfig {
    #[serde(default)]
    pub blocked_packets: Vec<u32>,
}

/// Drops inbound packets by id.
#[derive(Default)]
pub struct PacketFilter {
    config: PacketFilterConfig,
}

impl Plugin for PacketFilter {
    fn info(&self) -> PluginInfo {
        info_for("PacketFilter", "Drops inbound packets with configured ids")
    }

    fn on_enable(&mut self, events: &Subscriber) {
        for &id in &self.config.blocked_packets {
            events.listen_packet(id, EARLY, move |e: &mut PacketReceivePre| {
                debug!(packet_id = id, player = %e.player().name, "Dropped packet");
                e.cancel();
            });
        }
    }

    fn default_config(&self) -> Option<serde_json::Value> {
        serde_json::to_value(PacketFilterConfig::default()).ok()
    }

    fn load_config(&mut self, config: serde_json::Value) {
        if let Some(config) = parse_config("PacketFilter", config) {
            self.config = config;
        }
    }
}

/// All built-in plugins, in registration order.
pub fn all() -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(ChatFilter::default()),
        Box::new(DamageScaler::default()),
        Box::new(PacketFilter::default()),
    ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────
