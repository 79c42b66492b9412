//! Plugin trait: implemented by plugin code that subscribes to the bus.

use crate::facade::Subscriber;

/// Metadata about a plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

pub trait Plugin: Send {
    /// Return plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called when the plugin is enabled. Register listeners through `events`;
    /// they are tagged with the plugin name and removed on disable.
    fn on_enable(&mut self, events: &Subscriber);

    /// Called when the plugin is disabled, after its listeners were removed.
    fn on_disable(&mut self) {}

    /// Return a default config as JSON. If `Some`, the plugin gets a config file.
    fn default_config(&self) -> Option<serde_json::Value> {
        None
    }

    /// Called with the loaded config (from `<plugins dir>/<name>/config.json`)
    /// before `on_enable`.
    fn load_config(&mut self, _config: serde_json::Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::EventBus;
    use crate::facade::NORMAL;
    use mc_hook_api::{Cancellable, GameMode, PlayerChatPre, PlayerInfo, Vec3};
    use std::sync::Arc;

    struct ChatGuard {
        blocked: Arc<Vec<String>>,
    }

    impl Plugin for ChatGuard {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                name: "ChatGuard".into(),
                version: "1.0.0".into(),
                description: "Cancels chat containing blocked words".into(),
                author: "Test".into(),
            }
        }

        fn on_enable(&mut self, events: &Subscriber) {
            let blocked = self.blocked.clone();
            events.listen(NORMAL, move |e: &mut PlayerChatPre| {
                if blocked.iter().any(|w| e.message().contains(w.as_str())) {
                    e.cancel();
                }
            });
        }

        fn default_config(&self) -> Option<serde_json::Value> {
            Some(serde_json::json!({ "blocked": ["bad"] }))
        }

        fn load_config(&mut self, config: serde_json::Value) {
            if let Some(words) = config.get("blocked").and_then(|v| v.as_array()) {
                self.blocked = Arc::new(
                    words
                        .iter()
                        .filter_map(|w| w.as_str().map(str::to_string))
                        .collect(),
                );
            }
        }
    }

    fn chat(message: &str) -> PlayerChatPre {
        PlayerChatPre::new(
            PlayerInfo {
                name: "TestPlayer".into(),
                uuid: "00000000-0000-0000-0000-000000000001".into(),
                runtime_id: 1,
                position: Vec3::new(0.5, 65.62, 0.5),
                gamemode: GameMode::Survival,
                health: 20.0,
            },
            message.into(),
        )
    }

    #[test]
    fn plugin_cancels_bad_chat() {
        let bus = EventBus::default();
        let mut plugin = ChatGuard {
            blocked: Arc::new(vec!["bad".into()]),
        };
        let events = bus.subscriber(plugin.info().name);
        plugin.on_enable(&events);

        assert!(bus.fire_pre(chat("this is bad word")).is_none());
        assert!(bus.fire_pre(chat("hello everyone")).is_some());
    }

    #[test]
    fn plugin_config_replaces_words() {
        let mut plugin = ChatGuard {
            blocked: Arc::new(Vec::new()),
        };
        let default = plugin.default_config().unwrap();
        assert_eq!(default["blocked"][0], "bad");

        plugin.load_config(serde_json::json!({ "blocked": ["spam", "scam"] }));
        assert_eq!(*plugin.blocked, vec!["spam".to_string(), "scam".to_string()]);
    }

    #[test]
    fn unregister_all_removes_plugin_listeners() {
        let bus = EventBus::default();
        let mut plugin = ChatGuard {
            blocked: Arc::new(vec!["bad".into()]),
        };
        let events = bus.subscriber("ChatGuard");
        plugin.on_enable(&events);
        assert_eq!(events.unregister_all(), 1);
        assert!(bus.fire_pre(chat("bad")).is_some());
    }
}
