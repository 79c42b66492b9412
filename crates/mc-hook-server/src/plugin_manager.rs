//! Plugin manager: loads configs, enables plugins against the bus, disables them.

use std::path::Path;

use mc_hook_bus::{EventBus, Plugin, Subscriber};
use tracing::{info, warn};

/// Manages all registered plugins and their bus subscriptions.
pub struct PluginManager {
    plugins: Vec<Box<dyn Plugin>>,
    /// Subscribers of enabled plugins, parallel to `plugins` once enabled.
    subscribers: Vec<Subscriber>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register a plugin (call before enable_all).
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        info!("Registered plugin: {}", plugin.info().name);
        self.plugins.push(plugin);
    }

    pub fn plugin_names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.info().name).collect()
    }

    pub fn is_enabled(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Load configs for all plugins from `<dir>/<name>/config.json`.
    ///
    /// A missing file is created from the plugin's default. An unreadable or
    /// malformed file falls back to the default without overwriting it.
    pub fn load_configs(&mut self, dir: &Path) {
        for plugin in &mut self.plugins {
            let info = plugin.info();
            let Some(default_config) = plugin.default_config() else {
                continue;
            };
            let plugin_dir = dir.join(&info.name);
            let config_path = plugin_dir.join("config.json");

            let config = if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(data) => match serde_json::from_str(&data) {
                        Ok(v) => v,
                        Err(e) => {
                            warn!("Failed to parse config for {}: {e}", info.name);
                            default_config
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config for {}: {e}", info.name);
                        default_config
                    }
                }
            } else {
                if let Err(e) = std::fs::create_dir_all(&plugin_dir) {
                    warn!("Failed to create config dir for {}: {e}", info.name);
                } else if let Ok(json) = serde_json::to_string_pretty(&default_config) {
                    if let Err(e) = std::fs::write(&config_path, json) {
                        warn!("Failed to write default config for {}: {e}", info.name);
                    }
                }
                default_config
            };

            plugin.load_config(config);
        }
    }

    /// Enable all registered plugins. Each gets a subscriber tagged with its name.
    pub fn enable_all(&mut self, bus: &EventBus) {
        if self.is_enabled() {
            warn!("Plugins already enabled");
            return;
        }
        for plugin in &mut self.plugins {
            let info = plugin.info();
            let events = bus.subscriber(info.name.clone());
            plugin.on_enable(&events);
            info!("Enabled plugin: {} v{}", info.name, info.version);
            self.subscribers.push(events);
        }
    }

    /// Disable all enabled plugins, removing their listeners first.
    pub fn disable_all(&mut self) {
        for (plugin, events) in self.plugins.iter_mut().zip(self.subscribers.drain(..)) {
            let removed = events.unregister_all();
            plugin.on_disable();
            info!("Disabled plugin: {} ({removed} listeners removed)", events.owner());
        }
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mc_hook_api::ServerTick;
    use mc_hook_bus::{PluginInfo, NORMAL};
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Arc;

    /// Counts ticks; config controls the step.
    struct TestPlugin {
        step: u64,
        ticks: Arc<AtomicU64>,
        disabled: Arc<AtomicBool>,
    }

    impl TestPlugin {
        fn new() -> Self {
            Self {
                step: 1,
                ticks: Arc::new(AtomicU64::new(0)),
                disabled: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    impl Plugin for TestPlugin {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                name: "TestPlugin".into(),
                version: "0.1.0".into(),
                description: "Test".into(),
                author: "Test".into(),
            }
        }

        fn on_enable(&mut self, events: &Subscriber) {
            let ticks = self.ticks.clone();
            let step = self.step;
            events.listen(NORMAL, move |_: &mut ServerTick| {
                ticks.fetch_add(step, Ordering::Relaxed);
            });
        }

        fn on_disable(&mut self) {
            self.disabled.store(true, Ordering::Relaxed);
        }

        fn default_config(&self) -> Option<serde_json::Value> {
            Some(serde_json::json!({ "step": 1 }))
        }

        fn load_config(&mut self, config: serde_json::Value) {
            if let Some(step) = config.get("step").and_then(|v| v.as_u64()) {
                self.step = step;
            }
        }
    }

    #[test]
    fn enable_all_registers_listeners() {
        let bus = EventBus::default();
        let plugin = TestPlugin::new();
        let ticks = plugin.ticks.clone();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(plugin));
        mgr.enable_all(&bus);

        assert!(mgr.is_enabled());
        assert_eq!(mgr.plugin_names(), vec!["TestPlugin".to_string()]);
        bus.dispatch(ServerTick { tick: 1 });
        assert_eq!(ticks.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn enable_twice_does_not_duplicate() {
        let bus = EventBus::default();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(TestPlugin::new()));
        mgr.enable_all(&bus);
        mgr.enable_all(&bus);
        assert_eq!(bus.listener_count::<ServerTick>(), 1);
    }

    #[test]
    fn disable_all_removes_listeners() {
        let bus = EventBus::default();
        let plugin = TestPlugin::new();
        let disabled = plugin.disabled.clone();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(plugin));
        mgr.enable_all(&bus);
        mgr.disable_all();

        assert!(!mgr.is_enabled());
        assert!(disabled.load(Ordering::Relaxed));
        assert!(!bus.has_listeners::<ServerTick>());
    }

    #[test]
    fn no_plugins_is_noop() {
        let bus = EventBus::default();
        let mut mgr = PluginManager::new();
        mgr.enable_all(&bus);
        mgr.disable_all();
        assert!(mgr.plugin_names().is_empty());
    }

    #[test]
    fn load_configs_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(TestPlugin::new()));
        mgr.load_configs(dir.path());

        let written = std::fs::read_to_string(dir.path().join("TestPlugin/config.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["step"], 1);
    }

    #[test]
    fn load_configs_reads_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("TestPlugin")).unwrap();
        std::fs::write(dir.path().join("TestPlugin/config.json"), r#"{"step": 5}"#).unwrap();

        let bus = EventBus::default();
        let plugin = TestPlugin::new();
        let ticks = plugin.ticks.clone();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(plugin));
        mgr.load_configs(dir.path());
        mgr.enable_all(&bus);

        bus.dispatch(ServerTick { tick: 1 });
        assert_eq!(ticks.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn malformed_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("TestPlugin")).unwrap();
        std::fs::write(dir.path().join("TestPlugin/config.json"), "{not json").unwrap();

        let bus = EventBus::default();
        let plugin = TestPlugin::new();
        let ticks = plugin.ticks.clone();
        let mut mgr = PluginManager::new();
        mgr.register(Box::new(plugin));
        mgr.load_configs(dir.path());
        mgr.enable_all(&bus);

        bus.dispatch(ServerTick { tick: 1 });
        assert_eq!(ticks.load(Ordering::Relaxed), 1);
        // the broken file is left for the operator to fix
        let kept = std::fs::read_to_string(dir.path().join("TestPlugin/config.json")).unwrap();
        assert_eq!(kept, "{not json");
    }
}
