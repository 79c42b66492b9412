use std::path::Path;

use mc_hook_bus::BusConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub bus: BusConfig,
    #[serde(default)]
    pub plugins: PluginsSection,
    #[serde(default)]
    pub world: WorldSection,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    pub name: String,
    /// Main-loop ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
}

fn default_tick_rate() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct PluginsSection {
    #[serde(default = "default_plugins_directory")]
    pub directory: String,
}

fn default_plugins_directory() -> String {
    "plugins".into()
}

impl Default for PluginsSection {
    fn default() -> Self {
        Self {
            directory: default_plugins_directory(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_level")]
    pub level: String,
    /// Natural regeneration period in ticks. 0 = disabled.
    #[serde(default = "default_regen_interval")]
    pub regen_interval_ticks: u64,
    #[serde(default = "default_regen_amount")]
    pub regen_amount: f32,
}

fn default_level() -> String {
    "minecraft:overworld".into()
}

fn default_regen_interval() -> u64 {
    80
}

fn default_regen_amount() -> f32 {
    1.0
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            regen_interval_ticks: default_regen_interval(),
            regen_amount: default_regen_amount(),
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        if config.server.tick_rate == 0 {
            return Err(ConfigError::Invalid("server.tick_rate must be > 0".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [server]
            name = "Test Host"

            [logging]
            level = "debug"
        "#;
        let config = ServerConfig::parse(toml_str).unwrap();
        assert_eq!(config.server.name, "Test Host");
        assert_eq!(config.server.tick_rate, 20); // default
        assert_eq!(config.logging.level, "debug");
        // bus section defaults when absent
        assert_eq!(config.bus.slow_listener_warn_ms, 50);
        // plugins section defaults when absent
        assert_eq!(config.plugins.directory, "plugins");
        // world section defaults when absent
        assert_eq!(config.world.level, "minecraft:overworld");
        assert_eq!(config.world.regen_interval_ticks, 80);
        assert_eq!(config.world.regen_amount, 1.0);
    }

    #[test]
    fn parse_config_with_sections() {
        let toml_str = r#"
            [server]
            name = "Test"
            tick_rate = 10

            [logging]
            level = "info"

            [bus]
            slow_listener_warn_ms = 0

            [plugins]
            directory = "/srv/plugins"

            [world]
            regen_interval_ticks = 0
        "#;
        let config = ServerConfig::parse(toml_str).unwrap();
        assert_eq!(config.server.tick_rate, 10);
        assert!(config.bus.slow_listener_threshold().is_none());
        assert_eq!(config.plugins.directory, "/srv/plugins");
        assert_eq!(config.world.regen_interval_ticks, 0);
    }

    #[test]
    fn zero_tick_rate_rejected() {
        let toml_str = r#"
            [server]
            name = "Test"
            tick_rate = 0

            [logging]
            level = "info"
        "#;
        assert!(matches!(
            ServerConfig::parse(toml_str),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_section_is_parse_error() {
        assert!(matches!(
            ServerConfig::parse("[server]\nname = \"x\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[server]\nname = \"disk\"\n[logging]\nlevel = \"warn\"\n").unwrap();
        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.server.name, "disk");
        assert!(matches!(
            ServerConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
