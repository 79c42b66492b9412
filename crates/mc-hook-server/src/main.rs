mod bridge;
mod builtin;
mod config;
mod console;
mod plugin_manager;
mod world;

use std::path::Path;
use std::time::Duration;

use tokio::io::AsyncBufReadExt;

use bridge::Bridge;
use config::ServerConfig;
use mc_hook_bus::EventBus;
use plugin_manager::PluginManager;
use tracing::{info, warn};
use world::HostWorld;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::load("server.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load server.toml: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        "{} v{} starting ({} tps)",
        config.server.name,
        env!("CARGO_PKG_VERSION"),
        config.server.tick_rate
    );

    let bus = EventBus::new(config.bus.clone());

    let mut plugins = PluginManager::new();
    for plugin in builtin::all() {
        plugins.register(plugin);
    }
    plugins.load_configs(Path::new(&config.plugins.directory));
    plugins.enable_all(&bus);
    info!("Plugins: {}", plugins.plugin_names().join(", "));

    let mut world = HostWorld::new(bus.clone(), config.world.level.clone());
    let mut bridge = Bridge::new(bus.clone());
    bridge.server_started();

    let period = Duration::from_millis((1000 / u64::from(config.server.tick_rate)).max(1));
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Console: read lines from stdin
    let (console_tx, mut console_rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let tick = bridge.tick();
                let interval = config.world.regen_interval_ticks;
                if interval > 0 && tick % interval == 0 {
                    world.regenerate(config.world.regen_amount);
                }
            }
            Some(line) = console_rx.recv() => {
                if line == "tick" {
                    info!("Tick {}", bridge.current_tick());
                    continue;
                }
                let output = console::execute(&mut world, &line);
                for message in &output.messages {
                    if output.success {
                        info!("{message}");
                    } else {
                        warn!("{message}");
                    }
                }
                if output.should_stop {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    bridge.server_stopping();
    plugins.disable_all();
    if bus.fault_count() > 0 {
        info!("{} listener faults during this run", bus.fault_count());
    }
    info!("Server stopped");
}
