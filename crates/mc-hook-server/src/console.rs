//! Operator console: one line per command, read from stdin by the main loop.
//! Every command that changes the world goes through a `HostWorld` operation,
//! so plugins see it exactly as they would see a real client action.

use std::str::FromStr;

use bytes::Bytes;
use mc_hook_api::{DamageCause, Packet, Vec3};
use mc_hook_bus::HookOutcome;

use crate::world::{HostWorld, WorldError, SPAWN};

const HELP: &[(&str, &str)] = &[
    ("help", "List console commands"),
    ("list", "Show online players"),
    ("join <name>", "Connect a player"),
    ("quit <id>", "Disconnect a player"),
    ("say <id> <message>", "Chat as a player"),
    ("hurt <id> <amount>", "Damage an entity"),
    ("heal <id> <amount>", "Heal an entity"),
    ("tp <id> <level> <x> <y> <z>", "Teleport a player"),
    ("respawn <id>", "Respawn a dead player"),
    ("spawn <type> <health>", "Spawn a mob at world spawn"),
    ("packet <id> <packet_id>", "Deliver an empty inbound packet"),
    ("tick", "Show the current tick"),
    ("stop", "Stop the server"),
];

/// Result of one console line.
#[derive(Debug, PartialEq)]
pub struct ConsoleOutput {
    pub success: bool,
    pub messages: Vec<String>,
    /// The server should shut down.
    pub should_stop: bool,
}

impl ConsoleOutput {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            messages: vec![message.into()],
            should_stop: false,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            messages: vec![message.into()],
            should_stop: false,
        }
    }
}

fn arg<T: FromStr>(args: &[&str], index: usize, what: &str) -> Result<T, ConsoleOutput> {
    let raw = args
        .get(index)
        .ok_or_else(|| ConsoleOutput::err(format!("Missing {what}")))?;
    raw.parse()
        .map_err(|_| ConsoleOutput::err(format!("Invalid {what}: {raw}")))
}

/// Turn a hook outcome into console text.
fn report<R>(
    outcome: HookOutcome<R, WorldError>,
    done: impl FnOnce(R) -> String,
) -> ConsoleOutput {
    match outcome {
        HookOutcome::Completed(result) => ConsoleOutput::ok(done(result)),
        HookOutcome::Cancelled => ConsoleOutput::err("Cancelled by a plugin"),
        HookOutcome::Failed(e) => ConsoleOutput::err(e.to_string()),
    }
}

/// Execute one console line against the world.
pub fn execute(world: &mut HostWorld, line: &str) -> ConsoleOutput {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return ConsoleOutput::err("Empty command");
    };
    match run(world, name, args) {
        Ok(output) | Err(output) => output,
    }
}

fn run(
    world: &mut HostWorld,
    name: &str,
    args: &[&str],
) -> Result<ConsoleOutput, ConsoleOutput> {
    let output = match name {
        "help" => ConsoleOutput {
            success: true,
            messages: HELP
                .iter()
                .map(|(usage, description)| format!("{usage} - {description}"))
                .collect(),
            should_stop: false,
        },
        "list" => {
            let mut players = world.players();
            players.sort_by_key(|p| p.runtime_id);
            let names: Vec<String> = players
                .iter()
                .map(|p| format!("{} ({})", p.name, p.runtime_id))
                .collect();
            ConsoleOutput::ok(format!("{} online: {}", names.len(), names.join(", ")))
        }
        "join" => {
            let name: String = arg(args, 0, "player name")?;
            let id = world.join(&name);
            ConsoleOutput::ok(format!("{name} joined with id {id}"))
        }
        "quit" => {
            let id = arg(args, 0, "id")?;
            match world.quit(id) {
                Ok(()) => ConsoleOutput::ok(format!("{id} disconnected")),
                Err(e) => ConsoleOutput::err(e.to_string()),
            }
        }
        "say" => {
            let id = arg(args, 0, "id")?;
            if args.len() < 2 {
                return Err(ConsoleOutput::err("Missing message"));
            }
            report(world.chat(id, &args[1..].join(" ")), |()| "Sent".into())
        }
        "hurt" => {
            let id = arg(args, 0, "id")?;
            let amount = arg(args, 1, "amount")?;
            report(world.hurt(id, DamageCause::Other, amount), |health| {
                format!("Health now {health}")
            })
        }
        "heal" => {
            let id = arg(args, 0, "id")?;
            let amount = arg(args, 1, "amount")?;
            report(world.heal(id, amount), |health| format!("Health now {health}"))
        }
        "tp" => {
            let id = arg(args, 0, "id")?;
            let level: String = arg(args, 1, "level")?;
            let to = Vec3::new(arg(args, 2, "x")?, arg(args, 3, "y")?, arg(args, 4, "z")?);
            report(world.teleport_player(id, &level, to), |(level, pos)| {
                format!("Teleported to {level} {:.1} {:.1} {:.1}", pos.x, pos.y, pos.z)
            })
        }
        "respawn" => {
            let id = arg(args, 0, "id")?;
            report(world.respawn(id), |(level, pos)| {
                format!("Respawned in {level} at {:.1} {:.1} {:.1}", pos.x, pos.y, pos.z)
            })
        }
        "spawn" => {
            let entity_type: String = arg(args, 0, "entity type")?;
            let health: f32 = arg(args, 1, "health")?;
            if !(health.is_finite() && health > 0.0) {
                return Err(ConsoleOutput::err(format!("Invalid health: {health}")));
            }
            let id = world.spawn_mob(&entity_type, SPAWN, health);
            ConsoleOutput::ok(format!("Spawned {entity_type} with id {id}"))
        }
        "packet" => {
            let id = arg(args, 0, "id")?;
            let packet_id = arg(args, 1, "packet id")?;
            let outcome = world.receive_packet(id, Packet::new(packet_id, Bytes::new()));
            report(outcome, |()| format!("Packet {packet_id} accepted"))
        }
        "stop" => ConsoleOutput {
            success: true,
            messages: vec!["Stopping the server".into()],
            should_stop: true,
        },
        other => ConsoleOutput::err(format!("Unknown command: {other}. Type 'help'.")),
    };
    Ok(output)
}
