//! Cancellable event dispatch core.
//!
//! - [`EventBus`]: per-type listener registry, priority ordered, synchronous,
//!   stops on cancellation, isolates faulty listeners.
//! - [`EventBus::listen`] / [`Subscriber`]: typed subscribe API returning
//!   [`ListenerHandle`]s.
//! - [`EventBus::fire_pre`], [`EventBus::fire_post`], [`EventBus::guard`]: what
//!   an intercepted call site uses to honour cancellation and mutation.
//!
//! The bus is constructed once by the host and passed to whoever fires or
//! subscribes. There is no global instance.

mod bus;
pub mod config;
pub mod error;
mod facade;
mod hook;
pub mod plugin;

pub use bus::{EventBus, ListenerHandle};
pub use config::BusConfig;
pub use error::ListenerError;
pub use facade::{PacketListener, Subscriber, EARLY, LATE, NORMAL};
pub use hook::HookOutcome;
pub use plugin::{Plugin, PluginInfo};

pub use mc_hook_api as api;
