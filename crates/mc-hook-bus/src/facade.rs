//! Typed subscribe API for plugin code.
//!
//! `listen::<T>` resolves the event type from the handler's argument and
//! forwards to [`EventBus::register`]. [`Subscriber`] does the same but tags
//! each listener with an owner so they can be removed together.

use mc_hook_api::{Event, PacketDirection, PacketEvent};

use crate::bus::{EventBus, ListenerHandle};
use crate::error::ListenerError;

/// Default listener priority.
pub const NORMAL: i32 = 0;
/// Runs before `NORMAL`, e.g. validation that may cancel early.
pub const EARLY: i32 = -100;
/// Runs after `NORMAL`, e.g. listeners that want the final mutated values.
pub const LATE: i32 = 100;

impl EventBus {
    /// Subscribe to `T`. Handlers may read, mutate, or cancel the event.
    pub fn listen<T, F>(&self, priority: i32, handler: F) -> ListenerHandle
    where
        T: Event,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.register::<T, _>(priority, None, infallible(handler))
    }

    /// Subscribe with a handler that can fail. Errors are logged by the bus.
    pub fn try_listen<T, F, Err>(&self, priority: i32, handler: F) -> ListenerHandle
    where
        T: Event,
        F: Fn(&mut T) -> Result<(), Err> + Send + Sync + 'static,
        Err: Into<ListenerError>,
    {
        self.register::<T, _>(priority, None, fallible(handler))
    }

    /// Subscribe to one packet id in the direction `T` describes.
    pub fn listen_packet<T, F>(&self, packet_id: u32, priority: i32, handler: F) -> PacketListener
    where
        T: PacketEvent,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        PacketListener {
            direction: T::direction(),
            packet_id,
            handle: self.register::<T, _>(priority, None, packet_filter(packet_id, handler)),
        }
    }

    /// A view of this bus that tags every listener with `owner`.
    pub fn subscriber(&self, owner: impl Into<String>) -> Subscriber {
        Subscriber {
            bus: self.clone(),
            owner: owner.into(),
        }
    }
}

// ─── Subscriber ──────────────────────────────────────────────────────────────

/// Registration view for one owner (usually a plugin).
#[derive(Debug, Clone)]
pub struct Subscriber {
    bus: EventBus,
    owner: String,
}

impl Subscriber {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn listen<T, F>(&self, priority: i32, handler: F) -> ListenerHandle
    where
        T: Event,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        self.bus
            .register::<T, _>(priority, Some(self.owner.as_str()), infallible(handler))
    }

    pub fn try_listen<T, F, Err>(&self, priority: i32, handler: F) -> ListenerHandle
    where
        T: Event,
        F: Fn(&mut T) -> Result<(), Err> + Send + Sync + 'static,
        Err: Into<ListenerError>,
    {
        self.bus
            .register::<T, _>(priority, Some(self.owner.as_str()), fallible(handler))
    }

    pub fn listen_packet<T, F>(&self, packet_id: u32, priority: i32, handler: F) -> PacketListener
    where
        T: PacketEvent,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        PacketListener {
            direction: T::direction(),
            packet_id,
            handle: self.bus.register::<T, _>(
                priority,
                Some(self.owner.as_str()),
                packet_filter(packet_id, handler),
            ),
        }
    }

    /// Remove every listener registered through this owner.
    pub fn unregister_all(&self) -> usize {
        self.bus.unregister_owner(&self.owner)
    }
}

// ─── PacketListener ──────────────────────────────────────────────────────────

/// Handle for a per-packet-id listener.
#[derive(Debug, Clone)]
pub struct PacketListener {
    pub direction: PacketDirection,
    pub packet_id: u32,
    handle: ListenerHandle,
}

impl PacketListener {
    pub fn handle(&self) -> &ListenerHandle {
        &self.handle
    }

    pub fn unregister(&self) -> bool {
        self.handle.unregister()
    }
}

// ─── Adapters ────────────────────────────────────────────────────────────────

fn infallible<T, F>(
    handler: F,
) -> impl Fn(&mut T) -> Result<(), ListenerError> + Send + Sync + 'static
where
    T: Event,
    F: Fn(&mut T) + Send + Sync + 'static,
{
    move |event: &mut T| {
        handler(event);
        Ok(())
    }
}

fn fallible<T, F, Err>(
    handler: F,
) -> impl Fn(&mut T) -> Result<(), ListenerError> + Send + Sync + 'static
where
    T: Event,
    F: Fn(&mut T) -> Result<(), Err> + Send + Sync + 'static,
    Err: Into<ListenerError>,
{
    move |event: &mut T| handler(event).map_err(Into::into)
}

fn packet_filter<T, F>(
    packet_id: u32,
    handler: F,
) -> impl Fn(&mut T) -> Result<(), ListenerError> + Send + Sync + 'static
where
    T: PacketEvent,
    F: Fn(&mut T) + Send + Sync + 'static,
{
    move |event: &mut T| {
        if event.packet_id() == packet_id {
            handler(event);
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use mc_hook_api::{
        Cancellable, EntityRegainHealthPre, EntityRef, GameMode, Packet, PacketReceivePre,
        PacketSendPre, PlayerInfo, ServerTick, Vec3,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn player() -> PlayerInfo {
        PlayerInfo {
            name: "Alice".into(),
            uuid: "u1".into(),
            runtime_id: 1,
            position: Vec3::new(0.0, 64.0, 0.0),
            gamemode: GameMode::Survival,
            health: 20.0,
        }
    }

    fn receive(id: u32) -> PacketReceivePre {
        PacketReceivePre::new(player(), Packet::new(id, Bytes::from_static(&[1, 2, 3])))
    }

    #[test]
    fn listen_infers_event_type() {
        let bus = EventBus::default();
        bus.listen(NORMAL, |e: &mut EntityRegainHealthPre| e.amount *= 2.0);

        let event = bus.dispatch(EntityRegainHealthPre::new(
            EntityRef::new(3, "minecraft:cow"),
            None,
            1.5,
        ));
        assert_eq!(event.amount, 3.0);
    }

    #[test]
    fn priority_constants_order() {
        let bus = EventBus::default();
        let log = Arc::new(Mutex::new(Vec::new()));
        for (priority, tag) in [(LATE, "late"), (NORMAL, "normal"), (EARLY, "early")] {
            let log = log.clone();
            bus.listen(priority, move |_: &mut ServerTick| log.lock().push(tag));
        }
        bus.dispatch(ServerTick { tick: 1 });
        assert_eq!(*log.lock(), vec!["early", "normal", "late"]);
    }

    #[test]
    fn try_listen_error_does_not_stop_dispatch() {
        let bus = EventBus::default();
        bus.try_listen(EARLY, |_: &mut ServerTick| Err("boom"));
        let hit = Arc::new(Mutex::new(false));
        let h = hit.clone();
        bus.listen(NORMAL, move |_: &mut ServerTick| *h.lock() = true);

        bus.dispatch(ServerTick { tick: 1 });
        assert!(*hit.lock());
        assert_eq!(bus.fault_count(), 1);
    }

    #[test]
    fn handle_unregister_twice() {
        let bus = EventBus::default();
        let handle = bus.listen(NORMAL, |_: &mut ServerTick| {});
        let other = bus.listen(NORMAL, |_: &mut ServerTick| {});
        assert!(handle.unregister());
        assert!(!handle.unregister());
        assert_eq!(bus.listener_count::<ServerTick>(), 1);
        assert!(other.unregister());
    }

    #[test]
    fn subscriber_tags_owner() {
        let bus = EventBus::default();
        let plugin = bus.subscriber("ChatFilter");
        plugin.listen(NORMAL, |_: &mut ServerTick| {});
        plugin.try_listen(NORMAL, |_: &mut ServerTick| Ok::<(), ListenerError>(()));
        bus.listen(NORMAL, |_: &mut ServerTick| {});

        assert_eq!(plugin.owner(), "ChatFilter");
        assert_eq!(bus.listener_count::<ServerTick>(), 3);
        assert_eq!(plugin.unregister_all(), 2);
        assert_eq!(bus.listener_count::<ServerTick>(), 1);
    }

    #[test]
    fn packet_listener_filters_by_id() {
        let bus = EventBus::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let listener = bus.listen_packet(0x09, NORMAL, move |e: &mut PacketReceivePre| {
            s.lock().push(e.packet().id);
            e.cancel();
        });
        assert_eq!(listener.direction, PacketDirection::Receive);
        assert_eq!(listener.packet_id, 0x09);

        assert!(!bus.dispatch(receive(0x01)).is_cancelled());
        assert!(bus.dispatch(receive(0x09)).is_cancelled());
        assert_eq!(*seen.lock(), vec![0x09]);

        assert!(listener.unregister());
        assert!(!bus.dispatch(receive(0x09)).is_cancelled());
    }

    #[test]
    fn packet_directions_are_separate() {
        let bus = EventBus::default();
        let sub = bus.subscriber("Sniffer");
        let listener = sub.listen_packet(0x09, NORMAL, |e: &mut PacketSendPre| e.cancel());
        assert_eq!(listener.direction, PacketDirection::Send);

        assert!(!bus.dispatch(receive(0x09)).is_cancelled());
        let send = PacketSendPre::new(player(), Packet::new(0x09, Bytes::new()));
        assert!(bus.dispatch(send).is_cancelled());
    }

    #[test]
    fn receive_path_on_io_thread() {
        let bus = EventBus::default();
        bus.listen_packet(0x02, NORMAL, |e: &mut PacketReceivePre| e.cancel());

        let io_bus = bus.clone();
        let cancelled = std::thread::spawn(move || io_bus.dispatch(receive(0x02)).is_cancelled())
            .join()
            .unwrap();
        assert!(cancelled);
    }
}
