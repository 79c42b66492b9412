//! Event bus: per-type, priority-ordered listener registry with synchronous dispatch.
//!
//! Listener lists are copy-on-write. Mutation builds a new `Vec` under the write
//! lock and swaps the `Arc`; dispatch clones the `Arc` and releases the lock
//! before running any listener. Listeners may therefore (un)register during
//! dispatch, and other threads may dispatch concurrently, without ever
//! observing a half-updated list. A listener added mid-dispatch first runs on
//! the next dispatch of that type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Instant;

use mc_hook_api::Event;
use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::config::BusConfig;
use crate::error::ListenerError;

// ─── Types ───────────────────────────────────────────────────────────────────

type ErasedListener = dyn Fn(&mut dyn Any) -> Result<(), ListenerError> + Send + Sync;

/// One registered listener.
#[derive(Clone)]
struct Entry {
    id: u64,
    priority: i32,
    /// Plugin that registered this listener, if any.
    owner: Option<Arc<str>>,
    callback: Arc<ErasedListener>,
}

impl Entry {
    fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or("-")
    }
}

type ListenerList = Arc<Vec<Entry>>;

struct Registry {
    lists: RwLock<HashMap<TypeId, ListenerList>>,
    next_id: AtomicU64,
    faults: AtomicU64,
    config: BusConfig,
}

impl Registry {
    fn snapshot(&self, type_id: TypeId) -> Option<ListenerList> {
        self.lists.read().get(&type_id).cloned()
    }

    fn remove(&self, type_id: TypeId, id: u64, event: &str) -> bool {
        let mut lists = self.lists.write();
        let next: Vec<Entry> = {
            let Some(current) = lists.get(&type_id) else {
                return false;
            };
            if !current.iter().any(|e| e.id == id) {
                return false;
            }
            current.iter().filter(|e| e.id != id).cloned().collect()
        };

        if next.is_empty() {
            lists.remove(&type_id);
        } else {
            lists.insert(type_id, Arc::new(next));
        }
        drop(lists);

        debug!(event, listener = id, "Listener unregistered");
        true
    }
}

// ─── ListenerHandle ──────────────────────────────────────────────────────────

/// Returned by every registration; unregisters that one listener.
///
/// Dropping the handle does not unregister the listener.
#[derive(Debug, Clone)]
pub struct ListenerHandle {
    id: u64,
    type_id: TypeId,
    event: &'static str,
    registry: Weak<Registry>,
}

impl ListenerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Short name of the event type this listener is attached to.
    pub fn event_name(&self) -> &'static str {
        self.event
    }

    /// Remove the listener. Returns `false` if it was already removed or the
    /// bus no longer exists; calling this repeatedly is harmless.
    pub fn unregister(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.remove(self.type_id, self.id, self.event),
            None => false,
        }
    }
}

// ─── EventBus ────────────────────────────────────────────────────────────────

/// Process-wide dispatch state. Cheap to clone; clones share listeners.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Registry>,
}

impl EventBus {
    pub fn new(config: BusConfig) -> Self {
        Self {
            inner: Arc::new(Registry {
                lists: RwLock::new(HashMap::new()),
                next_id: AtomicU64::new(1),
                faults: AtomicU64::new(0),
                config,
            }),
        }
    }

    /// Register a fallible listener for event type `E`.
    ///
    /// Lower `priority` runs first; equal priorities run in registration order.
    /// Registering the same closure twice yields two independent listeners.
    pub fn register<E, F>(&self, priority: i32, owner: Option<&str>, listener: F) -> ListenerHandle
    where
        E: Event,
        F: Fn(&mut E) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let event = short_type_name::<E>();
        let callback: Arc<ErasedListener> =
            Arc::new(move |event: &mut dyn Any| match event.downcast_mut::<E>() {
                Some(event) => listener(event),
                None => Ok(()),
            });
        let entry = Entry {
            id,
            priority,
            owner: owner.map(Arc::from),
            callback,
        };

        {
            let mut lists = self.inner.lists.write();
            let current = lists.entry(TypeId::of::<E>()).or_default();
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            let at = next.partition_point(|e| e.priority <= priority);
            next.insert(at, entry);
            *current = Arc::new(next);
        }

        debug!(
            event,
            listener = id,
            priority,
            owner = owner.unwrap_or("-"),
            "Listener registered"
        );

        ListenerHandle {
            id,
            type_id: TypeId::of::<E>(),
            event,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Remove a listener. Idempotent.
    pub fn unregister(&self, handle: &ListenerHandle) -> bool {
        self.inner.remove(handle.type_id, handle.id, handle.event)
    }

    /// Remove every listener registered on behalf of `owner`. Returns how many
    /// were removed.
    pub fn unregister_owner(&self, owner: &str) -> usize {
        let mut removed = 0;
        let mut lists = self.inner.lists.write();
        lists.retain(|_, list| {
            let before = list.len();
            if list.iter().any(|e| e.owner.as_deref() == Some(owner)) {
                let next: Vec<Entry> = list
                    .iter()
                    .filter(|e| e.owner.as_deref() != Some(owner))
                    .cloned()
                    .collect();
                removed += before - next.len();
                *list = Arc::new(next);
            }
            !list.is_empty()
        });
        drop(lists);

        if removed > 0 {
            debug!(owner, removed, "Listeners unregistered for owner");
        }
        removed
    }

    /// Run every listener for `E` in priority order on the calling thread.
    ///
    /// All listeners see the same instance, so later ones observe earlier
    /// mutations. If the event is cancelled, no further listener runs. A
    /// listener that panics or returns an error is logged and skipped.
    pub fn dispatch<E: Event>(&self, mut event: E) -> E {
        let Some(listeners) = self.inner.snapshot(TypeId::of::<E>()) else {
            return event;
        };
        let slow_threshold = self.inner.config.slow_listener_threshold();

        for entry in listeners.iter() {
            let started = Instant::now();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                (entry.callback)(&mut event as &mut dyn Any)
            }));
            let elapsed = started.elapsed();

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    self.inner.faults.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        event = event.name(),
                        listener = entry.id,
                        owner = entry.owner(),
                        error = %err,
                        "Listener returned an error, continuing dispatch"
                    );
                }
                Err(payload) => {
                    self.inner.faults.fetch_add(1, Ordering::Relaxed);
                    error!(
                        event = event.name(),
                        listener = entry.id,
                        owner = entry.owner(),
                        panic = panic_message(payload.as_ref()),
                        "Listener panicked, continuing dispatch"
                    );
                }
            }

            if let Some(threshold) = slow_threshold {
                if elapsed >= threshold {
                    warn!(
                        event = event.name(),
                        listener = entry.id,
                        owner = entry.owner(),
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Slow listener"
                    );
                }
            }

            if event.is_cancelled() {
                debug!(
                    event = event.name(),
                    listener = entry.id,
                    owner = entry.owner(),
                    "Event cancelled"
                );
                break;
            }
        }

        event
    }

    /// Number of listeners currently registered for `E`.
    pub fn listener_count<E: Event>(&self) -> usize {
        self.inner
            .snapshot(TypeId::of::<E>())
            .map(|list| list.len())
            .unwrap_or(0)
    }

    pub fn has_listeners<E: Event>(&self) -> bool {
        self.listener_count::<E>() > 0
    }

    /// Listener panics and errors recorded since the bus was created.
    pub fn fault_count(&self) -> u64 {
        self.inner.faults.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &BusConfig {
        &self.inner.config
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lists = self.inner.lists.read();
        let listeners: usize = lists.values().map(|l| l.len()).sum();
        f.debug_struct("EventBus")
            .field("event_types", &lists.len())
            .field("listeners", &listeners)
            .field("faults", &self.fault_count())
            .finish()
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// `mc_hook_api::entity::EntityDamagePre` -> `EntityDamagePre`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
