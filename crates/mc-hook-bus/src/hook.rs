//! Hook-side helpers: the contract every intercepted call site follows.
//!
//! One convention everywhere: firing a Pre returns `Option<E>`. `None` means a
//! listener cancelled it and the operation must be suppressed; `Some` carries
//! the possibly-mutated event, whose fields the call site applies before it
//! proceeds. A Post is fired only after the operation really completed.

use mc_hook_api::{Cancellable, Event};

use crate::bus::EventBus;

/// Result of running an operation behind a Pre/Post pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome<R, E> {
    /// A Pre listener cancelled; the operation never ran.
    Cancelled,
    /// The operation ran and failed; no Post was fired.
    Failed(E),
    /// The operation ran and the Post was fired.
    Completed(R),
}

impl<R, E> HookOutcome<R, E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, HookOutcome::Cancelled)
    }

    pub fn completed(self) -> Option<R> {
        match self {
            HookOutcome::Completed(r) => Some(r),
            _ => None,
        }
    }
}

impl EventBus {
    /// Fire a Pre event. `None` = cancelled.
    pub fn fire_pre<E: Cancellable>(&self, event: E) -> Option<E> {
        let event = self.dispatch(event);
        if event.is_cancelled() {
            None
        } else {
            Some(event)
        }
    }

    /// Fire a Post event. Listener results are not observed.
    pub fn fire_post<E: Event>(&self, event: E) {
        self.dispatch(event);
    }

    /// Run `operation` behind `pre`.
    ///
    /// The operation receives the Pre as listeners left it and must apply its
    /// mutable fields. `post` builds the Post from the Pre and the result; it
    /// is only called if the operation returned `Ok`. When the Pre is
    /// cancelled, every mutation made before the cancel is dropped with it.
    pub fn guard<P, Q, R, Err>(
        &self,
        pre: P,
        operation: impl FnOnce(&P) -> Result<R, Err>,
        post: impl FnOnce(P, &R) -> Q,
    ) -> HookOutcome<R, Err>
    where
        P: Cancellable,
        Q: Event,
    {
        let Some(pre) = self.fire_pre(pre) else {
            return HookOutcome::Cancelled;
        };
        match operation(&pre) {
            Ok(result) => {
                self.fire_post(post(pre, &result));
                HookOutcome::Completed(result)
            }
            Err(err) => HookOutcome::Failed(err),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
