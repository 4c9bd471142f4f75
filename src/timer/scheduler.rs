//! Scheduler seam and the cancel-on-drop timer guard.

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one scheduled delay, unique per scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a pending timer resolves when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Flip a mismatched pair back and unlock input.
    Settle,
    /// Signal that the game has been won.
    WinPresentation,
}

/// Host-side timer service.
///
/// The host delivers a fired timer back to the game with
/// `Game::fire_timer(id)`. Single-threaded: implementations use interior
/// mutability rather than locks.
pub trait Scheduler {
    /// Schedule a delay and return its handle.
    fn schedule(&self, delay: Duration) -> TimerId;

    /// Cancel a delay. Cancelling an unknown or already-fired id is a no-op.
    fn cancel(&self, id: TimerId);
}

/// A scheduled delay owned by a game.
///
/// Dropping an armed timer cancels it with its scheduler, so discarding the
/// owning game never leaves a delay behind.
pub struct PendingTimer {
    id: TimerId,
    kind: TimerKind,
    scheduler: Rc<dyn Scheduler>,
    armed: bool,
}

impl PendingTimer {
    /// Schedule `kind` to fire after `delay`.
    pub fn start(scheduler: &Rc<dyn Scheduler>, kind: TimerKind, delay: Duration) -> Self {
        let id = scheduler.schedule(delay);
        Self {
            id,
            kind,
            scheduler: Rc::clone(scheduler),
            armed: true,
        }
    }

    /// Scheduler handle.
    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// What this timer resolves.
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Consume a timer that has fired, without cancelling it.
    #[must_use]
    pub fn complete(mut self) -> TimerKind {
        self.armed = false;
        self.kind
    }
}

impl Drop for PendingTimer {
    fn drop(&mut self) {
        if self.armed {
            log::trace!("cancelling {:?} {}", self.kind, self.id);
            self.scheduler.cancel(self.id);
        }
    }
}

impl std::fmt::Debug for PendingTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTimer")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("armed", &self.armed)
            .finish()
    }
}
