//! Delayed transitions.
//!
//! The game never sleeps. It asks a `Scheduler` for a delay, keeps the
//! returned `PendingTimer`, and resolves the transition when the host hands
//! the fired `TimerId` back. At most one timer is pending per game.

pub mod manual;
pub mod scheduler;

pub use manual::ManualClock;
pub use scheduler::{PendingTimer, Scheduler, TimerId, TimerKind};
