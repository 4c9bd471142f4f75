//! Virtual-time scheduler.
//!
//! `ManualClock` never fires on its own: the host advances it and delivers
//! the returned ids to the game. Tests get exact control over time, and the
//! browser host advances it from its animation loop.

use std::cell::RefCell;
use std::time::Duration;

use super::scheduler::{Scheduler, TimerId};

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// (deadline, id), unordered.
    queue: Vec<(Duration, TimerId)>,
}

/// Scheduler driven by explicit `advance` calls.
///
/// ```
/// use std::time::Duration;
/// use heart_pairs::timer::{ManualClock, Scheduler};
///
/// let clock = ManualClock::new();
/// let id = clock.schedule(Duration::from_millis(100));
///
/// assert!(clock.advance(Duration::from_millis(99)).is_empty());
/// assert_eq!(clock.advance(Duration::from_millis(1)), vec![id]);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    state: RefCell<ClockState>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of timers not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Check whether a timer is still scheduled.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.state.borrow().queue.iter().any(|&(_, queued)| queued == id)
    }

    /// Move time forward and return the timers that came due, ordered by
    /// deadline then by scheduling order. Returned timers are removed.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now = state.now;

        let mut due: Vec<(Duration, TimerId)> = Vec::new();
        state.queue.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_unstable();

        due.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for ManualClock {
    fn schedule(&self, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId(state.next_id);
        let deadline = state.now + delay;
        state.queue.push((deadline, id));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.state.borrow_mut().queue.retain(|&(_, queued)| queued != id);
    }
}
