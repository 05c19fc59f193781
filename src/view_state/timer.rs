//! Cancellable timers on a cooperative clock.
//!
//! Every delayed effect in the core (typewriter ticks, submission latency)
//! registers with a single [`Scheduler`] owned by the root composition.
//! Scheduling returns a [`TimerHandle`]; dropping the handle cancels the
//! timer, so a component torn down before its deadline can never be
//! re-entered afterwards.
//!
//! The scheduler never calls back into components. The root drains due
//! timers with [`Scheduler::pop_due`] and dispatches each [`TimerId`] to the
//! component that holds the matching handle. Timers fire in deadline order,
//! ties broken by scheduling order.

use super::types::Timestamp;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::trace;

/// Identity of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw sequence number (monotonic in scheduling order).
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct PendingTimer {
    id: TimerId,
    deadline: Timestamp,
}

#[derive(Debug, Default)]
struct TimerQueue {
    now: Timestamp,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        before != self.pending.len()
    }

    fn earliest(&self) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .min_by_key(|(_, timer)| (timer.deadline, timer.id))
            .map(|(index, _)| index)
    }
}

/// Shared handle onto the timer queue.
///
/// Cloning is cheap; all clones see the same queue and clock. The queue is
/// single-threaded by construction (`Rc`), matching the cooperative model.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Rc<RefCell<TimerQueue>>,
}

impl Scheduler {
    /// Create a scheduler whose clock starts at [`Timestamp::ZERO`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    pub fn now(&self) -> Timestamp {
        self.queue.borrow().now
    }

    /// Schedule a timer `delay` after the current clock value.
    pub fn schedule(&self, delay: Duration) -> TimerHandle {
        let mut queue = self.queue.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        let deadline = queue.now.saturating_add(delay);
        queue.pending.push(PendingTimer { id, deadline });
        trace!(timer = id.0, ?deadline, "timer scheduled");

        TimerHandle {
            id,
            deadline,
            queue: Rc::downgrade(&self.queue),
        }
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        let queue = self.queue.borrow();
        queue.earliest().map(|index| queue.pending[index].deadline)
    }

    /// Number of timers still pending.
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Whether `id` is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.borrow().pending.iter().any(|timer| timer.id == id)
    }

    /// Pop the earliest timer due at or before `target`.
    ///
    /// The clock moves to that timer's deadline (never backwards), so timers
    /// scheduled by the component handling it are relative to the moment it
    /// fired rather than to `target`.
    pub fn pop_due(&self, target: Timestamp) -> Option<TimerId> {
        let mut queue = self.queue.borrow_mut();
        let index = queue.earliest()?;
        if queue.pending[index].deadline > target {
            return None;
        }
        let timer = queue.pending.remove(index);
        if timer.deadline > queue.now {
            queue.now = timer.deadline;
        }
        trace!(timer = timer.id.0, now = ?queue.now, "timer fired");
        Some(timer.id)
    }

    /// Move the clock forward to `target` (never backwards).
    pub fn settle(&self, target: Timestamp) {
        let mut queue = self.queue.borrow_mut();
        if target > queue.now {
            queue.now = target;
        }
    }
}

/// Guard for a scheduled timer. Cancels the timer when dropped.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    deadline: Timestamp,
    queue: Weak<RefCell<TimerQueue>>,
}

impl TimerHandle {
    /// Identity of the guarded timer.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// When the timer is (or was) due.
    pub fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// Whether this handle guards the timer with `id`.
    pub fn matches(&self, id: TimerId) -> bool {
        self.id == id
    }

    /// Cancel the timer now. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        // A handle dropped while the queue is borrowed (only possible from a
        // panic unwinding through Scheduler) leaves an orphan id behind;
        // dispatch ignores ids nobody holds.
        let Ok(mut queue) = queue.try_borrow_mut() else {
            return;
        };
        if queue.cancel(self.id) {
            trace!(timer = self.id.0, "timer cancelled");
        }
    }
}
