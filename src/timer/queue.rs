//! Timer storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer.
///
/// Ids come from a [`TimerIds`] allocator and are never reused, so a stale
/// firing can always be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Monotonic [`TimerId`] allocator.
#[derive(Debug, Clone, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub fn allocate(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;
        id
    }
}

/// Pending timers keyed by id, expired in deadline order.
///
/// The queue holds a handful of entries at most (the overlay keeps a single
/// latency timer alive), so a plain vector is enough.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storefront_search::timer::{TimerIds, TimerQueue};
///
/// let mut ids = TimerIds::new();
/// let mut queue = TimerQueue::new();
/// let first = ids.allocate();
/// let second = ids.allocate();
///
/// queue.schedule(first, Duration::from_millis(150));
/// queue.schedule(second, Duration::from_millis(250));
/// assert!(queue.cancel(first));
///
/// assert!(queue.expire(Duration::from_millis(200)).is_empty());
/// assert_eq!(queue.expire(Duration::from_millis(250)), vec![second]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    entries: Vec<(Duration, TimerId)>,
}

impl TimerQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedules `id` to fire at `deadline`, replacing any earlier schedule of
    /// the same id.
    pub fn schedule(&mut self, id: TimerId, deadline: Duration) {
        self.entries.retain(|&(_, existing)| existing != id);
        self.entries.push((deadline, id));
        tracing::trace!(timer = %id, deadline_ms = deadline.as_millis(), "timer scheduled");
    }

    /// Removes `id` from the queue. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&(_, existing)| existing != id);
        let removed = self.entries.len() != before;
        tracing::trace!(timer = %id, removed, "timer cancelled");
        removed
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|&(deadline, _)| deadline).min()
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first. Timers sharing a deadline fire in id order.
    pub fn expire(&mut self, now: Duration) -> Vec<TimerId> {
        let mut due: Vec<(Duration, TimerId)> = Vec::new();
        self.entries.retain(|&entry| {
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

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = TimerIds::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_expire_in_deadline_order() {
        let mut ids = TimerIds::new();
        let late = ids.allocate();
        let early = ids.allocate();
        let mut queue = TimerQueue::new();
        queue.schedule(late, ms(300));
        queue.schedule(early, ms(100));

        assert_eq!(queue.next_deadline(), Some(ms(100)));
        assert_eq!(queue.expire(ms(300)), vec![early, late]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_leaves_future_timers() {
        let mut ids = TimerIds::new();
        let id = ids.allocate();
        let mut queue = TimerQueue::new();
        queue.schedule(id, ms(150));

        assert!(queue.expire(ms(149)).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(ms(150)), vec![id]);
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut ids = TimerIds::new();
        let id = ids.allocate();
        let mut queue = TimerQueue::new();
        queue.schedule(id, ms(100));
        queue.schedule(id, ms(500));

        assert_eq!(queue.len(), 1);
        assert!(queue.expire(ms(200)).is_empty());
    }

    #[test]
    fn test_cancel_unknown_timer() {
        let mut ids = TimerIds::new();
        let mut queue = TimerQueue::new();
        assert!(!queue.cancel(ids.allocate()));
        assert_eq!(queue.next_deadline(), None);
    }
}
