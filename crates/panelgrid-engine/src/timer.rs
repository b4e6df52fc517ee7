//! A deterministic, manually clocked [`Scheduler`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use panelgrid_core::{CooldownReset, OccupantId, Scheduler};

/// Timer queue driven by the host loop.
///
/// The clock starts at zero and only moves when [`advance`](Self::advance)
/// is called, typically once per frame with the frame delta. Resets fall
/// due in deadline order; resets with equal deadlines keep their
/// scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    heap: BinaryHeap<Reverse<(Duration, u64, OccupantId)>>,
}

impl TimerQueue {
    /// An empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of resets not yet due.
    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    /// Deadline of the earliest pending reset.
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Move the clock forward by `dt` and return every reset now due.
    pub fn advance(&mut self, dt: Duration) -> Vec<CooldownReset> {
        self.now = self.now.saturating_add(dt);
        let mut due = Vec::new();
        while let Some(Reverse((deadline, _, occupant))) = self.heap.peek().copied() {
            if deadline > self.now {
                break;
            }
            self.heap.pop();
            due.push(CooldownReset { occupant });
        }
        due
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration, reset: CooldownReset) {
        let deadline = self.now.saturating_add(delay);
        self.heap.push(Reverse((deadline, self.seq, reset.occupant)));
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset(id: u64) -> CooldownReset {
        CooldownReset {
            occupant: OccupantId(id),
        }
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut q = TimerQueue::new();
        q.schedule_once(Duration::from_millis(100), reset(0));
        assert!(q.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(q.next_due(), Some(Duration::from_millis(100)));
        assert_eq!(q.advance(Duration::from_millis(1)), vec![reset(0)]);
        assert_eq!(q.pending(), 0);
        assert_eq!(q.now(), Duration::from_millis(100));
    }

    #[test]
    fn due_in_deadline_then_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule_once(Duration::from_millis(30), reset(0));
        q.schedule_once(Duration::from_millis(10), reset(1));
        q.schedule_once(Duration::from_millis(10), reset(2));
        q.schedule_once(Duration::from_millis(50), reset(3));
        assert_eq!(
            q.advance(Duration::from_millis(40)),
            vec![reset(1), reset(2), reset(0)]
        );
        assert_eq!(q.pending(), 1);
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut q = TimerQueue::new();
        q.advance(Duration::from_secs(5));
        q.schedule_once(Duration::from_secs(1), reset(7));
        assert_eq!(q.next_due(), Some(Duration::from_secs(6)));
        assert!(q.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(q.advance(Duration::from_millis(500)), vec![reset(7)]);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut q = TimerQueue::new();
        q.schedule_once(Duration::ZERO, reset(1));
        assert_eq!(q.advance(Duration::ZERO), vec![reset(1)]);
    }
}
