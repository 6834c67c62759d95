//! One-shot timers for Horizon Board.
//!
//! The board never sleeps or spawns threads. Timers are entries in a min-heap
//! keyed by deadline; the host asks for the next deadline, waits on its own
//! event loop, and then hands the current [`Instant`] back to
//! [`TimerManager::process_expired`]. Every call takes the clock reading as an
//! argument, which keeps timer behavior deterministic under test.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};

new_key_type! {
    /// Handle returned by [`TimerManager::start_one_shot`].
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer fires.
    deadline: Instant,
}

/// Heap entry. Stopped timers leave theirs behind until popped.
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
    /// Start order, used to fire same-deadline timers in the order they were started.
    sequence: u64,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time && self.sequence == other.sequence
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earliest deadline sorts greatest.
        other
            .fire_time
            .cmp(&self.fire_time)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Manages one-shot timers.
#[derive(Debug, Default)]
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
    next_sequence: u64,
}

impl TimerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let deadline = now + duration;
        let id = self.timers.insert(TimerData { deadline });

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: deadline,
            sequence,
        });

        tracing::trace!(target: "horizon_board::timer", ?id, ?duration, "timer started");
        id
    }

    /// Cancel a pending timer. Fails for a timer that already fired or was stopped.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: "horizon_board::timer", ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// The deadline of a pending timer.
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.timers.get(id).map(|t| t.deadline)
    }

    /// The earliest deadline among pending timers.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }

        self.queue.peek().map(|entry| entry.fire_time)
    }

    /// How long the host may wait before the next deadline.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Remove and return every timer whose deadline is at or before `now`.
    ///
    /// Timers are returned in deadline order.
    #[tracing::instrument(skip(self), target = "horizon_board::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their queue entries behind.
            if self.timers.remove(entry.id).is_none() {
                continue;
            }

            tracing::trace!(target: "horizon_board::timer", id = ?entry.id, "timer fired");
            fired.push(entry.id);
        }

        fired
    }

    /// Number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.queue.clear();
    }
}
