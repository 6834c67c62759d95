//! Input timers, one per kind.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use horizon_board_core::{TimerId, TimerManager};

/// Default tap timeout in milliseconds.
///
/// A press becomes visible once it has been held this long.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 100;

/// Default long-press timeout in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Default pressed-state duration in milliseconds.
///
/// A quick tap shows the pressed visual this long before the click fires.
pub const DEFAULT_PRESSED_STATE_DURATION_MS: u64 = 64;

/// The kinds of timer the input state machine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTimer {
    /// Confirms a press after the tap timeout.
    Tap,
    /// Fires the long click.
    LongPress,
    /// Clears the pressed visual and fires a delayed click.
    PressedReset,
}

/// Platform timing constants for input disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTimeouts {
    /// Time before a press is confirmed.
    pub tap_timeout: Duration,
    /// Time a press must be held to become a long press.
    pub long_press_timeout: Duration,
    /// How long the pressed visual stays up for a quick tap.
    pub pressed_state_duration: Duration,
}

impl Default for InputTimeouts {
    fn default() -> Self {
        Self {
            tap_timeout: Duration::from_millis(DEFAULT_TAP_TIMEOUT_MS),
            long_press_timeout: Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT_MS),
            pressed_state_duration: Duration::from_millis(DEFAULT_PRESSED_STATE_DURATION_MS),
        }
    }
}

impl InputTimeouts {
    /// Duration of a timer kind.
    pub fn duration(&self, timer: InputTimer) -> Duration {
        match timer {
            InputTimer::Tap => self.tap_timeout,
            InputTimer::LongPress => self.long_press_timeout,
            InputTimer::PressedReset => self.pressed_state_duration,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTimer {
    id: TimerId,
    epoch: u64,
    position: usize,
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiredTimer {
    /// Which timer fired.
    pub kind: InputTimer,
    /// Window-attachment epoch at scheduling time.
    pub epoch: u64,
    /// Position the timer was scheduled for.
    pub position: usize,
}

/// Owns the outstanding input timers, at most one per kind.
#[derive(Debug, Default)]
pub struct TimerTable {
    timers: TimerManager,
    entries: HashMap<InputTimer, ScheduledTimer>,
}

impl TimerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer of `kind`, replacing any outstanding one.
    pub fn schedule(
        &mut self,
        kind: InputTimer,
        now: Instant,
        duration: Duration,
        epoch: u64,
        position: usize,
    ) {
        self.cancel(kind);
        let id = self.timers.start_one_shot(now, duration);
        self.entries.insert(kind, ScheduledTimer { id, epoch, position });
        tracing::trace!(target: "horizon_board::input", ?kind, position, epoch, "input timer scheduled");
    }

    /// Cancel the outstanding timer of `kind`.
    ///
    /// Returns `true` if one was outstanding.
    pub fn cancel(&mut self, kind: InputTimer) -> bool {
        let Some(entry) = self.entries.remove(&kind) else {
            return false;
        };
        if self.timers.stop(entry.id).is_err() {
            tracing::trace!(target: "horizon_board::input", ?kind, "input timer already gone");
        }
        true
    }

    /// Cancel every outstanding timer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.timers.clear();
    }

    /// Check if a timer of `kind` is outstanding.
    pub fn is_scheduled(&self, kind: InputTimer) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Deadline of the outstanding timer of `kind`.
    pub fn deadline(&self, kind: InputTimer) -> Option<Instant> {
        self.entries
            .get(&kind)
            .and_then(|entry| self.timers.deadline(entry.id))
    }

    /// Earliest outstanding deadline.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Remove and return every timer due at `now`, in deadline order.
    pub fn take_expired(&mut self, now: Instant) -> Vec<ExpiredTimer> {
        let fired = self.timers.process_expired(now);
        let mut expired = Vec::with_capacity(fired.len());
        for id in fired {
            let kind = self
                .entries
                .iter()
                .find_map(|(kind, entry)| (entry.id == id).then_some(*kind));
            if let Some(kind) = kind
                && let Some(entry) = self.entries.remove(&kind)
            {
                expired.push(ExpiredTimer {
                    kind,
                    epoch: entry.epoch,
                    position: entry.position,
                });
            }
        }
        expired
    }
}
