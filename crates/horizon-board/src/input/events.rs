//! Raw input delivered by the host.

use std::time::Instant;

use horizon_board_core::Point;

/// What a pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in board-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Where it happened, relative to the board's top-left corner.
    pub position: Point,
    /// When it happened.
    pub timestamp: Instant,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(action: PointerAction, position: Point, timestamp: Instant) -> Self {
        Self {
            action,
            position,
            timestamp,
        }
    }
}

/// Keys the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    NumpadEnter,
    /// The center button of a directional pad.
    Select,
    /// Any other key.
    Other,
}

impl Key {
    /// Whether the key confirms the current selection.
    #[inline]
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Enter | Self::NumpadEnter | Self::Select)
    }
}

/// Whether a key went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub timestamp: Instant,
}

impl KeyEvent {
    /// A key press.
    pub fn pressed(key: Key, timestamp: Instant) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            timestamp,
        }
    }

    /// A key release.
    pub fn released(key: Key, timestamp: Instant) -> Self {
        Self {
            key,
            state: KeyState::Released,
            timestamp,
        }
    }
}
