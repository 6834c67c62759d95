//! Pointer, keyboard and focus handling.
//!
//! The state machine in [`state`] decides what an event means; the timer
//! table in [`timers`] owns the delays it asks for. The board driver glues the
//! two together and applies the resulting effects.

mod events;
pub mod state;
pub mod timers;

pub use events::{Key, KeyEvent, KeyState, PointerAction, PointerEvent};
pub use state::{
    transition, Direction, Effect, InputContext, InputEvent, Phase, SelectionState, Transition,
};
pub use timers::{ExpiredTimer, InputTimeouts, InputTimer, TimerTable};
