//! The selection and press state machine.
//!
//! [`transition`] is a pure function: it takes the current [`SelectionState`],
//! one [`InputEvent`] and a snapshot of the board ([`InputContext`]), and
//! returns the next state together with the [`Effect`]s the driver must carry
//! out. Timers, visuals and callbacks all live on the driver side.
//!
//! A pointer press moves through these phases:
//!
//! ```text
//! Idle -> PressPending -> Pressed -> LongPressPending -> DoneWaiting -> Idle
//!                     \-> DoneWaiting (not long-clickable)
//! ```
//!
//! `PressPending` waits for the tap timeout. `Pressed` shows the pressed
//! visual while the long-press timer runs. `LongPressPending` waits for the
//! long-click handler's answer. `DoneWaiting` clicks as soon as the pointer
//! is released.

use super::timers::InputTimer;

/// Where a press is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No press in progress.
    #[default]
    Idle,
    /// Pointer down; waiting for the tap timeout.
    PressPending,
    /// Press confirmed and shown; long-press timer running.
    Pressed,
    /// Long click delivered; waiting for the handler's answer.
    LongPressPending,
    /// Nothing left to wait for; release clicks immediately.
    DoneWaiting,
}

/// The selected and pressed positions, plus the press phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// The single selected position.
    pub selected: Option<usize>,
    /// The single pressed position. May equal `selected`.
    pub pressed: Option<usize>,
    /// The press phase.
    pub phase: Phase,
}

impl SelectionState {
    /// Nothing selected, nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Drop the selection and any press in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop positions that no longer exist.
    pub fn clamp(&mut self, item_count: usize) {
        if self.selected.is_some_and(|p| p >= item_count) {
            self.selected = None;
        }
        if self.pressed.is_some_and(|p| p >= item_count) {
            self.pressed = None;
            self.phase = Phase::Idle;
        }
    }
}

/// Direction of keyboard focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Everything that can drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer went down. `hit` is the item under it, `enabled` whether that
    /// item accepts input.
    PointerDown { hit: Option<usize>, enabled: bool },
    /// Pointer moved over `hit`.
    PointerMove { hit: Option<usize> },
    /// Pointer released.
    PointerUp,
    /// Pointer sequence aborted by the host.
    PointerCancel,
    /// The tap timer fired.
    TapTimeout,
    /// The long-press timer fired.
    LongPressTimeout,
    /// The long-click handler answered.
    LongClickResult { handled: bool },
    /// The pressed-reset timer fired for `position`.
    PressedResetTimeout { position: usize },
    /// A directional key moved focus.
    Navigate(Direction),
    /// A confirm key went down.
    ConfirmDown,
    /// A confirm key went up.
    ConfirmUp,
    /// The board gained or lost focus.
    FocusChanged { gained: bool, in_touch_mode: bool },
}

/// A snapshot of the board taken before each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub item_count: usize,
    pub column_count: usize,
    pub enabled: bool,
    pub clickable: bool,
    pub long_clickable: bool,
    pub focused: bool,
}

impl Default for InputContext {
    fn default() -> Self {
        Self {
            item_count: 0,
            column_count: 1,
            enabled: true,
            clickable: true,
            long_clickable: false,
            focused: false,
        }
    }
}

/// Work the driver performs after a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a timer of this kind for `position`, replacing any outstanding one.
    Schedule { timer: InputTimer, position: usize },
    /// Cancel the outstanding timer of this kind.
    Cancel(InputTimer),
    /// Show or clear an item's pressed visual.
    SetPressed { position: usize, pressed: bool },
    /// Show or clear an item's selected visual.
    SetSelected { position: usize, selected: bool },
    /// Clear the selected visual of every item.
    ClearSelectedVisuals,
    /// Deliver an item click.
    Click(usize),
    /// Deliver a long click and feed back its result.
    LongClick(usize),
}

/// The outcome of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next state.
    pub state: SelectionState,
    /// Effects to apply, in order.
    pub effects: Vec<Effect>,
    /// Whether the board consumed the event.
    pub handled: bool,
}

/// Apply one event to `state`.
pub fn transition(state: &SelectionState, event: InputEvent, ctx: &InputContext) -> Transition {
    let mut machine = Machine {
        state: *state,
        effects: Vec::new(),
        ctx,
    };
    machine.state.clamp(ctx.item_count);

    let handled = match event {
        InputEvent::PointerDown { .. }
        | InputEvent::PointerMove { .. }
        | InputEvent::PointerUp
        | InputEvent::PointerCancel
            if !ctx.enabled =>
        {
            // A disabled board still swallows touches when it is interactive.
            ctx.clickable || ctx.long_clickable
        }
        InputEvent::PointerDown { hit, enabled } => machine.pointer_down(hit, enabled),
        InputEvent::PointerMove { hit } => machine.pointer_move(hit),
        InputEvent::PointerUp => machine.pointer_up(),
        InputEvent::PointerCancel => machine.pointer_cancel(),
        InputEvent::TapTimeout => machine.tap_timeout(),
        InputEvent::LongPressTimeout => machine.long_press_timeout(),
        InputEvent::LongClickResult { handled } => machine.long_click_result(handled),
        InputEvent::PressedResetTimeout { position } => machine.pressed_reset(position),
        InputEvent::Navigate(direction) => machine.navigate(direction),
        InputEvent::ConfirmDown => machine.confirm_down(),
        InputEvent::ConfirmUp => machine.confirm_up(),
        InputEvent::FocusChanged {
            gained,
            in_touch_mode,
        } => machine.focus_changed(gained, in_touch_mode),
    };

    Transition {
        state: machine.state,
        effects: machine.effects,
        handled,
    }
}

struct Machine<'a> {
    state: SelectionState,
    effects: Vec<Effect>,
    ctx: &'a InputContext,
}

impl Machine<'_> {
    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    fn release_press(&mut self) {
        self.push(Effect::Cancel(InputTimer::Tap));
        self.push(Effect::Cancel(InputTimer::LongPress));
        if let Some(position) = self.state.pressed.take() {
            self.push(Effect::SetPressed {
                position,
                pressed: false,
            });
        }
        self.state.phase = Phase::Idle;
    }

    fn pointer_down(&mut self, hit: Option<usize>, enabled: bool) -> bool {
        let hit = hit.filter(|&position| position < self.ctx.item_count);
        self.state.selected = hit;
        let Some(position) = hit else {
            return true;
        };

        self.push(Effect::ClearSelectedVisuals);
        if enabled {
            self.push(Effect::Cancel(InputTimer::LongPress));
            self.push(Effect::Schedule {
                timer: InputTimer::Tap,
                position,
            });
            self.state.pressed = Some(position);
            self.state.phase = Phase::PressPending;
        }
        true
    }

    fn pointer_move(&mut self, hit: Option<usize>) -> bool {
        if self.state.phase != Phase::Idle && hit != self.state.pressed {
            self.release_press();
        }
        true
    }

    fn pointer_up(&mut self) -> bool {
        let Some(position) = self.state.pressed else {
            self.state.phase = Phase::Idle;
            return true;
        };

        match self.state.phase {
            Phase::PressPending | Phase::Pressed => {
                self.push(Effect::Cancel(InputTimer::Tap));
                self.push(Effect::Cancel(InputTimer::LongPress));
                self.push(Effect::SetPressed {
                    position,
                    pressed: true,
                });
                self.push(Effect::Schedule {
                    timer: InputTimer::PressedReset,
                    position,
                });
                // `pressed` stays set until the reset timer clears it.
                self.state.phase = Phase::Idle;
            }
            Phase::DoneWaiting => {
                self.push(Effect::SetPressed {
                    position,
                    pressed: false,
                });
                self.push(Effect::Click(position));
                self.state.pressed = None;
                self.state.phase = Phase::Idle;
            }
            Phase::Idle | Phase::LongPressPending => {}
        }
        true
    }

    fn pointer_cancel(&mut self) -> bool {
        if self.state.phase != Phase::Idle {
            self.release_press();
        }
        true
    }

    fn tap_timeout(&mut self) -> bool {
        let (Phase::PressPending, Some(position)) = (self.state.phase, self.state.pressed) else {
            return false;
        };

        self.push(Effect::SetPressed {
            position,
            pressed: true,
        });
        if self.ctx.long_clickable {
            self.push(Effect::Schedule {
                timer: InputTimer::LongPress,
                position,
            });
            self.state.phase = Phase::Pressed;
        } else {
            self.state.phase = Phase::DoneWaiting;
        }
        true
    }

    fn long_press_timeout(&mut self) -> bool {
        let (Phase::Pressed, Some(position)) = (self.state.phase, self.state.pressed) else {
            return false;
        };

        self.push(Effect::LongClick(position));
        self.state.phase = Phase::LongPressPending;
        true
    }

    fn long_click_result(&mut self, handled: bool) -> bool {
        if self.state.phase != Phase::LongPressPending {
            return false;
        }

        if handled {
            if let Some(position) = self.state.pressed.take() {
                self.push(Effect::SetPressed {
                    position,
                    pressed: false,
                });
            }
            self.state.phase = Phase::Idle;
        } else {
            self.state.phase = Phase::DoneWaiting;
        }
        true
    }

    fn pressed_reset(&mut self, position: usize) -> bool {
        if self.state.phase == Phase::Idle && self.state.pressed == Some(position) {
            self.state.pressed = None;
        }
        self.push(Effect::SetPressed {
            position,
            pressed: false,
        });
        // Invalidated data drops the selection; the click goes with it.
        if self.state.selected == Some(position) && position < self.ctx.item_count {
            self.push(Effect::Click(position));
        }
        true
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        let count = self.ctx.item_count;
        if !self.ctx.focused || count == 0 {
            return false;
        }

        let columns = self.ctx.column_count.max(1);
        let target = match (self.state.selected, direction) {
            (None, _) => Some(0),
            (Some(current), Direction::Up) => (current >= columns).then(|| current - columns),
            (Some(current), Direction::Down) => {
                let last_row = (count - 1) / columns;
                (current / columns < last_row).then(|| (current + columns).min(count - 1))
            }
        };
        let Some(target) = target else {
            return false;
        };

        if let Some(previous) = self.state.selected {
            self.push(Effect::SetSelected {
                position: previous,
                selected: false,
            });
        }
        self.push(Effect::SetSelected {
            position: target,
            selected: true,
        });
        self.state.selected = Some(target);
        true
    }

    fn confirm_down(&mut self) -> bool {
        if !self.ctx.enabled || !self.ctx.clickable || !self.ctx.focused {
            return false;
        }

        if let Some(position) = self.state.selected {
            self.push(Effect::SetPressed {
                position,
                pressed: true,
            });
            self.state.pressed = Some(position);
            if self.ctx.long_clickable {
                self.push(Effect::Schedule {
                    timer: InputTimer::LongPress,
                    position,
                });
                self.state.phase = Phase::Pressed;
            }
        }
        true
    }

    fn confirm_up(&mut self) -> bool {
        if !self.ctx.enabled {
            return true;
        }
        let Some(position) = self.state.selected.filter(|_| self.ctx.clickable) else {
            return false;
        };

        self.push(Effect::Cancel(InputTimer::LongPress));
        self.push(Effect::Click(position));
        self.push(Effect::SetPressed {
            position,
            pressed: false,
        });
        if self.state.pressed == Some(position) {
            self.state.pressed = None;
        }
        self.state.phase = Phase::Idle;
        true
    }

    fn focus_changed(&mut self, gained: bool, in_touch_mode: bool) -> bool {
        if self.ctx.item_count == 0 {
            return false;
        }

        match self.state.selected {
            Some(position) if gained && !in_touch_mode => self.push(Effect::SetSelected {
                position,
                selected: true,
            }),
            _ if gained && !in_touch_mode => {}
            _ => self.push(Effect::ClearSelectedVisuals),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(item_count: usize, column_count: usize) -> InputContext {
        InputContext {
            item_count,
            column_count,
            focused: true,
            ..InputContext::default()
        }
    }

    /// Run a sequence of events, returning the final state and all effects.
    fn run(
        state: SelectionState,
        events: &[InputEvent],
        ctx: &InputContext,
    ) -> (SelectionState, Vec<Effect>) {
        let mut state = state;
        let mut effects = Vec::new();
        for &event in events {
            let step = transition(&state, event, ctx);
            state = step.state;
            effects.extend(step.effects);
        }
        (state, effects)
    }

    fn clicks(effects: &[Effect]) -> Vec<usize> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Click(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    fn down(position: usize) -> InputEvent {
        InputEvent::PointerDown {
            hit: Some(position),
            enabled: true,
        }
    }

    #[test]
    fn test_pointer_down_schedules_tap() {
        let step = transition(&SelectionState::new(), down(2), &ctx(9, 3));

        assert!(step.handled);
        assert_eq!(step.state.phase, Phase::PressPending);
        assert_eq!(step.state.pressed, Some(2));
        assert_eq!(step.state.selected, Some(2));
        assert!(step.effects.contains(&Effect::ClearSelectedVisuals));
        assert!(step.effects.contains(&Effect::Schedule {
            timer: InputTimer::Tap,
            position: 2
        }));
    }

    #[test]
    fn test_tap_then_release_clicks_after_pressed_duration() {
        let ctx = ctx(9, 3);
        let (state, effects) = run(
            SelectionState::new(),
            &[down(2), InputEvent::TapTimeout],
            &ctx,
        );
        assert_eq!(state.phase, Phase::DoneWaiting);
        assert!(effects.contains(&Effect::SetPressed {
            position: 2,
            pressed: true
        }));

        // DoneWaiting releases click immediately.
        let up = transition(&state, InputEvent::PointerUp, &ctx);
        assert_eq!(clicks(&up.effects), vec![2]);
        assert_eq!(up.state.phase, Phase::Idle);
        assert_eq!(up.state.pressed, None);
    }

    #[test]
    fn test_long_clickable_tap_then_release() {
        let ctx = InputContext {
            long_clickable: true,
            ..ctx(9, 3)
        };
        let (state, effects) = run(
            SelectionState::new(),
            &[down(2), InputEvent::TapTimeout],
            &ctx,
        );
        assert_eq!(state.phase, Phase::Pressed);
        assert!(effects.contains(&Effect::Schedule {
            timer: InputTimer::LongPress,
            position: 2
        }));

        let up = transition(&state, InputEvent::PointerUp, &ctx);
        assert!(clicks(&up.effects).is_empty());
        assert!(up.effects.contains(&Effect::Cancel(InputTimer::LongPress)));
        assert!(up.effects.contains(&Effect::Schedule {
            timer: InputTimer::PressedReset,
            position: 2
        }));

        let reset = transition(
            &up.state,
            InputEvent::PressedResetTimeout { position: 2 },
            &ctx,
        );
        assert_eq!(clicks(&reset.effects), vec![2]);
        assert_eq!(reset.state.pressed, None);
    }

    #[test]
    fn test_pressed_reset_without_selection_does_not_click() {
        let ctx = ctx(9, 3);
        let (mut state, _) = run(
            SelectionState::new(),
            &[down(4), InputEvent::PointerUp],
            &ctx,
        );
        state.clear_selection();

        let reset = transition(&state, InputEvent::PressedResetTimeout { position: 4 }, &ctx);
        assert!(clicks(&reset.effects).is_empty());
        assert!(reset.effects.contains(&Effect::SetPressed {
            position: 4,
            pressed: false
        }));
        assert_eq!(reset.state.pressed, None);
    }

    #[test]
    fn test_pointer_down_past_item_count_is_a_miss() {
        let step = transition(&SelectionState::new(), down(8), &ctx(8, 3));

        assert!(step.handled);
        assert_eq!(step.state.selected, None);
        assert_eq!(step.state.pressed, None);
        assert_eq!(step.state.phase, Phase::Idle);
        assert!(step.effects.is_empty());
    }

    #[test]
    fn test_quick_release_before_tap_timeout() {
        let ctx = ctx(9, 3);
        let (state, effects) = run(
            SelectionState::new(),
            &[down(4), InputEvent::PointerUp],
            &ctx,
        );

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.pressed, Some(4));
        assert!(clicks(&effects).is_empty());
        assert!(effects.contains(&Effect::Cancel(InputTimer::Tap)));

        // A stale tap timeout does nothing once idle.
        let late_tap = transition(&state, InputEvent::TapTimeout, &ctx);
        assert!(late_tap.effects.is_empty());
        assert!(!late_tap.handled);
    }

    #[test]
    fn test_drag_away_cancels() {
        let ctx = ctx(9, 3);
        let (state, effects) = run(
            SelectionState::new(),
            &[down(2), InputEvent::PointerMove { hit: Some(5) }],
            &ctx,
        );

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.pressed, None);
        assert!(effects.contains(&Effect::Cancel(InputTimer::Tap)));
        assert!(effects.contains(&Effect::SetPressed {
            position: 2,
            pressed: false
        }));

        let up = transition(&state, InputEvent::PointerUp, &ctx);
        assert!(clicks(&up.effects).is_empty());
    }

    #[test]
    fn test_move_within_item_keeps_press() {
        let ctx = ctx(9, 3);
        let (state, _) = run(
            SelectionState::new(),
            &[down(2), InputEvent::PointerMove { hit: Some(2) }],
            &ctx,
        );
        assert_eq!(state.phase, Phase::PressPending);
    }

    #[test]
    fn test_cancel_clears_press() {
        let ctx = ctx(9, 3);
        let (state, effects) = run(
            SelectionState::new(),
            &[down(1), InputEvent::TapTimeout, InputEvent::PointerCancel],
            &ctx,
        );
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.pressed, None);
        assert_eq!(
            effects.last(),
            Some(&Effect::SetPressed {
                position: 1,
                pressed: false
            })
        );
    }

    #[test]
    fn test_long_press_handled() {
        let ctx = InputContext {
            long_clickable: true,
            ..ctx(9, 3)
        };
        let (state, effects) = run(
            SelectionState::new(),
            &[down(3), InputEvent::TapTimeout, InputEvent::LongPressTimeout],
            &ctx,
        );
        assert_eq!(state.phase, Phase::LongPressPending);
        assert_eq!(effects.last(), Some(&Effect::LongClick(3)));

        let (state, effects) = run(
            state,
            &[
                InputEvent::LongClickResult { handled: true },
                InputEvent::PointerUp,
            ],
            &ctx,
        );
        assert_eq!(state.phase, Phase::Idle);
        assert!(clicks(&effects).is_empty());
    }

    #[test]
    fn test_long_press_unhandled_clicks_on_release() {
        let ctx = InputContext {
            long_clickable: true,
            ..ctx(9, 3)
        };
        let (state, effects) = run(
            SelectionState::new(),
            &[
                down(3),
                InputEvent::TapTimeout,
                InputEvent::LongPressTimeout,
                InputEvent::LongClickResult { handled: false },
                InputEvent::PointerUp,
            ],
            &ctx,
        );
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(clicks(&effects), vec![3]);
    }

    #[test]
    fn test_disabled_item_does_not_press() {
        let step = transition(
            &SelectionState::new(),
            InputEvent::PointerDown {
                hit: Some(1),
                enabled: false,
            },
            &ctx(4, 2),
        );
        assert_eq!(step.state.phase, Phase::Idle);
        assert_eq!(step.state.selected, Some(1));
        assert_eq!(step.effects, vec![Effect::ClearSelectedVisuals]);
    }

    #[test]
    fn test_disabled_board_swallows_pointer() {
        let ctx = InputContext {
            enabled: false,
            ..ctx(4, 2)
        };
        let step = transition(&SelectionState::new(), down(1), &ctx);
        assert!(step.handled);
        assert!(step.effects.is_empty());
        assert_eq!(step.state, SelectionState::new());

        let inert = InputContext {
            clickable: false,
            ..ctx
        };
        assert!(!transition(&SelectionState::new(), down(1), &inert).handled);
    }

    #[test]
    fn test_navigate_down_one_row() {
        let state = SelectionState {
            selected: Some(1),
            ..SelectionState::new()
        };
        let step = transition(&state, InputEvent::Navigate(Direction::Down), &ctx(9, 3));

        assert!(step.handled);
        assert_eq!(step.state.selected, Some(4));
        assert_eq!(
            step.effects,
            vec![
                Effect::SetSelected {
                    position: 1,
                    selected: false
                },
                Effect::SetSelected {
                    position: 4,
                    selected: true
                },
            ]
        );
    }

    #[test]
    fn test_navigate_stops_at_boundaries() {
        let ctx = ctx(9, 3);
        let top = SelectionState {
            selected: Some(2),
            ..SelectionState::new()
        };
        let step = transition(&top, InputEvent::Navigate(Direction::Up), &ctx);
        assert!(!step.handled);
        assert_eq!(step.state.selected, Some(2));

        let bottom = SelectionState {
            selected: Some(7),
            ..SelectionState::new()
        };
        assert!(!transition(&bottom, InputEvent::Navigate(Direction::Down), &ctx).handled);
    }

    #[test]
    fn test_navigate_into_short_row() {
        let state = SelectionState {
            selected: Some(2),
            ..SelectionState::new()
        };
        let step = transition(&state, InputEvent::Navigate(Direction::Down), &ctx(4, 3));
        assert_eq!(step.state.selected, Some(3));
    }

    #[test]
    fn test_navigate_requires_focus_and_items() {
        let unfocused = InputContext {
            focused: false,
            ..ctx(9, 3)
        };
        let state = SelectionState::new();
        assert!(!transition(&state, InputEvent::Navigate(Direction::Down), &unfocused).handled);
        assert!(!transition(&state, InputEvent::Navigate(Direction::Down), &ctx(0, 3)).handled);

        let step = transition(&state, InputEvent::Navigate(Direction::Down), &ctx(9, 3));
        assert_eq!(step.state.selected, Some(0));
    }

    #[test]
    fn test_confirm_key_click() {
        let ctx = ctx(9, 3);
        let state = SelectionState {
            selected: Some(5),
            ..SelectionState::new()
        };

        let pressed = transition(&state, InputEvent::ConfirmDown, &ctx);
        assert!(pressed.handled);
        assert_eq!(pressed.state.pressed, Some(5));
        assert_eq!(
            pressed.effects,
            vec![Effect::SetPressed {
                position: 5,
                pressed: true
            }]
        );

        let released = transition(&pressed.state, InputEvent::ConfirmUp, &ctx);
        assert!(released.handled);
        assert_eq!(clicks(&released.effects), vec![5]);
        assert_eq!(released.state.pressed, None);
    }

    #[test]
    fn test_confirm_down_long_clickable() {
        let ctx = InputContext {
            long_clickable: true,
            ..ctx(9, 3)
        };
        let state = SelectionState {
            selected: Some(0),
            ..SelectionState::new()
        };
        let step = transition(&state, InputEvent::ConfirmDown, &ctx);
        assert_eq!(step.state.phase, Phase::Pressed);
        assert!(step.effects.contains(&Effect::Schedule {
            timer: InputTimer::LongPress,
            position: 0
        }));

        let fired = transition(&step.state, InputEvent::LongPressTimeout, &ctx);
        assert_eq!(fired.effects, vec![Effect::LongClick(0)]);
    }

    #[test]
    fn test_confirm_requires_clickable_and_focus() {
        let state = SelectionState {
            selected: Some(0),
            ..SelectionState::new()
        };
        let not_clickable = InputContext {
            clickable: false,
            ..ctx(9, 3)
        };
        assert!(!transition(&state, InputEvent::ConfirmDown, &not_clickable).handled);
        assert!(!transition(&state, InputEvent::ConfirmUp, &not_clickable).handled);

        let unfocused = InputContext {
            focused: false,
            ..ctx(9, 3)
        };
        assert!(!transition(&state, InputEvent::ConfirmDown, &unfocused).handled);

        let disabled = InputContext {
            enabled: false,
            ..ctx(9, 3)
        };
        let up = transition(&state, InputEvent::ConfirmUp, &disabled);
        assert!(up.handled);
        assert!(up.effects.is_empty());
    }

    #[test]
    fn test_focus_visuals() {
        let state = SelectionState {
            selected: Some(3),
            ..SelectionState::new()
        };
        let gained = transition(
            &state,
            InputEvent::FocusChanged {
                gained: true,
                in_touch_mode: false,
            },
            &ctx(9, 3),
        );
        assert_eq!(
            gained.effects,
            vec![Effect::SetSelected {
                position: 3,
                selected: true
            }]
        );

        let touch = transition(
            &state,
            InputEvent::FocusChanged {
                gained: true,
                in_touch_mode: true,
            },
            &ctx(9, 3),
        );
        assert_eq!(touch.effects, vec![Effect::ClearSelectedVisuals]);
    }

    #[test]
    fn test_out_of_range_positions_are_dropped() {
        let state = SelectionState {
            selected: Some(8),
            pressed: Some(8),
            phase: Phase::Pressed,
        };
        let step = transition(&state, InputEvent::LongPressTimeout, &ctx(4, 2));
        assert_eq!(step.state, SelectionState::new());
        assert!(step.effects.is_empty());
    }

    #[test]
    fn test_pointer_down_on_gap_clears_selection() {
        let state = SelectionState {
            selected: Some(3),
            ..SelectionState::new()
        };
        let step = transition(
            &state,
            InputEvent::PointerDown {
                hit: None,
                enabled: false,
            },
            &ctx(9, 3),
        );
        assert!(step.handled);
        assert_eq!(step.state.selected, None);
        assert!(step.effects.is_empty());
    }
}
