//! The board container.
//!
//! `BoardView` arranges a fixed set of items into a row-major grid and runs
//! single-selection input handling over them. It is not a widget in any
//! particular toolkit: a thin host adapter forwards measure and layout
//! requests, input events and timer ticks, and supplies an [`ItemFactory`]
//! that renders items.
//!
//! # Driving a board
//!
//! ```ignore
//! let mut board = BoardView::with_config(GridConfig::new(3));
//! board.set_adapter(Some(adapter));
//! board.attached_to_window();
//!
//! // Host layout pass.
//! let size = board.measure(SizeConstraint::Exact(310.0), SizeConstraint::Unspecified, &mut factory)?;
//! board.layout(true, Rect::new(0.0, 0.0, size.width, size.height), &mut factory)?;
//!
//! // Host event loop.
//! board.handle_pointer(&event, &mut factory);
//! if let Some(deadline) = board.next_timer_deadline() {
//!     // wake at `deadline`, then:
//!     board.process_timers(Instant::now(), &mut factory);
//! }
//! ```
//!
//! # Signals
//!
//! - `item_clicked`: an item was clicked, by pointer, keyboard or
//!   accessibility action
//! - `repaint_requested`: pressed or selected visuals changed
//! - `layout_requested()`: the data or configuration changed and the host
//!   should run measure and layout again

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use horizon_board_core::{
    board_debug, board_trace, board_warn, ContentMargins, PerfSpan, Point, Rect, Result, Signal,
    Size,
};

use crate::accessibility::{ItemAction, ItemDescription, ItemQuery};
use crate::cache::ItemCache;
use crate::config::{validate_column_count, validate_spacing, GridConfig, LayoutDirection};
use crate::host::ItemFactory;
use crate::input::{
    transition, Direction, Effect, InputContext, InputEvent, InputTimeouts, InputTimer, Key,
    KeyEvent, KeyState, PointerAction, PointerEvent, SelectionState, TimerTable,
};
use crate::layout::{measure_grid, position_items, GridMeasurement, SizeConstraint};
use crate::model::{BoardAdapter, DataChangeObserver, ObserverId};

/// A click on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemClick {
    /// Position of the clicked item.
    pub position: usize,
    /// The adapter's identifier for the item.
    pub item_id: u64,
}

/// Long-click handler: receives position and item id, returns whether the
/// click was handled.
type LongClickHandler = Box<dyn Fn(usize, u64) -> bool + Send + Sync>;

/// State shared with the data-source observer.
struct BoardShared {
    /// Set when cached items and bounds are stale.
    data_changed: AtomicBool,
    /// Bumped on every change, so a measurement can tell it is outdated.
    generation: AtomicU64,
    selection: Mutex<SelectionState>,
    layout_requested: Signal<()>,
}

impl BoardShared {
    fn new() -> Self {
        Self {
            data_changed: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            selection: Mutex::new(SelectionState::new()),
            layout_requested: Signal::new(),
        }
    }

    fn mark_changed(&self) {
        self.data_changed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_changed(&self) -> bool {
        self.data_changed.load(Ordering::SeqCst)
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Registered with the adapter while the board is attached.
struct BoardObserver {
    shared: Arc<BoardShared>,
}

impl DataChangeObserver for BoardObserver {
    fn on_changed(&self) {
        tracing::debug!(target: "horizon_board::data", "board data changed");
        self.shared.mark_changed();
        self.shared.layout_requested.emit(());
    }

    fn on_invalidated(&self) {
        tracing::debug!(target: "horizon_board::data", "board data invalidated");
        self.shared.mark_changed();
        self.shared.selection.lock().reset();
        self.shared.layout_requested.emit(());
    }
}

/// A non-scrolling grid of items with single selection.
pub struct BoardView<I> {
    config: GridConfig,
    margins: ContentMargins,
    timeouts: InputTimeouts,

    adapter: Option<Arc<dyn BoardAdapter>>,
    observer_id: Option<ObserverId>,
    shared: Arc<BoardShared>,

    cache: ItemCache<I>,
    measurement: Option<GridMeasurement>,
    measured_generation: u64,
    last_constraints: Option<(SizeConstraint, SizeConstraint)>,
    measured_size: Size,

    timers: TimerTable,
    window_epoch: u64,
    attached: bool,

    enabled: bool,
    clickable: bool,
    long_clickable: bool,
    focused: bool,
    long_click_handler: Option<LongClickHandler>,

    /// Emitted when an item is clicked.
    pub item_clicked: Signal<ItemClick>,
    /// Emitted when pressed or selected visuals change.
    pub repaint_requested: Signal<()>,
}

impl<I> Default for BoardView<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> BoardView<I> {
    /// Create a board with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create a board with the given configuration.
    ///
    /// The configuration is checked when the board is first measured.
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            config,
            margins: ContentMargins::default(),
            timeouts: InputTimeouts::default(),
            adapter: None,
            observer_id: None,
            shared: Arc::new(BoardShared::new()),
            cache: ItemCache::new(),
            measurement: None,
            measured_generation: 0,
            last_constraints: None,
            measured_size: Size::ZERO,
            timers: TimerTable::new(),
            window_epoch: 0,
            attached: false,
            enabled: true,
            clickable: true,
            long_clickable: false,
            focused: false,
            long_click_handler: None,
            item_clicked: Signal::new(),
            repaint_requested: Signal::new(),
        }
    }

    /// Use custom input timeouts.
    pub fn with_timeouts(mut self, timeouts: InputTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The input timeouts.
    pub fn timeouts(&self) -> &InputTimeouts {
        &self.timeouts
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.config.column_count
    }

    /// Set the number of columns.
    pub fn set_column_count(&mut self, count: usize) -> Result<()> {
        validate_column_count(count)?;
        let changed = self.config.column_count != count;
        self.config.column_count = count;
        self.request_layout_if_needed(changed);
        Ok(())
    }

    /// Gap between columns.
    pub fn column_spacing(&self) -> f32 {
        self.config.column_spacing
    }

    /// Set the gap between columns.
    pub fn set_column_spacing(&mut self, spacing: f32) -> Result<()> {
        validate_spacing("column spacing", spacing)?;
        let changed = self.config.column_spacing != spacing;
        self.config.column_spacing = spacing;
        self.request_layout_if_needed(changed);
        Ok(())
    }

    /// Gap between rows.
    pub fn row_spacing(&self) -> f32 {
        self.config.row_spacing
    }

    /// Set the gap between rows.
    pub fn set_row_spacing(&mut self, spacing: f32) -> Result<()> {
        validate_spacing("row spacing", spacing)?;
        let changed = self.config.row_spacing != spacing;
        self.config.row_spacing = spacing;
        self.request_layout_if_needed(changed);
        Ok(())
    }

    /// Column placement order.
    pub fn direction(&self) -> LayoutDirection {
        self.config.direction
    }

    /// Set the column placement order.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        let changed = self.config.direction != direction;
        self.config.direction = direction;
        self.request_layout_if_needed(changed);
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        config.validate()?;
        let changed = self.config != config;
        self.config = config;
        self.request_layout_if_needed(changed);
        Ok(())
    }

    /// Padding between the board's frame and its items.
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    /// Set the padding between the board's frame and its items.
    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        let changed = self.margins != margins;
        self.margins = margins;
        self.request_layout_if_needed(changed);
    }

    fn request_layout_if_needed(&self, changed: bool) {
        if changed {
            self.shared.mark_changed();
            self.shared.layout_requested.emit(());
        }
    }

    // =========================================================================
    // Data source
    // =========================================================================

    /// The current data source.
    pub fn adapter(&self) -> Option<&Arc<dyn BoardAdapter>> {
        self.adapter.as_ref()
    }

    /// Replace the data source.
    ///
    /// Cached items are dropped, the selection is reset and any press in
    /// progress is abandoned.
    pub fn set_adapter(&mut self, adapter: Option<Arc<dyn BoardAdapter>>) {
        self.unregister_observer();
        self.cache.invalidate();
        self.measurement = None;
        self.timers.clear();
        self.shared.selection.lock().reset();

        self.adapter = adapter;
        if self.adapter.is_some() {
            self.register_observer();
            self.shared.mark_changed();
        }

        tracing::debug!(
            target: "horizon_board::data",
            items = self.item_count(),
            "adapter replaced"
        );
        self.shared.layout_requested.emit(());
    }

    /// Number of items in the data source.
    pub fn item_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, |adapter| adapter.count())
    }

    fn register_observer(&mut self) {
        if self.observer_id.is_some() {
            return;
        }
        if let Some(adapter) = &self.adapter {
            let observer = Arc::new(BoardObserver {
                shared: self.shared.clone(),
            });
            self.observer_id = Some(adapter.observable().register(observer));
            board_trace!("data observer registered");
        }
    }

    fn unregister_observer(&mut self) {
        if let (Some(adapter), Some(id)) = (&self.adapter, self.observer_id.take()) {
            adapter.observable().unregister(id);
        }
    }

    /// Whether cached items and bounds must be rebuilt before the next layout.
    pub fn is_data_changed(&self) -> bool {
        self.shared.is_changed()
    }

    /// Signal emitted when the host should measure and lay out again.
    pub fn layout_requested(&self) -> &Signal<()> {
        &self.shared.layout_requested
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// The board was attached to a live surface.
    ///
    /// Starts a new window-attachment epoch; timers scheduled under an older
    /// epoch are discarded when they fire.
    pub fn attached_to_window(&mut self) {
        self.attached = true;
        self.window_epoch += 1;
        if self.adapter.is_some() && self.observer_id.is_none() {
            self.register_observer();
            self.shared.mark_changed();
        }
        board_debug!(epoch = self.window_epoch, "board attached");
    }

    /// The board was detached from its surface.
    pub fn detached_from_window(&mut self) {
        self.attached = false;
        self.cache.invalidate();
        self.unregister_observer();
        board_debug!(epoch = self.window_epoch, "board detached");
    }

    /// Whether the board is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The current window-attachment epoch.
    pub fn window_epoch(&self) -> u64 {
        self.window_epoch
    }

    /// The board's frame changed size.
    pub fn size_changed(&mut self, size: Size) {
        if !self.cache.is_empty() {
            self.cache.invalidate();
            self.shared.mark_changed();
        }
        tracing::trace!(target: "horizon_board::layout", ?size, "board resized");
    }

    // =========================================================================
    // Interaction flags
    // =========================================================================

    /// Whether the board accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether items can be clicked by keyboard or accessibility action.
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    /// Set whether items can be clicked by keyboard or accessibility action.
    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    /// Whether items can be long-clicked.
    pub fn is_long_clickable(&self) -> bool {
        self.long_clickable
    }

    /// Set whether items can be long-clicked.
    pub fn set_long_clickable(&mut self, long_clickable: bool) {
        self.long_clickable = long_clickable;
    }

    /// Install the long-click handler. This also makes items long-clickable.
    pub fn set_on_item_long_click<F>(&mut self, handler: F)
    where
        F: Fn(usize, u64) -> bool + Send + Sync + 'static,
    {
        self.long_click_handler = Some(Box::new(handler));
        self.long_clickable = true;
    }

    /// Remove the long-click handler.
    pub fn clear_on_item_long_click(&mut self) {
        self.long_click_handler = None;
    }

    /// Whether the board has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected position.
    pub fn selected_position(&self) -> Option<usize> {
        let count = self.item_count();
        self.shared
            .selection
            .lock()
            .selected
            .filter(|&position| position < count)
    }

    /// Select a position, or clear the selection.
    ///
    /// Positions outside the data source clear the selection.
    pub fn set_selection(&mut self, position: Option<usize>) {
        let count = self.item_count();
        self.shared.selection.lock().selected = position.filter(|&p| p < count);
    }

    /// A copy of the selection and press state.
    pub fn selection_state(&self) -> SelectionState {
        *self.shared.selection.lock()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Size computed by the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// Result of the last measure pass.
    pub fn measurement(&self) -> Option<&GridMeasurement> {
        self.measurement.as_ref()
    }

    /// Number of cached item instances.
    pub fn cached_item_count(&self) -> usize {
        self.cache.len()
    }

    /// The cached instance at `position`.
    pub fn item(&self, position: usize) -> Option<&I> {
        self.cache.get(position).map(|slot| &slot.instance)
    }

    /// Bounds assigned to `position` by the last layout pass.
    pub fn item_bounds(&self, position: usize) -> Option<Rect> {
        self.cache.get(position).and_then(|slot| slot.bounds)
    }

    /// The item under `point`, in board-local coordinates.
    ///
    /// Later items win where bounds overlap. Positions the adapter no longer
    /// holds are skipped until the next layout pass.
    pub fn position_at(&self, point: Point) -> Option<usize> {
        let count = self.item_count();
        self.cache
            .iter()
            .rev()
            .filter(|slot| slot.position < count)
            .find(|slot| slot.bounds.is_some_and(|bounds| bounds.contains(point)))
            .map(|slot| slot.position)
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// When the host should next call [`process_timers`](Self::process_timers).
    pub fn next_timer_deadline(&mut self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Check if an input timer of `kind` is outstanding.
    pub fn is_timer_scheduled(&self, kind: InputTimer) -> bool {
        self.timers.is_scheduled(kind)
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// Describe what the item at `position` supports.
    pub fn describe_item(&self, position: usize) -> Option<ItemDescription> {
        let adapter = self.adapter.as_deref()?;
        let query = ItemQuery {
            adapter,
            board_enabled: self.enabled,
            selected: self.selected_position(),
            clickable: self.clickable,
            long_clickable: self.long_clickable,
        };
        crate::accessibility::describe_item(position, &query)
    }

    fn perform_click(&self, position: usize) -> bool {
        let Some(adapter) = &self.adapter else {
            return false;
        };
        if position >= adapter.count() {
            return false;
        }

        let click = ItemClick {
            position,
            item_id: adapter.item_id(position),
        };
        tracing::debug!(target: "horizon_board::input", position, item_id = click.item_id, "item clicked");
        self.item_clicked.emit(click);
        true
    }

    fn input_context(&self) -> InputContext {
        InputContext {
            item_count: self.item_count(),
            column_count: self.config.column_count,
            enabled: self.enabled,
            clickable: self.clickable,
            long_clickable: self.long_clickable,
            focused: self.focused,
        }
    }

    // =========================================================================
    // Measure and layout
    // =========================================================================

    /// Measure the board under the host's constraints.
    ///
    /// Returns the board's size including content margins. Fails if the
    /// column count is invalid or the factory produces no instance.
    pub fn measure<F>(
        &mut self,
        width: SizeConstraint,
        height: SizeConstraint,
        factory: &mut F,
    ) -> Result<Size>
    where
        F: ItemFactory<Item = I>,
    {
        let _perf = PerfSpan::new("board.measure");
        self.last_constraints = Some((width, height));

        let Some(adapter) = self.adapter.clone() else {
            self.measurement = None;
            self.measured_size = Size::new(width.size(), height.size());
            return Ok(self.measured_size);
        };

        let item_count = adapter.count();
        self.shared.selection.lock().clamp(item_count);

        let generation = self.shared.generation();
        self.cache.begin_pass(self.shared.is_changed(), item_count);

        let available = (width.size() - self.margins.horizontal()).max(0.0);
        let cache = &mut self.cache;
        let measurement = measure_grid(
            available,
            item_count,
            &self.config,
            |position, constraint| {
                cache
                    .obtain(position, constraint, factory)
                    .map(|slot| slot.measured)
            },
            width.is_exact(),
        )?;

        if item_count > 0 && measurement.column_width <= 0.0 {
            board_warn!(
                available,
                columns = self.config.column_count,
                "no room for columns, items measured at zero width"
            );
        }

        let content = measurement.content_size;
        let measured_width = if width.is_exact() {
            width.size()
        } else {
            content.width + self.margins.horizontal()
        };
        let measured_height = if height.is_exact() {
            height.size()
        } else {
            content.height + self.margins.vertical()
        };
        self.measured_size = Size::new(measured_width, measured_height);

        tracing::debug!(
            target: "horizon_board::layout",
            items = item_count,
            column_width = measurement.column_width,
            width = measured_width,
            height = measured_height,
            "board measured"
        );
        self.measurement = Some(measurement);
        self.measured_generation = generation;
        Ok(self.measured_size)
    }

    /// Place every item inside `frame`.
    ///
    /// Does nothing unless the data or configuration changed since the last
    /// successful layout. Measures first when no current measurement exists.
    pub fn layout<F>(&mut self, changed: bool, frame: Rect, factory: &mut F) -> Result<()>
    where
        F: ItemFactory<Item = I>,
    {
        if !self.shared.is_changed() {
            tracing::trace!(target: "horizon_board::layout", changed, "layout skipped, nothing changed");
            return Ok(());
        }
        let Some(adapter) = self.adapter.clone() else {
            return Ok(());
        };
        let _perf = PerfSpan::new("board.layout");
        let item_count = adapter.count();

        let outdated = self.measured_generation != self.shared.generation();
        let needs_measure = outdated
            || self
                .measurement
                .as_ref()
                .is_none_or(|measurement| measurement.item_count != item_count);
        if needs_measure {
            let (width, height) = self.last_constraints.unwrap_or((
                SizeConstraint::Exact(frame.width()),
                SizeConstraint::Exact(frame.height()),
            ));
            self.measure(width, height, factory)?;
        }

        let Some(measurement) = self.measurement.as_ref() else {
            return Ok(());
        };
        let item_count = measurement.item_count;
        let item_width = measurement.item_width;
        let padding_start = match self.config.direction {
            LayoutDirection::LeftToRight => self.margins.left,
            LayoutDirection::RightToLeft => self.margins.right,
        };
        let bounds = position_items(
            item_count,
            &self.config,
            measurement.column_width,
            &measurement.row_heights,
            frame.width(),
            padding_start,
            self.margins.top,
        );

        self.cache.begin_pass(false, item_count);
        for (position, rect) in bounds.into_iter().enumerate() {
            let slot = self.cache.obtain(position, item_width, factory)?;
            factory.place(position, &mut slot.instance, rect);
            slot.bounds = Some(rect);
        }

        self.shared.data_changed.store(false, Ordering::SeqCst);
        tracing::debug!(target: "horizon_board::layout", items = item_count, ?frame, changed, "board laid out");
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a pointer event. Returns whether the board consumed it.
    pub fn handle_pointer<F>(&mut self, event: &PointerEvent, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        let input = match event.action {
            PointerAction::Down => {
                let hit = self.position_at(event.position);
                let enabled = match (hit, &self.adapter) {
                    (Some(position), Some(adapter)) => adapter.is_enabled(position),
                    _ => false,
                };
                InputEvent::PointerDown { hit, enabled }
            }
            PointerAction::Move => InputEvent::PointerMove {
                hit: self.position_at(event.position),
            },
            PointerAction::Up => InputEvent::PointerUp,
            PointerAction::Cancel => InputEvent::PointerCancel,
        };
        self.dispatch(input, event.timestamp, factory)
    }

    /// Handle a key event. Returns whether the board consumed it.
    pub fn handle_key<F>(&mut self, event: &KeyEvent, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        let input = match (event.state, event.key) {
            (KeyState::Pressed, Key::ArrowUp) => InputEvent::Navigate(Direction::Up),
            (KeyState::Pressed, Key::ArrowDown) => InputEvent::Navigate(Direction::Down),
            (KeyState::Pressed, key) if key.is_confirm() => InputEvent::ConfirmDown,
            (KeyState::Released, key) if key.is_confirm() => InputEvent::ConfirmUp,
            _ => return false,
        };
        self.dispatch(input, event.timestamp, factory)
    }

    /// The board gained or lost keyboard focus.
    pub fn set_focused<F>(&mut self, gained: bool, in_touch_mode: bool, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        self.focused = gained;
        self.dispatch(
            InputEvent::FocusChanged {
                gained,
                in_touch_mode,
            },
            Instant::now(),
            factory,
        )
    }

    /// Fire every input timer due at `now`.
    ///
    /// Timers scheduled before the board was last detached or reattached are
    /// dropped without effect. Returns the number of timers acted on.
    pub fn process_timers<F>(&mut self, now: Instant, factory: &mut F) -> usize
    where
        F: ItemFactory<Item = I>,
    {
        let mut fired = 0;
        for timer in self.timers.take_expired(now) {
            if !self.attached || timer.epoch != self.window_epoch {
                tracing::trace!(
                    target: "horizon_board::input",
                    kind = ?timer.kind,
                    epoch = timer.epoch,
                    current = self.window_epoch,
                    "discarding stale input timer"
                );
                continue;
            }

            let event = match timer.kind {
                InputTimer::Tap => InputEvent::TapTimeout,
                InputTimer::LongPress => InputEvent::LongPressTimeout,
                InputTimer::PressedReset => InputEvent::PressedResetTimeout {
                    position: timer.position,
                },
            };
            self.dispatch(event, now, factory);
            fired += 1;
        }
        fired
    }

    /// Perform an accessibility action on the item at `position`.
    ///
    /// Returns whether the action took effect.
    pub fn perform_item_action<F>(&mut self, position: usize, action: ItemAction, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        let Some(adapter) = self.adapter.clone() else {
            return false;
        };
        if position >= adapter.count() || !self.enabled || !adapter.is_enabled(position) {
            return false;
        }

        match action {
            ItemAction::Select => {
                let mut selection = self.shared.selection.lock();
                if selection.selected == Some(position) {
                    return false;
                }
                selection.selected = Some(position);
                true
            }
            ItemAction::ClearSelection => {
                let mut selection = self.shared.selection.lock();
                if selection.selected != Some(position) {
                    return false;
                }
                selection.clear_selection();
                true
            }
            ItemAction::Click => self.clickable && self.perform_click(position),
            ItemAction::LongClick => self.long_clickable && self.perform_long_click(position, factory),
        }
    }

    fn perform_long_click<F>(&mut self, position: usize, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        let Some(adapter) = &self.adapter else {
            return false;
        };
        if position >= adapter.count() {
            return false;
        }

        let item_id = adapter.item_id(position);
        let handled = self
            .long_click_handler
            .as_ref()
            .is_some_and(|handler| handler(position, item_id));
        if handled {
            factory.long_press_feedback(position);
        }
        tracing::debug!(target: "horizon_board::input", position, item_id, handled, "item long-clicked");
        handled
    }

    fn dispatch<F>(&mut self, event: InputEvent, now: Instant, factory: &mut F) -> bool
    where
        F: ItemFactory<Item = I>,
    {
        let ctx = self.input_context();
        let step = {
            let mut selection = self.shared.selection.lock();
            let step = transition(&selection, event, &ctx);
            *selection = step.state;
            step
        };

        tracing::trace!(
            target: "horizon_board::input",
            ?event,
            phase = ?step.state.phase,
            effects = step.effects.len(),
            handled = step.handled,
            "input transition"
        );
        self.apply_effects(step.effects, now, factory);
        step.handled
    }

    fn apply_effects<F>(&mut self, effects: Vec<Effect>, now: Instant, factory: &mut F)
    where
        F: ItemFactory<Item = I>,
    {
        let mut repaint = false;
        for effect in effects {
            match effect {
                Effect::Schedule { timer, position } => {
                    let duration = self.timeouts.duration(timer);
                    self.timers
                        .schedule(timer, now, duration, self.window_epoch, position);
                }
                Effect::Cancel(timer) => {
                    self.timers.cancel(timer);
                }
                Effect::SetPressed { position, pressed } => {
                    if let Some(slot) = self.cache.get_mut(position) {
                        factory.set_pressed(position, &mut slot.instance, pressed);
                    }
                    repaint = true;
                }
                Effect::SetSelected { position, selected } => {
                    if let Some(slot) = self.cache.get_mut(position) {
                        factory.set_selected(position, &mut slot.instance, selected);
                    }
                    repaint = true;
                }
                Effect::ClearSelectedVisuals => {
                    for slot in self.cache.iter_mut() {
                        factory.set_selected(slot.position, &mut slot.instance, false);
                    }
                    repaint = true;
                }
                Effect::Click(position) => {
                    self.perform_click(position);
                }
                Effect::LongClick(position) => {
                    let handled = self.perform_long_click(position, factory);
                    self.dispatch(InputEvent::LongClickResult { handled }, now, factory);
                }
            }
        }

        if repaint {
            self.repaint_requested.emit(());
        }
    }
}

impl<I> Drop for BoardView<I> {
    fn drop(&mut self) {
        self.unregister_observer();
    }
}

static_assertions::assert_impl_all!(BoardView<()>: Send, Sync);
static_assertions::assert_impl_all!(ItemClick: Send, Sync, Copy);
