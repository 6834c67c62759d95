//! Observer primitive for board notifications.
//!
//! A [`Signal<Args>`] fans one notification out to every connected closure,
//! synchronously, on the thread that emits it. The board uses signals for
//! clicks, layout requests and repaint requests.
//!
//! # Example
//!
//! ```
//! use horizon_board_core::Signal;
//!
//! let layout_requested = Signal::<()>::new();
//! let id = layout_requested.connect(|_| println!("layout requested"));
//!
//! layout_requested.emit(());
//! layout_requested.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Signal::connect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of closures invoked with `&Args` on every emit.
///
/// Use `()` for notifications that carry no payload.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Add a closure. Keep the returned id to remove it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove a closure. Returns `false` if `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Invoke every connected closure with `args`.
    ///
    /// The slot list is snapshotted first; closures may connect or disconnect
    /// on this signal while it is emitting.
    #[tracing::instrument(skip_all, target = "horizon_board_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        if slots.is_empty() {
            return;
        }
        tracing::trace!(target: "horizon_board_core::signal", slots = slots.len(), "emit");

        for slot in &slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
