//! Data change notification.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifies a registered [`DataChangeObserver`].
    pub struct ObserverId;
}

/// Receives notifications from a data source.
///
/// A data source calls exactly one of these per mutation.
pub trait DataChangeObserver: Send + Sync {
    /// The contents changed; existing positions may still be meaningful.
    fn on_changed(&self);

    /// The contents are no longer valid; positions carry no meaning.
    fn on_invalidated(&self);
}

/// A registry of observers that a data source notifies.
#[derive(Default)]
pub struct DataSetObservable {
    observers: Mutex<SlotMap<ObserverId, Arc<dyn DataChangeObserver>>>,
}

impl std::fmt::Debug for DataSetObservable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("observers", &self.observers.lock().len())
            .finish()
    }
}

impl DataSetObservable {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn DataChangeObserver>) -> ObserverId {
        self.observers.lock().insert(observer)
    }

    /// Unregister an observer.
    ///
    /// Returns `true` if the observer was registered.
    pub fn unregister(&self, id: ObserverId) -> bool {
        self.observers.lock().remove(id).is_some()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    /// Tell every observer the contents changed.
    pub fn notify_changed(&self) {
        tracing::trace!(target: "horizon_board::data", "data set changed");
        for observer in self.snapshot() {
            observer.on_changed();
        }
    }

    /// Tell every observer the contents were invalidated.
    pub fn notify_invalidated(&self) {
        tracing::trace!(target: "horizon_board::data", "data set invalidated");
        for observer in self.snapshot() {
            observer.on_invalidated();
        }
    }

    // Observers run outside the lock so they may unregister themselves.
    fn snapshot(&self) -> Vec<Arc<dyn DataChangeObserver>> {
        self.observers.lock().values().cloned().collect()
    }
}

static_assertions::assert_impl_all!(DataSetObservable: Send, Sync);
