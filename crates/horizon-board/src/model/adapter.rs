//! Data sources for a board.

use parking_lot::RwLock;

use super::observer::DataSetObservable;

/// An ordered, fixed-size collection of items shown by a board.
pub trait BoardAdapter: Send + Sync {
    /// Number of items.
    fn count(&self) -> usize;

    /// Stable identifier of the item at `position`.
    fn item_id(&self, position: usize) -> u64;

    /// Whether the item at `position` accepts input.
    fn is_enabled(&self, _position: usize) -> bool {
        true
    }

    /// The registry to notify on mutation.
    fn observable(&self) -> &DataSetObservable;
}

/// A [`BoardAdapter`] over a vector of items.
///
/// Item identifiers are positions. Mutations notify registered observers
/// after the internal lock is released.
///
/// # Example
///
/// ```
/// use horizon_board::{BoardAdapter, VecAdapter};
///
/// let fruits = VecAdapter::new(vec!["apple", "mango"]);
/// fruits.push("orange");
/// fruits.set_enabled(1, false);
///
/// assert_eq!(fruits.count(), 3);
/// assert!(!fruits.is_enabled(1));
/// assert_eq!(fruits.get(2), Some("orange"));
/// ```
pub struct VecAdapter<T> {
    items: RwLock<Vec<Entry<T>>>,
    observable: DataSetObservable,
}

struct Entry<T> {
    value: T,
    enabled: bool,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

impl<T: Send + Sync> VecAdapter<T> {
    /// Create an adapter holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().map(Entry::new).collect()),
            observable: DataSetObservable::new(),
        }
    }

    /// Create an empty adapter.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Get a copy of the item at `position`.
    pub fn get(&self, position: usize) -> Option<T>
    where
        T: Clone,
    {
        self.items.read().get(position).map(|entry| entry.value.clone())
    }

    /// Call `f` with a reference to the item at `position`.
    pub fn with_item<R>(&self, position: usize, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.items.read().get(position).map(|entry| f(&entry.value))
    }

    /// Append an item.
    pub fn push(&self, item: T) {
        self.items.write().push(Entry::new(item));
        self.observable.notify_changed();
    }

    /// Insert an item at `position`, shifting later items.
    ///
    /// Positions past the end append.
    pub fn insert(&self, position: usize, item: T) {
        {
            let mut items = self.items.write();
            let position = position.min(items.len());
            items.insert(position, Entry::new(item));
        }
        self.observable.notify_changed();
    }

    /// Remove and return the item at `position`.
    pub fn remove(&self, position: usize) -> Option<T> {
        let removed = {
            let mut items = self.items.write();
            (position < items.len()).then(|| items.remove(position).value)
        };
        if removed.is_some() {
            self.observable.notify_changed();
        }
        removed
    }

    /// Replace every item.
    ///
    /// Old positions lose their meaning, so observers are told the data set
    /// was invalidated.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items.into_iter().map(Entry::new).collect();
        self.observable.notify_invalidated();
    }

    /// Enable or disable the item at `position`.
    pub fn set_enabled(&self, position: usize, enabled: bool) {
        let changed = {
            let mut items = self.items.write();
            match items.get_mut(position) {
                Some(entry) if entry.enabled != enabled => {
                    entry.enabled = enabled;
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.observable.notify_changed();
        }
    }

    /// Tell observers the contents changed without touching them.
    pub fn notify_changed(&self) {
        self.observable.notify_changed();
    }

    /// Tell observers the contents are invalid.
    pub fn invalidate(&self) {
        self.observable.notify_invalidated();
    }
}

impl<T: Send + Sync> BoardAdapter for VecAdapter<T> {
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn item_id(&self, position: usize) -> u64 {
        position as u64
    }

    fn is_enabled(&self, position: usize) -> bool {
        self.items
            .read()
            .get(position)
            .is_some_and(|entry| entry.enabled)
    }

    fn observable(&self) -> &DataSetObservable {
        &self.observable
    }
}

static_assertions::assert_impl_all!(VecAdapter<String>: Send, Sync, BoardAdapter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataChangeObserver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Recorder {
        changed: AtomicUsize,
        invalidated: AtomicUsize,
    }

    impl DataChangeObserver for Recorder {
        fn on_changed(&self) {
            self.changed.fetch_add(1, Ordering::SeqCst);
        }

        fn on_invalidated(&self) {
            self.invalidated.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn observed<T: Send + Sync>(adapter: &VecAdapter<T>) -> Arc<Recorder> {
        let recorder = Arc::new(Recorder::default());
        adapter.observable().register(recorder.clone());
        recorder
    }

    #[test]
    fn test_mutations_notify_changed() {
        let adapter = VecAdapter::new(vec![1, 2, 3]);
        let recorder = observed(&adapter);

        adapter.push(4);
        adapter.insert(0, 0);
        assert_eq!(adapter.remove(1), Some(1));
        assert_eq!(adapter.remove(10), None);

        assert_eq!(recorder.changed.load(Ordering::SeqCst), 3);
        assert_eq!(recorder.invalidated.load(Ordering::SeqCst), 0);
        assert_eq!(adapter.count(), 4);
        assert_eq!(adapter.get(0), Some(0));
    }

    #[test]
    fn test_set_items_invalidates() {
        let adapter = VecAdapter::new(vec!["a", "b"]);
        let recorder = observed(&adapter);

        adapter.set_items(vec!["c"]);

        assert_eq!(recorder.invalidated.load(Ordering::SeqCst), 1);
        assert_eq!(adapter.count(), 1);
    }

    #[test]
    fn test_set_enabled_only_notifies_on_change() {
        let adapter = VecAdapter::new(vec![(); 3]);
        let recorder = observed(&adapter);

        adapter.set_enabled(1, true);
        adapter.set_enabled(1, false);
        adapter.set_enabled(7, false);

        assert_eq!(recorder.changed.load(Ordering::SeqCst), 1);
        assert!(adapter.is_enabled(0));
        assert!(!adapter.is_enabled(1));
        assert!(!adapter.is_enabled(7));
    }

    #[test]
    fn test_item_ids_are_positions() {
        let adapter = VecAdapter::new(vec!['x', 'y']);
        assert_eq!(adapter.item_id(1), 1);
        assert_eq!(adapter.with_item(0, |c| c.to_ascii_uppercase()), Some('X'));
    }
}
