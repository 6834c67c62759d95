//! Per-position item instances.
//!
//! The cache keeps at most one rendered instance per position. When the data
//! changes, a pass begins by marking every slot stale; stale instances are
//! offered back to the factory for recycling as each position is obtained.

use horizon_board_core::{BoardError, Rect, Result, Size};

use crate::host::ItemFactory;
use crate::layout::SizeConstraint;

/// The cache record for one position.
#[derive(Debug)]
pub struct ItemSlot<I> {
    /// The item's position.
    pub position: usize,
    /// The rendered instance.
    pub instance: I,
    /// Constraint the instance was last measured with.
    pub constraint: SizeConstraint,
    /// The instance's measured size.
    pub measured: Size,
    /// Bounds assigned by the last placement pass.
    pub bounds: Option<Rect>,
    fresh: bool,
}

/// Holds rendered item instances by position.
#[derive(Debug)]
pub struct ItemCache<I> {
    slots: Vec<Option<ItemSlot<I>>>,
}

impl<I> Default for ItemCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ItemCache<I> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Prepare for a pass over `item_count` items.
    ///
    /// Slots past `item_count` are dropped. When `stale` is set, the remaining
    /// slots are kept only as recycling candidates.
    pub fn begin_pass(&mut self, stale: bool, item_count: usize) {
        self.slots.truncate(item_count);
        if stale {
            for slot in self.slots.iter_mut().flatten() {
                slot.fresh = false;
                slot.bounds = None;
            }
        }
    }

    /// Get the instance for `position`, creating or re-measuring it as needed.
    ///
    /// A fresh slot is returned as is, re-measured if `constraint` changed. A
    /// stale or missing slot is rebuilt through the factory.
    pub fn obtain<F>(
        &mut self,
        position: usize,
        constraint: SizeConstraint,
        factory: &mut F,
    ) -> Result<&mut ItemSlot<I>>
    where
        F: ItemFactory<Item = I>,
    {
        if position >= self.slots.len() {
            self.slots.resize_with(position + 1, || None);
        }
        let entry = &mut self.slots[position];

        let reusable = entry.as_ref().is_some_and(|slot| slot.fresh);
        if !reusable {
            let previous = entry.take().map(|slot| slot.instance);
            let mut instance = factory
                .create_or_reuse(position, previous)
                .ok_or(BoardError::MissingItem { position })?;
            let measured = factory.measure(position, &mut instance, constraint);

            tracing::trace!(target: "horizon_board::data", position, ?measured, "item created");
            *entry = Some(ItemSlot {
                position,
                instance,
                constraint,
                measured,
                bounds: None,
                fresh: true,
            });
        }

        let slot = entry.as_mut().ok_or(BoardError::MissingItem { position })?;
        if slot.constraint != constraint {
            slot.measured = factory.measure(position, &mut slot.instance, constraint);
            slot.constraint = constraint;
        }
        Ok(slot)
    }

    /// Drop every slot.
    pub fn invalidate(&mut self) {
        if !self.slots.is_empty() {
            tracing::debug!(target: "horizon_board::data", slots = self.slots.len(), "item cache cleared");
        }
        self.slots.clear();
    }

    /// Number of positions holding an instance.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Check if the cache holds no instances.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slot for `position`, if present.
    pub fn get(&self, position: usize) -> Option<&ItemSlot<I>> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// The slot for `position`, if present.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut ItemSlot<I>> {
        self.slots.get_mut(position).and_then(Option::as_mut)
    }

    /// Iterate over occupied slots in position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ItemSlot<I>> {
        self.slots.iter().flatten()
    }

    /// Iterate mutably over occupied slots in position order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ItemSlot<I>> {
        self.slots.iter_mut().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Factory that numbers every instance it creates.
    #[derive(Default)]
    struct CountingFactory {
        created: usize,
        recycled: usize,
        measured: usize,
        refuse: Option<usize>,
    }

    impl ItemFactory for CountingFactory {
        type Item = usize;

        fn create_or_reuse(&mut self, position: usize, previous: Option<usize>) -> Option<usize> {
            if self.refuse == Some(position) {
                return None;
            }
            if previous.is_some() {
                self.recycled += 1;
            }
            self.created += 1;
            Some(self.created)
        }

        fn measure(&mut self, _position: usize, _item: &mut usize, width: SizeConstraint) -> Size {
            self.measured += 1;
            Size::new(width.size(), 10.0)
        }
    }

    #[test]
    fn test_obtain_creates_once() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory::default();

        cache.begin_pass(true, 2);
        let first = cache.obtain(0, SizeConstraint::Exact(50.0), &mut factory).unwrap().instance;
        let again = cache.obtain(0, SizeConstraint::Exact(50.0), &mut factory).unwrap().instance;

        assert_eq!(first, again);
        assert_eq!(factory.created, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stale_pass_recycles() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory::default();

        cache.begin_pass(true, 2);
        cache.obtain(0, SizeConstraint::Unspecified, &mut factory).unwrap();
        cache.obtain(1, SizeConstraint::Unspecified, &mut factory).unwrap();

        cache.begin_pass(false, 2);
        cache.obtain(0, SizeConstraint::Unspecified, &mut factory).unwrap();
        assert_eq!(factory.created, 2);

        cache.begin_pass(true, 2);
        let slot = cache.obtain(0, SizeConstraint::Unspecified, &mut factory).unwrap();
        assert_eq!(slot.instance, 3);
        assert_eq!(factory.recycled, 1);
    }

    #[test]
    fn test_begin_pass_truncates() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory::default();

        cache.begin_pass(true, 3);
        for position in 0..3 {
            cache.obtain(position, SizeConstraint::Unspecified, &mut factory).unwrap();
        }
        cache.begin_pass(false, 1);

        assert_eq!(cache.len(), 1);
        assert!(cache.get(2).is_none());
    }

    #[test]
    fn test_constraint_change_remeasures() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory::default();

        cache.begin_pass(true, 1);
        cache.obtain(0, SizeConstraint::Exact(50.0), &mut factory).unwrap();
        let slot = cache.obtain(0, SizeConstraint::Exact(70.0), &mut factory).unwrap();

        assert_eq!(slot.measured.width, 70.0);
        assert_eq!(factory.created, 1);
        assert_eq!(factory.measured, 2);
    }

    #[test]
    fn test_missing_item_is_error() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory {
            refuse: Some(1),
            ..Default::default()
        };

        cache.begin_pass(true, 2);
        cache.obtain(0, SizeConstraint::Unspecified, &mut factory).unwrap();
        let err = cache.obtain(1, SizeConstraint::Unspecified, &mut factory).unwrap_err();

        assert!(matches!(err, BoardError::MissingItem { position: 1 }));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = ItemCache::new();
        let mut factory = CountingFactory::default();

        cache.begin_pass(true, 1);
        cache.obtain(0, SizeConstraint::Unspecified, &mut factory).unwrap();
        cache.invalidate();

        assert!(cache.is_empty());
        assert!(cache.get(0).is_none());
    }
}
