//! Data sources and change notification.
//!
//! A board reads its items through [`BoardAdapter`] and learns about
//! mutations through the adapter's [`DataSetObservable`].

mod adapter;
mod observer;

pub use adapter::{BoardAdapter, VecAdapter};
pub use observer::{DataChangeObserver, DataSetObservable, ObserverId};
