//! Horizon Board: a non-scrolling grid container.
//!
//! A [`BoardView`] arranges a fixed set of items from a [`BoardAdapter`] into
//! rows of a configured number of equal-width columns, the way a game board
//! or a launcher page does. It never scrolls: every item is measured and
//! placed on each layout pass, and every rendered instance is kept for reuse.
//!
//! The board is host-independent. Rendering goes through an [`ItemFactory`],
//! input arrives as [`PointerEvent`]s and [`KeyEvent`]s, and delayed input
//! timers are driven by an explicit clock through
//! [`BoardView::process_timers`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_board::{BoardView, GridConfig, ItemFactory, SizeConstraint, VecAdapter};
//! use horizon_board_core::{Rect, Size};
//!
//! struct Tiles;
//!
//! impl ItemFactory for Tiles {
//!     type Item = usize;
//!
//!     fn create_or_reuse(&mut self, position: usize, _previous: Option<usize>) -> Option<usize> {
//!         Some(position)
//!     }
//!
//!     fn measure(&mut self, _position: usize, _item: &mut usize, width: SizeConstraint) -> Size {
//!         Size::new(width.size(), 20.0)
//!     }
//! }
//!
//! let adapter = Arc::new(VecAdapter::new(vec!["a", "b", "c", "d", "e"]));
//! let mut board = BoardView::with_config(GridConfig::new(2));
//! board.set_adapter(Some(adapter));
//! board.attached_to_window();
//!
//! let mut tiles = Tiles;
//! let size = board
//!     .measure(SizeConstraint::Exact(100.0), SizeConstraint::Unspecified, &mut tiles)
//!     .unwrap();
//! assert_eq!(size, Size::new(100.0, 60.0));
//!
//! board.layout(true, Rect::new(0.0, 0.0, size.width, size.height), &mut tiles).unwrap();
//! assert_eq!(board.item_bounds(3), Some(Rect::new(50.0, 20.0, 50.0, 20.0)));
//! ```

pub mod accessibility;
mod cache;
pub mod config;
mod host;
pub mod input;
pub mod layout;
pub mod model;
pub mod widget;

pub use accessibility::{ItemAction, ItemDescription};
pub use config::{GridConfig, LayoutDirection, DEFAULT_COLUMN_COUNT};
pub use host::ItemFactory;
pub use input::{
    InputTimeouts, InputTimer, Key, KeyEvent, KeyState, PointerAction, PointerEvent,
    SelectionState,
};
pub use layout::SizeConstraint;
pub use model::{BoardAdapter, DataChangeObserver, DataSetObservable, VecAdapter};
pub use widget::{BoardView, ItemClick};
