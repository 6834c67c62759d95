//! Grid measurement and placement.
//!
//! Layout is two passes. [`measure_grid`] sizes the columns and rows,
//! [`position_items`] turns that into one rectangle per item.

mod measure;
mod position;

pub use measure::{measure_grid, GridMeasurement, RowHeightMap, SizeConstraint};
pub use position::position_items;
