//! The host side of item rendering.

use horizon_board_core::{Rect, Size};

use crate::layout::SizeConstraint;

/// Creates, measures and decorates the rendered instance of each item.
///
/// The board owns the instances between calls and hands them back to the
/// factory whenever it needs something done to one.
///
/// # Example
///
/// ```
/// use horizon_board::{ItemFactory, SizeConstraint};
/// use horizon_board_core::Size;
///
/// struct Labels(Vec<String>);
///
/// impl ItemFactory for Labels {
///     type Item = String;
///
///     fn create_or_reuse(&mut self, position: usize, previous: Option<String>) -> Option<String> {
///         let mut label = previous.unwrap_or_default();
///         label.clear();
///         label.push_str(self.0.get(position)?);
///         Some(label)
///     }
///
///     fn measure(&mut self, _position: usize, item: &mut String, width: SizeConstraint) -> Size {
///         let natural = item.len() as f32 * 8.0;
///         let width = if width.is_exact() { width.size() } else { natural };
///         Size::new(width, 20.0)
///     }
/// }
/// ```
pub trait ItemFactory {
    /// The rendered instance of one item.
    type Item;

    /// Produce the instance for `position`.
    ///
    /// `previous` is the instance that last occupied this position, if any,
    /// and may be recycled. Returning `None` breaks the factory's contract and
    /// fails the current measure or layout pass.
    fn create_or_reuse(&mut self, position: usize, previous: Option<Self::Item>)
        -> Option<Self::Item>;

    /// Measure an instance under a width constraint. Height is unconstrained.
    fn measure(&mut self, position: usize, item: &mut Self::Item, width: SizeConstraint) -> Size;

    /// Called once per item after the board computes its bounds.
    fn place(&mut self, _position: usize, _item: &mut Self::Item, _bounds: Rect) {}

    /// Show or clear the pressed visual.
    fn set_pressed(&mut self, _position: usize, _item: &mut Self::Item, _pressed: bool) {}

    /// Show or clear the selected visual.
    fn set_selected(&mut self, _position: usize, _item: &mut Self::Item, _selected: bool) {}

    /// A long click was handled; give haptic or audible feedback.
    fn long_press_feedback(&mut self, _position: usize) {}
}
