//! Accessibility capability queries.
//!
//! Assistive technology asks the board what each item can do through
//! [`describe_item`] and acts on it through `BoardView::perform_item_action`.

use crate::model::BoardAdapter;

/// An action assistive technology may perform on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemAction {
    /// Make the item the selection.
    Select,
    /// Drop the item's selection.
    ClearSelection,
    /// Click the item.
    Click,
    /// Long-click the item.
    LongClick,
}

/// What an item currently supports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDescription {
    pub enabled: bool,
    pub selected: bool,
    pub clickable: bool,
    pub long_clickable: bool,
    /// Actions available right now.
    pub actions: Vec<ItemAction>,
}

/// The board state a description depends on.
#[derive(Clone, Copy)]
pub struct ItemQuery<'a> {
    pub adapter: &'a dyn BoardAdapter,
    pub board_enabled: bool,
    pub selected: Option<usize>,
    pub clickable: bool,
    pub long_clickable: bool,
}

/// Describe the item at `position`.
///
/// Returns `None` for a position the adapter does not have. A disabled item
/// (or any item of a disabled board) is described as disabled with no
/// actions.
pub fn describe_item(position: usize, query: &ItemQuery<'_>) -> Option<ItemDescription> {
    if position >= query.adapter.count() {
        return None;
    }
    if !query.board_enabled || !query.adapter.is_enabled(position) {
        return Some(ItemDescription::default());
    }

    let selected = query.selected == Some(position);
    let mut actions = vec![if selected {
        ItemAction::ClearSelection
    } else {
        ItemAction::Select
    }];
    if query.clickable {
        actions.push(ItemAction::Click);
    }
    if query.long_clickable {
        actions.push(ItemAction::LongClick);
    }

    Some(ItemDescription {
        enabled: true,
        selected,
        clickable: query.clickable,
        long_clickable: query.long_clickable,
        actions,
    })
}
