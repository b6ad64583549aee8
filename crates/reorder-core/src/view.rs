//! Read-side helpers for whatever renders the list.
//!
//! Nothing here changes state; it derives rows and control availability the
//! way a view needs them.

use serde::Serialize;

use crate::state::ListState;

/// One rendered row: the item at a display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a, T> {
    /// Original index (stable identity) of the item.
    pub index: usize,
    pub value: &'a T,
    pub selected: bool,
}

/// Returns one row per item, in display order.
pub fn rows<T>(state: &ListState<T>) -> Vec<Row<'_, T>> {
    state
        .current_order()
        .into_iter()
        .filter_map(|index| {
            state.items().get(index).map(|value| Row {
                index,
                value,
                selected: state.is_selected(index),
            })
        })
        .collect()
}

/// Whether "move up" / "move down" would do anything.
pub fn can_reorder<T>(state: &ListState<T>) -> bool {
    !state.selected_items().is_empty()
}

/// Whether "reset" would do anything.
pub fn can_reset<T>(state: &ListState<T>) -> bool {
    state.is_reordered() || !state.selected_items().is_empty()
}

/// Serializable snapshot of a list for machine-readable output.
#[derive(Debug, Serialize)]
pub struct ListSnapshot<'a, T> {
    pub rows: Vec<Row<'a, T>>,
    /// Explicit order; `None` while the list is in its original order.
    pub order: Option<&'a [usize]>,
    pub selected: &'a [usize],
    pub can_reorder: bool,
    pub can_reset: bool,
}

impl<'a, T> ListSnapshot<'a, T> {
    pub fn new(state: &'a ListState<T>) -> Self {
        Self {
            rows: rows(state),
            order: state.order(),
            selected: state.selected_items(),
            can_reorder: can_reorder(state),
            can_reset: can_reset(state),
        }
    }
}
