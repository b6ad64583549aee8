//! List reducer (update function).
//!
//! All state transitions happen here. The host calls `update(&state, event)`
//! and replaces its held state with the returned value.
//!
//! Reducers never mutate their input. Unmet preconditions and malformed input
//! return a state equal to the input rather than failing.

use tracing::{debug, warn};

use crate::events::{Direction, ListEvent};
use crate::state::ListState;

/// The main reducer function.
///
/// Dispatches the event to the reducer for its variant.
pub fn update<T>(state: &ListState<T>, event: ListEvent) -> ListState<T> {
    match event {
        ListEvent::Reorder { direction } => reorder(state, direction),
        ListEvent::Reset => reset(state),
        ListEvent::ToggleSelection { index, selected } => toggle_selection(state, index, selected),
    }
}

/// Moves the selected items, as one contiguous block, one step in `direction`.
///
/// Selected items that are scattered through the list are collapsed into a
/// block anchored next to the selection edge nearest the direction of travel.
/// At either boundary the move produces no visible change.
pub fn reorder<T>(state: &ListState<T>, direction: Direction) -> ListState<T> {
    let selected = state.selected_items();
    if selected.is_empty() {
        debug!(%direction, "reorder skipped: nothing selected");
        return state.clone();
    }

    let current_order = state.current_order();
    let mask = selection_mask(selected, state.len());
    let is_selected = |index: usize| mask.get(index).copied().unwrap_or(false);

    let ref_index = reference_index(&current_order, &is_selected, direction);
    let swap_index = insertion_index(ref_index, selected.len(), current_order.len(), direction);

    let (mut new_order, selected_order): (Vec<usize>, Vec<usize>) = current_order
        .into_iter()
        .partition(|&index| !is_selected(index));

    // A block past the end of the unselected slice is appended.
    let at = swap_index.min(new_order.len());
    new_order.splice(at..at, selected_order);

    debug!(
        %direction,
        ref_index,
        swap_index,
        order = ?new_order,
        "reordered selection"
    );

    ListState::with_parts(state.shared_items(), Some(new_order), selected.to_vec())
}

/// Restores identity order and clears the selection, keeping the items.
pub fn reset<T>(state: &ListState<T>) -> ListState<T> {
    debug!("reset list order and selection");
    ListState::with_parts(state.shared_items(), None, Vec::new())
}

/// Adds `index` to the selection when `selected` is true, removes it otherwise.
///
/// Already being in the requested state is a no-op. Indices outside the item
/// range are ignored.
pub fn toggle_selection<T>(state: &ListState<T>, index: usize, selected: bool) -> ListState<T> {
    if index >= state.len() {
        warn!(index, len = state.len(), "ignoring selection toggle for unknown item");
        return state.clone();
    }

    let mut selected_items = state.selected_items().to_vec();
    let position = selected_items.iter().position(|&item| item == index);

    match (selected, position) {
        (true, None) => selected_items.push(index),
        (false, Some(position)) => {
            selected_items.remove(position);
        }
        _ => return state.clone(),
    }

    debug!(index, selected, selection = ?selected_items, "toggled selection");

    ListState::with_parts(
        state.shared_items(),
        state.order().map(<[usize]>::to_vec),
        selected_items,
    )
}

/// Membership table indexed by original index.
fn selection_mask(selected: &[usize], len: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &index in selected {
        if let Some(slot) = mask.get_mut(index) {
            *slot = true;
        }
    }
    mask
}

/// Position in `order` that anchors the move.
///
/// Up: the smallest position holding a selected index (`order.len()` if none).
/// Down: the largest (-1 if none). Selected indices missing from `order` do
/// not contribute.
fn reference_index(
    order: &[usize],
    is_selected: &impl Fn(usize) -> bool,
    direction: Direction,
) -> isize {
    let mut positions = order
        .iter()
        .enumerate()
        .filter(|&(_, &index)| is_selected(index))
        .map(|(position, _)| position as isize);

    match direction {
        Direction::Up => positions.next().unwrap_or(order.len() as isize),
        Direction::Down => positions.last().unwrap_or(-1),
    }
}

/// Where the selected block is spliced into the unselected order, clamped to
/// `[0, len - 1]`.
fn insertion_index(
    ref_index: isize,
    selected_count: usize,
    len: usize,
    direction: Direction,
) -> usize {
    let raw = match direction {
        Direction::Up => ref_index - 1,
        Direction::Down => ref_index + 1 - (selected_count as isize - 1),
    };
    let max = len.saturating_sub(1) as isize;
    raw.clamp(0, max) as usize
}
