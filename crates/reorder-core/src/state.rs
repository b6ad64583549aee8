//! List state.
//!
//! Holds the fixed item sequence, the current display order and the selection.
//! Values are never mutated in place; reducers in [`crate::update`] build a new
//! state from an existing one.

use std::sync::Arc;

/// State of a selectable, reorderable list.
///
/// Items are identified by their original index (position in the initial
/// sequence), which never changes for the lifetime of the list.
#[derive(Debug, PartialEq, Eq)]
pub struct ListState<T> {
    /// Backing sequence, shared between every state derived from it.
    items: Arc<[T]>,

    /// Current display order as original indices (`None` = identity order).
    order: Option<Vec<usize>>,

    /// Selected original indices, in the order they were selected.
    selected_items: Vec<usize>,
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            order: self.order.clone(),
            selected_items: self.selected_items.clone(),
        }
    }
}

impl<T> ListState<T> {
    /// Creates a new state in identity order with nothing selected.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
            order: None,
            selected_items: Vec::new(),
        }
    }

    pub(crate) fn with_parts(
        items: Arc<[T]>,
        order: Option<Vec<usize>>,
        selected_items: Vec<usize>,
    ) -> Self {
        Self {
            items,
            order,
            selected_items,
        }
    }

    pub(crate) fn shared_items(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Explicit display order, if the list has been reordered.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    pub fn selected_items(&self) -> &[usize] {
        &self.selected_items
    }

    /// Returns the effective display order.
    ///
    /// An unset (or empty) order falls back to the identity permutation.
    pub fn current_order(&self) -> Vec<usize> {
        match self.order.as_deref() {
            Some(order) if !order.is_empty() => order.to_vec(),
            _ => (0..self.items.len()).collect(),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_items.contains(&index)
    }

    /// Returns true once an explicit order has been set.
    pub fn is_reordered(&self) -> bool {
        self.order.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_identity_with_empty_selection() {
        let state = ListState::new(vec!["A", "B", "C"]);

        assert_eq!(state.len(), 3);
        assert!(!state.is_reordered());
        assert!(state.selected_items().is_empty());
        assert_eq!(state.current_order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_current_order_uses_explicit_order() {
        let state = ListState::with_parts(
            Arc::from(vec!['a', 'b', 'c']),
            Some(vec![2, 0, 1]),
            vec![],
        );

        assert_eq!(state.current_order(), vec![2, 0, 1]);
        assert_eq!(state.order(), Some(&[2, 0, 1][..]));
    }

    #[test]
    fn test_clone_shares_items() {
        let state = ListState::new(vec![String::from("x")]);
        let cloned = state.clone();

        assert!(Arc::ptr_eq(state.items(), cloned.items()));
    }

    #[test]
    fn test_empty_list() {
        let state: ListState<u8> = ListState::new(Vec::new());

        assert!(state.is_empty());
        assert!(state.current_order().is_empty());
    }
}
