//! Selectable ordered list engine.
//!
//! Keeps a fixed item sequence, a display order over it and a selection, and
//! moves the selected items up or down as one block. Every operation takes a
//! [`ListState`] by reference and returns a new one.

pub mod events;
pub mod state;
pub mod update;
pub mod view;

pub use events::{Direction, ListEvent, ParseEventError};
pub use state::ListState;
pub use update::{reorder, reset, toggle_selection, update};
pub use view::{ListSnapshot, Row, can_reorder, can_reset, rows};
