//! Apply command handler.
//!
//! Builds a list, feeds each action through the reducer in order (each result
//! replacing the held state) and prints the final list.

use std::io::{self, Write};

use anyhow::{Context, Result};
use reorder_core::{ListEvent, ListSnapshot, ListState, can_reorder, can_reset, rows, update};
use tracing::info;

pub fn run(items: Vec<String>, actions: &[ListEvent], json: bool) -> Result<()> {
    let state = apply_all(ListState::new(items), actions);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &ListSnapshot::new(&state))
            .context("write list snapshot")?;
        writeln!(out).context("write list snapshot")?;
    } else {
        render(&state, &mut out).context("write list")?;
    }
    out.flush().context("flush stdout")
}

/// Applies `actions` one at a time, threading the state through.
pub fn apply_all<T>(initial: ListState<T>, actions: &[ListEvent]) -> ListState<T> {
    actions.iter().fold(initial, |state, &action| {
        info!(?action, "applying action");
        update(&state, action)
    })
}

/// Renders one checkbox row per item in display order, then the control line.
pub fn render(state: &ListState<String>, out: &mut impl Write) -> io::Result<()> {
    for row in rows(state) {
        let mark = if row.selected { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}", row.value)?;
    }
    writeln!(
        out,
        "move up/down: {}, reset: {}",
        on_off(can_reorder(state)),
        on_off(can_reset(state))
    )
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
