//! Config command handlers.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path()?.display());
    Ok(())
}

/// Prints the effective config so the user can see which `N` each
/// `select:N` refers to.
pub fn show(config: &Config) -> Result<()> {
    let description = config.describe(&paths::config_path()?);
    let mut out = io::stdout().lock();
    out.write_all(description.as_bytes()).context("write config")?;
    out.flush().context("flush stdout")
}
