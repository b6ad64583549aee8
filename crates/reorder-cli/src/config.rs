//! Configuration.
//!
//! Read from ${REORDER_HOME}/config.toml. A missing file means defaults; every
//! field is optional.

use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items the list starts with when none are given on the command line.
    pub items: Vec<String>,

    /// Log filter directive (`tracing_subscriber::EnvFilter` syntax).
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_LOG_LEVEL: &'static str = "warn";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when it is absent.
    ///
    /// A config with an empty `items` list is rejected: there would be nothing
    /// to select.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config from {}", path.display()));
            }
        };

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        if config.items.is_empty() {
            anyhow::bail!("Config at {} has an empty `items` list", path.display());
        }
        Ok(config)
    }

    /// Describes the effective configuration, numbering items by the original
    /// index that `select:N` / `deselect:N` refer to.
    pub fn describe(&self, path: &Path) -> String {
        let mut out = format!(
            "config: {}\nlog_level: {}\nitems:\n",
            path.display(),
            self.log_level
        );
        let width = self.items.len().saturating_sub(1).to_string().len();
        for (index, item) in self.items.iter().enumerate() {
            out.push_str(&format!("  {index:>width$}: {item}\n"));
        }
        out
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: default_items(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// The five sample rows shown when nothing else is configured.
pub fn default_items() -> Vec<String> {
    ["A", "B", "C", "D", "E"]
        .iter()
        .map(|letter| format!("list item {letter}"))
        .collect()
}

pub mod paths {
    //! REORDER_HOME resolution order:
    //! 1. REORDER_HOME environment variable (if set)
    //! 2. ~/.config/reorder

    use std::path::PathBuf;

    use anyhow::{Context, Result};

    pub fn reorder_home() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os("REORDER_HOME") {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("reorder"))
            .context("Could not determine home directory")
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(reorder_home()?.join("config.toml"))
    }
}
