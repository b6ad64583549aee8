//! Logging setup.
//!
//! Logs go to stderr so stdout only carries the rendered list.

use tracing_subscriber::EnvFilter;

/// Picks the filter directive: explicit override, then `RUST_LOG`, then config.
pub fn filter_directive(override_level: Option<&str>, configured: &str) -> String {
    if let Some(level) = override_level.map(str::trim).filter(|level| !level.is_empty()) {
        return level.to_string();
    }
    match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => env,
        _ => configured.to_string(),
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("Invalid log filter '{directive}' ({err}); using 'warn'");
        EnvFilter::new("warn")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(filter_directive(Some("debug"), "warn"), "debug");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let directive = filter_directive(Some("  "), "info");
        // Falls through to RUST_LOG when set in the test environment.
        match std::env::var("RUST_LOG") {
            Ok(env) if !env.trim().is_empty() => assert_eq!(directive, env),
            _ => assert_eq!(directive, "info"),
        }
    }
}
