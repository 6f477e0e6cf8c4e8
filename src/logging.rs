//! Logger setup for binaries built on the engine.

use color_eyre::eyre::Result;
use env_logger::{Builder, Env};

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger.
///
/// The level is read from the `RUST_LOG` environment variable and falls back to warnings only, so
/// retry exhaustion and placement shortfalls are visible by default while per-attempt detail needs
/// `RUST_LOG=debug`.
///
/// # Errors
///
/// This function returns an error if a global logger was already installed.
pub fn init() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may lose to another test that already installed the logger.
        let _ = init();

        assert!(init().is_err(), "a second install should be refused");
    }
}
