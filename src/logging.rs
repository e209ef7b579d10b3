//! Log setup
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is requested.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "MAFIA_ROLES_LOG";

const DEFAULT_FILTER: &str = "info";

/// Build the filter from `MAFIA_ROLES_LOG`, falling back to `info`
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a file subscriber when `path` is given; otherwise events are dropped
pub fn init(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_path_errors() {
        let result = init(Some(Path::new("/nonexistent-dir/mafia-roles.log")));
        assert!(result.is_err());
    }
}
