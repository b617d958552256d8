//! Data directory configuration.
//!
//! The three stores live together in one data directory:
//!
//! ```text
//! ~/.circulation/
//! ├── books.txt
//! ├── patrons.txt
//! └── transactions.txt
//! ```
//!
//! # Environment Variables
//!
//! - `CIRCULATION_DATA_DIR`: Override the data directory

use std::path::PathBuf;

/// Environment variable for a custom data directory.
pub const DATA_DIR_ENV: &str = "CIRCULATION_DATA_DIR";

/// Default data directory name under home.
const DEFAULT_DATA_DIR: &str = ".circulation";

/// Get the data directory.
///
/// The data directory is determined by:
/// 1. `CIRCULATION_DATA_DIR` environment variable if set
/// 2. `~/.circulation` if home directory is available
/// 3. `.circulation` in current directory as fallback
pub fn data_dir() -> PathBuf {
    resolve_data_dir(std::env::var(DATA_DIR_ENV).ok().as_deref())
}

/// Resolves an explicit data directory, falling back to the default.
///
/// A leading `~` is expanded to the home directory.
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(path) => PathBuf::from(shellexpand::tilde(path).into_owned()),
        None => dirs::home_dir()
            .map(|h| h.join(DEFAULT_DATA_DIR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_is_used() {
        assert_eq!(
            resolve_data_dir(Some("/var/lib/circulation")),
            PathBuf::from("/var/lib/circulation")
        );
    }

    #[test]
    fn test_blank_dir_falls_back_to_default() {
        let dir = resolve_data_dir(Some("  "));
        assert!(dir.ends_with(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_default_dir_name() {
        assert!(resolve_data_dir(None).ends_with(".circulation"));
    }

    #[test]
    fn test_tilde_is_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_data_dir(Some("~/library")), home.join("library"));
        }
    }
}
