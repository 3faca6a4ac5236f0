//! Path helpers — where Signon keeps its config and session store.

use std::path::PathBuf;

/// Get the Signon data directory (e.g. `~/.signon/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".signon")
}

/// Default path of the persistent session store (e.g. `~/.signon/store.json`).
pub fn get_store_path() -> PathBuf {
    get_data_path().join("store.json")
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") || path == "~" {
        let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(path.trim_start_matches("~/").trim_start_matches('~'))
    } else {
        PathBuf::from(path)
    }
}

/// Helper to get home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_path_ends_with_signon() {
        let path = get_data_path();
        assert!(path.ends_with(".signon"));
    }

    #[test]
    fn store_path_under_data_dir() {
        let path = get_store_path();
        assert!(path.ends_with("store.json"));
        assert!(path.parent().unwrap().ends_with(".signon"));
    }

    #[test]
    fn expand_home_tilde() {
        let expanded = expand_home("~/test/path");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.to_str().unwrap().ends_with("test/path"));
    }

    #[test]
    fn expand_home_absolute() {
        let expanded = expand_home("/absolute/path");
        assert_eq!(expanded, PathBuf::from("/absolute/path"));
    }
}
