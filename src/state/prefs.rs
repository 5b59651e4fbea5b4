/// Persisted user preferences
///
/// The theme choice is the only value that survives a relaunch. It lives
/// in a small JSON document in the user's data directory:
/// - Linux: ~/.local/share/cantilever/preferences.json
/// - macOS: ~/Library/Application Support/cantilever/preferences.json
/// - Windows: %APPDATA%\cantilever\preferences.json
///
/// Reads and writes degrade gracefully: a missing, unreadable, or corrupt
/// file resolves to the defaults and never surfaces to the user.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::view::ThemeChoice;

/// Errors from the preference store
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not determine a user data directory")]
    NoDataDir,
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The on-disk preference document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Persisted theme choice; `None` means the user never toggled
    pub theme: Option<ThemeChoice>,
}

/// Path of the preference file in the user's data directory
pub fn default_path() -> Result<PathBuf, PrefsError> {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .ok_or(PrefsError::NoDataDir)?;

    path.push("cantilever");
    path.push("preferences.json");
    Ok(path)
}

/// Read preferences from a specific file
pub fn load_from(path: &Path) -> Result<Preferences, PrefsError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write preferences to a specific file, creating parent directories
pub fn save_to(path: &Path, prefs: &Preferences) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    Ok(())
}

/// Resolve the stored theme choice once at startup.
///
/// Any failure (no data dir, missing file, bad JSON) resolves to `None`,
/// which the caller treats as the default theme.
pub async fn load_theme() -> Option<ThemeChoice> {
    tokio::task::spawn_blocking(|| {
        let path = default_path().ok()?;
        match load_from(&path) {
            Ok(prefs) => prefs.theme,
            Err(PrefsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                eprintln!("⚠️  Ignoring unreadable preference file: {err}");
                None
            }
        }
    })
    .await
    .ok()
    .flatten()
}

/// Persist a new theme choice after a toggle.
pub async fn store_theme(choice: ThemeChoice) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        let path = default_path().map_err(|e| e.to_string())?;

        // Keep any other stored fields intact if the format grows
        let mut prefs = load_from(&path).unwrap_or_default();
        prefs.theme = Some(choice);

        save_to(&path, &prefs).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            theme: Some(ThemeChoice::Dark),
        };
        save_to(&path, &prefs).unwrap();

        let restored = load_from(&path).unwrap();
        assert_eq!(restored, prefs);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        match load_from(&path) {
            Err(PrefsError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(load_from(&path), Err(PrefsError::Parse(_))));
    }

    #[test]
    fn test_empty_document_has_no_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{}").unwrap();

        let prefs = load_from(&path).unwrap();
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let prefs = Preferences {
            theme: Some(ThemeChoice::Light),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"theme":"light"}"#);
    }
}
