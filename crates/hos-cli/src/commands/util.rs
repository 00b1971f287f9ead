//! Shared utilities for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hos_core::Trip;

use crate::Config;

/// Picks the trip file from the command line, falling back to the config.
pub fn resolve_trip_path(file: Option<&Path>, config: &Config) -> Result<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| config.trip_path.clone())
        .context("no trip file given and no trip_path configured")
}

/// Reads and decodes a trip document.
pub fn load_trip(path: &Path) -> Result<Trip> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let trip = Trip::from_json(&input)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), sheets = trip.logsheets.len(), "loaded trip");
    Ok(trip)
}

/// Resolves and loads the trip for a sheet command.
pub fn open_trip(file: Option<&Path>, config: &Config) -> Result<Trip> {
    let path = resolve_trip_path(file, config)?;
    load_trip(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_path_wins() {
        let config = Config {
            trip_path: Some(PathBuf::from("/configured.json")),
            ..Config::default()
        };
        let path = resolve_trip_path(Some(Path::new("/given.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("/given.json"));
    }

    #[test]
    fn falls_back_to_configured_path() {
        let config = Config {
            trip_path: Some(PathBuf::from("/configured.json")),
            ..Config::default()
        };
        let path = resolve_trip_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/configured.json"));
    }

    #[test]
    fn errors_without_any_path() {
        let err = resolve_trip_path(None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("no trip file"));
    }

    #[test]
    fn load_trip_reports_path_on_failure() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.json");
        let err = load_trip(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));

        let bad = temp.path().join("bad.json");
        std::fs::write(&bad, "{").unwrap();
        let err = load_trip(&bad).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
