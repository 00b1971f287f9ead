//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Output format for commands that print sheets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Trip document used when no file is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_path: Option<PathBuf>,

    /// Default output format.
    pub output: OutputFormat,

    /// Print the remarks line under the grid.
    pub remarks: bool,

    /// Glyph for an active quarter-hour.
    pub filled: char,

    /// Glyph for an inactive quarter-hour.
    pub empty: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trip_path: None,
            output: OutputFormat::Text,
            remarks: true,
            filled: '#',
            empty: '.',
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (HOS_*)
        figment = figment.merge(Env::prefixed("HOS_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for hos.
///
/// On Linux: `~/.config/hos`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hos"))
}
