//! Runtime settings
//!
//! Optionally read from `settings.json` in the working directory. Every field
//! has a default, so a partial file is fine and a missing file is the norm.
//! The game never writes this file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PongError, Result};
use crate::sim::GameMode;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the per-run timing report is appended
    pub log_path: PathBuf,
    /// Right-hand player name in one-player matches
    pub ai_name: String,
    /// Right-hand player name in two-player matches
    pub second_player_name: String,
    /// Boxes checked when the main menu opens
    pub menu_defaults: GameMode,
    /// Sleep out the rest of each frame when the presenter returns early
    pub frame_limiter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("log.txt"),
            ai_name: "AI".to_string(),
            second_player_name: "Player2".to_string(),
            menu_defaults: GameMode::default(),
            frame_limiter: true,
        }
    }
}

impl Settings {
    /// Default file name, relative to the working directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Parse settings from JSON text
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| PongError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn read(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load settings from the working directory, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Settings loaded (log: {})", settings.log_path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
