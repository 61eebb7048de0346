//! Application configuration.

use crate::consts::cli_consts::layout::DEFAULT_MOBILE_BREAKPOINT;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Display preferences read at startup. UI state is never written back here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Start with the sidebar collapsed to icons.
    pub sidebar_collapsed: bool,
    /// Terminal width (columns) at or below which the mobile layout is used.
    pub mobile_breakpoint: u16,
    /// Paint the dark background behind the dashboard.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            with_background_color: true,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns [`DashboardError::Io`] if reading fails and
    /// [`DashboardError::Config`] if the JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        serde_json::from_slice(&buf).map_err(|source| DashboardError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file if it exists, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, DashboardError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default config location: `~/.bondemala/config.json`.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home_path = home::home_dir().ok_or(DashboardError::NoHomeDir)?;
    Ok(home_path.join(".bondemala").join("config.json"))
}
