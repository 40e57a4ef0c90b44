//! Panel configuration from config.toml
//!
//! The config file is optional; a missing or unparseable file always
//! falls back to defaults with a warning in the log.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const PANEL_DIR: &str = "proxy-panel";

/// Top-level panel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    pub connection: ConnectionConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Path to the runtime control socket
    pub socket: PathBuf,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            socket: default_socket_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Replacement translation catalog (WebExtension messages.json format).
    /// When unset, the embedded English catalog is used.
    pub locale_file: Option<PathBuf>,
}

/// Default location of the runtime control socket
pub fn default_socket_path() -> PathBuf {
    let base = dirs::runtime_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    base.join(PANEL_DIR).join("runtime.sock")
}

/// Default location of the panel config file
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(PANEL_DIR).join(CONFIG_FILENAME)
}

/// Load the panel configuration
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> PanelConfig {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return PanelConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded panel config from {:?}", config_path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                PanelConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            PanelConfig::default()
        }
    }
}
