//! Configuration loading
//!
//! Reads `~/.config/autosuggest/config.toml`. A missing file means defaults;
//! an unreadable or malformed one is an error.

pub mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{Config, LogConfig, SearchConfig, SelectionConfig, SourceConfig, SourceKind};

use crate::error::AutosuggestError;

const CONFIG_DIR: &str = "autosuggest";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> Result<Config, AutosuggestError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AutosuggestError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(AutosuggestError::Io(e)),
    };

    parse_config(&contents).map_err(|message| AutosuggestError::Config {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
