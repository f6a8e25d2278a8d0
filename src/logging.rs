//! Log initialisation
//!
//! The terminal belongs to the UI, so log lines only ever go to the file
//! named in the `[log]` config section. `RUST_LOG` overrides the level.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::LogConfig;
use crate::error::AutosuggestError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

fn open_log_file(path: &Path) -> Result<File, AutosuggestError> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global logger
///
/// Returns `Ok(false)` when no log file is configured or a logger is
/// already installed.
pub fn init(config: &LogConfig) -> Result<bool, AutosuggestError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let installed = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .is_ok();

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_file_means_no_logger() {
        assert!(!init(&LogConfig::default()).unwrap());
    }

    #[test]
    fn test_unopenable_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let config = LogConfig {
            level: "debug".to_string(),
            file: Some(dir.path().join("missing").join("autosuggest.log")),
        };
        assert!(matches!(init(&config), Err(AutosuggestError::Io(_))));
    }

    #[test]
    fn test_open_log_file_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("autosuggest.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
