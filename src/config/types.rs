// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::intent::{IntentConfig, SEARCH_DEBOUNCE_MS, SELECT_DEBOUNCE_MS};

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_WORDS_FILE: &str = "/usr/share/dict/words";
pub const DEFAULT_LIMIT: usize = 10;

/// Search debounce section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

/// Commit debounce section
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_select_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            debounce_ms: SELECT_DEBOUNCE_MS,
        }
    }
}

fn default_select_debounce_ms() -> u64 {
    SELECT_DEBOUNCE_MS
}

/// Where suggestions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Wikipedia,
    Words,
}

/// Suggestion source section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_words_file")]
    pub words_file: PathBuf,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::Wikipedia,
            endpoint: default_endpoint(),
            words_file: default_words_file(),
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_words_file() -> PathBuf {
    PathBuf::from(DEFAULT_WORDS_FILE)
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Logging section; no file means no logging
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Debounce periods for the intent extractor
    pub fn intent_config(&self) -> IntentConfig {
        IntentConfig {
            search_debounce_ms: self.search.debounce_ms,
            select_debounce_ms: self.selection.debounce_ms,
        }
    }
}
