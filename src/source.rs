//! Suggestion sources
//!
//! The widget only emits search queries and consumes [`SuggestionBatch`]es;
//! everything between the two lives here. Fetches run on a background
//! worker so the event loop never blocks on the network.

use thiserror::Error;

use crate::config::{SourceConfig, SourceKind};

mod wikipedia;
mod word_list;
mod worker;

pub use wikipedia::{WikipediaClient, parse_opensearch};
pub use word_list::WordList;
pub use worker::{SourceEvent, SourceWorker, spawn_worker};

/// Suggestions returned for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionBatch {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Errors that can occur while fetching suggestions
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// The response body was not an opensearch array
    #[error("Parse error: {0}")]
    Parse(String),

    /// The word list could not be loaded
    #[error("Word list error: {0}")]
    WordList(String),
}

/// Anything that accepts search queries and answers asynchronously
pub trait SuggestionSource {
    fn request(&self, query: &str);
}

/// Concrete fetch strategy run by the worker
#[derive(Debug, Clone)]
pub enum Fetcher {
    Wikipedia(WikipediaClient),
    WordList(WordList),
}

impl Fetcher {
    /// Build a fetcher from configuration
    ///
    /// Fails only when the configured word list cannot be read.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        match config.kind {
            SourceKind::Wikipedia => Ok(Fetcher::Wikipedia(WikipediaClient::new(
                config.endpoint.clone(),
                config.limit,
            ))),
            SourceKind::Words => Ok(Fetcher::WordList(WordList::from_path(
                &config.words_file,
                config.limit,
            )?)),
        }
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, SourceError> {
        match self {
            Fetcher::Wikipedia(client) => client.fetch(query).await,
            Fetcher::WordList(words) => Ok(words.suggest(query)),
        }
    }
}
