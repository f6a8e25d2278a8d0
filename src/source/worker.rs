//! Suggestion worker thread
//!
//! Receives queries over a channel and fetches each one as its own task on
//! a single-threaded tokio runtime. There is no cap on in-flight fetches and
//! no cancellation: a stale answer is still delivered, and the widget
//! decides whether it is wanted.

use std::sync::mpsc::{self, Receiver, Sender};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::{Fetcher, SuggestionBatch, SuggestionSource};

/// Messages sent back to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    Batch(SuggestionBatch),
    Failed { query: String, message: String },
}

/// Handle used by the event loop to submit queries
#[derive(Debug, Clone)]
pub struct SourceWorker {
    request_tx: UnboundedSender<String>,
}

impl SuggestionSource for SourceWorker {
    fn request(&self, query: &str) {
        if self.request_tx.send(query.to_string()).is_err() {
            log::warn!("suggestion worker gone, dropping query {:?}", query);
        }
    }
}

/// Spawn the worker thread
///
/// Returns the request handle and the channel answers arrive on. The thread
/// exits once every `SourceWorker` handle is dropped.
pub fn spawn_worker(fetcher: Fetcher) -> (SourceWorker, Receiver<SourceEvent>) {
    let (request_tx, request_rx) = unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(fetcher, request_rx, event_tx);
    });

    (SourceWorker { request_tx }, event_rx)
}

/// Main worker loop - processes queries until the channel is closed
fn worker_loop(
    fetcher: Fetcher,
    mut request_rx: UnboundedReceiver<String>,
    event_tx: Sender<SourceEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to start suggestion runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(query) = request_rx.recv().await {
            log::debug!("fetching suggestions for {:?}", query);
            let fetcher = fetcher.clone();
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let event = fetch_event(&fetcher, query).await;
                // Event loop disconnected; nothing left to notify
                let _ = event_tx.send(event);
            });
        }
    });

    log::debug!("suggestion worker thread shutting down");
}

async fn fetch_event(fetcher: &Fetcher, query: String) -> SourceEvent {
    match fetcher.fetch(&query).await {
        Ok(suggestions) => SourceEvent::Batch(SuggestionBatch { query, suggestions }),
        Err(e) => {
            log::warn!("suggestion fetch for {:?} failed: {}", query, e);
            SourceEvent::Failed {
                query,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
