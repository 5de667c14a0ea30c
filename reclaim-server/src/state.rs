//! Application state module
//!
//! Defines shared state accessible across all request handlers.

use std::sync::Arc;

use reclaim_core::{Registry, SimilarityScorer};
use tokio::sync::RwLock;

use crate::event_log::EventLog;

/// Application state containing shared resources.
///
/// One registry per server instance, behind a read/write lock: mutating
/// operations take the write half, reads and the match scan share the read
/// half. The event log is attached as the registry's sink before the
/// registry is shared, so no emission is ever missed.
#[derive(Clone)]
pub struct AppState {
    /// The report registry
    pub registry: Arc<RwLock<Registry>>,
    /// Recorded notification stream
    pub events: Arc<EventLog>,
}

impl AppState {
    /// Build state around a fresh registry using the given scorer.
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        let events = Arc::new(EventLog::new());
        let mut registry = Registry::new(scorer);
        registry.attach_sink(events.clone());

        Self {
            registry: Arc::new(RwLock::new(registry)),
            events,
        }
    }
}
