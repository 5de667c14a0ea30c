//! Append-only in-memory log of registry emissions.
//!
//! The log is the server-side subscriber to the registry's notification
//! stream: every emission is recorded with a sequence number so external
//! observers (a matching service, a UI, a reward issuer) can poll with a
//! cursor instead of holding a connection open.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use reclaim_core::{EventSink, RegistryEvent};
use serde::Serialize;
use utoipa::ToSchema;

/// One recorded emission from the registry notification stream.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoredEvent {
    /// Position in the stream, from 1. Strictly increasing, never reused.
    pub seq: u64,
    /// When the server recorded the emission
    #[schema(value_type = String, example = "2026-08-06T10:00:00Z")]
    pub recorded_at: DateTime<Utc>,
    /// The event payload, tagged by `type`
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub event: RegistryEvent,
}

/// In-memory event log with cursor-based reads.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: RwLock<Vec<StoredEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events with sequence numbers strictly greater than `after`, oldest
    /// first, up to `limit`.
    pub fn after(&self, after: u64, limit: usize) -> Vec<StoredEvent> {
        let entries = self.entries.read().expect("event log lock poisoned");
        entries
            .iter()
            .skip(after as usize)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("event log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventLog {
    fn publish(&self, event: &RegistryEvent) {
        let mut entries = self.entries.write().expect("event log lock poisoned");
        let seq = entries.len() as u64 + 1;
        entries.push(StoredEvent {
            seq,
            recorded_at: Utc::now(),
            event: event.clone(),
        });
    }
}
