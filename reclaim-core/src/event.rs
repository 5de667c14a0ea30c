//! Registry notification stream.
//!
//! Events are the registry's only output channel besides direct reads.
//! Every triggering operation publishes exactly once per emission, in call
//! order, to every attached sink. Observers (a matching service, a UI, a
//! reward issuer) subscribe by implementing [`EventSink`].

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::report::ReportKind;

/// Notification emitted by a registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A report entered the registry.
    ReportCreated {
        id: u64,
        kind: ReportKind,
        reporter: String,
    },
    /// The match scan put a candidate pair at or above the threshold.
    PotentialMatch {
        lost_id: u64,
        found_id: u64,
        score: u32,
    },
    /// The lost-side reporter initiated a claim over a pair.
    ClaimInitiated {
        lost_id: u64,
        found_id: u64,
        claimant: String,
    },
    /// Handover confirmed; the pair reached its terminal states.
    ItemReturned { lost_id: u64, found_id: u64 },
}

/// Observer attached to a registry instance.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &RegistryEvent);
}

/// Sink collecting published events in memory, for tests and embedders
/// that poll instead of push.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<RegistryEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in publish order.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().expect("event sink lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("event sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn publish(&self, event: &RegistryEvent) {
        self.events
            .lock()
            .expect("event sink lock poisoned")
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.publish(&RegistryEvent::ReportCreated {
            id: 1,
            kind: ReportKind::Lost,
            reporter: "alice".into(),
        });
        sink.publish(&RegistryEvent::PotentialMatch {
            lost_id: 1,
            found_id: 2,
            score: 9_100,
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RegistryEvent::ReportCreated { id: 1, .. }));
        assert!(matches!(
            events[1],
            RegistryEvent::PotentialMatch { score: 9_100, .. }
        ));
    }

    #[test]
    fn test_event_serializes_tagged() {
        let event = RegistryEvent::ItemReturned {
            lost_id: 3,
            found_id: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "item_returned");
        assert_eq!(json["lost_id"], 3);
        assert_eq!(json["found_id"], 4);
    }
}
