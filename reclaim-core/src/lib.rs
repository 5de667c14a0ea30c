//! Reclaim Core - lost-and-found report registry
//!
//! This crate implements the registry at the heart of the Reclaim service:
//! lost/found item reports carrying externally computed feature digests and
//! confidence scores, a deliberately naive synchronous match scan, and the
//! claim/handover state machine that walks a matched pair to its terminal
//! states.
//!
//! # Design
//!
//! - Reports are append-only: dense ids from 1, immutable fields, and a
//!   status that only ever moves forward (Open → Matched → Claimed/Closed)
//! - Matching is a pluggable seam: the registry depends only on the
//!   [`SimilarityScorer`] contract, and the shipped [`DigestMixScorer`] is
//!   an explicit placeholder for an off-process embedding service
//! - All output besides direct reads flows through the [`EventSink`]
//!   notification stream, exactly once per emission
//! - Every operation is atomic: preconditions are checked before the first
//!   state change, and failures leave the registry untouched
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use reclaim_core::{
//!     FeatureDigest, FixedScorer, MemorySink, Registry, RegistryEvent, ReportKind,
//!     ReportSubmission,
//! };
//!
//! # fn main() -> reclaim_core::Result<()> {
//! let sink = Arc::new(MemorySink::new());
//! let mut registry = Registry::new(Arc::new(FixedScorer(9_100)));
//! registry.attach_sink(sink.clone());
//!
//! let lost = registry.create_report(
//!     "alice",
//!     ReportSubmission {
//!         kind: ReportKind::Lost,
//!         category: "backpack".into(),
//!         description: "black backpack, laptop inside".into(),
//!         media_ref: "bafybeigdyrzt5example".into(),
//!         feature_digest: FeatureDigest([0x11; 32]),
//!         confidence: 9_000,
//!         location: "central station".into(),
//!     },
//! )?;
//!
//! let found = registry.create_report(
//!     "bob",
//!     ReportSubmission {
//!         kind: ReportKind::Found,
//!         category: "backpack".into(),
//!         description: "backpack left on platform 3".into(),
//!         media_ref: "bafybeihdwdcexample".into(),
//!         feature_digest: FeatureDigest([0x22; 32]),
//!         confidence: 9_200,
//!         location: "platform 3".into(),
//!     },
//! )?;
//!
//! registry.scan_for_matches(found)?;
//! assert!(sink
//!     .events()
//!     .iter()
//!     .any(|e| matches!(e, RegistryEvent::PotentialMatch { .. })));
//!
//! registry.initiate_claim(lost, found, "alice")?;
//! registry.confirm_handover(lost, found, "bob")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod event;
pub mod registry;
pub mod report;
pub mod similarity;

// Re-export main types for convenience
pub use error::{RegistryError, Result};
pub use event::{EventSink, MemorySink, RegistryEvent};
pub use registry::Registry;
pub use report::{
    DigestParseError, FeatureDigest, Report, ReportKind, ReportStatus, ReportSubmission,
    CONFIDENCE_SCALE,
};
pub use similarity::{DigestMixScorer, FixedScorer, SimilarityScorer, MATCH_THRESHOLD};
