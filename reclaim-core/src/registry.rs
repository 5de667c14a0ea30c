//! The report registry and its state machine.
//!
//! A [`Registry`] owns every report record, allocates dense ids, runs the
//! synchronous match scan, and drives the claim/handover transitions. All
//! operations are atomic: every precondition is checked before the first
//! state change, and failures leave the registry untouched.
//!
//! The registry itself is a plain object with no interior locking. Hosts
//! that serve concurrent callers wrap one instance in a single
//! mutual-exclusion domain (the server uses a read/write lock, since reads
//! vastly outnumber writes).

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{RegistryError, Result};
use crate::event::{EventSink, RegistryEvent};
use crate::report::{Report, ReportKind, ReportStatus, ReportSubmission, CONFIDENCE_SCALE};
use crate::similarity::{SimilarityScorer, MATCH_THRESHOLD};

pub struct Registry {
    /// Reports in id order; report with id `n` lives at index `n - 1`.
    reports: Vec<Report>,
    scorer: Arc<dyn SimilarityScorer>,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl Registry {
    pub fn new(scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            reports: Vec::new(),
            scorer,
            sinks: Vec::new(),
        }
    }

    /// Attach an observer. Sinks receive every subsequent emission in order.
    pub fn attach_sink(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    fn emit(&self, event: RegistryEvent) {
        for sink in &self.sinks {
            sink.publish(&event);
        }
    }

    fn index(&self, id: u64) -> Result<usize> {
        if id == 0 || id > self.reports.len() as u64 {
            return Err(RegistryError::NotFound { id });
        }
        Ok((id - 1) as usize)
    }

    /// Pure read of a single report.
    pub fn get_report(&self, id: u64) -> Result<&Report> {
        self.index(id).map(|i| &self.reports[i])
    }

    /// All reports in id order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Store a new report and emit [`RegistryEvent::ReportCreated`].
    ///
    /// Ids are dense, start at 1, and are never reused. The report enters
    /// the registry as `Open` with no counterpart.
    pub fn create_report(
        &mut self,
        reporter: impl Into<String>,
        submission: ReportSubmission,
    ) -> Result<u64> {
        if submission.confidence > CONFIDENCE_SCALE {
            return Err(RegistryError::InvalidConfidence {
                value: submission.confidence,
            });
        }

        let id = self.reports.len() as u64 + 1;
        let reporter = reporter.into();
        let kind = submission.kind;

        self.reports.push(Report {
            id,
            reporter: reporter.clone(),
            kind,
            category: submission.category,
            description: submission.description,
            media_ref: submission.media_ref,
            feature_digest: submission.feature_digest,
            confidence: submission.confidence,
            location: submission.location,
            created_at: Utc::now(),
            status: ReportStatus::Open,
            matched_with: None,
        });

        info!(id, kind = %kind, "Report created");
        self.emit(RegistryEvent::ReportCreated { id, kind, reporter });
        Ok(id)
    }

    /// Scan every other report for potential counterparts of `report_id`.
    ///
    /// Candidates must be of the opposite kind, open on both sides, in
    /// exactly the same category, and carry confidence at or above
    /// [`MATCH_THRESHOLD`]; the scorer then decides. One
    /// [`RegistryEvent::PotentialMatch`] is emitted per qualifying pair,
    /// with the lost/found ids oriented by kind. Output flows only through
    /// the event stream.
    ///
    /// This is a full O(n) pass with no pruning. The real matching logic is
    /// an external service; this scan only has to be correct, not fast.
    pub fn scan_for_matches(&self, report_id: u64) -> Result<()> {
        let subject = self.get_report(report_id)?;
        if subject.status != ReportStatus::Open {
            debug!(id = report_id, status = %subject.status, "Scan subject not open");
            return Ok(());
        }

        for candidate in &self.reports {
            if candidate.id == report_id
                || candidate.kind == subject.kind
                || candidate.status != ReportStatus::Open
                || candidate.category != subject.category
            {
                continue;
            }
            if u32::from(candidate.confidence) < MATCH_THRESHOLD
                || u32::from(subject.confidence) < MATCH_THRESHOLD
            {
                continue;
            }

            let score = self.scorer.score(
                &candidate.feature_digest,
                &subject.feature_digest,
                candidate.confidence,
                subject.confidence,
            );
            if score < MATCH_THRESHOLD {
                debug!(
                    subject = report_id,
                    candidate = candidate.id,
                    score,
                    "Below match threshold"
                );
                continue;
            }

            let (lost_id, found_id) = match subject.kind {
                ReportKind::Lost => (subject.id, candidate.id),
                ReportKind::Found => (candidate.id, subject.id),
            };

            info!(lost_id, found_id, score, "Potential match");
            self.emit(RegistryEvent::PotentialMatch {
                lost_id,
                found_id,
                score,
            });
        }

        Ok(())
    }

    /// Match a Lost/Found pair on behalf of the lost-side reporter.
    ///
    /// Sets both reports to `Matched` with symmetric `matched_with` links
    /// and emits [`RegistryEvent::ClaimInitiated`].
    pub fn initiate_claim(&mut self, lost_id: u64, found_id: u64, caller: &str) -> Result<()> {
        let lost_idx = self.index(lost_id)?;
        let found_idx = self.index(found_id)?;

        let lost = &self.reports[lost_idx];
        let found = &self.reports[found_idx];

        if lost.kind != ReportKind::Lost {
            return Err(RegistryError::WrongReportKind {
                id: lost_id,
                expected: ReportKind::Lost,
            });
        }
        if found.kind != ReportKind::Found {
            return Err(RegistryError::WrongReportKind {
                id: found_id,
                expected: ReportKind::Found,
            });
        }
        if lost.reporter != caller {
            return Err(RegistryError::Unauthorized);
        }
        if lost.status != ReportStatus::Open {
            return Err(RegistryError::AlreadyMatched { id: lost_id });
        }
        if found.status != ReportStatus::Open {
            return Err(RegistryError::AlreadyMatched { id: found_id });
        }

        self.reports[lost_idx].status = ReportStatus::Matched;
        self.reports[lost_idx].matched_with = Some(found_id);
        self.reports[found_idx].status = ReportStatus::Matched;
        self.reports[found_idx].matched_with = Some(lost_id);

        info!(lost_id, found_id, "Claim initiated");
        self.emit(RegistryEvent::ClaimInitiated {
            lost_id,
            found_id,
            claimant: caller.to_owned(),
        });
        Ok(())
    }

    /// Confirm the physical handover of a matched pair.
    ///
    /// Either side's reporter may confirm. The lost report terminates as
    /// `Claimed`, the found report as `Closed`, and
    /// [`RegistryEvent::ItemReturned`] is emitted once. A second
    /// confirmation fails `NotMatched`: terminal states stay terminal.
    pub fn confirm_handover(&mut self, lost_id: u64, found_id: u64, caller: &str) -> Result<()> {
        let lost_idx = self.index(lost_id)?;
        let found_idx = self.index(found_id)?;

        let lost = &self.reports[lost_idx];
        let found = &self.reports[found_idx];

        let matched = lost.matched_with == Some(found_id)
            && found.matched_with == Some(lost_id)
            && lost.status == ReportStatus::Matched
            && found.status == ReportStatus::Matched;
        if !matched {
            return Err(RegistryError::NotMatched { lost_id, found_id });
        }
        if caller != lost.reporter && caller != found.reporter {
            return Err(RegistryError::Unauthorized);
        }

        self.reports[lost_idx].status = ReportStatus::Claimed;
        self.reports[found_idx].status = ReportStatus::Closed;

        info!(lost_id, found_id, "Item returned");
        self.emit(RegistryEvent::ItemReturned { lost_id, found_id });
        Ok(())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("reports", &self.reports.len())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
