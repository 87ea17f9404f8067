use tracing::{info, warn};

/// Structured record of one submission attempt.
///
/// Only ids and outcomes are logged. Names, email, and answers stay out of
/// the log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub outcome: SubmissionOutcome,
    pub revision: u64,
    pub record_id: Option<u64>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Stored,
    InvalidIdentity,
    NotReady,
    StoreFailed,
}

impl SubmissionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::InvalidIdentity => "invalid_identity",
            Self::NotReady => "not_ready",
            Self::StoreFailed => "store_failed",
        }
    }
}

impl SubmissionEvent {
    pub fn stored(revision: u64, record_id: u64) -> Self {
        Self {
            outcome: SubmissionOutcome::Stored,
            revision,
            record_id: Some(record_id),
            reason: None,
        }
    }

    pub fn rejected(outcome: SubmissionOutcome, revision: u64, reason: impl Into<String>) -> Self {
        Self {
            outcome,
            revision,
            record_id: None,
            reason: Some(reason.into()),
        }
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        match self.outcome {
            SubmissionOutcome::Stored => info!(
                audit.action = "submit",
                audit.outcome = self.outcome.as_str(),
                audit.revision = self.revision,
                audit.record_id = self.record_id,
                "submission stored"
            ),
            _ => warn!(
                audit.action = "submit",
                audit.outcome = self.outcome.as_str(),
                audit.revision = self.revision,
                audit.reason = self.reason.as_deref(),
                "submission rejected"
            ),
        }
    }
}
