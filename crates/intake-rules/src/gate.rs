//! The six-step wizard and its gate.
//!
//! Steps run in a fixed line: Demographics → Medical → STD/Addiction →
//! Genetics → Gs & Ps → Review. Moving forward requires the current step's
//! scopes to be clean; moving back never does. Demographics and Medical
//! gate on the same scope.

use std::fmt;
use std::str::FromStr;

use intake_core::{CoreError, QuestionnaireDocument};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::context::ValidationContext;
use crate::error::GateError;
use crate::violation::{FullReport, Scope, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Step {
    #[serde(rename = "demographics")]
    Demographics,
    #[serde(rename = "medical")]
    Medical,
    #[serde(rename = "std_add")]
    StdAddiction,
    #[serde(rename = "genetics")]
    Genetics,
    #[serde(rename = "gsps")]
    ObstetricHistory,
    #[serde(rename = "review")]
    Review,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Self::Demographics,
        Self::Medical,
        Self::StdAddiction,
        Self::Genetics,
        Self::ObstetricHistory,
        Self::Review,
    ];

    pub fn first() -> Self {
        Self::Demographics
    }

    /// Position in the wizard, starting at 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Stable key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Demographics => "demographics",
            Self::Medical => "medical",
            Self::StdAddiction => "std_add",
            Self::Genetics => "genetics",
            Self::ObstetricHistory => "gsps",
            Self::Review => "review",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Demographics => "Demographics",
            Self::Medical => "Medical & Insurance",
            Self::StdAddiction => "STD & Addictives",
            Self::Genetics => "Genetics",
            Self::ObstetricHistory => "Gs & Ps",
            Self::Review => "Review",
        }
    }

    /// The scopes that must be clean before leaving this step.
    pub fn scopes(self) -> &'static [Scope] {
        match self {
            Self::Demographics | Self::Medical => &[Scope::Demographics],
            Self::StdAddiction => &[Scope::StdTest, Scope::Alcohol, Scope::Tobacco, Scope::Drugs],
            Self::Genetics => &[Scope::Genetics],
            Self::ObstetricHistory => &[Scope::ObstetricHistory],
            Self::Review => &[Scope::Closing],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.key() == s)
            .ok_or_else(|| {
                let keys: Vec<_> = Self::ALL.iter().map(|step| step.key()).collect();
                format!("unknown step {s:?} (expected one of: {})", keys.join(", "))
            })
    }
}

/// One questionnaire session: the current document revision and the step
/// the user is on.
///
/// Every edit replaces the whole document and bumps the revision; nothing
/// is cached between calls, so the gate always judges the latest revision.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    document: QuestionnaireDocument,
    revision: u64,
    context: ValidationContext,
}

impl Wizard {
    /// A fresh session on the first step with an empty document.
    pub fn new(context: ValidationContext) -> Self {
        Self::with_document(QuestionnaireDocument::empty(), context)
    }

    /// A session on the first step over an existing document.
    pub fn with_document(document: QuestionnaireDocument, context: ValidationContext) -> Self {
        Self {
            step: Step::first(),
            document,
            revision: 0,
            context,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn document(&self) -> &QuestionnaireDocument {
        &self.document
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Move "today" forward, e.g. for a session left open past midnight.
    pub fn set_context(&mut self, context: ValidationContext) {
        self.context = context;
    }

    /// Publish a new revision. Returns its number.
    pub fn replace_document(&mut self, document: QuestionnaireDocument) -> u64 {
        self.document = document;
        self.revision += 1;
        debug!(revision = self.revision, step = %self.step, "document replaced");
        self.revision
    }

    /// Build the next revision from the current one.
    pub fn update(
        &mut self,
        edit: impl FnOnce(&QuestionnaireDocument) -> QuestionnaireDocument,
    ) -> u64 {
        let next = edit(&self.document);
        self.replace_document(next)
    }

    /// Like [`Wizard::update`] for edits that can fail (row edits by
    /// position or id). On failure the current revision is kept.
    pub fn try_update(
        &mut self,
        edit: impl FnOnce(&QuestionnaireDocument) -> Result<QuestionnaireDocument, CoreError>,
    ) -> Result<u64, CoreError> {
        let next = edit(&self.document)?;
        Ok(self.replace_document(next))
    }

    /// What currently keeps the wizard on its step.
    pub fn violations(&self) -> Vec<Violation> {
        crate::validate(self.step, &self.document, &self.context)
    }

    pub fn can_advance(&self) -> bool {
        self.violations().is_empty()
    }

    /// Move to the next step if the current one is clean. On failure the
    /// wizard stays put and the error carries every violation.
    pub fn advance(&mut self) -> Result<Step, GateError> {
        let next = self.step.next().ok_or(GateError::NoNextStep(self.step))?;

        let violations = self.violations();
        if !violations.is_empty() {
            debug!(step = %self.step, count = violations.len(), "advance blocked");
            return Err(GateError::Blocked {
                step: self.step,
                violations,
            });
        }

        info!(from = %self.step, to = %next, revision = self.revision, "step advanced");
        self.step = next;
        Ok(next)
    }

    /// Step back one step. Never validates.
    pub fn retreat(&mut self) -> Result<Step, GateError> {
        let previous = self
            .step
            .previous()
            .ok_or(GateError::AtFirstStep(self.step))?;
        info!(from = %self.step, to = %previous, "step retreated");
        self.step = previous;
        Ok(previous)
    }

    /// Jump back to any earlier step without validating.
    pub fn jump_back(&mut self, to: Step) -> Result<Step, GateError> {
        if to >= self.step {
            return Err(GateError::NotBehind {
                from: self.step,
                to,
            });
        }
        info!(from = %self.step, to = %to, "step jumped back");
        self.step = to;
        Ok(to)
    }

    /// Advance as far as the gate allows. Returns the step reached; stops at
    /// the first blocked step or at Review.
    pub fn advance_while_clean(&mut self) -> Step {
        while self.step.next().is_some() && self.advance().is_ok() {}
        self.step
    }

    /// Every scope over the whole document, regardless of the current step.
    pub fn full_report(&self) -> FullReport {
        crate::full_validate(&self.document, &self.context)
    }

    /// The document to hand to the record store, if submission is allowed:
    /// the wizard must be on Review and the *whole* document must be clean,
    /// so edits made to earlier sections after passing them are caught.
    pub fn ready_for_submit(&self) -> Result<&QuestionnaireDocument, GateError> {
        if self.step != Step::Review {
            return Err(GateError::NotAtReview(self.step));
        }
        let report = self.full_report();
        if !report.is_clean() {
            debug!(count = report.total(), "submission blocked by full validation");
            return Err(GateError::Incomplete(report));
        }
        Ok(&self.document)
    }
}
