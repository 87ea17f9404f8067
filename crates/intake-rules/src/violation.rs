use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A named group of rules. Each wizard step gates on one or more scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scope {
    /// Demographics, employment, insurance, and medical history.
    Demographics,
    StdTest,
    Alcohol,
    Tobacco,
    Drugs,
    Genetics,
    /// Previous pregnancies ("Gs & Ps").
    ObstetricHistory,
    /// Birth-defect flag and free-text notes on the review screen.
    Closing,
}

impl Scope {
    /// Every scope in full-validation order.
    pub const ALL: [Scope; 8] = [
        Self::Demographics,
        Self::StdTest,
        Self::Alcohol,
        Self::Tobacco,
        Self::Drugs,
        Self::Genetics,
        Self::ObstetricHistory,
        Self::Closing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Demographics",
            Self::StdTest => "STD Test",
            Self::Alcohol => "Alcohol",
            Self::Tobacco => "Tobacco",
            Self::Drugs => "Drugs",
            Self::Genetics => "Genetics",
            Self::ObstetricHistory => "Gs & Ps",
            Self::Closing => "Closing",
        }
    }
}

/// A single rule failure, tied to a field and, for collection rows, a
/// 1-based row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct Violation {
    pub scope: Scope,
    /// Stored name of the offending field.
    pub field: String,
    pub row: Option<usize>,
    pub message: String,
}

impl Violation {
    pub fn field(scope: Scope, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope,
            field: field.into(),
            row: None,
            message: message.into(),
        }
    }

    /// `index` is the 0-based position; the stored row number is 1-based.
    pub fn row(
        scope: Scope,
        field: impl Into<String>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scope,
            field: field.into(),
            row: Some(index + 1),
            message: message.into(),
        }
    }
}

/// The violations of one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScopeReport {
    pub scope: Scope,
    pub violations: Vec<Violation>,
}

/// Every scope's violations, in [`Scope::ALL`] order. Scopes with no
/// violations are still listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FullReport {
    pub sections: Vec<ScopeReport>,
}

impl FullReport {
    pub fn is_clean(&self) -> bool {
        self.sections.iter().all(|s| s.violations.is_empty())
    }

    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.violations.len()).sum()
    }

    pub fn for_scope(&self, scope: Scope) -> &[Violation] {
        self.sections
            .iter()
            .find(|s| s.scope == scope)
            .map(|s| s.violations.as_slice())
            .unwrap_or_default()
    }

    /// Scopes that still have violations, with their counts.
    pub fn dirty_scopes(&self) -> Vec<(Scope, usize)> {
        self.sections
            .iter()
            .filter(|s| !s.violations.is_empty())
            .map(|s| (s.scope, s.violations.len()))
            .collect()
    }

    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.sections.iter().flat_map(|s| s.violations.iter())
    }
}
