use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Who is filling in the questionnaire. Collected and checked before the
/// wizard opens; never part of the document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitterIdentity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SubmitterIdentity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Every problem with this identity, in form order. Empty when usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.first_name.trim().is_empty() {
            problems.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            problems.push("Last name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            problems.push("Email is required".to_string());
        } else if !EMAIL_SHAPE.is_match(email) {
            problems.push("Please enter a valid email address".to_string());
        }
        problems
    }

    /// The same identity with surrounding whitespace removed. This is the
    /// form the checks in [`problems`](Self::problems) judge, so it is the
    /// form to store.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
        )
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidIdentity { problems })
        }
    }
}
