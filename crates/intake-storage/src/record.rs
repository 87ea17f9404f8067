use std::fmt;

use intake_core::{QuestionnaireDocument, SubmitterIdentity};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::StorageError;

/// A submission as the record store keeps it.
///
/// Names and email are optional because older rows were written before the
/// identity step existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredRecord {
    pub id: u64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub data: QuestionnaireDocument,
}

/// What the submit boundary hands to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub identity: SubmitterIdentity,
    pub data: QuestionnaireDocument,
}

impl NewRecord {
    pub fn new(identity: SubmitterIdentity, data: QuestionnaireDocument) -> Self {
        Self { identity, data }
    }

    /// Attach the server-assigned fields.
    pub fn into_stored(self, id: u64, created_at: Timestamp) -> StoredRecord {
        let SubmitterIdentity {
            first_name,
            last_name,
            email,
        } = self.identity;
        StoredRecord {
            id,
            created_at,
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email),
            data: self.data,
        }
    }
}

/// Filter for [`RecordStore::list`](crate::RecordStore::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Case-insensitive substring over id, names, email, and the document
    /// JSON. Empty matches everything.
    pub text: Option<String>,
    /// Inclusive on both ends.
    pub created_between: Option<(Timestamp, Timestamp)>,
}

impl RecordQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Restrict to a creation window. Half-open input (only one end picked)
    /// leaves the window unset.
    pub fn between(mut self, from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        self.created_between = from.zip(to);
        self
    }

    pub fn matches(&self, record: &StoredRecord) -> Result<bool, StorageError> {
        if let Some((from, to)) = self.created_between
            && (record.created_at < from || record.created_at > to)
        {
            return Ok(false);
        }

        let Some(needle) = self.text.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(true);
        };
        let needle = needle.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        let fields = [&record.first_name, &record.last_name, &record.email];
        if contains(record.id.to_string().as_str())
            || fields.into_iter().flatten().any(|field| contains(field.as_str()))
        {
            return Ok(true);
        }
        let data = serde_json::to_string(&record.data)?;
        Ok(contains(data.as_str()))
    }
}

/// The one-line digest the records list shows under each name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSummary {
    pub is_employed: Option<bool>,
    pub have_insurance: Option<bool>,
    pub ultrasounds: usize,
    pub pregnancies: usize,
}

impl RecordSummary {
    pub fn of(document: &QuestionnaireDocument) -> Self {
        let dm = &document.demographic_and_medical_info;
        Self {
            is_employed: dm.is_employed,
            have_insurance: dm.have_insurance,
            ultrasounds: dm.has_other_ultrasound_this_pregnancy.len(),
            pregnancies: document.pregnancies.len(),
        }
    }
}

impl fmt::Display for RecordSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employment = match self.is_employed {
            Some(true) => "Employed",
            Some(false) => "Unemployed",
            None => "Not specified",
        };
        let insurance = match self.have_insurance {
            Some(true) => "Has Insurance",
            Some(false) => "No Insurance",
            None => "Not specified",
        };
        write!(
            f,
            "{employment} • {insurance} • {} ultrasounds • {} Gs&Ps",
            self.ultrasounds, self.pregnancies
        )
    }
}
