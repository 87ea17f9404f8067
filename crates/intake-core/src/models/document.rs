use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::collections::RowList;
use crate::error::CoreError;

use super::demographics::DemographicAndMedicalInfo;
use super::genetics::GeneticsCondition;
use super::null_as_default;
use super::obstetric::PregnancyRecord;

/// One complete questionnaire submission.
///
/// Has no identity of its own; the record store assigns one on insert.
/// During a session it is replaced wholesale on every edit, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct QuestionnaireDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub demographic_and_medical_info: DemographicAndMedicalInfo,
    #[ts(type = "Record<string, string | null>")]
    pub genetics_condition: GeneticsCondition,
    #[serde(rename = "GsPs")]
    #[ts(as = "Vec<PregnancyRecord>")]
    pub pregnancies: RowList<PregnancyRecord>,
    pub has_child_with_other_birth_defects: Option<bool>,
    pub other_information: Option<String>,
}

impl QuestionnaireDocument {
    /// The start-of-wizard document: every answer unset, every list empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
