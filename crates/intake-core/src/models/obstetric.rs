use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One previous pregnancy ("Gs & Ps" row). Addressed by position only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct PregnancyRecord {
    pub year: Option<i32>,
    pub weeks_of_delivery: Option<f64>,
    pub baby_weight: Option<f64>,
    pub complications: Option<String>,
    pub blood_pressure_systolic: Option<f64>,
    pub blood_pressure_diastolic: Option<f64>,
}
