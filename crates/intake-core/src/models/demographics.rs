use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::collections::RowList;

use super::{null_as_default, without_null_entries};
use super::substance::{AlcoholRelatedInfo, DrugRelatedInfo, TobaccoRelatedInfo};
use super::vocab::{
    EmploymentType, HealthHistory, Income, InsuranceCompany, LivingArrangement, MedicaidStatus,
    StdTestResult, StdType, UnemploymentType,
};

/// One earlier ultrasound in this pregnancy. Both fields become mandatory
/// once the row exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct DatePlace {
    pub date: Option<Date>,
    pub place: Option<String>,
}

/// Demographics, employment, insurance, medical history, and the embedded
/// STD and substance-use answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct DemographicAndMedicalInfo {
    // Insurance
    pub have_insurance: Option<bool>,
    pub insurance_company: Option<InsuranceCompany>,
    pub have_medicaid: Option<bool>,
    pub medicaid_status: Option<MedicaidStatus>,
    pub medicaid_denial_reason: Option<String>,

    // Medical history
    #[serde(deserialize_with = "without_null_entries")]
    pub ethnicity_family_health_history: Vec<HealthHistory>,
    #[serde(rename = "HaveOBGYN")]
    pub have_obgyn: Option<bool>,
    pub doctor_care: Option<bool>,
    pub last_hospital_admission_date: Option<Date>,
    pub hospital_admission_reason: Option<String>,
    #[serde(rename = "LastERVisitDate")]
    pub last_er_visit_date: Option<Date>,
    #[serde(rename = "ERVisitReason")]
    pub er_visit_reason: Option<String>,
    pub medication: Option<bool>,
    pub medication_type: Option<String>,
    #[ts(as = "Vec<DatePlace>")]
    pub has_other_ultrasound_this_pregnancy: RowList<DatePlace>,

    // Demographics & employment
    pub living_arrangement: Option<LivingArrangement>,
    pub is_employed: Option<bool>,
    pub employment_type: Option<EmploymentType>,
    pub unemployment_type: Option<UnemploymentType>,
    pub occupation: Option<String>,
    pub number_of_household: Option<f64>,
    pub number_of_tax_return: Option<f64>,
    pub income: Option<Income>,
    pub income_source: Option<String>,
    #[serde(rename = "FOBRelationship")]
    pub fob_relationship: Option<String>,

    // STD & addiction
    pub have_std_test: Option<bool>,
    pub std_test_date: Option<Date>,
    pub std_test_result: Option<StdTestResult>,
    #[serde(deserialize_with = "without_null_entries")]
    pub std_types: Vec<StdType>,
    pub have_cramping_bleeding: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub alcohol_related_info: AlcoholRelatedInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub drug_related_info: DrugRelatedInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub tobacco_related_info: TobaccoRelatedInfo,
}
