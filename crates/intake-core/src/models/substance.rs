//! Alcohol, tobacco, and drug use. The three sub-documents share one shape
//! but keep their historical per-substance field names on the wire.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::collections::{KeyedRow, RowId, RowList};

use super::vocab::{AlcoholType, DrugType, Frequency, TobaccoType};

/// Read access shared by the three substance sub-documents.
pub trait SubstanceUse {
    /// Wire name of the yes/no use flag, e.g. `UseAlcohol`.
    const USE_FIELD: &'static str;
    /// Wire name of the frequency row collection, e.g. `AlcoholFrequency`.
    const FREQUENCY_FIELD: &'static str;
    /// Wire name of the total-years figure, e.g. `AlcoholTotalYears`.
    const TOTAL_YEARS_FIELD: &'static str;

    fn uses(&self) -> Option<bool>;
    fn frequency_rows(&self) -> usize;
    fn total_years(&self) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct AlcoholFrequency {
    pub id: RowId,
    #[serde(default)]
    pub alcohol_type: Option<AlcoholType>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl KeyedRow for AlcoholFrequency {
    fn with_id(id: RowId) -> Self {
        Self {
            id,
            alcohol_type: None,
            frequency: None,
        }
    }

    fn id(&self) -> &RowId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct TobaccoFrequency {
    pub id: RowId,
    #[serde(default)]
    pub tobacco_type: Option<TobaccoType>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl KeyedRow for TobaccoFrequency {
    fn with_id(id: RowId) -> Self {
        Self {
            id,
            tobacco_type: None,
            frequency: None,
        }
    }

    fn id(&self) -> &RowId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct DrugFrequency {
    pub id: RowId,
    #[serde(default)]
    pub drug_type: Option<DrugType>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl KeyedRow for DrugFrequency {
    fn with_id(id: RowId) -> Self {
        Self {
            id,
            drug_type: None,
            frequency: None,
        }
    }

    fn id(&self) -> &RowId {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct AlcoholRelatedInfo {
    pub use_alcohol: Option<bool>,
    #[ts(as = "Vec<AlcoholFrequency>")]
    pub alcohol_frequency: RowList<AlcoholFrequency>,
    pub alcohol_quit_date: Option<Date>,
    pub alcohol_total_years: Option<f64>,
}

impl SubstanceUse for AlcoholRelatedInfo {
    const USE_FIELD: &'static str = "UseAlcohol";
    const FREQUENCY_FIELD: &'static str = "AlcoholFrequency";
    const TOTAL_YEARS_FIELD: &'static str = "AlcoholTotalYears";

    fn uses(&self) -> Option<bool> {
        self.use_alcohol
    }

    fn frequency_rows(&self) -> usize {
        self.alcohol_frequency.len()
    }

    fn total_years(&self) -> Option<f64> {
        self.alcohol_total_years
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct TobaccoRelatedInfo {
    pub use_tobacco: Option<bool>,
    #[ts(as = "Vec<TobaccoFrequency>")]
    pub tobacco_frequency: RowList<TobaccoFrequency>,
    pub tobacco_quit_date: Option<Date>,
    pub tobacco_total_years: Option<f64>,
}

impl SubstanceUse for TobaccoRelatedInfo {
    const USE_FIELD: &'static str = "UseTobacco";
    const FREQUENCY_FIELD: &'static str = "TobaccoFrequency";
    const TOTAL_YEARS_FIELD: &'static str = "TobaccoTotalYears";

    fn uses(&self) -> Option<bool> {
        self.use_tobacco
    }

    fn frequency_rows(&self) -> usize {
        self.tobacco_frequency.len()
    }

    fn total_years(&self) -> Option<f64> {
        self.tobacco_total_years
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase", default)]
#[ts(export)]
pub struct DrugRelatedInfo {
    pub use_drugs: Option<bool>,
    #[ts(as = "Vec<DrugFrequency>")]
    pub drug_frequency: RowList<DrugFrequency>,
    pub drugs_quit_date: Option<Date>,
    pub drugs_total_years: Option<f64>,
}

impl SubstanceUse for DrugRelatedInfo {
    const USE_FIELD: &'static str = "UseDrugs";
    const FREQUENCY_FIELD: &'static str = "DrugFrequency";
    const TOTAL_YEARS_FIELD: &'static str = "DrugsTotalYears";

    fn uses(&self) -> Option<bool> {
        self.use_drugs
    }

    fn frequency_rows(&self) -> usize {
        self.drug_frequency.len()
    }

    fn total_years(&self) -> Option<f64> {
        self.drugs_total_years
    }
}
