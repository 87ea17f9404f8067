//! Closed answer vocabularies. Each variant serialises as its stored key.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LivingArrangement {
    Alone,
    WithParents,
    WithSpouse,
    BoyfriendFiance,
    Homeless,
    Other,
}

impl LivingArrangement {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alone => "Alone",
            Self::WithParents => "With Parents",
            Self::WithSpouse => "With Spouse",
            Self::BoyfriendFiance => "Boyfriend/Fiancé",
            Self::Homeless => "Homeless",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EmploymentType {
    Employed,
    PartTime,
    SelfEmployed,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Employed => "Employed Full-time",
            Self::PartTime => "Employed Part-time (20 hours or less per week)",
            Self::SelfEmployed => "Self Employed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum UnemploymentType {
    UnemployedLooking,
    UnemployedNotLooking,
    Student,
    Homemaker,
}

impl UnemploymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::UnemployedLooking => "Unemployed - Looking",
            Self::UnemployedNotLooking => "Unemployed - Not looking",
            Self::Student => "Student",
            Self::Homemaker => "Homemaker",
        }
    }
}

/// Household income bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Income {
    Less18000,
    #[serde(rename = "Between18000_36000")]
    Between18000And36000,
    #[serde(rename = "Between36000_72000")]
    Between36000And72000,
    Above72000,
}

impl Income {
    pub fn label(self) -> &'static str {
        match self {
            Self::Less18000 => "$18,000 or Less",
            Self::Between18000And36000 => "$18,001–$36,000",
            Self::Between36000And72000 => "$36,001–$72,000",
            Self::Above72000 => "$72,001+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InsuranceCompany {
    Aetna,
    BlueCross,
    Cigna,
    United,
    Other,
}

impl InsuranceCompany {
    pub fn label(self) -> &'static str {
        match self {
            Self::Aetna => "Aetna",
            Self::BlueCross => "Blue Cross/Blue Shield",
            Self::Cigna => "Cigna",
            Self::United => "United Healthcare",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MedicaidStatus {
    Approved,
    Denied,
    Pending,
    NotApplied,
}

impl MedicaidStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Denied => "Denied",
            Self::Pending => "Pending",
            Self::NotApplied => "Not Applied",
        }
    }
}

/// Condition tag in the family health history multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HealthHistory {
    Diabetes,
    Hypertension,
    Thyroid,
    Asthma,
    Other,
}

impl HealthHistory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::Thyroid => "Thyroid",
            Self::Asthma => "Asthma",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StdTestResult {
    Negative,
    Positive,
    Unknown,
}

impl StdTestResult {
    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Positive => "Positive",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StdType {
    Chlamydia,
    Gonorrhea,
    Syphilis,
    #[serde(rename = "HPV")]
    Hpv,
    #[serde(rename = "HIV")]
    Hiv,
    Herpes,
}

impl StdType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Chlamydia => "Chlamydia",
            Self::Gonorrhea => "Gonorrhea",
            Self::Syphilis => "Syphilis",
            Self::Hpv => "HPV",
            Self::Hiv => "HIV",
            Self::Herpes => "Herpes",
        }
    }
}

/// How often a substance is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Frequency {
    Rarely,
    Weekends,
    Weekly,
    Daily,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rarely => "Rarely",
            Self::Weekends => "Weekends",
            Self::Weekly => "Weekly",
            Self::Daily => "Daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AlcoholType {
    Beer,
    Wine,
    Spirits,
}

impl AlcoholType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Wine => "Wine",
            Self::Spirits => "Spirits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TobaccoType {
    Cigarettes,
    Hookah,
    Cigars,
    Vaping,
}

impl TobaccoType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cigarettes => "Cigarettes",
            Self::Hookah => "Hookah",
            Self::Cigars => "Cigars",
            Self::Vaping => "Vaping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DrugType {
    Marijuana,
    Cocaine,
    Heroin,
    Methamphetamine,
    Prescription,
}

impl DrugType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Marijuana => "Marijuana",
            Self::Cocaine => "Cocaine",
            Self::Heroin => "Heroin",
            Self::Methamphetamine => "Methamphetamine",
            Self::Prescription => "Prescription (non-medical)",
        }
    }
}

/// Which relative carries an inherited condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FamilyRelation {
    GrandParents,
    Parents,
    Siblings,
    Kids,
    ExtendedFamily,
}

impl FamilyRelation {
    pub const ALL: [FamilyRelation; 5] = [
        Self::GrandParents,
        Self::Parents,
        Self::Siblings,
        Self::Kids,
        Self::ExtendedFamily,
    ];

    /// Stored key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::GrandParents => "GrandParents",
            Self::Parents => "Parents",
            Self::Siblings => "Siblings",
            Self::Kids => "Kids",
            Self::ExtendedFamily => "ExtendedFamily",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GrandParents => "Grand Parents",
            Self::Parents => "Parents",
            Self::Siblings => "Siblings",
            Self::Kids => "Kids",
            Self::ExtendedFamily => "Extended Family",
        }
    }
}
