use intake_core::RowList;
use intake_core::models::obstetric::PregnancyRecord;

use crate::violation::{Scope, Violation};

pub fn validate(pregnancies: &RowList<PregnancyRecord>) -> Vec<Violation> {
    let mut errors = Vec::new();

    for (index, record) in pregnancies.iter().enumerate() {
        if let (Some(systolic), Some(diastolic)) = (
            record.blood_pressure_systolic,
            record.blood_pressure_diastolic,
        ) && diastolic >= systolic
        {
            errors.push(Violation::row(
                Scope::ObstetricHistory,
                "BloodPressureDiastolic",
                index,
                format!("GsPs row {}: Diastolic must be less than systolic.", index + 1),
            ));
        }
    }

    errors
}
