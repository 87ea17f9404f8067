use intake_core::models::demographics::DemographicAndMedicalInfo;
use intake_core::models::vocab::MedicaidStatus;

use crate::context::ValidationContext;
use crate::violation::{Scope, Violation};

use super::{MAX_MEDICATION_TYPE_CHARS, MAX_ULTRASOUND_PLACE_CHARS, exceeds, is_blank};

const SCOPE: Scope = Scope::Demographics;
const ULTRASOUND_DATE: &str = "HasOtherUltrasoundThisPregnancy.Date";
const ULTRASOUND_PLACE: &str = "HasOtherUltrasoundThisPregnancy.Place";

pub fn validate(info: &DemographicAndMedicalInfo, ctx: &ValidationContext) -> Vec<Violation> {
    let mut errors = Vec::new();

    // Insurance / Medicaid
    if info.have_insurance == Some(true) && info.insurance_company.is_none() {
        errors.push(Violation::field(
            SCOPE,
            "InsuranceCompany",
            "InsuranceCompany is required when HaveInsurance = Yes.",
        ));
    }
    if info.have_medicaid == Some(true) {
        if info.medicaid_status.is_none() {
            errors.push(Violation::field(
                SCOPE,
                "MedicaidStatus",
                "MedicaidStatus is required when HaveMedicaid = Yes.",
            ));
        }
        if info.medicaid_status == Some(MedicaidStatus::Denied)
            && is_blank(&info.medicaid_denial_reason)
        {
            errors.push(Violation::field(
                SCOPE,
                "MedicaidDenialReason",
                "MedicaidDenialReason is required when MedicaidStatus = Denied.",
            ));
        }
    }

    // Hospital and ER visits
    if let Some(date) = info.last_hospital_admission_date {
        if ctx.is_future(date) {
            errors.push(Violation::field(
                SCOPE,
                "LastHospitalAdmissionDate",
                "LastHospitalAdmissionDate cannot be in the future.",
            ));
        }
        if is_blank(&info.hospital_admission_reason) {
            errors.push(Violation::field(
                SCOPE,
                "HospitalAdmissionReason",
                "HospitalAdmissionReason is required when LastHospitalAdmissionDate is set.",
            ));
        }
    }
    if let Some(date) = info.last_er_visit_date {
        if ctx.is_future(date) {
            errors.push(Violation::field(
                SCOPE,
                "LastERVisitDate",
                "LastERVisitDate cannot be in the future.",
            ));
        }
        if is_blank(&info.er_visit_reason) {
            errors.push(Violation::field(
                SCOPE,
                "ERVisitReason",
                "ERVisitReason is required when LastERVisitDate is set.",
            ));
        }
    }

    // Medication
    if info.medication == Some(true)
        && (is_blank(&info.medication_type)
            || exceeds(&info.medication_type, MAX_MEDICATION_TYPE_CHARS))
    {
        errors.push(Violation::field(
            SCOPE,
            "MedicationType",
            format!("MedicationType required (≤ {MAX_MEDICATION_TYPE_CHARS} chars) when Medication = Yes."),
        ));
    }

    // Ultrasounds
    for (index, row) in info.has_other_ultrasound_this_pregnancy.iter().enumerate() {
        let n = index + 1;
        if row.date.is_none_or(|date| ctx.is_future(date)) {
            errors.push(Violation::row(
                SCOPE,
                ULTRASOUND_DATE,
                index,
                format!("Ultrasound row {n}: Date required and cannot be future."),
            ));
        }
        if is_blank(&row.place) || exceeds(&row.place, MAX_ULTRASOUND_PLACE_CHARS) {
            errors.push(Violation::row(
                SCOPE,
                ULTRASOUND_PLACE,
                index,
                format!("Ultrasound row {n}: Place required (≤ {MAX_ULTRASOUND_PLACE_CHARS} chars)."),
            ));
        }
    }

    // Employment. Unanswered is a legitimate in-progress state.
    match info.is_employed {
        Some(true) => {
            if info.employment_type.is_none() {
                errors.push(Violation::field(
                    SCOPE,
                    "EmploymentType",
                    "EmploymentType is required when IsEmployed = Yes.",
                ));
            }
            if is_blank(&info.occupation) {
                errors.push(Violation::field(
                    SCOPE,
                    "Occupation",
                    "Occupation is required when IsEmployed = Yes.",
                ));
            }
        }
        Some(false) => {
            if info.unemployment_type.is_none() {
                errors.push(Violation::field(
                    SCOPE,
                    "UnemploymentType",
                    "UnemploymentType is required when IsEmployed = No.",
                ));
            }
        }
        None => {}
    }

    errors
}
