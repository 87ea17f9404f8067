use intake_core::models::substance::SubstanceUse;

use crate::violation::{Scope, Violation};

/// Same rules for alcohol, tobacco, and drugs; only the field names differ.
pub fn validate<S: SubstanceUse>(scope: Scope, info: &S) -> Vec<Violation> {
    let mut errors = Vec::new();
    let use_field = S::USE_FIELD;

    match info.uses() {
        None => errors.push(Violation::field(
            scope,
            use_field,
            format!("{use_field} is required."),
        )),
        Some(true) => {
            if info.frequency_rows() == 0 {
                errors.push(Violation::field(
                    scope,
                    S::FREQUENCY_FIELD,
                    format!("{} required when {use_field} = Yes.", S::FREQUENCY_FIELD),
                ));
            }
            if info.total_years().is_none() {
                errors.push(Violation::field(
                    scope,
                    S::TOTAL_YEARS_FIELD,
                    format!("{} required when {use_field} = Yes.", S::TOTAL_YEARS_FIELD),
                ));
            }
        }
        Some(false) => {}
    }

    errors
}
