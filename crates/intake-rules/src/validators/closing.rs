use intake_core::QuestionnaireDocument;

use crate::violation::{Scope, Violation};

use super::{MAX_OTHER_INFORMATION_CHARS, exceeds};

pub fn validate(document: &QuestionnaireDocument) -> Vec<Violation> {
    let mut errors = Vec::new();

    if exceeds(&document.other_information, MAX_OTHER_INFORMATION_CHARS) {
        errors.push(Violation::field(
            Scope::Closing,
            "OtherInformation",
            format!("OtherInformation must be at most {MAX_OTHER_INFORMATION_CHARS} characters."),
        ));
    }

    errors
}
