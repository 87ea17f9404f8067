use intake_core::models::genetics::GeneticsCondition;

use crate::violation::{Scope, Violation};

const SCOPE: Scope = Scope::Genetics;

/// Every condition needs a yes/no answer; a yes also needs the relation.
pub fn validate(genetics: &GeneticsCondition) -> Vec<Violation> {
    let mut errors = Vec::new();

    for (condition, answer) in genetics.iter() {
        match answer.flag {
            None => errors.push(Violation::field(
                SCOPE,
                condition.flag_key(),
                format!("{} is required. Please select Yes or No.", condition.label()),
            )),
            Some(true) if answer.relation.is_none() => errors.push(Violation::field(
                SCOPE,
                condition.relation_key(),
                format!("{} relation is required when Yes is selected.", condition.label()),
            )),
            Some(_) => {}
        }
    }

    errors
}
