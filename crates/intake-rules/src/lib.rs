//! intake-rules
//!
//! Conditional validation for the intake questionnaire and the step gate
//! that decides whether the wizard may move on. Pure and synchronous: every
//! call re-runs the rules from scratch over the document it is given.

pub mod context;
pub mod error;
pub mod gate;
pub mod validators;
pub mod violation;

use intake_core::QuestionnaireDocument;

pub use context::ValidationContext;
pub use error::GateError;
pub use gate::{Step, Wizard};
pub use violation::{FullReport, Scope, ScopeReport, Violation};

/// Trait implemented by each rule scope.
pub trait SectionValidator: Send + Sync {
    fn scope(&self) -> Scope;

    /// Check the part of `document` this scope covers.
    fn validate(
        &self,
        document: &QuestionnaireDocument,
        ctx: &ValidationContext,
    ) -> Vec<Violation>;
}

pub struct DemographicsRules;
pub struct StdTestRules;
pub struct AlcoholRules;
pub struct TobaccoRules;
pub struct DrugRules;
pub struct GeneticsRules;
pub struct ObstetricHistoryRules;
pub struct ClosingRules;

impl SectionValidator for DemographicsRules {
    fn scope(&self) -> Scope {
        Scope::Demographics
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::demographics::validate(&document.demographic_and_medical_info, ctx)
    }
}

impl SectionValidator for StdTestRules {
    fn scope(&self) -> Scope {
        Scope::StdTest
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::std_test::validate(&document.demographic_and_medical_info, ctx)
    }
}

impl SectionValidator for AlcoholRules {
    fn scope(&self) -> Scope {
        Scope::Alcohol
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::substance::validate(
            Scope::Alcohol,
            &document.demographic_and_medical_info.alcohol_related_info,
        )
    }
}

impl SectionValidator for TobaccoRules {
    fn scope(&self) -> Scope {
        Scope::Tobacco
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::substance::validate(
            Scope::Tobacco,
            &document.demographic_and_medical_info.tobacco_related_info,
        )
    }
}

impl SectionValidator for DrugRules {
    fn scope(&self) -> Scope {
        Scope::Drugs
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::substance::validate(
            Scope::Drugs,
            &document.demographic_and_medical_info.drug_related_info,
        )
    }
}

impl SectionValidator for GeneticsRules {
    fn scope(&self) -> Scope {
        Scope::Genetics
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::genetics::validate(&document.genetics_condition)
    }
}

impl SectionValidator for ObstetricHistoryRules {
    fn scope(&self) -> Scope {
        Scope::ObstetricHistory
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::obstetric::validate(&document.pregnancies)
    }
}

impl SectionValidator for ClosingRules {
    fn scope(&self) -> Scope {
        Scope::Closing
    }

    fn validate(
        &self,
        document: &QuestionnaireDocument,
        _ctx: &ValidationContext,
    ) -> Vec<Violation> {
        validators::closing::validate(document)
    }
}

/// The rule set for one scope.
pub fn validator_for(scope: Scope) -> Box<dyn SectionValidator> {
    match scope {
        Scope::Demographics => Box::new(DemographicsRules),
        Scope::StdTest => Box::new(StdTestRules),
        Scope::Alcohol => Box::new(AlcoholRules),
        Scope::Tobacco => Box::new(TobaccoRules),
        Scope::Drugs => Box::new(DrugRules),
        Scope::Genetics => Box::new(GeneticsRules),
        Scope::ObstetricHistory => Box::new(ObstetricHistoryRules),
        Scope::Closing => Box::new(ClosingRules),
    }
}

/// Return every rule set, in [`Scope::ALL`] order.
pub fn all_validators() -> Vec<Box<dyn SectionValidator>> {
    Scope::ALL.into_iter().map(validator_for).collect()
}

/// Violations that keep the wizard on `step`, in scope order.
pub fn validate(
    step: Step,
    document: &QuestionnaireDocument,
    ctx: &ValidationContext,
) -> Vec<Violation> {
    step.scopes()
        .iter()
        .flat_map(|scope| validator_for(*scope).validate(document, ctx))
        .collect()
}

/// Whether the "Next" control is enabled on `step`.
pub fn can_advance(step: Step, document: &QuestionnaireDocument, ctx: &ValidationContext) -> bool {
    validate(step, document, ctx).is_empty()
}

/// Run every scope over the whole document. This, not the current step,
/// decides whether a document may be submitted.
pub fn full_validate(document: &QuestionnaireDocument, ctx: &ValidationContext) -> FullReport {
    FullReport {
        sections: all_validators()
            .iter()
            .map(|validator| ScopeReport {
                scope: validator.scope(),
                violations: validator.validate(document, ctx),
            })
            .collect(),
    }
}
