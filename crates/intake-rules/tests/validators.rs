use intake_core::models::demographics::DatePlace;
use intake_core::models::genetics::{GeneticCondition, GeneticsCondition};
use intake_core::models::obstetric::PregnancyRecord;
use intake_core::models::vocab::{
    EmploymentType, FamilyRelation, Frequency, InsuranceCompany, MedicaidStatus, StdTestResult,
    StdType, TobaccoType,
};
use intake_core::{QuestionnaireDocument, RowList, SequentialIds};
use intake_rules::{Scope, Step, ValidationContext, Violation, can_advance, full_validate, validate};
use jiff::civil::date;

fn ctx() -> ValidationContext {
    ValidationContext::on(date(2025, 6, 15))
}

fn messages(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.message.as_str()).collect()
}

/// A document every scope accepts.
fn clean_document() -> QuestionnaireDocument {
    let mut doc = QuestionnaireDocument::empty();
    let dm = &mut doc.demographic_and_medical_info;
    dm.have_cramping_bleeding = Some(false);
    dm.alcohol_related_info.use_alcohol = Some(false);
    dm.tobacco_related_info.use_tobacco = Some(false);
    dm.drug_related_info.use_drugs = Some(false);
    doc.genetics_condition = GeneticCondition::ALL
        .into_iter()
        .fold(GeneticsCondition::default(), |g, c| g.with_flag(c, Some(false)));
    doc
}

#[test]
fn clean_document_passes_every_scope() {
    let report = full_validate(&clean_document(), &ctx());
    assert!(report.is_clean(), "{:?}", report.dirty_scopes());
    assert_eq!(report.sections.len(), Scope::ALL.len());
}

#[test]
fn validation_is_repeatable() {
    let mut doc = QuestionnaireDocument::empty();
    doc.demographic_and_medical_info.have_insurance = Some(true);
    doc.demographic_and_medical_info.medication = Some(true);

    for step in Step::ALL {
        assert_eq!(validate(step, &doc, &ctx()), validate(step, &doc, &ctx()));
    }
    assert_eq!(full_validate(&doc, &ctx()), full_validate(&doc, &ctx()));
}

#[test]
fn can_advance_agrees_with_validate() {
    let docs = [QuestionnaireDocument::empty(), clean_document()];
    for doc in &docs {
        for step in Step::ALL {
            assert_eq!(
                can_advance(step, doc, &ctx()),
                validate(step, doc, &ctx()).is_empty(),
                "{step}"
            );
        }
    }
}

#[test]
fn insurance_company_required_only_when_insured() {
    let mut doc = clean_document();
    let dm = &mut doc.demographic_and_medical_info;

    for (have, company, expect_error) in [
        (None, None, false),
        (Some(false), None, false),
        (Some(true), None, true),
        (Some(true), Some(InsuranceCompany::Cigna), false),
    ] {
        dm.have_insurance = have;
        dm.insurance_company = company;
        let errors = intake_rules::validators::demographics::validate(dm, &ctx());
        let flagged = errors.iter().any(|v| v.field == "InsuranceCompany");
        assert_eq!(flagged, expect_error, "{have:?} / {company:?}");
    }
}

#[test]
fn filling_insurance_company_removes_only_its_violation() {
    let mut doc = clean_document();
    let dm = &mut doc.demographic_and_medical_info;
    dm.have_insurance = Some(true);
    dm.have_medicaid = Some(true);
    dm.medication = Some(true);
    dm.is_employed = Some(true);
    dm.last_er_visit_date = Some(date(2025, 1, 2));

    let before = validate(Step::Medical, &doc, &ctx());
    assert_eq!(before[0].field, "InsuranceCompany");
    assert!(before.len() > 1);

    doc.demographic_and_medical_info.insurance_company = Some(InsuranceCompany::BlueCross);
    let after = validate(Step::Medical, &doc, &ctx());
    assert_eq!(after, before[1..]);
}

#[test]
fn denied_medicaid_with_null_reason() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.have_medicaid = Some(true);
    doc.demographic_and_medical_info.medicaid_status = Some(MedicaidStatus::Denied);
    doc.demographic_and_medical_info.medicaid_denial_reason = None;

    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["MedicaidDenialReason is required when MedicaidStatus = Denied."]
    );
    assert!(errors.iter().all(|v| v.field != "MedicaidStatus"));
}

#[test]
fn denied_medicaid_needs_reason_only() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.have_medicaid = Some(true);
    doc.demographic_and_medical_info.medicaid_status = Some(MedicaidStatus::Denied);
    doc.demographic_and_medical_info.medicaid_denial_reason = Some(String::new());

    let errors = validate(Step::Demographics, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["MedicaidDenialReason is required when MedicaidStatus = Denied."]
    );
}

#[test]
fn medicaid_status_required_when_enrolled() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.have_medicaid = Some(true);

    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["MedicaidStatus is required when HaveMedicaid = Yes."]
    );
}

#[test]
fn only_the_incomplete_ultrasound_row_is_reported() {
    let visit = |place: Option<&str>| DatePlace {
        date: Some(date(2025, 3, 1)),
        place: place.map(str::to_string),
    };
    let mut doc = clean_document();
    doc.demographic_and_medical_info.has_other_ultrasound_this_pregnancy =
        RowList::from(vec![visit(Some("Clinic A")), visit(None), visit(Some("Clinic C"))]);

    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row, Some(2));
    assert_eq!(errors[0].field, "HasOtherUltrasoundThisPregnancy.Place");
    assert_eq!(
        errors[0].message,
        "Ultrasound row 2: Place required (≤ 500 chars)."
    );
}

#[test]
fn future_ultrasound_date_is_rejected() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.has_other_ultrasound_this_pregnancy =
        RowList::from(vec![DatePlace {
            date: Some(date(2025, 6, 16)),
            place: Some("Clinic".into()),
        }]);

    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["Ultrasound row 1: Date required and cannot be future."]
    );

    // Today itself is fine.
    let today = ValidationContext::on(date(2025, 6, 16));
    assert!(validate(Step::Medical, &doc, &today).is_empty());
}

#[test]
fn hospital_and_er_dates_need_reasons() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.last_hospital_admission_date = Some(date(2026, 1, 1));
    doc.demographic_and_medical_info.last_er_visit_date = Some(date(2024, 1, 1));

    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        [
            "LastHospitalAdmissionDate cannot be in the future.",
            "HospitalAdmissionReason is required when LastHospitalAdmissionDate is set.",
            "ERVisitReason is required when LastERVisitDate is set.",
        ]
    );
}

#[test]
fn medication_type_length_is_bounded() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.medication = Some(true);
    doc.demographic_and_medical_info.medication_type = Some("é".repeat(500));
    assert!(validate(Step::Medical, &doc, &ctx()).is_empty());

    doc.demographic_and_medical_info.medication_type = Some("é".repeat(501));
    let errors = validate(Step::Medical, &doc, &ctx());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "MedicationType");
}

#[test]
fn unanswered_employment_is_not_an_error() {
    let doc = clean_document();
    assert!(doc.demographic_and_medical_info.is_employed.is_none());
    assert!(validate(Step::Demographics, &doc, &ctx()).is_empty());
}

#[test]
fn employment_branches() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.is_employed = Some(true);
    doc.demographic_and_medical_info.employment_type = Some(EmploymentType::PartTime);
    assert_eq!(
        messages(&validate(Step::Demographics, &doc, &ctx())),
        ["Occupation is required when IsEmployed = Yes."]
    );

    doc.demographic_and_medical_info.is_employed = Some(false);
    assert_eq!(
        messages(&validate(Step::Demographics, &doc, &ctx())),
        ["UnemploymentType is required when IsEmployed = No."]
    );
}

#[test]
fn std_test_rules() {
    let mut doc = clean_document();
    let dm = &mut doc.demographic_and_medical_info;
    dm.have_std_test = Some(true);
    dm.std_test_result = Some(StdTestResult::Positive);
    dm.have_cramping_bleeding = None;

    let errors = intake_rules::validators::std_test::validate(dm, &ctx());
    assert_eq!(
        messages(&errors),
        [
            "StdTestDate is required when HaveStdTest = Yes.",
            "StdTypes required when StdTestResult = Positive.",
            "HaveCrampingBleeding is required.",
        ]
    );

    dm.std_test_date = Some(date(2025, 1, 10));
    dm.std_types = vec![StdType::Hpv];
    dm.have_cramping_bleeding = Some(true);
    assert!(intake_rules::validators::std_test::validate(dm, &ctx()).is_empty());
}

#[test]
fn substance_rules_use_per_substance_names() {
    let mut doc = clean_document();
    let dm = &mut doc.demographic_and_medical_info;
    dm.alcohol_related_info.use_alcohol = None;
    dm.drug_related_info.use_drugs = Some(true);

    let errors = validate(Step::StdAddiction, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        [
            "UseAlcohol is required.",
            "DrugFrequency required when UseDrugs = Yes.",
            "DrugsTotalYears required when UseDrugs = Yes.",
        ]
    );
    assert_eq!(errors[0].scope, Scope::Alcohol);
    assert_eq!(errors[1].scope, Scope::Drugs);
}

#[test]
fn tobacco_with_rows_and_years_passes() {
    let mut ids = SequentialIds::default();
    let mut doc = clean_document();
    let tobacco = &mut doc.demographic_and_medical_info.tobacco_related_info;
    tobacco.use_tobacco = Some(true);
    tobacco.tobacco_total_years = Some(0.5);
    tobacco.tobacco_frequency = tobacco.tobacco_frequency.appended_keyed(&mut ids);
    assert!(validate(Step::StdAddiction, &doc, &ctx()).is_empty());

    // The row's own fields are not checked, only that one exists.
    let rows = &doc.demographic_and_medical_info.tobacco_related_info.tobacco_frequency;
    let mut filled = rows.get(0).unwrap().clone();
    assert!(filled.tobacco_type.is_none());
    filled.tobacco_type = Some(TobaccoType::Vaping);
    filled.frequency = Some(Frequency::Daily);
    let rows = rows.replaced_by_id(filled).unwrap();
    doc.demographic_and_medical_info.tobacco_related_info.tobacco_frequency = rows;
    assert!(validate(Step::StdAddiction, &doc, &ctx()).is_empty());
}

#[test]
fn every_unanswered_condition_is_reported_in_order() {
    let mut doc = clean_document();
    doc.genetics_condition = GeneticsCondition::default();

    let errors = validate(Step::Genetics, &doc, &ctx());
    assert_eq!(errors.len(), GeneticCondition::COUNT);
    for (violation, condition) in errors.iter().zip(GeneticCondition::ALL) {
        assert_eq!(violation.field, condition.flag_key());
    }
    assert_eq!(
        errors[3].message,
        "Down Syndrome is required. Please select Yes or No."
    );
}

#[test]
fn yes_needs_a_relation() {
    let mut doc = clean_document();
    doc.genetics_condition = doc
        .genetics_condition
        .with_flag(GeneticCondition::CysticFibrosis, Some(true));

    let errors = validate(Step::Genetics, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["Cystic Fibrosis relation is required when Yes is selected."]
    );
    assert_eq!(errors[0].field, "CysticFibrosisRelation");

    doc.genetics_condition = doc
        .genetics_condition
        .with_relation(GeneticCondition::CysticFibrosis, Some(FamilyRelation::Siblings));
    assert!(validate(Step::Genetics, &doc, &ctx()).is_empty());
}

#[test]
fn diastolic_must_be_below_systolic() {
    let pressure = |systolic, diastolic| PregnancyRecord {
        blood_pressure_systolic: Some(systolic),
        blood_pressure_diastolic: Some(diastolic),
        ..PregnancyRecord::default()
    };

    let mut doc = clean_document();
    doc.pregnancies = RowList::from(vec![pressure(120.0, 80.0)]);
    assert!(validate(Step::ObstetricHistory, &doc, &ctx()).is_empty());

    doc.pregnancies = RowList::from(vec![pressure(120.0, 80.0), pressure(80.0, 90.0)]);
    let errors = validate(Step::ObstetricHistory, &doc, &ctx());
    assert_eq!(
        messages(&errors),
        ["GsPs row 2: Diastolic must be less than systolic."]
    );
    assert_eq!(errors[0].row, Some(2));

    // Equal readings are rejected too; a missing reading is not checked.
    doc.pregnancies = RowList::from(vec![
        pressure(90.0, 90.0),
        PregnancyRecord {
            blood_pressure_diastolic: Some(200.0),
            ..PregnancyRecord::default()
        },
    ]);
    assert_eq!(validate(Step::ObstetricHistory, &doc, &ctx()).len(), 1);
}

#[test]
fn other_information_is_bounded() {
    let mut doc = clean_document();
    doc.other_information = Some("x".repeat(1000));
    assert!(validate(Step::Review, &doc, &ctx()).is_empty());

    doc.other_information = Some("x".repeat(1001));
    assert_eq!(
        messages(&validate(Step::Review, &doc, &ctx())),
        ["OtherInformation must be at most 1000 characters."]
    );
}

#[test]
fn full_report_groups_by_scope() {
    let mut doc = clean_document();
    doc.demographic_and_medical_info.have_insurance = Some(true);
    doc.demographic_and_medical_info.tobacco_related_info.use_tobacco = None;

    let report = full_validate(&doc, &ctx());
    assert_eq!(report.total(), 2);
    assert_eq!(
        report.dirty_scopes(),
        [(Scope::Demographics, 1), (Scope::Tobacco, 1)]
    );
    assert_eq!(report.for_scope(Scope::Tobacco)[0].field, "UseTobacco");
    assert!(report.for_scope(Scope::Genetics).is_empty());
}
