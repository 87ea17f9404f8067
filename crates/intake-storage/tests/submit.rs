use intake_core::models::genetics::{GeneticCondition, GeneticsCondition};
use intake_core::{QuestionnaireDocument, SubmitterIdentity};
use intake_rules::{GateError, Step, ValidationContext, Wizard};
use intake_storage::{MemoryStore, RecordQuery, RecordStore, StorageError, SubmitError, submit};
use jiff::civil::date;

fn ctx() -> ValidationContext {
    ValidationContext::on(date(2025, 6, 15))
}

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

fn identity() -> SubmitterIdentity {
    SubmitterIdentity::new("Ana", "Doe", "ana@example.com")
}

fn wizard_at_review() -> Wizard {
    let mut wizard = Wizard::with_document(clean_document(), ctx());
    assert_eq!(wizard.advance_while_clean(), Step::Review);
    wizard
}

#[tokio::test]
async fn stores_the_full_document() {
    let store = MemoryStore::new();
    let wizard = wizard_at_review();

    let stored = submit(&store, &wizard, &identity()).await.unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(&stored.data, wizard.document());
    assert_eq!(stored.email.as_deref(), Some("ana@example.com"));

    let listed = store.list(RecordQuery::all()).await.unwrap();
    assert_eq!(listed, [stored]);
}

#[tokio::test]
async fn rejects_bad_identity_before_anything_else() {
    let store = MemoryStore::new();
    let wizard = Wizard::new(ctx());

    let err = submit(&store, &wizard, &SubmitterIdentity::new("", "Doe", "nope"))
        .await
        .unwrap_err();
    let SubmitError::InvalidIdentity { problems } = err else {
        panic!("expected identity problems, got {err:?}");
    };
    assert_eq!(
        problems,
        ["First name is required", "Please enter a valid email address"]
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn rejects_before_review() {
    let store = MemoryStore::new();
    let wizard = Wizard::with_document(clean_document(), ctx());

    let err = submit(&store, &wizard, &identity()).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::NotReady(GateError::NotAtReview(Step::Demographics))
    ));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn rejects_stale_earlier_section() {
    let store = MemoryStore::new();
    let mut wizard = wizard_at_review();
    wizard.update(|doc| {
        let mut next = doc.clone();
        next.demographic_and_medical_info.have_insurance = Some(true);
        next
    });

    let err = submit(&store, &wizard, &identity()).await.unwrap_err();
    let SubmitError::NotReady(GateError::Incomplete(report)) = err else {
        panic!("expected full validation failure, got {err:?}");
    };
    assert_eq!(report.total(), 1);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn store_failure_allows_resubmission() {
    let store = MemoryStore::new();
    let wizard = wizard_at_review();
    store.fail_next("timeout").await;

    let err = submit(&store, &wizard, &identity()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Store(StorageError::Unavailable(_))));
    assert_eq!(wizard.step(), Step::Review);
    assert_eq!(wizard.revision(), 0);

    let stored = submit(&store, &wizard, &identity()).await.unwrap();
    assert_eq!(&stored.data, wizard.document());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn stores_the_identity_as_checked() {
    let store = MemoryStore::new();
    let wizard = wizard_at_review();
    let padded = SubmitterIdentity::new(" Ana", "Doe ", " ana@example.com\n");

    let stored = submit(&store, &wizard, &padded).await.unwrap();
    assert_eq!(stored.first_name.as_deref(), Some("Ana"));
    assert_eq!(stored.last_name.as_deref(), Some("Doe"));
    assert_eq!(stored.email.as_deref(), Some("ana@example.com"));
}
