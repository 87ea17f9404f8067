use intake_core::models::demographics::DatePlace;
use intake_core::models::obstetric::PregnancyRecord;
use intake_core::{QuestionnaireDocument, RowList, SubmitterIdentity};
use intake_storage::{
    MemoryStore, NewRecord, RecordQuery, RecordStore, RecordSummary, StorageError, StoredRecord,
};
use jiff::Timestamp;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn stored(id: u64, created_at: &str, first_name: &str, notes: Option<&str>) -> StoredRecord {
    let mut data = QuestionnaireDocument::empty();
    data.other_information = notes.map(str::to_string);
    StoredRecord {
        id,
        created_at: ts(created_at),
        first_name: Some(first_name.into()),
        last_name: Some("Doe".into()),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        data,
    }
}

fn history() -> MemoryStore {
    MemoryStore::seeded(vec![
        stored(1, "2025-01-10T09:00:00Z", "Ana", None),
        stored(2, "2025-02-20T09:00:00Z", "Bea", Some("Allergic to PENICILLIN")),
        stored(3, "2025-03-30T09:00:00Z", "Cleo", None),
    ])
}

fn ids(records: &[StoredRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[tokio::test]
async fn list_is_newest_first() {
    let records = history().list(RecordQuery::all()).await.unwrap();
    assert_eq!(ids(&records), [3, 2, 1]);
}

#[tokio::test]
async fn text_search_is_case_insensitive() {
    let store = history();

    let by_name = store.list(RecordQuery::all().text("cLEo")).await.unwrap();
    assert_eq!(ids(&by_name), [3]);

    let by_email = store.list(RecordQuery::all().text("ANA@EXAMPLE")).await.unwrap();
    assert_eq!(ids(&by_email), [1]);

    let by_id = store.list(RecordQuery::all().text("2")).await.unwrap();
    assert!(ids(&by_id).contains(&2));

    let in_document = store.list(RecordQuery::all().text("penicillin")).await.unwrap();
    assert_eq!(ids(&in_document), [2]);

    let by_field_name = store.list(RecordQuery::all().text("gsps")).await.unwrap();
    assert_eq!(by_field_name.len(), 3);

    let nothing = store.list(RecordQuery::all().text("zebra")).await.unwrap();
    assert!(nothing.is_empty());

    let everything = store.list(RecordQuery::all().text("")).await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn date_range_is_inclusive() {
    let store = history();
    let query = RecordQuery::all().between(
        Some(ts("2025-02-20T09:00:00Z")),
        Some(ts("2025-03-30T09:00:00Z")),
    );
    assert_eq!(ids(&store.list(query).await.unwrap()), [3, 2]);
}

#[tokio::test]
async fn half_open_range_is_ignored() {
    let store = history();
    let query = RecordQuery::all().between(Some(ts("2025-03-01T00:00:00Z")), None);
    assert!(query.created_between.is_none());
    assert_eq!(store.list(query).await.unwrap().len(), 3);
}

#[tokio::test]
async fn text_and_range_combine() {
    let store = history();
    let query = RecordQuery::all()
        .text("doe")
        .between(Some(ts("2025-01-01T00:00:00Z")), Some(ts("2025-01-31T00:00:00Z")));
    assert_eq!(ids(&store.list(query).await.unwrap()), [1]);
}

#[tokio::test]
async fn insert_assigns_fresh_ids() {
    let store = history();
    let identity = SubmitterIdentity::new("Dana", "Roe", "dana@example.com");

    let first = store
        .insert(NewRecord::new(identity.clone(), QuestionnaireDocument::empty()))
        .await
        .unwrap();
    let second = store
        .insert(NewRecord::new(identity, QuestionnaireDocument::empty()))
        .await
        .unwrap();

    assert_eq!(first.id, 4);
    assert_eq!(second.id, 5);
    assert_eq!(first.first_name.as_deref(), Some("Dana"));
    assert_eq!(store.len().await, 5);
}

#[tokio::test]
async fn injected_failure_affects_one_insert() {
    let store = MemoryStore::new();
    store.fail_next("connection reset").await;

    let identity = SubmitterIdentity::new("Dana", "Roe", "dana@example.com");
    let err = store
        .insert(NewRecord::new(identity.clone(), QuestionnaireDocument::empty()))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(ref reason) if reason == "connection reset"));
    assert!(store.is_empty().await);

    let stored = store
        .insert(NewRecord::new(identity, QuestionnaireDocument::empty()))
        .await
        .unwrap();
    assert_eq!(stored.id, 1);
}

#[test]
fn stored_record_decodes_without_identity() {
    let record: StoredRecord = serde_json::from_str(
        r#"{
            "id": 17,
            "created_at": "2024-11-02T15:04:05Z",
            "data": { "GsPs": null, "GeneticsCondition": { "HasThalassemia": "false" } }
        }"#,
    )
    .unwrap();

    assert_eq!(record.id, 17);
    assert!(record.first_name.is_none());
    assert!(record.data.pregnancies.is_empty());
}

#[test]
fn summary_line() {
    let mut data = QuestionnaireDocument::empty();
    assert_eq!(
        RecordSummary::of(&data).to_string(),
        "Not specified • Not specified • 0 ultrasounds • 0 Gs&Ps"
    );

    data.demographic_and_medical_info.is_employed = Some(false);
    data.demographic_and_medical_info.have_insurance = Some(true);
    data.demographic_and_medical_info.has_other_ultrasound_this_pregnancy =
        RowList::from(vec![DatePlace::default(), DatePlace::default()]);
    data.pregnancies = RowList::from(vec![PregnancyRecord::default()]);
    assert_eq!(
        RecordSummary::of(&data).to_string(),
        "Unemployed • Has Insurance • 2 ultrasounds • 1 Gs&Ps"
    );
}
