use intake_core::SubmitterIdentity;
use intake_rules::Wizard;
use tracing::debug;

use crate::error::SubmitError;
use crate::events::{SubmissionEvent, SubmissionOutcome};
use crate::record::{NewRecord, StoredRecord};
use crate::store::RecordStore;

/// Send the wizard's current document to `store`.
///
/// Checks the identity, then asks the wizard whether the whole document may
/// go out, then inserts. Nothing is retried; on any error the caller still
/// holds the same wizard and can resubmit the full document.
pub async fn submit(
    store: &dyn RecordStore,
    wizard: &Wizard,
    identity: &SubmitterIdentity,
) -> Result<StoredRecord, SubmitError> {
    let revision = wizard.revision();

    let problems = identity.problems();
    if !problems.is_empty() {
        SubmissionEvent::rejected(
            SubmissionOutcome::InvalidIdentity,
            revision,
            format!("{} identity problem(s)", problems.len()),
        )
        .emit();
        return Err(SubmitError::InvalidIdentity { problems });
    }

    let document = match wizard.ready_for_submit() {
        Ok(document) => document,
        Err(e) => {
            SubmissionEvent::rejected(SubmissionOutcome::NotReady, revision, e.to_string()).emit();
            return Err(e.into());
        }
    };

    debug!(revision, "inserting submission");
    let record = NewRecord::new(identity.trimmed(), document.clone());
    match store.insert(record).await {
        Ok(stored) => {
            SubmissionEvent::stored(revision, stored.id).emit();
            Ok(stored)
        }
        Err(e) => {
            SubmissionEvent::rejected(SubmissionOutcome::StoreFailed, revision, e.to_string())
                .emit();
            Err(e.into())
        }
    }
}
