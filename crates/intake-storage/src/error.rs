use intake_rules::GateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Why a submission did not produce a stored record. In every case the
/// wizard and its document are left as they were.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid submitter identity: {}", .problems.join("; "))]
    InvalidIdentity { problems: Vec<String> },

    #[error("questionnaire not ready: {0}")]
    NotReady(#[from] GateError),

    #[error(transparent)]
    Store(#[from] StorageError),
}
