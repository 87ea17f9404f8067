use thiserror::Error;

use crate::collections::RowId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("row {index} is out of range (collection has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("no row with id {0}")]
    UnknownRow(RowId),

    #[error("invalid submitter identity: {}", .problems.join("; "))]
    InvalidIdentity { problems: Vec<String> },
}
