//! intake-core
//!
//! Pure domain types for the prenatal intake questionnaire: the submission
//! document, its repeatable row collections, and the submitter identity that
//! is checked before the wizard starts. No I/O; this is the shared
//! vocabulary of the intake system.

pub mod collections;
pub mod error;
pub mod identity;
pub mod models;

pub use collections::{IdGenerator, KeyedRow, RowId, RowList, SequentialIds, UuidGenerator};
pub use error::CoreError;
pub use identity::SubmitterIdentity;
pub use models::document::QuestionnaireDocument;
