//! Repeatable row collections embedded in the questionnaire document.
//!
//! Every edit produces a new list; the source list is never touched. Rows are
//! addressed by position, and rows that implement [`KeyedRow`] can also be
//! addressed by their [`RowId`], which is assigned once at append time and
//! never changes afterwards.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Opaque identifier of a keyed row. Carries no domain meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RowId(String);

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh row identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> RowId;
}

/// Random v4 UUIDs, hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> RowId {
        RowId(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids (`row-1`, `row-2`, …).
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> RowId {
        self.issued += 1;
        RowId(format!("row-{}", self.issued))
    }
}

/// A row with a stable identity across reorders and removals.
pub trait KeyedRow {
    /// An otherwise empty row carrying `id`.
    fn with_id(id: RowId) -> Self;

    fn id(&self) -> &RowId;
}

/// An ordered collection of rows. Insertion order is display order.
///
/// Decodes `null` or a missing field as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RowList<T>(Vec<T>);

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RowList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Option::<Vec<T>>::deserialize(deserializer)?;
        Ok(Self(rows.unwrap_or_default()))
    }
}

impl<T> From<Vec<T>> for RowList<T> {
    fn from(rows: Vec<T>) -> Self {
        Self(rows)
    }
}

impl<T> FromIterator<T> for RowList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a RowList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> RowList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(CoreError::RowOutOfRange {
                index,
                len: self.0.len(),
            })
        }
    }
}

impl<T: Clone> RowList<T> {
    /// A copy of this list with `row` added at the end.
    pub fn appended_with(&self, row: T) -> Self {
        let mut rows = self.0.clone();
        rows.push(row);
        Self(rows)
    }

    /// A copy of this list with the row at `index` swapped for `row`.
    pub fn replaced(&self, index: usize, row: T) -> Result<Self, CoreError> {
        self.check_index(index)?;
        let mut rows = self.0.clone();
        rows[index] = row;
        Ok(Self(rows))
    }

    /// A copy of this list without the row at `index`. Later rows shift down.
    pub fn removed(&self, index: usize) -> Result<Self, CoreError> {
        self.check_index(index)?;
        let mut rows = self.0.clone();
        rows.remove(index);
        Ok(Self(rows))
    }
}

impl<T: Clone + Default> RowList<T> {
    /// A copy of this list with an empty row added at the end.
    pub fn appended(&self) -> Self {
        self.appended_with(T::default())
    }
}

impl<T: Clone + KeyedRow> RowList<T> {
    /// A copy of this list with an empty row, freshly keyed by `ids`, added at the end.
    pub fn appended_keyed(&self, ids: &mut dyn IdGenerator) -> Self {
        self.appended_with(T::with_id(ids.next_id()))
    }

    pub fn position_of(&self, id: &RowId) -> Option<usize> {
        self.0.iter().position(|row| row.id() == id)
    }

    /// Replace the row that shares `row`'s id.
    pub fn replaced_by_id(&self, row: T) -> Result<Self, CoreError> {
        let index = self
            .position_of(row.id())
            .ok_or_else(|| CoreError::UnknownRow(row.id().clone()))?;
        self.replaced(index, row)
    }

    pub fn removed_by_id(&self, id: &RowId) -> Result<Self, CoreError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| CoreError::UnknownRow(id.clone()))?;
        self.removed(index)
    }
}
