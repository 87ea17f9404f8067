pub mod demographics;
pub mod document;
pub mod genetics;
pub mod obstetric;
pub mod substance;
pub mod vocab;

use serde::{Deserialize, Deserializer};

/// Stored records sometimes carry `null` where a collection or sub-document
/// is expected; decode those as the empty default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored tag lists may hold `null` entries (an unticked box); skip them,
/// and treat a `null` list as empty.
pub(crate) fn without_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.into_iter().flatten().collect())
}
