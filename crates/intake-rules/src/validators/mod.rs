//! One pure rule set per scope. Each takes the document subtree it covers
//! and returns its violations in a fixed field order, so repeated runs over
//! the same document produce identical lists.

pub mod closing;
pub mod demographics;
pub mod genetics;
pub mod obstetric;
pub mod substance;

/// Upper bound for the medication description.
pub const MAX_MEDICATION_TYPE_CHARS: usize = 500;

/// Upper bound for an ultrasound place.
pub const MAX_ULTRASOUND_PLACE_CHARS: usize = 500;

/// Upper bound for the closing free-text notes.
pub const MAX_OTHER_INFORMATION_CHARS: usize = 1000;

/// Absent or empty.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn exceeds(value: &Option<String>, max_chars: usize) -> bool {
    value
        .as_deref()
        .is_some_and(|text| text.chars().count() > max_chars)
}
