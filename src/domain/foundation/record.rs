//! The `Record` abstraction shared by every persisted back-office entity.
//!
//! A record knows its identifier, how it is built from a client-supplied
//! draft, how a draft replaces its editable fields, and how lists of it are
//! ordered. Persistence adapters and the generic CRUD handlers work purely in
//! terms of this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Debug;

use super::{RecordId, Timestamp, ValidationError};

/// A persisted entity with generated id and draft-based create/update.
pub trait Record: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Plural resource name; used for routes, JSON file names and table names.
    const RESOURCE: &'static str;

    /// Human-readable singular label used in error messages.
    const LABEL: &'static str;

    /// Client payload accepted by create and update.
    type Draft: DeserializeOwned + Send + 'static;

    fn id(&self) -> RecordId;

    /// Builds a new record from a draft. Presence checks happen here.
    fn create(id: RecordId, draft: Self::Draft, now: Timestamp) -> Result<Self, ValidationError>;

    /// Replaces the editable fields with the draft, keeping id and creation time.
    fn revise(&mut self, draft: Self::Draft, now: Timestamp) -> Result<(), ValidationError>;

    /// Ordering used when listing records.
    fn list_order(a: &Self, b: &Self) -> Ordering;
}

/// A record whose position is set by drag-and-drop reordering.
pub trait Ordered: Record {
    fn sort_order(&self) -> i32;

    fn set_sort_order(&mut self, order: i32, now: Timestamp);
}

/// Sorts records in place using their list ordering.
pub fn sort_records<T: Record>(records: &mut [T]) {
    records.sort_by(T::list_order);
}

/// Normalizes an optional free-text field: trims and maps blanks to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims every entry of a list and drops the blank ones.
pub fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".into()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn clean_list_drops_blank_entries() {
        let cleaned = clean_list(vec![" rust ".into(), "".into(), "axum".into()]);
        assert_eq!(cleaned, vec!["rust".to_string(), "axum".to_string()]);
    }
}
