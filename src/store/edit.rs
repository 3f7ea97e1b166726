//! Inline Edit Session
//!
//! Single-slot state for the one record being edited. Starting an edit
//! elsewhere replaces the slot; cancelling discards the draft with no
//! network effect.

use crate::domain::CatalogRecord;

/// Snapshot of one in-progress edit
#[derive(Debug, Clone)]
pub struct EditSession<T: CatalogRecord> {
    /// The record as it was when editing started.
    pub original: T,
    /// Working copy of the editable fields.
    pub draft: T::Draft,
}

impl<T: CatalogRecord> EditSession<T> {
    pub fn new(record: &T) -> Self {
        Self {
            original: record.clone(),
            draft: record.edit_draft(),
        }
    }
}
