//! Domain Layer - Core Catalog Traits
//!
//! Contracts shared by every catalog record type. A catalog is a small
//! reference table edited through its own screen; all of them move through
//! the same store, so the per-catalog differences (wire names, editable
//! fields, validation rules, search fields) live behind these traits.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Pre-flight validation failure. The message is the exact text shown to
/// the user; nothing is sent over the wire when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank after trimming.
    #[error("{0}")]
    Required(String),
    /// A field exceeds its length bounds.
    #[error("{0}")]
    Length(String),
    /// The primary descriptive field collides with an existing record.
    #[error("{0}")]
    Duplicate(String),
}

/// Editable subset of a catalog record, serialized as the POST/PUT body.
pub trait CatalogDraft: Clone + Default + Serialize + Send + Sync {
    /// Attach the record id to the body. Only catalogs whose backend
    /// expects the id inside the update payload override this.
    fn with_record_id(self, _id: u32) -> Self {
        self
    }
}

/// A catalog record as served by its collection endpoint.
pub trait CatalogRecord:
    Entity<Id = u32> + Serialize + DeserializeOwned + std::fmt::Debug + 'static
{
    /// Editable-fields companion type.
    type Draft: CatalogDraft;

    /// Primary descriptive text, used in confirmation prompts and in the
    /// named variant of the deleted notification.
    fn display_name(&self) -> String;

    /// Search predicate. `term` arrives trimmed and lower-cased; a record
    /// matches when any display field contains it, or when the decimal
    /// form of the id does.
    fn matches(&self, term: &str) -> bool;

    /// Snapshot of the editable fields, taken when an inline edit starts.
    fn edit_draft(&self) -> Self::Draft;

    /// Validate and normalize a draft against the currently loaded list.
    /// `exclude` names the record being edited so a record never collides
    /// with itself during an update.
    fn validate(
        draft: &Self::Draft,
        existing: &[Self],
        exclude: Option<u32>,
    ) -> Result<Self::Draft, ValidationError>;
}

/// Trim a required text field, rejecting blank input with `message`.
pub(crate) fn require_text(value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Reject values longer than `max` characters.
pub(crate) fn check_max_len(
    value: &str,
    max: usize,
    message: &str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::Length(message.to_string()));
    }
    Ok(())
}

/// Trim an optional text field, mapping blank input to `None`.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
