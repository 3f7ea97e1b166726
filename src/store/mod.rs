//! Store Layer
//!
//! The catalog CRUD synchronization pattern, factored once: every screen
//! of the system is a [`CatalogStore`] over its own [`CatalogConfig`].

mod catalog;
mod config;
mod edit;
mod notify;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogStore, RELOAD_DELAY};
pub use config::{CatalogConfig, CatalogText, Mutation, RecoveryPolicy, CONNECTION_ERROR};
pub use edit::EditSession;
pub use notify::{AutoConfirm, ConfirmationGate, LogSink, NotificationSink, Severity};
