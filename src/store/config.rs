//! Store Configuration
//!
//! Everything that varies between catalogs without changing the store's
//! behavior: the user-facing texts, the error-reclassification policy and
//! the load-failure handling. The ~fourteen screens of the original system
//! are instances of one store over different configurations.

/// Shared connection-failure text (every catalog uses the same one).
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

/// Mutation kind, used to pick texts and recovery statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

/// Statuses reclassified as success, per mutation.
///
/// The backend sometimes commits a write and still answers with an error
/// status (500 everywhere; 204 on endpoints that reply without a body).
/// Listing those statuses here makes the workaround visible configuration
/// instead of scattered conditionals, and lets a healthy endpoint drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPolicy {
    pub create: &'static [u16],
    pub update: &'static [u16],
    pub delete: &'static [u16],
}

impl RecoveryPolicy {
    /// 500 implies success on every mutation.
    pub const STANDARD: RecoveryPolicy = RecoveryPolicy {
        create: &[500],
        update: &[500],
        delete: &[500],
    };

    /// Like [`STANDARD`](Self::STANDARD), and empty 204 replies on update
    /// and delete also imply success.
    pub const TOLERANT: RecoveryPolicy = RecoveryPolicy {
        create: &[500],
        update: &[500, 204],
        delete: &[500, 204],
    };

    /// No reclassification at all; every error status stays an error.
    pub const NONE: RecoveryPolicy = RecoveryPolicy {
        create: &[],
        update: &[],
        delete: &[],
    };

    pub fn implies_success(&self, mutation: Mutation, status: u16) -> bool {
        let statuses = match mutation {
            Mutation::Create => self.create,
            Mutation::Update => self.update,
            Mutation::Delete => self.delete,
        };
        statuses.contains(&status)
    }
}

/// User-facing texts of one catalog screen (the audience is Spanish).
///
/// `deleted_named` and `confirm_delete` carry a `{}` placeholder for the
/// record's display name.
#[derive(Debug, Clone)]
pub struct CatalogText {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub duplicate_create: &'static str,
    pub duplicate_update: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub deleted_named: &'static str,
    pub delete_failed: &'static str,
    pub in_use: &'static str,
    pub confirm_delete: &'static str,
}

impl CatalogText {
    pub(crate) fn deleted_message(&self, name: &str) -> String {
        self.deleted_named.replacen("{}", name, 1)
    }

    pub(crate) fn confirm_prompt(&self, name: &str) -> String {
        self.confirm_delete.replacen("{}", name, 1)
    }
}

/// Full per-catalog configuration consumed by the store.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Short identifier used in log lines ("areas", "roles", ...).
    pub name: &'static str,
    pub text: CatalogText,
    pub recovery: RecoveryPolicy,
    /// When set, a failed load keeps the previously loaded list instead of
    /// replacing it with the empty result. Off by default, matching the
    /// observed behavior of every original screen.
    pub keep_list_on_load_error: bool,
}
