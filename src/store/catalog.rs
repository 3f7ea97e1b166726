//! Catalog Store
//!
//! The CRUD synchronization core shared by every catalog screen: one local
//! list kept in sync with a remote collection, a substring search over it,
//! a single-slot inline edit session, and the outcome handling for every
//! mutation - including the recovery policy that reclassifies some error
//! statuses as success and re-syncs shortly after.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::{CatalogDraft, CatalogRecord};
use crate::repository::{ApiError, CollectionClient};

use super::config::{CatalogConfig, Mutation, CONNECTION_ERROR};
use super::edit::EditSession;
use super::notify::{ConfirmationGate, NotificationSink, Severity};

/// Delay before the re-sync that follows an implied success. The backend
/// needs a moment to settle before the list reflects the write.
pub const RELOAD_DELAY: Duration = Duration::from_millis(1000);

struct StoreState<T: CatalogRecord> {
    items: Vec<T>,
    filtered: Vec<T>,
    search_term: String,
    editing: Option<EditSession<T>>,
    loading: bool,
    creating: bool,
    updating: bool,
    deleting: bool,
}

impl<T: CatalogRecord> StoreState<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            editing: None,
            loading: false,
            creating: false,
            updating: false,
            deleting: false,
        }
    }

    /// Recompute the filtered view from (items, search term). An empty or
    /// whitespace-only term yields a fresh copy of the full list.
    fn apply_filter(&mut self) {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            self.filtered = self.items.clone();
        } else {
            self.filtered = self
                .items
                .iter()
                .filter(|record| record.matches(&term))
                .cloned()
                .collect();
        }
    }
}

struct StoreInner<T: CatalogRecord> {
    config: CatalogConfig,
    client: Arc<dyn CollectionClient<T>>,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
    state: Mutex<StoreState<T>>,
    reloads: Mutex<Vec<JoinHandle<()>>>,
}

impl<T: CatalogRecord> Drop for StoreInner<T> {
    fn drop(&mut self) {
        for handle in self.reloads.lock().unwrap().drain(..) {
            handle.abort();
        }
    }
}

/// Store mediating between a UI and one remote catalog collection.
///
/// Cheap to clone; clones share state. Dropping the last handle (or
/// calling [`close`](Self::close)) aborts any pending delayed reload, so a
/// discarded screen never mutates state from a late timer.
pub struct CatalogStore<T: CatalogRecord> {
    inner: Arc<StoreInner<T>>,
}

impl<T: CatalogRecord> Clone for CatalogStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: CatalogRecord> CatalogStore<T> {
    pub fn new(
        config: CatalogConfig,
        client: Arc<dyn CollectionClient<T>>,
        sink: Arc<dyn NotificationSink>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                client,
                sink,
                gate,
                state: Mutex::new(StoreState::new()),
                reloads: Mutex::new(Vec::new()),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState<T>> {
        self.inner.state.lock().unwrap()
    }

    fn text(&self) -> &super::config::CatalogText {
        &self.inner.config.text
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.inner.sink.notify(message, severity);
    }

    // ========================
    // Loading
    // ========================

    /// Fetch the full collection and replace the local list.
    ///
    /// On failure the user sees a classified error and, unless the catalog
    /// is configured to keep stale data, the list is replaced with the
    /// empty result the failed fetch produced.
    pub async fn load(&self) {
        self.state().loading = true;
        let result = self.inner.client.list().await;
        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(items) => {
                state.items = items;
                state.apply_filter();
            }
            Err(err) => {
                drop(state);
                log::error!("failed to load {}: {err}", self.inner.config.name);
                let message = match err {
                    ApiError::Connection => CONNECTION_ERROR,
                    _ => self.text().load_failed,
                };
                self.notify(message, Severity::Error);
                if !self.inner.config.keep_list_on_load_error {
                    let mut state = self.state();
                    state.items.clear();
                    state.apply_filter();
                }
            }
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Validate a draft and create a record from it.
    ///
    /// Validation failures surface as a warning and never reach the
    /// network. A created record shows up through the follow-up reload;
    /// nothing is inserted locally.
    pub async fn create(&self, draft: T::Draft) {
        let normalized = {
            let state = self.state();
            T::validate(&draft, &state.items, None)
        };
        let normalized = match normalized {
            Ok(draft) => draft,
            Err(err) => {
                self.notify(&err.to_string(), Severity::Warning);
                return;
            }
        };

        self.state().creating = true;
        let result = self.inner.client.create(&normalized).await;
        self.state().creating = false;

        match result {
            Ok(()) => {
                self.notify(self.text().created, Severity::Success);
                self.load().await;
            }
            Err(err) => self.settle_failed_mutation(Mutation::Create, err),
        }
    }

    /// Submit the current edit session.
    ///
    /// Without an active session the required-field warning is surfaced,
    /// the same way an emptied form is. The uniqueness rule (where the
    /// catalog has one) skips the record being edited.
    pub async fn update(&self) {
        let session = self.state().editing.clone();
        let Some(session) = session else {
            if let Err(err) = T::validate(&T::Draft::default(), &[], None) {
                self.notify(&err.to_string(), Severity::Warning);
            }
            return;
        };

        let id = session.original.id();
        let normalized = {
            let state = self.state();
            T::validate(&session.draft, &state.items, Some(id))
        };
        let normalized = match normalized {
            Ok(draft) => draft,
            Err(err) => {
                self.notify(&err.to_string(), Severity::Warning);
                return;
            }
        };

        self.state().updating = true;
        let body = normalized.with_record_id(id);
        let result = self.inner.client.update(id, &body).await;
        self.state().updating = false;

        match result {
            Ok(()) => {
                self.notify(self.text().updated, Severity::Success);
                self.cancel_edit();
                self.load().await;
            }
            Err(err) => self.settle_failed_mutation(Mutation::Update, err),
        }
    }

    /// Delete a record after user confirmation.
    ///
    /// An id that is not in the local list is a no-op: no prompt, no
    /// request. Deleting the record currently being edited also cancels
    /// the edit session on the success path.
    pub async fn delete(&self, id: u32) {
        let record = self
            .state()
            .items
            .iter()
            .find(|record| record.id() == id)
            .cloned();
        let Some(record) = record else {
            return;
        };

        let name = record.display_name();
        let prompt = self.text().confirm_prompt(&name);
        if !self.inner.gate.confirm(&prompt).await {
            return;
        }

        self.state().deleting = true;
        let result = self.inner.client.delete(id).await;
        self.state().deleting = false;

        match result {
            Ok(()) => {
                self.notify(&self.text().deleted_message(&name), Severity::Success);
                {
                    let mut state = self.state();
                    if state
                        .editing
                        .as_ref()
                        .map(|session| session.original.id() == id)
                        .unwrap_or(false)
                    {
                        state.editing = None;
                    }
                }
                self.load().await;
            }
            Err(err) => self.settle_failed_mutation(Mutation::Delete, err),
        }
    }

    /// Outcome handling shared by all three mutations.
    fn settle_failed_mutation(&self, mutation: Mutation, err: ApiError) {
        log::error!(
            "{:?} on {} failed: {err}",
            mutation,
            self.inner.config.name
        );
        let text = self.text();
        match err {
            ApiError::Status(status)
                if self.inner.config.recovery.implies_success(mutation, status) =>
            {
                // The write landed despite the status; report success and
                // re-sync once the backend has settled. Updates drop their
                // edit session together with the reload.
                let (message, clear_edit) = match mutation {
                    Mutation::Create => (text.created, false),
                    Mutation::Update => (text.updated, true),
                    Mutation::Delete => (text.deleted, false),
                };
                self.notify(message, Severity::Success);
                self.schedule_reload(clear_edit);
            }
            ApiError::Connection => self.notify(CONNECTION_ERROR, Severity::Error),
            ApiError::Status(400) | ApiError::Status(409) => {
                let message = match mutation {
                    Mutation::Create => text.duplicate_create,
                    Mutation::Update => text.duplicate_update,
                    Mutation::Delete => text.in_use,
                };
                self.notify(message, Severity::Error);
            }
            _ => {
                let message = match mutation {
                    Mutation::Create => text.create_failed,
                    Mutation::Update => text.update_failed,
                    Mutation::Delete => text.delete_failed,
                };
                self.notify(message, Severity::Error);
            }
        }
    }

    /// Schedule the delayed re-sync that follows an implied success. The
    /// task holds only a weak handle: a store dropped in the meantime is
    /// left alone.
    fn schedule_reload(&self, clear_edit: bool) {
        let weak: Weak<StoreInner<T>> = Arc::downgrade(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(RELOAD_DELAY).await;
            if let Some(inner) = weak.upgrade() {
                let store = CatalogStore { inner };
                if clear_edit {
                    store.cancel_edit();
                }
                store.load().await;
            }
        });
        let mut reloads = self.inner.reloads.lock().unwrap();
        reloads.retain(|handle| !handle.is_finished());
        reloads.push(handle);
    }

    /// Abort any pending delayed reload. Call when the owning view goes
    /// away; dropping the last store handle does the same.
    pub fn close(&self) {
        for handle in self.inner.reloads.lock().unwrap().drain(..) {
            handle.abort();
        }
    }

    // ========================
    // Edit session
    // ========================

    /// Start editing `record`, replacing any session already open.
    pub fn prepare_edit(&self, record: &T) {
        self.state().editing = Some(EditSession::new(record));
    }

    /// Discard the edit session without network effect.
    pub fn cancel_edit(&self) {
        self.state().editing = None;
    }

    /// Replace the session's working draft (the form binding). Ignored
    /// when no session is open.
    pub fn set_edit_draft(&self, draft: T::Draft) {
        if let Some(session) = self.state().editing.as_mut() {
            session.draft = draft;
        }
    }

    /// The record being edited, as it was when editing started.
    pub fn editing(&self) -> Option<T> {
        self.state().editing.as_ref().map(|session| session.original.clone())
    }

    pub fn edit_draft(&self) -> Option<T::Draft> {
        self.state().editing.as_ref().map(|session| session.draft.clone())
    }

    // ========================
    // Search
    // ========================

    pub fn set_search_term(&self, term: &str) {
        let mut state = self.state();
        state.search_term = term.to_string();
        state.apply_filter();
    }

    pub fn clear_search(&self) {
        self.set_search_term("");
    }

    pub fn search_term(&self) -> String {
        self.state().search_term.clone()
    }

    // ========================
    // Views and flags
    // ========================

    /// The full list as last fetched.
    pub fn items(&self) -> Vec<T> {
        self.state().items.clone()
    }

    /// The search-filtered view.
    pub fn filtered(&self) -> Vec<T> {
        self.state().filtered.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn is_creating(&self) -> bool {
        self.state().creating
    }

    pub fn is_updating(&self) -> bool {
        self.state().updating
    }

    pub fn is_deleting(&self) -> bool {
        self.state().deleting
    }

    /// Any request in flight.
    pub fn is_busy(&self) -> bool {
        let state = self.state();
        state.loading || state.creating || state.updating || state.deleting
    }

    /// Whether the UI should offer to start an edit: nothing in flight and
    /// no session already open. Advisory only, like the original screens'
    /// disabled buttons; operations are not hard-blocked.
    pub fn can_edit(&self) -> bool {
        let state = self.state();
        state.editing.is_none()
            && !state.loading
            && !state.creating
            && !state.updating
            && !state.deleting
    }
}
