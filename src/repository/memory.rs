//! In-Memory Collection
//!
//! [`CollectionClient`] implementation backed by a plain vector. Used by
//! tests and by demo setups with no backend around. Failures can be
//! scripted per call, and every call is recorded so tests can assert what
//! did (or did not) go over the wire.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::CatalogRecord;

use super::traits::{ApiError, ApiResult, CollectionClient};

/// One observed call against the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionCall {
    List,
    Create,
    Update(u32),
    Delete(u32),
}

/// Vector-backed stand-in for a catalog endpoint
pub struct MemoryCollection<T: CatalogRecord> {
    items: Mutex<Vec<T>>,
    next_id: Mutex<u32>,
    scripted: Mutex<VecDeque<ApiError>>,
    calls: Mutex<Vec<CollectionCall>>,
    materialize: fn(u32, &T::Draft) -> T,
}

impl<T: CatalogRecord> MemoryCollection<T> {
    /// `materialize` builds a stored record from an accepted draft, the
    /// way the real backend assigns ids server-side.
    pub fn new(materialize: fn(u32, &T::Draft) -> T) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            scripted: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            materialize,
        }
    }

    /// Seed the collection, advancing the id counter past the seeds.
    pub fn seed(&self, records: Vec<T>) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        *self.items.lock().unwrap() = records;
    }

    /// Queue a failure for the next call (one per call, FIFO).
    pub fn fail_next(&self, error: ApiError) {
        self.scripted.lock().unwrap().push_back(error);
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<CollectionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of [`CollectionCall::List`] calls observed so far.
    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == CollectionCall::List)
            .count()
    }

    /// Current stored records.
    pub fn records(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }

    fn enter(&self, call: CollectionCall) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.scripted.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: CatalogRecord> CollectionClient<T> for MemoryCollection<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        self.enter(CollectionCall::List)?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(&self, draft: &T::Draft) -> ApiResult<()> {
        self.enter(CollectionCall::Create)?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.items.lock().unwrap().push((self.materialize)(id, draft));
        Ok(())
    }

    async fn update(&self, id: u32, draft: &T::Draft) -> ApiResult<()> {
        self.enter(CollectionCall::Update(id))?;
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.iter_mut().find(|record| record.id() == id) {
            *slot = (self.materialize)(id, draft);
        }
        Ok(())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.enter(CollectionCall::Delete(id))?;
        self.items.lock().unwrap().retain(|record| record.id() != id);
        Ok(())
    }
}
