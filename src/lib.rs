//! SUPA Catalog Administration Client
//!
//! Async client for the catalog screens of the SUPA academic-personnel
//! system. Layered architecture:
//! - domain: catalog record types and their business rules
//! - repository: collection access abstractions (HTTP, in-memory)
//! - store: the CRUD synchronization state machine shared by every screen
//! - catalogs: per-catalog endpoints, texts and ready-made constructors
//!
//! A UI owns one store (or composite view) per screen, renders its
//! `filtered()` list and drives it with `load`/`create`/`update`/`delete`;
//! outcomes are reported through the [`store::NotificationSink`] and
//! deletes ask the [`store::ConfirmationGate`] first.

pub mod catalogs;
pub mod domain;
pub mod repository;
pub mod store;

pub use domain::{CatalogDraft, CatalogRecord, Entity, ValidationError};
pub use repository::{ApiError, ApiResult, CollectionClient, HttpCollection, MemoryCollection};
pub use store::{
    CatalogConfig, CatalogStore, CatalogText, ConfirmationGate, NotificationSink, RecoveryPolicy,
    Severity,
};
