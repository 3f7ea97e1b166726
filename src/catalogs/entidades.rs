//! Entidades View
//!
//! The composite entidades screen: an entidad store plus read-only area
//! and region lookups for the selector dropdowns. All three collections
//! load together, and a failure in any one of them is logged and yields an
//! empty list without disturbing the others. Mutations go to the entidades
//! endpoint only; the lookups are never written through this screen.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{Area, Entidad, EntidadDraft, Region};
use crate::repository::{ApiResult, CollectionClient, HttpCollection};
use crate::store::{
    CatalogConfig, CatalogStore, CatalogText, ConfirmationGate, NotificationSink, RecoveryPolicy,
};

pub const ENTIDADES_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatEntidades";
// This screen reads its lookups from the SUPA-cased paths, not the ones the
// standalone areas/regiones screens use.
pub const ENTIDADES_AREAS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatAreas";
pub const ENTIDADES_REGIONES_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatRegion";

#[derive(Default)]
struct Lookups {
    areas: Mutex<Vec<Area>>,
    regiones: Mutex<Vec<Region>>,
}

/// Collection client that loads the entidades list together with its
/// lookups. `list` never fails: each fetch degrades to an empty list.
struct JoinedCollection {
    entidades: Arc<dyn CollectionClient<Entidad>>,
    areas: Arc<dyn CollectionClient<Area>>,
    regiones: Arc<dyn CollectionClient<Region>>,
    lookups: Arc<Lookups>,
}

#[async_trait]
impl CollectionClient<Entidad> for JoinedCollection {
    async fn list(&self) -> ApiResult<Vec<Entidad>> {
        let (entidades, areas, regiones) = tokio::join!(
            self.entidades.list(),
            self.areas.list(),
            self.regiones.list()
        );
        *self.lookups.areas.lock().unwrap() = areas.unwrap_or_else(|err| {
            log::error!("failed to load areas lookup: {err}");
            Vec::new()
        });
        *self.lookups.regiones.lock().unwrap() = regiones.unwrap_or_else(|err| {
            log::error!("failed to load regiones lookup: {err}");
            Vec::new()
        });
        Ok(entidades.unwrap_or_else(|err| {
            log::error!("failed to load entidades: {err}");
            Vec::new()
        }))
    }

    async fn create(&self, draft: &EntidadDraft) -> ApiResult<()> {
        self.entidades.create(draft).await
    }

    async fn update(&self, id: u32, draft: &EntidadDraft) -> ApiResult<()> {
        self.entidades.update(id, draft).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.entidades.delete(id).await
    }
}

/// The entidades screen: store plus lookup resolvers
pub struct EntidadesView {
    store: CatalogStore<Entidad>,
    lookups: Arc<Lookups>,
}

impl EntidadesView {
    pub fn new(
        http: &Client,
        sink: Arc<dyn NotificationSink>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        Self::with_clients(
            Arc::new(HttpCollection::new(http.clone(), ENTIDADES_ENDPOINT)),
            Arc::new(HttpCollection::new(http.clone(), ENTIDADES_AREAS_ENDPOINT)),
            Arc::new(HttpCollection::new(http.clone(), ENTIDADES_REGIONES_ENDPOINT)),
            sink,
            gate,
        )
    }

    /// Assemble the view over explicit collection clients.
    pub fn with_clients(
        entidades: Arc<dyn CollectionClient<Entidad>>,
        areas: Arc<dyn CollectionClient<Area>>,
        regiones: Arc<dyn CollectionClient<Region>>,
        sink: Arc<dyn NotificationSink>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        let lookups = Arc::new(Lookups::default());
        let joined = JoinedCollection {
            entidades,
            areas,
            regiones,
            lookups: Arc::clone(&lookups),
        };
        let store = CatalogStore::new(entidades_config(), Arc::new(joined), sink, gate);
        Self { store, lookups }
    }

    /// The underlying entidad store; every CRUD operation re-syncs the
    /// lookups along with the list.
    pub fn store(&self) -> &CatalogStore<Entidad> {
        &self.store
    }

    /// Areas available for the selector.
    pub fn areas(&self) -> Vec<Area> {
        self.lookups.areas.lock().unwrap().clone()
    }

    /// Regions available for the selector.
    pub fn regiones(&self) -> Vec<Region> {
        self.lookups.regiones.lock().unwrap().clone()
    }

    /// Resolve an area name for display, "N/A" when unknown.
    pub fn area_name(&self, id: u32) -> String {
        self.lookups
            .areas
            .lock()
            .unwrap()
            .iter()
            .find(|area| area.id == id)
            .map(|area| area.nombre.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Resolve a region name for display, "N/A" when unknown or blank.
    pub fn region_name(&self, id: u32) -> String {
        self.lookups
            .regiones
            .lock()
            .unwrap()
            .iter()
            .find(|region| region.id == id)
            .map(|region| region.nombre.clone())
            .filter(|nombre| !nombre.is_empty())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Build the entidades screen over HTTP.
pub fn entidades(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> EntidadesView {
    EntidadesView::new(http, sink, gate)
}

pub fn entidades_config() -> CatalogConfig {
    CatalogConfig {
        name: "entidades",
        text: CatalogText {
            load_failed: "Error al cargar los catálogos",
            created: "Entidad creada exitosamente",
            create_failed: "Error al crear la entidad",
            duplicate_create: "Ya existe una entidad con estos datos",
            duplicate_update: "Ya existe una entidad con estos datos",
            updated: "Entidad actualizada exitosamente",
            update_failed: "Error al actualizar la entidad",
            deleted: "Entidad eliminada exitosamente",
            deleted_named: "Entidad \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar la entidad",
            in_use: "No se puede eliminar la entidad porque está siendo utilizada",
            confirm_delete: "¿Está seguro de que desea eliminar la entidad \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        // update and delete answer with empty 204 replies on success
        recovery: RecoveryPolicy::TOLERANT,
        keep_list_on_load_error: false,
    }
}
