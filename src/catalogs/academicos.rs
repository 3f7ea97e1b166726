//! Academicos View
//!
//! Faculty-member management, the largest screen of the system. Same shape
//! as the entidades view but with three lookups: generos, nacionalidades
//! and motivos. The academico create path treats only 500 as an implied
//! success while update and delete also tolerate empty 204 replies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{Academico, AcademicoDraft, Genero, Motivo, Nacionalidad};
use crate::repository::{ApiResult, CollectionClient, HttpCollection};
use crate::store::{
    CatalogConfig, CatalogStore, CatalogText, ConfirmationGate, NotificationSink, RecoveryPolicy,
};

pub const ACADEMICOS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPAAcademicos";
pub const ACADEMICOS_GENEROS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatGeneros";
pub const ACADEMICOS_NACIONALIDADES_ENDPOINT: &str =
    "http://148.226.168.138/SUPA/api/SUPACatNacionalidades";
pub const ACADEMICOS_MOTIVOS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatMotivos";

#[derive(Default)]
struct Lookups {
    generos: Mutex<Vec<Genero>>,
    nacionalidades: Mutex<Vec<Nacionalidad>>,
    motivos: Mutex<Vec<Motivo>>,
}

/// Loads the academicos list together with its three lookups; each fetch
/// degrades to an empty list on failure.
struct JoinedCollection {
    academicos: Arc<dyn CollectionClient<Academico>>,
    generos: Arc<dyn CollectionClient<Genero>>,
    nacionalidades: Arc<dyn CollectionClient<Nacionalidad>>,
    motivos: Arc<dyn CollectionClient<Motivo>>,
    lookups: Arc<Lookups>,
}

#[async_trait]
impl CollectionClient<Academico> for JoinedCollection {
    async fn list(&self) -> ApiResult<Vec<Academico>> {
        let (academicos, generos, nacionalidades, motivos) = tokio::join!(
            self.academicos.list(),
            self.generos.list(),
            self.nacionalidades.list(),
            self.motivos.list()
        );
        *self.lookups.generos.lock().unwrap() = generos.unwrap_or_else(|err| {
            log::error!("failed to load generos lookup: {err}");
            Vec::new()
        });
        *self.lookups.nacionalidades.lock().unwrap() = nacionalidades.unwrap_or_else(|err| {
            log::error!("failed to load nacionalidades lookup: {err}");
            Vec::new()
        });
        *self.lookups.motivos.lock().unwrap() = motivos.unwrap_or_else(|err| {
            log::error!("failed to load motivos lookup: {err}");
            Vec::new()
        });
        Ok(academicos.unwrap_or_else(|err| {
            log::error!("failed to load academicos: {err}");
            Vec::new()
        }))
    }

    async fn create(&self, draft: &AcademicoDraft) -> ApiResult<()> {
        self.academicos.create(draft).await
    }

    async fn update(&self, id: u32, draft: &AcademicoDraft) -> ApiResult<()> {
        self.academicos.update(id, draft).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.academicos.delete(id).await
    }
}

/// The academicos screen: store plus lookup resolvers
pub struct AcademicosView {
    store: CatalogStore<Academico>,
    lookups: Arc<Lookups>,
}

impl AcademicosView {
    pub fn new(
        http: &Client,
        sink: Arc<dyn NotificationSink>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        Self::with_clients(
            Arc::new(HttpCollection::new(http.clone(), ACADEMICOS_ENDPOINT)),
            Arc::new(HttpCollection::new(http.clone(), ACADEMICOS_GENEROS_ENDPOINT)),
            Arc::new(HttpCollection::new(http.clone(), ACADEMICOS_NACIONALIDADES_ENDPOINT)),
            Arc::new(HttpCollection::new(http.clone(), ACADEMICOS_MOTIVOS_ENDPOINT)),
            sink,
            gate,
        )
    }

    /// Assemble the view over explicit collection clients.
    pub fn with_clients(
        academicos: Arc<dyn CollectionClient<Academico>>,
        generos: Arc<dyn CollectionClient<Genero>>,
        nacionalidades: Arc<dyn CollectionClient<Nacionalidad>>,
        motivos: Arc<dyn CollectionClient<Motivo>>,
        sink: Arc<dyn NotificationSink>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        let lookups = Arc::new(Lookups::default());
        let joined = JoinedCollection {
            academicos,
            generos,
            nacionalidades,
            motivos,
            lookups: Arc::clone(&lookups),
        };
        let store = CatalogStore::new(academicos_config(), Arc::new(joined), sink, gate);
        Self { store, lookups }
    }

    pub fn store(&self) -> &CatalogStore<Academico> {
        &self.store
    }

    pub fn generos(&self) -> Vec<Genero> {
        self.lookups.generos.lock().unwrap().clone()
    }

    pub fn nacionalidades(&self) -> Vec<Nacionalidad> {
        self.lookups.nacionalidades.lock().unwrap().clone()
    }

    pub fn motivos(&self) -> Vec<Motivo> {
        self.lookups.motivos.lock().unwrap().clone()
    }

    /// Resolve a gender name for display, "N/A" when unknown.
    pub fn genero_name(&self, id: u32) -> String {
        self.lookups
            .generos
            .lock()
            .unwrap()
            .iter()
            .find(|genero| genero.id == id)
            .map(|genero| genero.descripcion.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Resolve a nationality name for display, "N/A" when unknown.
    pub fn nacionalidad_name(&self, id: u32) -> String {
        self.lookups
            .nacionalidades
            .lock()
            .unwrap()
            .iter()
            .find(|nacionalidad| nacionalidad.id == id)
            .map(|nacionalidad| nacionalidad.nombre.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Resolve a termination reason for display, "N/A" when unknown.
    pub fn motivo_name(&self, id: u32) -> String {
        self.lookups
            .motivos
            .lock()
            .unwrap()
            .iter()
            .find(|motivo| motivo.id == id)
            .map(|motivo| motivo.nombre.clone())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Build the academicos screen over HTTP.
pub fn academicos(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> AcademicosView {
    AcademicosView::new(http, sink, gate)
}

pub fn academicos_config() -> CatalogConfig {
    CatalogConfig {
        name: "academicos",
        text: CatalogText {
            load_failed: "Error al cargar los catálogos",
            created: "Académico creado exitosamente",
            create_failed: "Error al crear el académico",
            duplicate_create: "Ya existe un académico con este CURP o NP",
            duplicate_update: "Ya existe un académico con estos datos",
            updated: "Académico actualizado exitosamente",
            update_failed: "Error al actualizar el académico",
            deleted: "Académico eliminado exitosamente",
            deleted_named: "Académico \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el académico",
            in_use: "No se puede eliminar el académico porque está siendo utilizado",
            confirm_delete: "¿Está seguro de que desea eliminar al académico \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        // update and delete tolerate empty 204 replies; create does not
        recovery: RecoveryPolicy::TOLERANT,
        keep_list_on_load_error: false,
    }
}
