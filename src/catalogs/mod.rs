//! Catalog Wiring
//!
//! Endpoints, texts and recovery policies for every SUPA catalog, plus
//! constructors binding each one to a store over HTTP. The two composite
//! screens (entidades, academicos) live in their own modules.
//!
//! The backend's path and field casing drifts between screens; every
//! endpoint is its own authority and none is derived from a shared base.

mod academicos;
mod entidades;

#[cfg(test)]
mod tests;

pub use academicos::{
    academicos, academicos_config, AcademicosView, ACADEMICOS_ENDPOINT,
    ACADEMICOS_GENEROS_ENDPOINT, ACADEMICOS_MOTIVOS_ENDPOINT, ACADEMICOS_NACIONALIDADES_ENDPOINT,
};
pub use entidades::{
    entidades, entidades_config, EntidadesView, ENTIDADES_AREAS_ENDPOINT, ENTIDADES_ENDPOINT,
    ENTIDADES_REGIONES_ENDPOINT,
};

use std::sync::Arc;

use reqwest::Client;

use crate::domain::{
    Area, AreaDedica, CatalogRecord, Disciplina, EstadoApoyo, Genero, GradoCa, Motivo,
    Nacionalidad, NivelEstudios, Periodo, Region, Rol,
};
use crate::repository::HttpCollection;
use crate::store::{
    CatalogConfig, CatalogStore, CatalogText, ConfirmationGate, NotificationSink, RecoveryPolicy,
};

pub const AREAS_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatAreas";
pub const REGIONES_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatRegion";
pub const ROLES_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatRoles";
pub const GENEROS_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatGeneros";
pub const NACIONALIDADES_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatNacionalidades";
pub const MOTIVOS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatMotivos";
pub const DISCIPLINAS_ENDPOINT: &str = "http://148.226.168.138/SUPA/api/SUPACatDisciplinas";
pub const AREA_DEDICA_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatAreaDedica";
pub const NIVEL_ESTUDIOS_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatNivelEstudios";
pub const GRADO_CA_ENDPOINT: &str = "http://148.226.168.138/supa/Api/SUPACatGradoCA";
pub const ESTADO_APOYO_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatEstadoApoyo";
pub const PERIODOS_ENDPOINT: &str = "http://148.226.168.138/supa/api/SUPACatPeriodos";

/// Bind a configuration to its endpoint over HTTP.
fn http_store<T: CatalogRecord>(
    config: CatalogConfig,
    http: &Client,
    endpoint: &str,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<T> {
    CatalogStore::new(
        config,
        Arc::new(HttpCollection::new(http.clone(), endpoint)),
        sink,
        gate,
    )
}

pub fn areas(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Area> {
    http_store(areas_config(), http, AREAS_ENDPOINT, sink, gate)
}

pub fn regiones(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Region> {
    http_store(regiones_config(), http, REGIONES_ENDPOINT, sink, gate)
}

pub fn roles(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Rol> {
    http_store(roles_config(), http, ROLES_ENDPOINT, sink, gate)
}

pub fn generos(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Genero> {
    http_store(generos_config(), http, GENEROS_ENDPOINT, sink, gate)
}

pub fn nacionalidades(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Nacionalidad> {
    http_store(nacionalidades_config(), http, NACIONALIDADES_ENDPOINT, sink, gate)
}

pub fn motivos(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Motivo> {
    http_store(motivos_config(), http, MOTIVOS_ENDPOINT, sink, gate)
}

pub fn disciplinas(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Disciplina> {
    http_store(disciplinas_config(), http, DISCIPLINAS_ENDPOINT, sink, gate)
}

pub fn areas_dedica(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<AreaDedica> {
    http_store(areas_dedica_config(), http, AREA_DEDICA_ENDPOINT, sink, gate)
}

pub fn niveles_estudios(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<NivelEstudios> {
    http_store(niveles_estudios_config(), http, NIVEL_ESTUDIOS_ENDPOINT, sink, gate)
}

pub fn grados_ca(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<GradoCa> {
    http_store(grados_ca_config(), http, GRADO_CA_ENDPOINT, sink, gate)
}

pub fn estados_apoyo(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<EstadoApoyo> {
    http_store(estados_apoyo_config(), http, ESTADO_APOYO_ENDPOINT, sink, gate)
}

pub fn periodos(
    http: &Client,
    sink: Arc<dyn NotificationSink>,
    gate: Arc<dyn ConfirmationGate>,
) -> CatalogStore<Periodo> {
    http_store(periodos_config(), http, PERIODOS_ENDPOINT, sink, gate)
}

pub fn areas_config() -> CatalogConfig {
    CatalogConfig {
        name: "areas",
        text: CatalogText {
            load_failed: "Error al cargar las áreas",
            created: "Área creada exitosamente",
            create_failed: "Error al crear el área",
            duplicate_create: "Ya existe un área con este nombre",
            duplicate_update: "Ya existe un área con este nombre",
            updated: "Área actualizada exitosamente",
            update_failed: "Error al actualizar el área",
            deleted: "Área eliminada exitosamente",
            deleted_named: "Área \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar el área",
            in_use: "No se puede eliminar el área porque está siendo utilizada por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el área \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn regiones_config() -> CatalogConfig {
    CatalogConfig {
        name: "regiones",
        text: CatalogText {
            load_failed: "Error al cargar las regiones",
            created: "Región creada exitosamente",
            create_failed: "Error al crear la región",
            duplicate_create: "Ya existe una región con este nombre",
            duplicate_update: "Ya existe una región con este nombre",
            updated: "Región actualizada exitosamente",
            update_failed: "Error al actualizar la región",
            deleted: "Región eliminada exitosamente",
            deleted_named: "Región \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar la región",
            in_use: "No se puede eliminar la región porque está siendo utilizada por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar la región \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn roles_config() -> CatalogConfig {
    CatalogConfig {
        name: "roles",
        text: CatalogText {
            load_failed: "Error al cargar los roles",
            created: "Rol creado exitosamente",
            create_failed: "Error al crear el rol",
            duplicate_create: "Ya existe un rol con este nombre",
            duplicate_update: "Ya existe un rol con este nombre",
            updated: "Rol actualizado exitosamente",
            update_failed: "Error al actualizar el rol",
            deleted: "Rol eliminado exitosamente",
            deleted_named: "Rol \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el rol",
            in_use: "No se puede eliminar el rol porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el rol \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn generos_config() -> CatalogConfig {
    CatalogConfig {
        name: "generos",
        text: CatalogText {
            load_failed: "Error al cargar los géneros",
            created: "Género creado exitosamente",
            create_failed: "Error al crear el género",
            duplicate_create: "Ya existe un género con esta descripción",
            duplicate_update: "Ya existe un género con esta descripción",
            updated: "Género actualizado exitosamente",
            update_failed: "Error al actualizar el género",
            deleted: "Género eliminado exitosamente",
            deleted_named: "Género \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el género",
            in_use: "No se puede eliminar el género porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el género \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn nacionalidades_config() -> CatalogConfig {
    CatalogConfig {
        name: "nacionalidades",
        text: CatalogText {
            load_failed: "Error al cargar las nacionalidades",
            created: "Nacionalidad creada exitosamente",
            create_failed: "Error al crear la nacionalidad",
            duplicate_create: "Ya existe una nacionalidad con este nombre",
            duplicate_update: "Ya existe una nacionalidad con este nombre",
            updated: "Nacionalidad actualizada exitosamente",
            update_failed: "Error al actualizar la nacionalidad",
            deleted: "Nacionalidad eliminada exitosamente",
            deleted_named: "Nacionalidad \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar la nacionalidad",
            in_use: "No se puede eliminar la nacionalidad porque está siendo utilizada por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar la nacionalidad \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn motivos_config() -> CatalogConfig {
    CatalogConfig {
        name: "motivos",
        text: CatalogText {
            load_failed: "Error al cargar los motivos",
            created: "Motivo creado exitosamente",
            create_failed: "Error al crear el motivo",
            duplicate_create: "Ya existe un motivo con este nombre",
            duplicate_update: "Ya existe un motivo con este nombre",
            updated: "Motivo actualizado exitosamente",
            update_failed: "Error al actualizar el motivo",
            deleted: "Motivo eliminado exitosamente",
            deleted_named: "Motivo \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el motivo",
            in_use: "No se puede eliminar el motivo porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el motivo \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn disciplinas_config() -> CatalogConfig {
    CatalogConfig {
        name: "disciplinas",
        text: CatalogText {
            load_failed: "Error al cargar las disciplinas",
            created: "Disciplina creada exitosamente",
            create_failed: "Error al crear la disciplina",
            duplicate_create: "Ya existe una disciplina con este nombre",
            duplicate_update: "Ya existe una disciplina con este nombre",
            updated: "Disciplina actualizada exitosamente",
            update_failed: "Error al actualizar la disciplina",
            deleted: "Disciplina eliminada exitosamente",
            deleted_named: "Disciplina \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar la disciplina",
            in_use: "No se puede eliminar la disciplina porque está siendo utilizada por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar la disciplina \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn areas_dedica_config() -> CatalogConfig {
    CatalogConfig {
        name: "areas-dedica",
        text: CatalogText {
            load_failed: "Error al cargar las áreas dedicadas",
            created: "Área dedicada creada exitosamente",
            create_failed: "Error al crear el área dedicada",
            duplicate_create: "Ya existe un área dedicada con esta descripción",
            duplicate_update: "Ya existe un área dedicada con esta descripción",
            updated: "Área dedicada actualizada exitosamente",
            update_failed: "Error al actualizar el área dedicada",
            deleted: "Área dedicada eliminada exitosamente",
            deleted_named: "Área dedicada \"{}\" eliminada exitosamente",
            delete_failed: "Error al eliminar el área dedicada",
            in_use: "No se puede eliminar el área dedicada porque está siendo utilizada por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el área dedicada \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn niveles_estudios_config() -> CatalogConfig {
    CatalogConfig {
        name: "niveles-estudios",
        text: CatalogText {
            load_failed: "Error al cargar los niveles de estudios",
            created: "Nivel de estudios creado exitosamente",
            create_failed: "Error al crear el nivel de estudios",
            duplicate_create: "Ya existe un nivel de estudios con este nombre",
            duplicate_update: "Ya existe un nivel de estudios con este nombre",
            updated: "Nivel de estudios actualizado exitosamente",
            update_failed: "Error al actualizar el nivel de estudios",
            deleted: "Nivel de estudios eliminado exitosamente",
            deleted_named: "Nivel de estudios \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el nivel de estudios",
            in_use: "No se puede eliminar el nivel de estudios porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el nivel de estudios \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        // this endpoint answers update/delete with empty 204 replies
        recovery: RecoveryPolicy::TOLERANT,
        keep_list_on_load_error: false,
    }
}

pub fn grados_ca_config() -> CatalogConfig {
    CatalogConfig {
        name: "grados-ca",
        text: CatalogText {
            load_failed: "Error al cargar los grados CA",
            created: "Grado CA creado exitosamente",
            create_failed: "Error al crear el grado CA",
            duplicate_create: "Ya existe un grado CA con estos datos",
            duplicate_update: "Ya existe un grado CA con estos datos",
            updated: "Grado CA actualizado exitosamente",
            update_failed: "Error al actualizar el grado CA",
            deleted: "Grado CA eliminado exitosamente",
            deleted_named: "Grado CA \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el grado CA",
            in_use: "No se puede eliminar el grado CA porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el grado CA \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn estados_apoyo_config() -> CatalogConfig {
    CatalogConfig {
        name: "estados-apoyo",
        text: CatalogText {
            load_failed: "Error al cargar los estados de apoyo",
            created: "Estado de apoyo creado exitosamente",
            create_failed: "Error al crear el estado de apoyo",
            duplicate_create: "Ya existe un estado de apoyo con este nombre",
            duplicate_update: "Ya existe un estado de apoyo con este nombre",
            updated: "Estado de apoyo actualizado exitosamente",
            update_failed: "Error al actualizar el estado de apoyo",
            deleted: "Estado de apoyo eliminado exitosamente",
            deleted_named: "Estado de apoyo \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el estado de apoyo",
            in_use: "No se puede eliminar el estado de apoyo porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el estado de apoyo \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}

pub fn periodos_config() -> CatalogConfig {
    CatalogConfig {
        name: "periodos",
        text: CatalogText {
            load_failed: "Error al cargar los periodos",
            created: "Periodo creado exitosamente",
            create_failed: "Error al crear el periodo",
            duplicate_create: "Ya existe un periodo con esta descripción",
            duplicate_update: "Ya existe un periodo con esta descripción",
            updated: "Periodo actualizado exitosamente",
            update_failed: "Error al actualizar el periodo",
            deleted: "Periodo eliminado exitosamente",
            deleted_named: "Periodo \"{}\" eliminado exitosamente",
            delete_failed: "Error al eliminar el periodo",
            in_use: "No se puede eliminar el periodo porque está siendo utilizado por otros registros",
            confirm_delete: "¿Está seguro de que desea eliminar el periodo \"{}\"?\n\nEsta acción no se puede deshacer.",
        },
        recovery: RecoveryPolicy::STANDARD,
        keep_list_on_load_error: false,
    }
}
