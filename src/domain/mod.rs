//! Domain Layer
//!
//! Catalog record types and their business rules. Each module mirrors one
//! backend collection with its exact wire field names; the shared traits
//! live in `entity`. This layer has no networking dependencies.

mod academico;
mod area;
mod area_dedica;
mod disciplina;
mod entidad;
mod entity;
mod estado_apoyo;
mod genero;
mod grado_ca;
mod motivo;
mod nacionalidad;
mod nivel_estudios;
mod periodo;
mod region;
mod rol;

pub use academico::{Academico, AcademicoDraft, INSTITUCION_DEFAULT};
pub use area::{Area, AreaDraft};
pub use area_dedica::{AreaDedica, AreaDedicaDraft};
pub use disciplina::{Disciplina, DisciplinaDraft};
pub use entidad::{Entidad, EntidadDraft};
pub use entity::{CatalogDraft, CatalogRecord, Entity, ValidationError};
pub use estado_apoyo::{EstadoApoyo, EstadoApoyoDraft};
pub use genero::{Genero, GeneroDraft};
pub use grado_ca::{GradoCa, GradoCaDraft};
pub use motivo::{Motivo, MotivoDraft};
pub use nacionalidad::{Nacionalidad, NacionalidadDraft};
pub use nivel_estudios::{NivelEstudios, NivelEstudiosDraft};
pub use periodo::{Periodo, PeriodoDraft};
pub use region::{Region, RegionDraft};
pub use rol::{Rol, RolDraft};
