//! EstadoApoyo Catalog
//!
//! Support-request states (`SUPACatEstadoApoyo`).

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A support state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadoApoyo {
    #[serde(rename = "idCatEstadoApoyo")]
    pub id: u32,
    #[serde(rename = "dEstadoApoyo")]
    pub nombre: String,
}

/// Editable fields of an [`EstadoApoyo`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EstadoApoyoDraft {
    #[serde(rename = "dEstadoApoyo")]
    pub nombre: String,
}

impl CatalogDraft for EstadoApoyoDraft {}

impl Entity for EstadoApoyo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for EstadoApoyo {
    type Draft = EstadoApoyoDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> EstadoApoyoDraft {
        EstadoApoyoDraft {
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &EstadoApoyoDraft,
        existing: &[EstadoApoyo],
        exclude: Option<u32>,
    ) -> Result<EstadoApoyoDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre del estado de apoyo es requerido")?;
        check_max_len(
            &nombre,
            100,
            "El nombre del estado de apoyo no puede exceder 100 caracteres",
        )?;

        let duplicated = existing
            .iter()
            .filter(|estado| Some(estado.id) != exclude)
            .any(|estado| estado.nombre.to_lowercase() == nombre.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe un estado de apoyo con este nombre".to_string(),
            ));
        }

        Ok(EstadoApoyoDraft { nombre })
    }
}
