//! Nacionalidad Catalog
//!
//! Nationalities (`SUPACatNacionalidades`).

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A nationality entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nacionalidad {
    #[serde(rename = "idCatNacionalidad")]
    pub id: u32,
    #[serde(rename = "dNacionalidad")]
    pub nombre: String,
}

/// Editable fields of a [`Nacionalidad`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct NacionalidadDraft {
    #[serde(rename = "dNacionalidad")]
    pub nombre: String,
}

impl CatalogDraft for NacionalidadDraft {}

impl Entity for Nacionalidad {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Nacionalidad {
    type Draft = NacionalidadDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> NacionalidadDraft {
        NacionalidadDraft {
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &NacionalidadDraft,
        _existing: &[Nacionalidad],
        _exclude: Option<u32>,
    ) -> Result<NacionalidadDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre de la nacionalidad es requerido")?;
        check_max_len(
            &nombre,
            20,
            "El nombre de la nacionalidad no puede exceder 20 caracteres",
        )?;
        Ok(NacionalidadDraft { nombre })
    }
}
