//! GradoCa Catalog
//!
//! Academic-body degrees (`SUPACatGradoCA`): a description plus its
//! abbreviation, both required and length bounded.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// An academic-body degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradoCa {
    #[serde(rename = "idCatGradoCA")]
    pub id: u32,
    #[serde(rename = "descripcionGrado")]
    pub descripcion: String,
    pub abreviatura: String,
}

/// Editable fields of a [`GradoCa`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct GradoCaDraft {
    #[serde(rename = "descripcionGrado")]
    pub descripcion: String,
    pub abreviatura: String,
}

impl CatalogDraft for GradoCaDraft {}

impl Entity for GradoCa {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for GradoCa {
    type Draft = GradoCaDraft;

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.descripcion.to_lowercase().contains(term)
            || self.abreviatura.to_lowercase().contains(term)
            || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> GradoCaDraft {
        GradoCaDraft {
            descripcion: self.descripcion.clone(),
            abreviatura: self.abreviatura.clone(),
        }
    }

    fn validate(
        draft: &GradoCaDraft,
        _existing: &[GradoCa],
        _exclude: Option<u32>,
    ) -> Result<GradoCaDraft, ValidationError> {
        let descripcion = require_text(&draft.descripcion, "La descripción del grado es requerida")?;
        let abreviatura = require_text(&draft.abreviatura, "La abreviatura del grado es requerida")?;
        check_max_len(
            &descripcion,
            255,
            "La descripción del grado no puede exceder 255 caracteres",
        )?;
        check_max_len(
            &abreviatura,
            100,
            "La abreviatura del grado no puede exceder 100 caracteres",
        )?;
        Ok(GradoCaDraft {
            descripcion,
            abreviatura,
        })
    }
}
