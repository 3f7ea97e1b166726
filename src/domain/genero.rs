//! Genero Catalog
//!
//! Gender descriptions (`SUPACatGeneros`). Short field, duplicate-checked
//! locally before submitting.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A gender entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genero {
    #[serde(rename = "idCatGeneros")]
    pub id: u32,
    #[serde(rename = "dGenero")]
    pub descripcion: String,
}

/// Editable fields of a [`Genero`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneroDraft {
    #[serde(rename = "dGenero")]
    pub descripcion: String,
}

impl CatalogDraft for GeneroDraft {}

impl Entity for Genero {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Genero {
    type Draft = GeneroDraft;

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.descripcion.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> GeneroDraft {
        GeneroDraft {
            descripcion: self.descripcion.clone(),
        }
    }

    fn validate(
        draft: &GeneroDraft,
        existing: &[Genero],
        exclude: Option<u32>,
    ) -> Result<GeneroDraft, ValidationError> {
        let descripcion = require_text(&draft.descripcion, "La descripción del género es requerida")?;
        check_max_len(
            &descripcion,
            10,
            "La descripción del género no puede exceder 10 caracteres",
        )?;

        let duplicated = existing
            .iter()
            .filter(|genero| Some(genero.id) != exclude)
            .any(|genero| genero.descripcion.to_lowercase() == descripcion.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe un género con esta descripción".to_string(),
            ));
        }

        Ok(GeneroDraft { descripcion })
    }
}
