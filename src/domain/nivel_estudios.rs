//! NivelEstudios Catalog
//!
//! Study levels (`SUPACatNivelEstudios`). This endpoint answers updates and
//! deletes with empty 204 replies, so its store runs with the
//! empty-reply-tolerant recovery policy.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A study level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NivelEstudios {
    #[serde(rename = "idCatNivelEstudios")]
    pub id: u32,
    #[serde(rename = "descripcionNivelEstudios")]
    pub descripcion: String,
}

/// Editable fields of a [`NivelEstudios`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct NivelEstudiosDraft {
    #[serde(rename = "idCatNivelEstudios", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "descripcionNivelEstudios")]
    pub descripcion: String,
}

impl CatalogDraft for NivelEstudiosDraft {
    fn with_record_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for NivelEstudios {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for NivelEstudios {
    type Draft = NivelEstudiosDraft;

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.descripcion.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> NivelEstudiosDraft {
        NivelEstudiosDraft {
            id: None,
            descripcion: self.descripcion.clone(),
        }
    }

    fn validate(
        draft: &NivelEstudiosDraft,
        existing: &[NivelEstudios],
        exclude: Option<u32>,
    ) -> Result<NivelEstudiosDraft, ValidationError> {
        let descripcion = require_text(
            &draft.descripcion,
            "La descripción del nivel de estudios es requerida",
        )?;
        check_max_len(
            &descripcion,
            100,
            "La descripción del nivel de estudios no puede exceder 100 caracteres",
        )?;

        let duplicated = existing
            .iter()
            .filter(|nivel| Some(nivel.id) != exclude)
            .any(|nivel| nivel.descripcion.to_lowercase() == descripcion.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe un nivel de estudios con este nombre".to_string(),
            ));
        }

        Ok(NivelEstudiosDraft {
            id: draft.id,
            descripcion,
        })
    }
}
