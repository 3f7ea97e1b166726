//! AreaDedica Catalog
//!
//! Dedication areas (`SUPACatAreaDedica`). Like [`super::Area`] but with
//! its own wire casing and the id repeated in the update body.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A dedication area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDedica {
    #[serde(rename = "idCatAreaDedica")]
    pub id: u32,
    #[serde(rename = "dAreaDedica")]
    pub descripcion: String,
}

/// Editable fields of an [`AreaDedica`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct AreaDedicaDraft {
    #[serde(rename = "idCatAreaDedica", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "dAreaDedica")]
    pub descripcion: String,
}

impl CatalogDraft for AreaDedicaDraft {
    fn with_record_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for AreaDedica {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for AreaDedica {
    type Draft = AreaDedicaDraft;

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.descripcion.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> AreaDedicaDraft {
        AreaDedicaDraft {
            id: None,
            descripcion: self.descripcion.clone(),
        }
    }

    fn validate(
        draft: &AreaDedicaDraft,
        existing: &[AreaDedica],
        exclude: Option<u32>,
    ) -> Result<AreaDedicaDraft, ValidationError> {
        let descripcion =
            require_text(&draft.descripcion, "La descripción del área dedicada es requerida")?;
        check_max_len(
            &descripcion,
            100,
            "La descripción del área dedicada no puede exceder 100 caracteres",
        )?;

        let duplicated = existing
            .iter()
            .filter(|area| Some(area.id) != exclude)
            .any(|area| area.descripcion.to_lowercase() == descripcion.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe un área dedicada con esta descripción".to_string(),
            ));
        }

        Ok(AreaDedicaDraft {
            id: draft.id,
            descripcion,
        })
    }
}
