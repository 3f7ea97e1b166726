//! Motivo Catalog
//!
//! Leave/termination reasons (`SUPACatMotivos`).

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A termination reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motivo {
    #[serde(rename = "idCatMotivos")]
    pub id: u32,
    #[serde(rename = "dMotivos")]
    pub nombre: String,
}

/// Editable fields of a [`Motivo`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct MotivoDraft {
    #[serde(rename = "dMotivos")]
    pub nombre: String,
}

impl CatalogDraft for MotivoDraft {}

impl Entity for Motivo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Motivo {
    type Draft = MotivoDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> MotivoDraft {
        MotivoDraft {
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &MotivoDraft,
        _existing: &[Motivo],
        _exclude: Option<u32>,
    ) -> Result<MotivoDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre del motivo es requerido")?;
        check_max_len(&nombre, 100, "El nombre del motivo no puede exceder 100 caracteres")?;
        Ok(MotivoDraft { nombre })
    }
}
