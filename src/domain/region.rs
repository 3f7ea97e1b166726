//! Region Catalog
//!
//! University regions (`SUPACatRegion`). The backend rejects duplicates
//! itself, so the draft carries no client-side uniqueness rule.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A university region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "idCatRegion")]
    pub id: u32,
    #[serde(rename = "dregion")]
    pub nombre: String,
}

/// Editable fields of a [`Region`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegionDraft {
    #[serde(rename = "dregion")]
    pub nombre: String,
}

impl CatalogDraft for RegionDraft {}

impl Entity for Region {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Region {
    type Draft = RegionDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> RegionDraft {
        RegionDraft {
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &RegionDraft,
        _existing: &[Region],
        _exclude: Option<u32>,
    ) -> Result<RegionDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre de la región es requerido")?;
        check_max_len(&nombre, 50, "El nombre de la región no puede exceder 50 caracteres")?;
        Ok(RegionDraft { nombre })
    }
}
