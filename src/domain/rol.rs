//! Rol Catalog
//!
//! Personnel roles (`SUPACatRoles`).

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A personnel role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    #[serde(rename = "idCatRol")]
    pub id: u32,
    #[serde(rename = "dRol")]
    pub nombre: String,
}

/// Editable fields of a [`Rol`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RolDraft {
    #[serde(rename = "dRol")]
    pub nombre: String,
}

impl CatalogDraft for RolDraft {}

impl Entity for Rol {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Rol {
    type Draft = RolDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> RolDraft {
        RolDraft {
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &RolDraft,
        _existing: &[Rol],
        _exclude: Option<u32>,
    ) -> Result<RolDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre del rol es requerido")?;
        check_max_len(&nombre, 15, "El nombre del rol no puede exceder 15 caracteres")?;
        Ok(RolDraft { nombre })
    }
}
