//! Area Catalog
//!
//! Knowledge areas (`SUPACatAreas`). One descriptive field; the backend
//! expects the id repeated inside the update body.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// A knowledge area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(rename = "idCatAreas")]
    pub id: u32,
    #[serde(rename = "darea")]
    pub nombre: String,
}

/// Editable fields of an [`Area`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct AreaDraft {
    #[serde(rename = "idCatAreas", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "darea")]
    pub nombre: String,
}

impl CatalogDraft for AreaDraft {
    fn with_record_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Area {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Area {
    type Draft = AreaDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre.to_lowercase().contains(term) || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> AreaDraft {
        AreaDraft {
            id: None,
            nombre: self.nombre.clone(),
        }
    }

    fn validate(
        draft: &AreaDraft,
        existing: &[Area],
        exclude: Option<u32>,
    ) -> Result<AreaDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre del área es requerido")?;
        check_max_len(&nombre, 100, "El nombre del área no puede exceder 100 caracteres")?;

        let duplicated = existing
            .iter()
            .filter(|area| Some(area.id) != exclude)
            .any(|area| area.nombre.to_lowercase() == nombre.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe un área con este nombre".to_string(),
            ));
        }

        Ok(AreaDraft { id: draft.id, nombre })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Area> {
        vec![Area {
            id: 1,
            nombre: "Humanidades".to_string(),
        }]
    }

    #[test]
    fn test_validate_trims_name() {
        let draft = AreaDraft {
            id: None,
            nombre: "  Artes  ".to_string(),
        };
        let normalized = Area::validate(&draft, &existing(), None).unwrap();
        assert_eq!(normalized.nombre, "Artes");
    }

    #[test]
    fn test_validate_rejects_duplicate_case_insensitive() {
        let draft = AreaDraft {
            id: None,
            nombre: "humanidades".to_string(),
        };
        let err = Area::validate(&draft, &existing(), None).unwrap_err();
        assert_eq!(err.to_string(), "Ya existe un área con este nombre");
    }

    #[test]
    fn test_validate_excludes_edited_record() {
        let draft = AreaDraft {
            id: None,
            nombre: "Humanidades".to_string(),
        };
        assert!(Area::validate(&draft, &existing(), Some(1)).is_ok());
    }

    #[test]
    fn test_update_body_carries_id() {
        let draft = AreaDraft {
            id: None,
            nombre: "Artes".to_string(),
        }
        .with_record_id(7);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["idCatAreas"], 7);
        assert_eq!(body["darea"], "Artes");
    }

    #[test]
    fn test_create_body_omits_id() {
        let draft = AreaDraft {
            id: None,
            nombre: "Artes".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("idCatAreas").is_none());
    }
}
