//! Entidad Catalog
//!
//! Academic entities (`SUPACatEntidades`). Composite record: references an
//! area and a region and carries their resolved names as read-only
//! navigation objects in the GET payload. Navigations are never sent back.

use serde::{Deserialize, Serialize};

use super::area::Area;
use super::entity::{require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};
use super::region::Region;

/// An academic entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entidad {
    #[serde(rename = "idCatEntidades")]
    pub id: u32,
    #[serde(rename = "dentidad")]
    pub nombre: String,
    #[serde(rename = "idCatAreas")]
    pub area_id: u32,
    #[serde(rename = "idCatRegion")]
    pub region_id: u32,
    #[serde(rename = "identidadUV")]
    pub identidad_uv: String,
    #[serde(rename = "idCatAreasNavigation", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    #[serde(rename = "idCatRegionNavigation", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

/// Editable fields of an [`Entidad`]. The area and region stay optional
/// until validation so an unselected dropdown can be reported to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntidadDraft {
    #[serde(rename = "idCatEntidades", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "dentidad")]
    pub nombre: String,
    #[serde(rename = "idCatAreas")]
    pub area_id: Option<u32>,
    #[serde(rename = "idCatRegion")]
    pub region_id: Option<u32>,
    #[serde(rename = "identidadUV")]
    pub identidad_uv: String,
}

impl CatalogDraft for EntidadDraft {
    fn with_record_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Entidad {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Entidad {
    type Draft = EntidadDraft;

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn matches(&self, term: &str) -> bool {
        let area = self.area.as_ref().map(|a| a.nombre.as_str()).unwrap_or("");
        let region = self.region.as_ref().map(|r| r.nombre.as_str()).unwrap_or("");
        self.nombre.to_lowercase().contains(term)
            || self.identidad_uv.to_lowercase().contains(term)
            || area.to_lowercase().contains(term)
            || region.to_lowercase().contains(term)
            || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> EntidadDraft {
        EntidadDraft {
            id: None,
            nombre: self.nombre.clone(),
            area_id: Some(self.area_id),
            region_id: Some(self.region_id),
            identidad_uv: self.identidad_uv.clone(),
        }
    }

    fn validate(
        draft: &EntidadDraft,
        _existing: &[Entidad],
        _exclude: Option<u32>,
    ) -> Result<EntidadDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre de la entidad es requerido")?;
        let identidad_uv = require_text(&draft.identidad_uv, "El identificador UV es requerido")?;
        let area_id = draft.area_id.ok_or_else(|| {
            ValidationError::Required("Debe seleccionar un área".to_string())
        })?;
        let region_id = draft.region_id.ok_or_else(|| {
            ValidationError::Required("Debe seleccionar una región".to_string())
        })?;

        Ok(EntidadDraft {
            id: draft.id,
            nombre,
            area_id: Some(area_id),
            region_id: Some(region_id),
            identidad_uv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entidad() -> Entidad {
        Entidad {
            id: 9,
            nombre: "Facultad de Física".to_string(),
            area_id: 2,
            region_id: 1,
            identidad_uv: "FF-01".to_string(),
            area: Some(Area {
                id: 2,
                nombre: "Técnica".to_string(),
            }),
            region: None,
        }
    }

    #[test]
    fn test_search_matches_navigation_names() {
        assert!(entidad().matches("técnica"));
        assert!(entidad().matches("ff-01"));
        assert!(!entidad().matches("xalapa"));
    }

    #[test]
    fn test_validate_requires_selections() {
        let draft = EntidadDraft {
            nombre: "Facultad de Física".to_string(),
            identidad_uv: "FF-01".to_string(),
            ..EntidadDraft::default()
        };
        let err = Entidad::validate(&draft, &[], None).unwrap_err();
        assert_eq!(err.to_string(), "Debe seleccionar un área");
    }

    #[test]
    fn test_navigations_are_read_only() {
        let draft = entidad().edit_draft().with_record_id(9);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["idCatEntidades"], 9);
        assert!(body.get("idCatAreasNavigation").is_none());
    }
}
