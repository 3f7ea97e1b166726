//! Periodo Catalog
//!
//! Academic periods (`SUPACatPeriodos`): a description plus optional start
//! and end dates. Dates travel as ISO calendar dates and missing ones are
//! sent as explicit nulls; the search term also matches their textual form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// An academic period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Periodo {
    #[serde(rename = "idCatPeriodos")]
    pub id: u32,
    #[serde(rename = "descripcionPeriodo")]
    pub descripcion: String,
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(rename = "fechaTermino")]
    pub fecha_termino: Option<NaiveDate>,
}

/// Editable fields of a [`Periodo`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodoDraft {
    #[serde(rename = "descripcionPeriodo")]
    pub descripcion: String,
    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(rename = "fechaTermino")]
    pub fecha_termino: Option<NaiveDate>,
}

impl CatalogDraft for PeriodoDraft {}

impl Entity for Periodo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Periodo {
    type Draft = PeriodoDraft;

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn matches(&self, term: &str) -> bool {
        let date_matches = |fecha: &Option<NaiveDate>| {
            fecha.map_or(false, |f| f.to_string().contains(term))
        };
        self.descripcion.to_lowercase().contains(term)
            || self.id.to_string().contains(term)
            || date_matches(&self.fecha_inicio)
            || date_matches(&self.fecha_termino)
    }

    fn edit_draft(&self) -> PeriodoDraft {
        PeriodoDraft {
            descripcion: self.descripcion.clone(),
            fecha_inicio: self.fecha_inicio,
            fecha_termino: self.fecha_termino,
        }
    }

    fn validate(
        draft: &PeriodoDraft,
        _existing: &[Periodo],
        _exclude: Option<u32>,
    ) -> Result<PeriodoDraft, ValidationError> {
        let descripcion = require_text(&draft.descripcion, "La descripción del periodo es requerida")?;
        check_max_len(
            &descripcion,
            100,
            "La descripción del periodo no puede exceder 100 caracteres",
        )?;
        Ok(PeriodoDraft {
            descripcion,
            fecha_inicio: draft.fecha_inicio,
            fecha_termino: draft.fecha_termino,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periodo() -> Periodo {
        Periodo {
            id: 3,
            descripcion: "Febrero-Julio 2025".to_string(),
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 2, 1),
            fecha_termino: None,
        }
    }

    #[test]
    fn test_search_matches_dates() {
        assert!(periodo().matches("2025-02"));
        assert!(!periodo().matches("2025-08"));
    }

    #[test]
    fn test_missing_dates_serialize_as_null() {
        let draft = PeriodoDraft {
            descripcion: "Agosto 2025".to_string(),
            fecha_inicio: None,
            fecha_termino: None,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body["fechaInicio"].is_null());
        assert!(body["fechaTermino"].is_null());
    }
}
