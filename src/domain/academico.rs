//! Academico Record
//!
//! Faculty members (`SUPAAcademicos`), the largest screen of the system.
//! References the genero, nacionalidad and motivo catalogs and carries
//! their resolved names as navigation objects. The CURP is normalized to
//! upper case and must be exactly 18 characters; blank optional fields are
//! sent as explicit nulls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{optional_text, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};
use super::genero::Genero;
use super::motivo::Motivo;
use super::nacionalidad::Nacionalidad;

/// Default institution preset on new drafts.
pub const INSTITUCION_DEFAULT: &str = "Universidad Veracruzana";

/// A faculty member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Academico {
    #[serde(rename = "idSUPA")]
    pub id: u32,
    pub curp: String,
    pub np: u32,
    #[serde(default)]
    pub paterno: Option<String>,
    #[serde(default)]
    pub materno: Option<String>,
    pub nombre: String,
    #[serde(rename = "idCatGeneros")]
    pub genero_id: u32,
    #[serde(rename = "idCatNacionalidad")]
    pub nacionalidad_id: u32,
    pub institucion: String,
    #[serde(rename = "idPRODEP")]
    pub prodep_id: u32,
    #[serde(rename = "cuentaUV", default)]
    pub cuenta_uv: Option<String>,
    pub baja: bool,
    #[serde(rename = "fechaBaja", default)]
    pub fecha_baja: Option<DateTime<Utc>>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(rename = "idCatMotivos")]
    pub motivo_id: u32,
    #[serde(rename = "idCatGenerosNavigation", default, skip_serializing_if = "Option::is_none")]
    pub genero: Option<Genero>,
    #[serde(
        rename = "idCatNacionalidadNavigation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nacionalidad: Option<Nacionalidad>,
    #[serde(rename = "idCatMotivosNavigation", default, skip_serializing_if = "Option::is_none")]
    pub motivo: Option<Motivo>,
}

impl Academico {
    /// "{nombre} {paterno} {materno}" with missing parts skipped.
    pub fn nombre_completo(&self) -> String {
        format!(
            "{} {} {}",
            self.nombre,
            self.paterno.as_deref().unwrap_or(""),
            self.materno.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Editable fields of an [`Academico`]
#[derive(Debug, Clone, Serialize)]
pub struct AcademicoDraft {
    #[serde(rename = "idSUPA", skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub curp: String,
    pub np: Option<u32>,
    pub paterno: Option<String>,
    pub materno: Option<String>,
    pub nombre: String,
    #[serde(rename = "idCatGeneros")]
    pub genero_id: Option<u32>,
    #[serde(rename = "idCatNacionalidad")]
    pub nacionalidad_id: Option<u32>,
    pub institucion: String,
    #[serde(rename = "idPRODEP")]
    pub prodep_id: Option<u32>,
    #[serde(rename = "cuentaUV")]
    pub cuenta_uv: Option<String>,
    pub baja: bool,
    #[serde(rename = "fechaBaja")]
    pub fecha_baja: Option<DateTime<Utc>>,
    pub observaciones: Option<String>,
    #[serde(rename = "idCatMotivos")]
    pub motivo_id: u32,
}

impl Default for AcademicoDraft {
    fn default() -> Self {
        Self {
            id: None,
            curp: String::new(),
            np: None,
            paterno: None,
            materno: None,
            nombre: String::new(),
            genero_id: None,
            nacionalidad_id: None,
            institucion: INSTITUCION_DEFAULT.to_string(),
            prodep_id: None,
            cuenta_uv: None,
            baja: false,
            fecha_baja: None,
            observaciones: None,
            motivo_id: 1,
        }
    }
}

impl CatalogDraft for AcademicoDraft {
    fn with_record_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for Academico {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Academico {
    type Draft = AcademicoDraft;

    fn display_name(&self) -> String {
        self.nombre_completo()
    }

    fn matches(&self, term: &str) -> bool {
        let genero = self.genero.as_ref().map(|g| g.descripcion.as_str()).unwrap_or("");
        let nacionalidad = self
            .nacionalidad
            .as_ref()
            .map(|n| n.nombre.as_str())
            .unwrap_or("");
        self.curp.to_lowercase().contains(term)
            || self.nombre_completo().to_lowercase().contains(term)
            || self.np.to_string().contains(term)
            || self
                .cuenta_uv
                .as_ref()
                .map_or(false, |c| c.to_lowercase().contains(term))
            || genero.to_lowercase().contains(term)
            || nacionalidad.to_lowercase().contains(term)
            || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> AcademicoDraft {
        AcademicoDraft {
            id: None,
            curp: self.curp.clone(),
            np: Some(self.np),
            paterno: self.paterno.clone(),
            materno: self.materno.clone(),
            nombre: self.nombre.clone(),
            genero_id: Some(self.genero_id),
            nacionalidad_id: Some(self.nacionalidad_id),
            institucion: self.institucion.clone(),
            prodep_id: Some(self.prodep_id),
            cuenta_uv: self.cuenta_uv.clone(),
            baja: self.baja,
            fecha_baja: self.fecha_baja,
            observaciones: self.observaciones.clone(),
            motivo_id: self.motivo_id,
        }
    }

    fn validate(
        draft: &AcademicoDraft,
        _existing: &[Academico],
        _exclude: Option<u32>,
    ) -> Result<AcademicoDraft, ValidationError> {
        let curp = require_text(&draft.curp, "El CURP es requerido")?.to_uppercase();
        if curp.chars().count() != 18 {
            return Err(ValidationError::Length(
                "El CURP debe tener 18 caracteres".to_string(),
            ));
        }
        let np = draft.np.ok_or_else(|| {
            ValidationError::Required("El número de personal (NP) es requerido".to_string())
        })?;
        let nombre = require_text(&draft.nombre, "El nombre es requerido")?;
        let genero_id = draft.genero_id.ok_or_else(|| {
            ValidationError::Required("Debe seleccionar un género".to_string())
        })?;
        let nacionalidad_id = draft.nacionalidad_id.ok_or_else(|| {
            ValidationError::Required("Debe seleccionar una nacionalidad".to_string())
        })?;
        let prodep_id = draft.prodep_id.ok_or_else(|| {
            ValidationError::Required("El ID PRODEP es requerido".to_string())
        })?;

        Ok(AcademicoDraft {
            id: draft.id,
            curp,
            np: Some(np),
            paterno: optional_text(&draft.paterno),
            materno: optional_text(&draft.materno),
            nombre,
            genero_id: Some(genero_id),
            nacionalidad_id: Some(nacionalidad_id),
            institucion: draft.institucion.trim().to_string(),
            prodep_id: Some(prodep_id),
            cuenta_uv: optional_text(&draft.cuenta_uv),
            baja: draft.baja,
            fecha_baja: draft.fecha_baja,
            observaciones: optional_text(&draft.observaciones),
            motivo_id: draft.motivo_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> AcademicoDraft {
        AcademicoDraft {
            curp: "gamc800101hverrl09".to_string(),
            np: Some(12345),
            nombre: "Carlos".to_string(),
            genero_id: Some(1),
            nacionalidad_id: Some(1),
            prodep_id: Some(77),
            ..AcademicoDraft::default()
        }
    }

    #[test]
    fn test_default_draft_presets() {
        let draft = AcademicoDraft::default();
        assert_eq!(draft.institucion, INSTITUCION_DEFAULT);
        assert!(!draft.baja);
        assert_eq!(draft.motivo_id, 1);
    }

    #[test]
    fn test_validate_uppercases_curp() {
        let normalized = Academico::validate(&valid_draft(), &[], None).unwrap();
        assert_eq!(normalized.curp, "GAMC800101HVERRL09");
    }

    #[test]
    fn test_validate_rejects_short_curp() {
        let mut draft = valid_draft();
        draft.curp = "GAMC80".to_string();
        let err = Academico::validate(&draft, &[], None).unwrap_err();
        assert_eq!(err.to_string(), "El CURP debe tener 18 caracteres");
    }

    #[test]
    fn test_blank_optionals_become_null() {
        let mut draft = valid_draft();
        draft.paterno = Some("  ".to_string());
        draft.cuenta_uv = Some("".to_string());
        let normalized = Academico::validate(&draft, &[], None).unwrap();
        let body = serde_json::to_value(&normalized).unwrap();
        assert!(body["paterno"].is_null());
        assert!(body["cuentaUV"].is_null());
        assert_eq!(body["idCatMotivos"], 1);
    }

    #[test]
    fn test_nombre_completo_skips_missing_parts() {
        let academico = Academico {
            id: 1,
            curp: "GAMC800101HVERRL09".to_string(),
            np: 1,
            paterno: Some("García".to_string()),
            materno: None,
            nombre: "Carlos".to_string(),
            genero_id: 1,
            nacionalidad_id: 1,
            institucion: INSTITUCION_DEFAULT.to_string(),
            prodep_id: 1,
            cuenta_uv: None,
            baja: false,
            fecha_baja: None,
            observaciones: None,
            motivo_id: 1,
            genero: None,
            nacionalidad: None,
            motivo: None,
        };
        assert_eq!(academico.nombre_completo(), "Carlos García");
    }
}
