//! Disciplina Catalog
//!
//! Academic disciplines (`SUPACatDisciplinas`). The backend serves some
//! legacy rows with a null name; they still take part in filtering and in
//! the duplicate check with an empty-string fallback.

use serde::{Deserialize, Serialize};

use super::entity::{check_max_len, require_text, CatalogDraft, CatalogRecord, Entity, ValidationError};

/// An academic discipline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disciplina {
    #[serde(rename = "idCatDisciplinas")]
    pub id: u32,
    #[serde(rename = "ddisciplina")]
    pub nombre: Option<String>,
}

/// Editable fields of a [`Disciplina`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisciplinaDraft {
    #[serde(rename = "ddisciplina")]
    pub nombre: String,
}

impl CatalogDraft for DisciplinaDraft {}

impl Disciplina {
    fn nombre_or_empty(&self) -> &str {
        self.nombre.as_deref().unwrap_or("")
    }
}

impl Entity for Disciplina {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl CatalogRecord for Disciplina {
    type Draft = DisciplinaDraft;

    fn display_name(&self) -> String {
        self.nombre_or_empty().to_string()
    }

    fn matches(&self, term: &str) -> bool {
        self.nombre_or_empty().to_lowercase().contains(term)
            || self.id.to_string().contains(term)
    }

    fn edit_draft(&self) -> DisciplinaDraft {
        DisciplinaDraft {
            nombre: self.nombre_or_empty().to_string(),
        }
    }

    fn validate(
        draft: &DisciplinaDraft,
        existing: &[Disciplina],
        exclude: Option<u32>,
    ) -> Result<DisciplinaDraft, ValidationError> {
        let nombre = require_text(&draft.nombre, "El nombre de la disciplina es requerido")?;
        check_max_len(
            &nombre,
            50,
            "El nombre de la disciplina no puede exceder 50 caracteres",
        )?;

        let duplicated = existing
            .iter()
            .filter(|disciplina| Some(disciplina.id) != exclude)
            .any(|disciplina| disciplina.nombre_or_empty().to_lowercase() == nombre.to_lowercase());
        if duplicated {
            return Err(ValidationError::Duplicate(
                "Ya existe una disciplina con este nombre".to_string(),
            ));
        }

        Ok(DisciplinaDraft { nombre })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_name_participates_in_search() {
        let disciplina = Disciplina { id: 42, nombre: None };
        assert!(disciplina.matches("42"));
        assert!(!disciplina.matches("historia"));
    }

    #[test]
    fn test_null_name_never_collides() {
        let existing = vec![Disciplina { id: 1, nombre: None }];
        let draft = DisciplinaDraft {
            nombre: "Historia".to_string(),
        };
        assert!(Disciplina::validate(&draft, &existing, None).is_ok());
    }
}
