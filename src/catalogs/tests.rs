//! Catalog Wiring Tests
//!
//! The composite views over in-memory collections, plus spot checks on the
//! per-catalog configuration data (the endpoint casing drifts are real and
//! load-bearing).

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::catalogs::{
        academicos_config, areas_config, entidades_config, niveles_estudios_config,
        periodos_config, AcademicosView, EntidadesView, ACADEMICOS_ENDPOINT, AREAS_ENDPOINT,
        ENTIDADES_AREAS_ENDPOINT, GRADO_CA_ENDPOINT, ROLES_ENDPOINT,
    };
    use crate::domain::{
        Academico, AcademicoDraft, Area, AreaDraft, Entidad, EntidadDraft, Genero, GeneroDraft,
        Motivo, MotivoDraft, Nacionalidad, NacionalidadDraft, Region, RegionDraft,
        INSTITUCION_DEFAULT,
    };
    use crate::repository::{ApiError, MemoryCollection};
    use crate::store::{AutoConfirm, Mutation, NotificationSink, RecoveryPolicy, Severity};

    #[derive(Default)]
    struct RecordingSink {
        notices: Mutex<Vec<(String, Severity)>>,
    }

    impl RecordingSink {
        fn notices(&self) -> Vec<(String, Severity)> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, message: &str, severity: Severity) {
            self.notices.lock().unwrap().push((message.to_string(), severity));
        }
    }

    fn entidad(id: u32, nombre: &str, area_id: u32, region_id: u32) -> Entidad {
        Entidad {
            id,
            nombre: nombre.to_string(),
            area_id,
            region_id,
            identidad_uv: format!("UV-{id:02}"),
            area: None,
            region: None,
        }
    }

    struct EntidadesFixture {
        view: EntidadesView,
        entidades: Arc<MemoryCollection<Entidad>>,
        areas: Arc<MemoryCollection<Area>>,
        regiones: Arc<MemoryCollection<Region>>,
        sink: Arc<RecordingSink>,
    }

    fn entidades_fixture() -> EntidadesFixture {
        let entidades = Arc::new(MemoryCollection::new(|id, draft: &EntidadDraft| Entidad {
            id,
            nombre: draft.nombre.clone(),
            area_id: draft.area_id.unwrap_or(0),
            region_id: draft.region_id.unwrap_or(0),
            identidad_uv: draft.identidad_uv.clone(),
            area: None,
            region: None,
        }));
        let areas = Arc::new(MemoryCollection::new(|id, draft: &AreaDraft| Area {
            id,
            nombre: draft.nombre.clone(),
        }));
        let regiones = Arc::new(MemoryCollection::new(|id, draft: &RegionDraft| Region {
            id,
            nombre: draft.nombre.clone(),
        }));
        let sink = Arc::new(RecordingSink::default());
        let view = EntidadesView::with_clients(
            entidades.clone(),
            areas.clone(),
            regiones.clone(),
            sink.clone(),
            Arc::new(AutoConfirm),
        );
        EntidadesFixture {
            view,
            entidades,
            areas,
            regiones,
            sink,
        }
    }

    #[tokio::test]
    async fn test_entidades_load_populates_list_and_lookups() {
        let f = entidades_fixture();
        f.areas.seed(vec![Area {
            id: 2,
            nombre: "Técnica".to_string(),
        }]);
        f.regiones.seed(vec![Region {
            id: 1,
            nombre: "Xalapa".to_string(),
        }]);
        f.entidades.seed(vec![entidad(9, "Facultad de Física", 2, 1)]);

        f.view.store().load().await;

        assert_eq!(f.view.store().items().len(), 1);
        assert_eq!(f.view.areas().len(), 1);
        assert_eq!(f.view.area_name(2), "Técnica");
        assert_eq!(f.view.region_name(1), "Xalapa");
    }

    #[tokio::test]
    async fn test_entidades_lookup_failure_degrades_silently() {
        let f = entidades_fixture();
        f.entidades.seed(vec![entidad(9, "Facultad de Física", 2, 1)]);
        f.areas.fail_next(ApiError::Status(500));

        f.view.store().load().await;

        assert_eq!(f.view.store().items().len(), 1);
        assert!(f.view.areas().is_empty());
        // composite loads never notify; failures only degrade
        assert!(f.sink.notices().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_lookup_resolves_to_na() {
        let f = entidades_fixture();
        f.view.store().load().await;

        assert_eq!(f.view.area_name(99), "N/A");
        assert_eq!(f.view.region_name(99), "N/A");
    }

    #[tokio::test]
    async fn test_entidades_mutation_resyncs_lookups() {
        let f = entidades_fixture();
        f.entidades.seed(vec![entidad(9, "Facultad de Física", 2, 1)]);
        f.view.store().load().await;
        assert!(f.view.areas().is_empty());

        // a lookup row appears server-side; the next mutation's reload
        // must pick it up without a dedicated lookup call
        f.areas.seed(vec![Area {
            id: 2,
            nombre: "Técnica".to_string(),
        }]);
        f.view.store().delete(9).await;

        assert_eq!(f.view.area_name(2), "Técnica");
        assert!(f.view.store().items().is_empty());
    }

    #[tokio::test]
    async fn test_academicos_view_resolves_lookup_names() {
        let academicos = Arc::new(MemoryCollection::new(|id, draft: &AcademicoDraft| {
            Academico {
                id,
                curp: draft.curp.clone(),
                np: draft.np.unwrap_or(0),
                paterno: draft.paterno.clone(),
                materno: draft.materno.clone(),
                nombre: draft.nombre.clone(),
                genero_id: draft.genero_id.unwrap_or(0),
                nacionalidad_id: draft.nacionalidad_id.unwrap_or(0),
                institucion: draft.institucion.clone(),
                prodep_id: draft.prodep_id.unwrap_or(0),
                cuenta_uv: draft.cuenta_uv.clone(),
                baja: draft.baja,
                fecha_baja: draft.fecha_baja,
                observaciones: draft.observaciones.clone(),
                motivo_id: draft.motivo_id,
                genero: None,
                nacionalidad: None,
                motivo: None,
            }
        }));
        let generos = Arc::new(MemoryCollection::new(|id, draft: &GeneroDraft| Genero {
            id,
            descripcion: draft.descripcion.clone(),
        }));
        let nacionalidades =
            Arc::new(MemoryCollection::new(|id, draft: &NacionalidadDraft| Nacionalidad {
                id,
                nombre: draft.nombre.clone(),
            }));
        let motivos = Arc::new(MemoryCollection::new(|id, draft: &MotivoDraft| Motivo {
            id,
            nombre: draft.nombre.clone(),
        }));
        generos.seed(vec![Genero {
            id: 1,
            descripcion: "Femenino".to_string(),
        }]);
        motivos.seed(vec![Motivo {
            id: 1,
            nombre: "Jubilación".to_string(),
        }]);

        let view = AcademicosView::with_clients(
            academicos,
            generos,
            nacionalidades,
            motivos,
            Arc::new(RecordingSink::default()),
            Arc::new(AutoConfirm),
        );
        view.store().load().await;

        assert_eq!(view.genero_name(1), "Femenino");
        assert_eq!(view.motivo_name(1), "Jubilación");
        assert_eq!(view.nacionalidad_name(1), "N/A");
        assert!(view.nacionalidades().is_empty());
    }

    #[tokio::test]
    async fn test_composite_create_validates_before_any_call() {
        let f = entidades_fixture();
        // a draft missing its selections must never reach the wire
        f.view
            .store()
            .create(EntidadDraft {
                nombre: "Facultad de Física".to_string(),
                ..EntidadDraft::default()
            })
            .await;

        assert!(f.entidades.calls().is_empty());
        assert_eq!(
            f.sink.notices(),
            vec![("El identificador UV es requerido".to_string(), Severity::Warning)]
        );
    }

    // ========================
    // Configuration data
    // ========================

    #[test]
    fn test_endpoint_casing_is_preserved_per_catalog() {
        assert_eq!(AREAS_ENDPOINT, "http://148.226.168.138/supa/api/SUPACatAreas");
        assert_eq!(ROLES_ENDPOINT, "http://148.226.168.138/SUPA/api/SUPACatRoles");
        assert_eq!(GRADO_CA_ENDPOINT, "http://148.226.168.138/supa/Api/SUPACatGradoCA");
        assert_eq!(ACADEMICOS_ENDPOINT, "http://148.226.168.138/SUPA/api/SUPAAcademicos");
        // the entidades screen reads areas from its own casing of the path
        assert_eq!(
            ENTIDADES_AREAS_ENDPOINT,
            "http://148.226.168.138/SUPA/api/SUPACatAreas"
        );
        assert_ne!(ENTIDADES_AREAS_ENDPOINT, AREAS_ENDPOINT);
    }

    #[test]
    fn test_recovery_policies_per_catalog() {
        assert_eq!(areas_config().recovery, RecoveryPolicy::STANDARD);
        assert_eq!(periodos_config().recovery, RecoveryPolicy::STANDARD);
        assert_eq!(niveles_estudios_config().recovery, RecoveryPolicy::TOLERANT);
        assert_eq!(entidades_config().recovery, RecoveryPolicy::TOLERANT);

        let academicos = academicos_config();
        assert!(academicos.recovery.implies_success(Mutation::Update, 204));
        assert!(!academicos.recovery.implies_success(Mutation::Create, 204));
    }

    #[test]
    fn test_academicos_conflict_texts_differ_per_operation() {
        let config = academicos_config();
        assert_eq!(config.text.duplicate_create, "Ya existe un académico con este CURP o NP");
        assert_eq!(config.text.duplicate_update, "Ya existe un académico con estos datos");
    }

    #[test]
    fn test_academico_draft_presets() {
        let draft = AcademicoDraft::default();
        assert_eq!(draft.institucion, INSTITUCION_DEFAULT);
        assert_eq!(draft.motivo_id, 1);
    }
}
