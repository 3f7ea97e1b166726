//! Store Integration Tests
//!
//! The CRUD synchronization pattern exercised end to end against the
//! in-memory collection: filtering, pre-flight validation, the
//! confirmation gate, conflict classification, and the implied-success
//! recovery with its delayed re-sync (driven with a paused clock).

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::catalogs::areas_config;
    use crate::domain::{Area, AreaDraft};
    use crate::repository::{ApiError, CollectionCall, MemoryCollection};
    use crate::store::{
        CatalogConfig, CatalogStore, ConfirmationGate, NotificationSink, RecoveryPolicy, Severity,
        CONNECTION_ERROR,
    };

    #[derive(Default)]
    struct RecordingSink {
        notices: Mutex<Vec<(String, Severity)>>,
    }

    impl RecordingSink {
        fn notices(&self) -> Vec<(String, Severity)> {
            self.notices.lock().unwrap().clone()
        }

        fn last(&self) -> (String, Severity) {
            self.notices.lock().unwrap().last().cloned().expect("no notice recorded")
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, message: &str, severity: Severity) {
            self.notices.lock().unwrap().push((message.to_string(), severity));
        }
    }

    struct ScriptedGate {
        answer: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGate {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConfirmationGate for ScriptedGate {
        async fn confirm(&self, prompt: &str) -> bool {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer
        }
    }

    struct Fixture {
        store: CatalogStore<Area>,
        collection: Arc<MemoryCollection<Area>>,
        sink: Arc<RecordingSink>,
        gate: Arc<ScriptedGate>,
    }

    fn fixture_with(config: CatalogConfig, confirm: bool) -> Fixture {
        let collection = Arc::new(MemoryCollection::new(|id, draft: &AreaDraft| Area {
            id,
            nombre: draft.nombre.clone(),
        }));
        let sink = Arc::new(RecordingSink::default());
        let gate = Arc::new(ScriptedGate::new(confirm));
        let store = CatalogStore::new(
            config,
            collection.clone(),
            sink.clone(),
            gate.clone(),
        );
        Fixture {
            store,
            collection,
            sink,
            gate,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(areas_config(), true)
    }

    fn area(id: u32, nombre: &str) -> Area {
        Area {
            id,
            nombre: nombre.to_string(),
        }
    }

    fn draft(nombre: &str) -> AreaDraft {
        AreaDraft {
            id: None,
            nombre: nombre.to_string(),
        }
    }

    // ========================
    // Filtering
    // ========================

    #[tokio::test]
    async fn test_empty_search_yields_full_list_in_order() {
        let f = fixture();
        f.collection.seed(vec![area(2, "Técnica"), area(1, "Humanidades")]);
        f.store.load().await;

        assert_eq!(f.store.filtered(), f.store.items());
        assert_eq!(f.store.filtered()[0].id, 2);

        f.store.set_search_term("   ");
        assert_eq!(f.store.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_search_matches_name_or_id() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Humanidades"), area(23, "Técnica")]);
        f.store.load().await;

        f.store.set_search_term("  HUMANI ");
        let hits = f.store.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].nombre, "Humanidades");

        f.store.set_search_term("23");
        assert_eq!(f.store.filtered()[0].id, 23);

        f.store.clear_search();
        assert_eq!(f.store.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_search_recomputes_without_network() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Humanidades")]);
        f.store.load().await;
        let calls_before = f.collection.calls().len();

        f.store.set_search_term("nada");
        f.store.clear_search();

        assert_eq!(f.collection.calls().len(), calls_before);
    }

    // ========================
    // Create
    // ========================

    #[tokio::test]
    async fn test_create_blank_name_sends_nothing() {
        let f = fixture();
        f.store.create(draft("   ")).await;

        assert!(f.collection.calls().is_empty());
        assert_eq!(
            f.sink.last(),
            ("El nombre del área es requerido".to_string(), Severity::Warning)
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_name_sends_nothing() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.store.create(draft("alpha")).await;

        assert_eq!(f.collection.calls(), vec![CollectionCall::List]);
        assert_eq!(
            f.sink.last(),
            ("Ya existe un área con este nombre".to_string(), Severity::Warning)
        );
    }

    #[tokio::test]
    async fn test_create_success_reloads_and_shows_new_record() {
        let f = fixture();
        f.store.create(draft("Beta")).await;

        assert_eq!(f.collection.calls(), vec![CollectionCall::Create, CollectionCall::List]);
        assert_eq!(
            f.sink.last(),
            ("Área creada exitosamente".to_string(), Severity::Success)
        );
        let filtered = f.store.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre, "Beta");
    }

    // ========================
    // Update
    // ========================

    #[tokio::test]
    async fn test_update_keeping_own_name_passes_validation() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.store.prepare_edit(&area(1, "Alpha"));
        f.store.update().await;

        assert!(f.collection.calls().contains(&CollectionCall::Update(1)));
        assert_eq!(
            f.sink.last(),
            ("Área actualizada exitosamente".to_string(), Severity::Success)
        );
        assert!(f.store.editing().is_none());
    }

    #[tokio::test]
    async fn test_update_without_session_warns_required() {
        let f = fixture();
        f.store.update().await;

        assert!(f.collection.calls().is_empty());
        assert_eq!(
            f.sink.last(),
            ("El nombre del área es requerido".to_string(), Severity::Warning)
        );
    }

    #[tokio::test]
    async fn test_update_duplicate_against_other_record_sends_nothing() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha"), area(2, "Beta")]);
        f.store.load().await;

        f.store.prepare_edit(&area(2, "Beta"));
        f.store.set_edit_draft(draft("ALPHA"));
        f.store.update().await;

        assert_eq!(f.collection.calls(), vec![CollectionCall::List]);
        assert_eq!(f.sink.last().1, Severity::Warning);
        // the declined edit stays open for correction
        assert!(f.store.editing().is_some());
    }

    #[tokio::test]
    async fn test_prepare_edit_replaces_prior_session() {
        let f = fixture();
        f.store.prepare_edit(&area(1, "Alpha"));
        f.store.prepare_edit(&area(2, "Beta"));

        assert_eq!(f.store.editing().unwrap().id, 2);
        assert!(!f.store.can_edit());

        f.store.cancel_edit();
        assert!(f.store.can_edit());
    }

    // ========================
    // Delete
    // ========================

    #[tokio::test]
    async fn test_delete_unknown_id_is_silent_noop() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.store.delete(99).await;

        assert!(f.gate.prompts().is_empty());
        assert_eq!(f.collection.calls(), vec![CollectionCall::List]);
        assert_eq!(f.sink.notices().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let f = fixture_with(areas_config(), false);
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.store.delete(1).await;

        assert_eq!(
            f.gate.prompts(),
            vec![
                "¿Está seguro de que desea eliminar el área \"Alpha\"?\n\nEsta acción no se puede deshacer."
                    .to_string()
            ]
        );
        assert_eq!(f.collection.calls(), vec![CollectionCall::List]);
    }

    #[tokio::test]
    async fn test_delete_success_names_record_and_clears_matching_edit() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;
        f.store.prepare_edit(&area(1, "Alpha"));

        f.store.delete(1).await;

        assert_eq!(
            f.sink.last(),
            ("Área \"Alpha\" eliminada exitosamente".to_string(), Severity::Success)
        );
        assert!(f.store.editing().is_none());
        assert!(f.store.items().is_empty());
    }

    // ========================
    // Error classification
    // ========================

    #[tokio::test]
    async fn test_conflict_statuses_name_the_conflict() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.collection.fail_next(ApiError::Status(409));
        f.store.create(draft("Beta")).await;
        assert_eq!(
            f.sink.last(),
            ("Ya existe un área con este nombre".to_string(), Severity::Error)
        );

        f.collection.fail_next(ApiError::Status(400));
        f.store.delete(1).await;
        assert_eq!(
            f.sink.last(),
            (
                "No se puede eliminar el área porque está siendo utilizada por otros registros"
                    .to_string(),
                Severity::Error
            )
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_connection_error() {
        let f = fixture();
        f.collection.fail_next(ApiError::Connection);
        f.store.create(draft("Beta")).await;

        assert_eq!(f.sink.last(), (CONNECTION_ERROR.to_string(), Severity::Error));
    }

    #[tokio::test]
    async fn test_load_failure_overwrites_list_by_default() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;
        assert_eq!(f.store.items().len(), 1);

        f.collection.fail_next(ApiError::Status(503));
        f.store.load().await;

        assert!(f.store.items().is_empty());
        assert_eq!(
            f.sink.last(),
            ("Error al cargar las áreas".to_string(), Severity::Error)
        );
    }

    #[tokio::test]
    async fn test_load_failure_can_keep_previous_list() {
        let mut config = areas_config();
        config.keep_list_on_load_error = true;
        let f = fixture_with(config, true);
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;

        f.collection.fail_next(ApiError::Connection);
        f.store.load().await;

        assert_eq!(f.store.items().len(), 1);
        assert_eq!(f.sink.last(), (CONNECTION_ERROR.to_string(), Severity::Error));
    }

    #[tokio::test]
    async fn test_unclassified_status_shows_generic_failure() {
        let f = fixture();
        // 204 is not in the areas recovery policy, so an empty reply on
        // create is just a failed create
        f.collection.fail_next(ApiError::Status(204));
        f.store.create(draft("Beta")).await;

        assert_eq!(
            f.sink.last(),
            ("Error al crear el área".to_string(), Severity::Error)
        );
    }

    // ========================
    // Implied success
    // ========================

    #[tokio::test(start_paused = true)]
    async fn test_create_500_is_implied_success_with_delayed_reload() {
        let f = fixture();
        f.collection.fail_next(ApiError::Status(500));
        f.store.create(draft("Beta")).await;

        // success reported immediately, nothing mutated locally yet
        assert_eq!(
            f.sink.last(),
            ("Área creada exitosamente".to_string(), Severity::Success)
        );
        assert_eq!(f.collection.calls(), vec![CollectionCall::Create]);
        assert!(f.store.items().is_empty());

        // the write actually landed server-side
        f.collection.seed(vec![area(1, "Beta")]);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(f.collection.list_calls(), 1);
        assert_eq!(f.store.items().len(), 1);

        // exactly one re-sync
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(f.collection.list_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_500_clears_edit_session_after_delay() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;
        f.store.prepare_edit(&area(1, "Alpha"));
        f.store.set_edit_draft(draft("Gamma"));

        f.collection.fail_next(ApiError::Status(500));
        f.store.update().await;

        assert_eq!(
            f.sink.last(),
            ("Área actualizada exitosamente".to_string(), Severity::Success)
        );
        // session survives until the re-sync fires
        assert!(f.store.editing().is_some());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(f.store.editing().is_none());
        assert_eq!(f.collection.list_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_500_reloads_once_and_leaves_edit_session() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha"), area(2, "Beta")]);
        f.store.load().await;
        f.store.prepare_edit(&area(2, "Beta"));

        f.collection.fail_next(ApiError::Status(500));
        f.store.delete(1).await;

        assert_eq!(
            f.sink.last(),
            ("Área eliminada exitosamente".to_string(), Severity::Success)
        );
        assert_eq!(f.collection.list_calls(), 1);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(f.collection.list_calls(), 2);
        assert!(f.store.editing().is_some());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(f.collection.list_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovery_is_policy_driven() {
        let mut config = areas_config();
        config.recovery = RecoveryPolicy::NONE;
        let f = fixture_with(config, true);

        f.collection.fail_next(ApiError::Status(500));
        f.store.create(draft("Beta")).await;

        assert_eq!(
            f.sink.last(),
            ("Error al crear el área".to_string(), Severity::Error)
        );
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(f.collection.list_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_aborts_pending_reload() {
        let f = fixture();
        f.collection.fail_next(ApiError::Status(500));
        f.store.create(draft("Beta")).await;

        f.store.close();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(f.collection.list_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_last_handle_aborts_pending_reload() {
        let f = fixture();
        f.collection.fail_next(ApiError::Status(500));
        f.store.create(draft("Beta")).await;

        drop(f.store);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(f.collection.list_calls(), 0);
    }

    // ========================
    // Busy flags
    // ========================

    #[tokio::test]
    async fn test_flags_settle_after_operations() {
        let f = fixture();
        f.collection.seed(vec![area(1, "Alpha")]);
        f.store.load().await;
        f.store.create(draft("Beta")).await;

        assert!(!f.store.is_loading());
        assert!(!f.store.is_creating());
        assert!(!f.store.is_busy());
        assert!(f.store.can_edit());
    }
}
