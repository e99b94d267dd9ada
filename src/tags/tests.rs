//! Tag Lookup Tests
//!
//! Validates the parameter translation of the tag lookup surface and the
//! handler's delegation to the injected executor.
//!
//! ## Test Scopes
//! - **Validation**: Missing or blank asset ids are rejected.
//! - **Query Shape**: Approved-status restriction, all-tags override, escaping.
//! - **Fixed Parameters**: Output format, parameter echo and row cap.
//! - **Handler**: End-to-end translation through a stub executor.

#[cfg(test)]
mod tests {
    use crate::schema::ArchiveSchema;
    use crate::solr::executor::{EngineResponse, QueryExecutor};
    use crate::solr::params::{self, SolrParams};
    use crate::tags::handlers::{build_tag_params, handle_get_tags};
    use crate::tags::types::{TagParams, TagRequestError};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::Extension;
    use std::sync::{Arc, Mutex};

    fn input(asset_id: Option<&str>, all_tags: Option<&str>) -> TagParams {
        TagParams {
            asset_id: asset_id.map(str::to_string),
            all_tags: all_tags.map(str::to_string),
            callback: None,
        }
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_missing_asset_id_is_rejected() {
        let schema = ArchiveSchema::new();
        let result = build_tag_params(&schema, &input(None, None));

        assert_eq!(result.unwrap_err(), TagRequestError::MissingAssetId);
    }

    #[test]
    fn test_blank_asset_id_is_rejected() {
        let schema = ArchiveSchema::new();
        let result = build_tag_params(&schema, &input(Some("   "), None));

        assert_eq!(result.unwrap_err(), TagRequestError::MissingAssetId);
    }

    // ============================================================
    // QUERY SHAPE TESTS
    // ============================================================

    #[test]
    fn test_query_requires_asset_id_and_approved_status() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), None)).unwrap();

        assert_eq!(
            bag.get(params::Q),
            Some("npt\\:assetId:MKD100 AND npt\\:status:Approved")
        );
    }

    #[test]
    fn test_all_tags_drops_status_restriction() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), Some("true"))).unwrap();

        assert_eq!(bag.get(params::Q), Some("npt\\:assetId:MKD100"));
    }

    #[test]
    fn test_all_tags_flag_is_case_insensitive() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), Some("TRUE"))).unwrap();

        assert_eq!(bag.get(params::Q), Some("npt\\:assetId:MKD100"));
    }

    #[test]
    fn test_non_true_flag_keeps_status_restriction() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), Some("yes"))).unwrap();

        assert_eq!(
            bag.get(params::Q),
            Some("npt\\:assetId:MKD100 AND npt\\:status:Approved")
        );
    }

    #[test]
    fn test_asset_id_special_characters_are_escaped() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD-2012"), Some("true"))).unwrap();

        assert_eq!(bag.get(params::Q), Some("npt\\:assetId:MKD\\-2012"));
    }

    #[test]
    fn test_asset_id_is_trimmed() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("  MKD100  "), Some("true"))).unwrap();

        assert_eq!(bag.get(params::Q), Some("npt\\:assetId:MKD100"));
    }

    // ============================================================
    // FIXED PARAMETER TESTS
    // ============================================================

    #[test]
    fn test_output_format_parameters() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), None)).unwrap();

        assert_eq!(bag.get(params::WT), Some("json"));
        assert_eq!(bag.get(params::JSON_NL), Some("map"));
        assert_eq!(bag.get(params::ECHO_PARAMS), Some("explicit"));
        assert_eq!(bag.get(params::ROWS), Some("1000"));
    }

    #[test]
    fn test_callback_adds_jsonp_wrapper() {
        let schema = ArchiveSchema::new();
        let request = TagParams {
            asset_id: Some("MKD100".to_string()),
            all_tags: None,
            callback: Some("loadTags".to_string()),
        };

        let bag = build_tag_params(&schema, &request).unwrap();

        assert_eq!(bag.get(params::JSON_WRF), Some("loadTags"));
    }

    #[test]
    fn test_no_callback_no_jsonp_wrapper() {
        let schema = ArchiveSchema::new();
        let bag = build_tag_params(&schema, &input(Some("MKD100"), None)).unwrap();

        assert!(bag.get(params::JSON_WRF).is_none());
    }

    // ============================================================
    // HANDLER TESTS (stub executor)
    // ============================================================

    struct StubExecutor {
        captured: Mutex<Option<SolrParams>>,
    }

    impl StubExecutor {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                captured: Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl QueryExecutor for StubExecutor {
        async fn execute(&self, params: &SolrParams) -> anyhow::Result<EngineResponse> {
            *self.captured.lock().unwrap() = Some(params.clone());
            Ok(EngineResponse {
                status: 200,
                content_type: "application/json".to_string(),
                body: "{\"response\":{\"docs\":[]}}".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_handler_forwards_translated_params() {
        let schema = Arc::new(ArchiveSchema::new());
        let stub = StubExecutor::new();
        let executor: Arc<dyn QueryExecutor> = stub.clone();

        let response = handle_get_tags(
            Query(input(Some("MKD100"), None)),
            Extension(schema),
            Extension(executor),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let captured = stub.captured.lock().unwrap();
        let bag = captured.as_ref().expect("executor was not called");
        assert_eq!(
            bag.get(params::Q),
            Some("npt\\:assetId:MKD100 AND npt\\:status:Approved")
        );
    }

    #[tokio::test]
    async fn test_handler_rejects_missing_asset_id_without_executing() {
        let schema = Arc::new(ArchiveSchema::new());
        let stub = StubExecutor::new();
        let executor: Arc<dyn QueryExecutor> = stub.clone();

        let response = handle_get_tags(
            Query(TagParams::default()),
            Extension(schema),
            Extension(executor),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(stub.captured.lock().unwrap().is_none());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Asset Id required to retrieve tags.");
    }
}
