use super::types::{TagParams, TagRequestError};
use crate::http::{bad_gateway, bad_request, forward_engine_response};
use crate::schema::ArchiveSchema;
use crate::solr::executor::QueryExecutor;
use crate::solr::params::{self, SolrParams};
use crate::solr::query::QueryExpr;
use axum::extract::Query;
use axum::response::Response;
use axum::Extension;
use std::sync::Arc;

/// Every tag document for one asset, capped well above any realistic tag count.
const TAG_ROW_LIMIT: &str = "1000";

pub async fn handle_get_tags(
    Query(input): Query<TagParams>,
    Extension(schema): Extension<Arc<ArchiveSchema>>,
    Extension(executor): Extension<Arc<dyn QueryExecutor>>,
) -> Response {
    let params = match build_tag_params(&schema, &input) {
        Ok(params) => params,
        Err(err) => {
            tracing::warn!("Rejecting tag lookup: {}", err);
            return bad_request(err.to_string());
        }
    };

    match executor.execute(&params).await {
        Ok(engine) => forward_engine_response(engine),
        Err(err) => {
            tracing::error!("Tag lookup failed against the engine: {}", err);
            bad_gateway("Search engine request failed.")
        }
    }
}

/// Translates the public tag lookup parameters into an engine parameter bag.
///
/// The generated query requires the asset id, and additionally the approved
/// status unless all tags were explicitly requested.
pub fn build_tag_params(
    schema: &ArchiveSchema,
    input: &TagParams,
) -> Result<SolrParams, TagRequestError> {
    let asset_id = input
        .asset_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(TagRequestError::MissingAssetId)?;

    let all_tags = input
        .all_tags
        .as_deref()
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let mut clauses = vec![QueryExpr::term(schema.tags.asset_id, asset_id)];
    if !all_tags {
        clauses.push(QueryExpr::term(schema.tags.status, schema.tags.approved));
    }
    let query = QueryExpr::and(clauses);

    let mut out = SolrParams::new();

    if let Some(callback) = input.callback.as_deref().filter(|cb| !cb.is_empty()) {
        out.add(params::JSON_WRF, callback);
    }

    out.add(params::ECHO_PARAMS, params::ECHO_EXPLICIT);
    out.add(params::WT, params::WT_JSON);
    out.add(params::JSON_NL, params::JSON_NL_MAP);
    out.add(params::Q, query.render());
    out.add(params::ROWS, TAG_ROW_LIMIT);

    Ok(out)
}
