use super::types::AutocompleteParams;
use crate::http::{bad_gateway, forward_engine_response};
use crate::schema::ArchiveSchema;
use crate::solr::executor::QueryExecutor;
use crate::solr::params::{self, SolrParams};
use crate::solr::query::QueryExpr;
use axum::extract::Query;
use axum::response::Response;
use axum::Extension;
use regex::Regex;
use std::sync::Arc;

pub async fn handle_autocomplete(
    Query(input): Query<AutocompleteParams>,
    Extension(schema): Extension<Arc<ArchiveSchema>>,
    Extension(executor): Extension<Arc<dyn QueryExecutor>>,
) -> Response {
    let translated = build_autocomplete_params(&schema, &input);

    match executor.execute(&translated).await {
        Ok(engine) => forward_engine_response(engine),
        Err(err) => {
            tracing::error!("Autocomplete failed against the engine: {}", err);
            bad_gateway("Search engine request failed.")
        }
    }
}

/// Translates the typed fragment into a facet-only engine request: zero rows,
/// faceting on the content field, and a query requiring a wildcard prefix
/// match per normalized term plus the approved status.
pub fn build_autocomplete_params(
    schema: &ArchiveSchema,
    input: &AutocompleteParams,
) -> SolrParams {
    let mut out = SolrParams::new();

    out.add(params::ROWS, "0");
    out.add(params::FACET, "true");
    out.add(params::FACET_FIELD, schema.tags.content_facet);
    out.add(params::FACET_MINCOUNT, "1");
    out.add(params::FACET_SORT, params::FACET_SORT_INDEX);
    out.add(params::ECHO_PARAMS, params::ECHO_EXPLICIT);
    out.add(params::WT, params::WT_JSON);
    out.add(params::JSON_NL, params::JSON_NL_MAP);

    let terms = normalize_terms(input.value.as_deref().unwrap_or(""));

    // an empty fragment degenerates to a bare wildcard so everything matches
    let mut clauses: Vec<QueryExpr> = if terms.is_empty() {
        vec![QueryExpr::prefix(schema.tags.content, "")]
    } else {
        terms
            .iter()
            .map(|term| QueryExpr::prefix(schema.tags.content, term.as_str()))
            .collect()
    };
    clauses.push(QueryExpr::term(schema.tags.status, schema.tags.approved));

    let query = QueryExpr::and(clauses).render();
    tracing::debug!("Autocomplete query: {}", query);
    out.add(params::Q, query);

    if let Some(callback) = input.callback.as_deref().filter(|cb| !cb.is_empty()) {
        out.add(params::JSON_WRF, callback);
    }

    out
}

/// Lower-cases the fragment and strips every non-alphanumeric character per
/// whitespace-delimited term, dropping terms left empty. Keeping the terms
/// bare lets the trailing wildcard work without an edge n-gram filter in the
/// engine's analysis chain.
pub fn normalize_terms(raw: &str) -> Vec<String> {
    let strip = Regex::new(r"[^a-z0-9]").unwrap();
    raw.split_whitespace()
        .map(|term| strip.replace_all(&term.to_lowercase(), "").into_owned())
        .filter(|term| !term.is_empty())
        .collect()
}
