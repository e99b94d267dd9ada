use super::filter::type_union_filter;
use super::types::{DocType, SearchParams, SearchRequestError};
use crate::http::{bad_gateway, bad_request, forward_engine_response};
use crate::schema::ArchiveSchema;
use crate::solr::executor::QueryExecutor;
use crate::solr::params::{self, SolrParams};
use crate::solr::query::QueryExpr;
use axum::extract::Query;
use axum::response::Response;
use axum::Extension;
use chrono::NaiveDate;
use std::sync::Arc;

/// Filter-query tag that exempts the document-type facet, so its counts
/// always reflect totals across all types regardless of the selected one.
const DOC_TYPE_FILTER_TAG: &str = "doctype";

const DEFAULT_ROWS: &str = "10";
const DEFAULT_PAGE_SIZE: usize = 10;
const DATE_PARAM_FORMAT: &str = "%Y%m%d";

pub async fn handle_search(
    Query(input): Query<SearchParams>,
    Extension(schema): Extension<Arc<ArchiveSchema>>,
    Extension(executor): Extension<Arc<dyn QueryExecutor>>,
) -> Response {
    let translated = match build_search_params(&schema, &input) {
        Ok(translated) => translated,
        Err(err) => {
            match &err {
                SearchRequestError::InvalidDocType(_) => {
                    tracing::error!("{}", err);
                }
                SearchRequestError::InvalidDateRange(_) => {
                    tracing::warn!("Rejecting search request: {}", err);
                }
            }
            return bad_request(err.to_string());
        }
    };

    tracing::debug!("Translated search params: {:?}", translated);

    match executor.execute(&translated).await {
        Ok(engine) => forward_engine_response(engine),
        Err(err) => {
            tracing::error!("Search failed against the engine: {}", err);
            bad_gateway("Search engine request failed.")
        }
    }
}

/// Translates the public search parameters into an engine parameter bag:
/// paging, sorting, faceting defaults, the keyword query in extended DisMax
/// mode, the type-union filter clause and the per-type restriction with its
/// facet fields.
pub fn build_search_params(
    schema: &ArchiveSchema,
    input: &SearchParams,
) -> Result<SolrParams, SearchRequestError> {
    let mut out = SolrParams::new();

    // engine-native row count, defaulted to 10 items per page
    let rows = non_blank(&input.rows).unwrap_or(DEFAULT_ROWS);
    out.add(params::ROWS, rows);

    // enable faceting and only return facets with at least one item,
    // alphabetical order, at most 10 values per field
    out.add(params::FACET, "true");
    out.add(params::FACET_MINCOUNT, "1");
    out.add(params::FACET_SORT, params::FACET_SORT_INDEX);
    out.add(params::FACET_LIMIT, "10");

    // facets are generated unless explicitly switched off
    let generate_facets = input
        .generate_facets
        .as_deref()
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(true);

    out.add(params::HIGHLIGHT, "true");

    // sorting only applies when both column and direction were supplied
    let sort = match (non_blank(&input.sort_column), non_blank(&input.sort_order)) {
        (Some(column), Some(order)) => Some(format!("{} {}", column, order)),
        _ => None,
    };
    if let Some(sort) = &sort {
        out.add(params::SORT, sort);
    }

    let date_range = parse_date_range(input)?;

    // a raw engine query is never trusted, the translated keywords replace it
    if let Some(original) = &input.q {
        tracing::debug!("Original query: {}", original);
    }

    // the keywords are the query since we're in DisMax mode; nothing supplied
    // queries everything
    let keywords = non_blank(&input.keywords).unwrap_or("*");
    out.add(params::DEF_TYPE, params::EDISMAX);
    out.add(params::Q, keywords);

    // skip count from the 1-based page index, e.g. page 3 at 10 per page
    // starts at row 20
    let page_index: usize = non_blank(&input.page_index)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);
    let page_size: usize = non_blank(&input.results_per_page)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let start = page_index.saturating_sub(1) * page_size;
    out.add(params::START, start.to_string());

    // pre-formatted fragments pass straight through as filter queries
    if let Some(facet_query) = non_blank(&input.facet_query) {
        out.add(params::FQ, facet_query);
    }
    if let Some(suggested_query) = non_blank(&input.suggested_query) {
        out.add(params::FQ, suggested_query);
    }

    for field in schema.query_fields {
        out.add(params::QF, *field);
    }

    // one shared filter clause selecting the union of allowed types; date
    // ranges replace the plain type terms when a range was supplied
    out.add(params::FQ, type_union_filter(schema, date_range).render());

    // document-type facet exempted from the tagged type restriction below, and
    // allowed to report zero-count types
    out.add(
        params::FACET_FIELD,
        format!(
            "{{!ex={}}}{}",
            DOC_TYPE_FILTER_TAG, schema.types.doc_type_facet
        ),
    );
    out.add(
        format!("f.{}.facet.mincount", schema.types.doc_type_facet),
        "0",
    );

    let selector = non_blank(&input.doctype).unwrap_or("");
    let doc_type = DocType::parse(selector)
        .ok_or_else(|| SearchRequestError::InvalidDocType(selector.to_string()))?;

    out.add(
        params::FQ,
        format!(
            "{{!tag={}}}{}",
            DOC_TYPE_FILTER_TAG,
            QueryExpr::term(schema.types.doc_type, doc_type.label()).render()
        ),
    );

    if generate_facets {
        for field in facet_fields(schema, doc_type) {
            out.add(params::FACET_FIELD, *field);
        }
    }

    // part results get a stable secondary order behind any user-supplied sort
    if doc_type == DocType::Part {
        if let Some(sort) = &sort {
            out.set(
                params::SORT,
                format!("{}, {} ASC", sort, schema.types.part_sort),
            );
        }
    }

    Ok(out)
}

/// The facet fields added for a selected type; audio and video add none.
fn facet_fields(schema: &ArchiveSchema, doc_type: DocType) -> &'static [&'static str] {
    match doc_type {
        DocType::Program => schema.facets.program,
        DocType::PrintedMusic => schema.facets.printed_music,
        DocType::Part => schema.facets.part,
        DocType::BusinessRecord => schema.facets.business_record,
        DocType::Visual => schema.facets.visual,
        DocType::Audio | DocType::Video => &[],
    }
}

/// A date range is active only when both ends were supplied; each end must
/// parse under the fixed 8-digit format.
fn parse_date_range(
    input: &SearchParams,
) -> Result<Option<(NaiveDate, NaiveDate)>, SearchRequestError> {
    match (input.date_from.as_deref(), input.date_to.as_deref()) {
        (Some(from), Some(to)) => {
            let from_date = NaiveDate::parse_from_str(from, DATE_PARAM_FORMAT)
                .map_err(|_| SearchRequestError::InvalidDateRange(from.to_string()))?;
            let to_date = NaiveDate::parse_from_str(to, DATE_PARAM_FORMAT)
                .map_err(|_| SearchRequestError::InvalidDateRange(to.to_string()))?;
            Ok(Some((from_date, to_date)))
        }
        _ => Ok(None),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}
