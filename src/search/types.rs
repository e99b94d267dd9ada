//! Archive Search Data Types
//!
//! Public query parameters of the faceted search endpoint, the document-type
//! selector dispatched on, and the rejection cases of the translation step.

use serde::Deserialize;
use thiserror::Error;

/// Query parameters of the archive search endpoint.
///
/// Everything is optional except the document type selector; absent values
/// degrade to defaults instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text keywords, scored against the schema's query-field list.
    pub keywords: Option<String>,
    /// Engine-native query input; always discarded in favor of the keywords.
    pub q: Option<String>,
    /// Document-type selector, one of the seven public type names.
    pub doctype: Option<String>,
    /// 1-based page index used for the offset computation.
    #[serde(rename = "index")]
    pub page_index: Option<String>,
    /// Page size used for the offset computation.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: Option<String>,
    /// Engine-native row count passthrough.
    pub rows: Option<String>,
    #[serde(rename = "sortColumn")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
    /// Pre-built filter fragment passed through as a filter query.
    #[serde(rename = "facetQuery")]
    pub facet_query: Option<String>,
    /// Pre-built suggested-query fragment passed through as a filter query.
    #[serde(rename = "suggestedQuery")]
    pub suggested_query: Option<String>,
    /// Range start, fixed `yyyyMMdd` format. Active only together with `dateTo`.
    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,
    /// Range end, fixed `yyyyMMdd` format. Active only together with `dateFrom`.
    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
    /// Set to `false` to suppress the per-type facet lists.
    #[serde(rename = "generateFacets")]
    pub generate_facets: Option<String>,
}

/// The seven archive document types a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    Program,
    PrintedMusic,
    Part,
    BusinessRecord,
    Visual,
    Audio,
    Video,
}

impl DocType {
    /// Parses the public selector name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let selectors = [
            ("program", Self::Program),
            ("printedMusic", Self::PrintedMusic),
            ("part", Self::Part),
            ("businessRecord", Self::BusinessRecord),
            ("visual", Self::Visual),
            ("audio", Self::Audio),
            ("video", Self::Video),
        ];
        selectors
            .iter()
            .find(|(name, _)| raw.eq_ignore_ascii_case(name))
            .map(|(_, doc_type)| *doc_type)
    }

    /// The value indexed in the document-type field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::PrintedMusic => "Printed Music",
            Self::Part => "Part",
            Self::BusinessRecord => "Business Record",
            Self::Visual => "Visual",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SearchRequestError {
    #[error("Invalid document type: {0}")]
    InvalidDocType(String),
    #[error("Invalid date range value: {0} (expected yyyyMMdd)")]
    InvalidDateRange(String),
}
