//! Engine Parameter Bag
//!
//! Defines the ordered, multi-valued parameter set handed to the search engine,
//! together with the engine parameter names used by the handler surfaces.
//! Repeated names are allowed because the engine treats `fq`, `facet.field`
//! and `qf` as repeatable parameters.

// --- Common query parameters ---

/// The main query string.
pub const Q: &str = "q";
/// A filter query restricting the result set without affecting scoring.
pub const FQ: &str = "fq";
/// Number of result rows to return.
pub const ROWS: &str = "rows";
/// Zero-based offset of the first returned row.
pub const START: &str = "start";
/// Result ordering, e.g. `npp:Season asc`.
pub const SORT: &str = "sort";
/// Response writer selection.
pub const WT: &str = "wt";
/// Controls which request parameters are echoed back in the response header.
pub const ECHO_PARAMS: &str = "echoParams";
/// Query parser selection.
pub const DEF_TYPE: &str = "defType";

// --- Faceting parameters ---

pub const FACET: &str = "facet";
pub const FACET_FIELD: &str = "facet.field";
pub const FACET_MINCOUNT: &str = "facet.mincount";
pub const FACET_SORT: &str = "facet.sort";
pub const FACET_LIMIT: &str = "facet.limit";

// --- Relevance and highlighting parameters ---

/// Weighted query fields for the extended DisMax parser.
pub const QF: &str = "qf";
/// Enables result highlighting.
pub const HIGHLIGHT: &str = "hl";

// --- JSON response writer parameters ---

/// Named-list layout of the JSON response (`map` yields JSON objects).
pub const JSON_NL: &str = "json.nl";
/// JSONP wrapper function name.
pub const JSON_WRF: &str = "json.wrf";

// --- Fixed parameter values ---

/// The extended DisMax query parser.
pub const EDISMAX: &str = "edismax";
/// Facet ordering by indexed value (alphabetical).
pub const FACET_SORT_INDEX: &str = "index";
/// Echo only explicitly supplied parameters.
pub const ECHO_EXPLICIT: &str = "explicit";
/// JSON response writer.
pub const WT_JSON: &str = "json";
/// Map-style named lists in JSON output.
pub const JSON_NL_MAP: &str = "map";

/// An insertion-ordered parameter set with repeatable names.
///
/// This is the single output of every handler's translation step: the bag is
/// built from the public request parameters and then handed to the query
/// executor, which serializes it as the body of the engine request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolrParams {
    entries: Vec<(String, String)>,
}

impl SolrParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a value for `name`, keeping any previous values.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Replaces every value of `name` with a single new value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.remove(name);
        self.add(name, value);
    }

    /// Removes all values of `name`, returning the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut first = None;
        self.entries.retain(|(n, v)| {
            if n == name {
                if first.is_none() {
                    first = Some(v.clone());
                }
                false
            } else {
                true
            }
        });
        first
    }

    /// First value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The full ordered parameter list, ready for form serialization.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
