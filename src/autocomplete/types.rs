//! Autocomplete Data Types

use serde::Deserialize;

/// Query parameters of the tag autocomplete endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    /// Free-text fragment to complete; absent matches everything.
    pub value: Option<String>,
    /// Optional JSONP wrapper function name.
    pub callback: Option<String>,
}
