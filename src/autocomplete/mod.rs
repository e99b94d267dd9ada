//! Tag Autocomplete Surface
//!
//! Facet-only suggestion lookups over the tag content field. The typed
//! fragment is normalized into wildcard prefix terms; no result rows are
//! requested, the facet counts are the suggestions.

pub mod handlers;
pub mod types;
