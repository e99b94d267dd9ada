//! Tag Lookup Data Types
//!
//! Public query parameters accepted by the tag lookup endpoint and the
//! rejection cases of its translation step.

use serde::Deserialize;
use thiserror::Error;

/// Query parameters of the tag lookup endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TagParams {
    /// Identifier of the asset whose tags are requested. Required.
    #[serde(rename = "assetId")]
    pub asset_id: Option<String>,
    /// When `true`, unapproved tags are included as well.
    #[serde(rename = "allTags")]
    pub all_tags: Option<String>,
    /// Optional JSONP wrapper function name.
    pub callback: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TagRequestError {
    #[error("Asset Id required to retrieve tags.")]
    MissingAssetId,
}
