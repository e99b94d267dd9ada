//! Archive Search Surface
//!
//! The faceted, paged search endpoint. Translates keywords, a document-type
//! selector, paging, sorting and an optional date range into the engine's
//! native parameter set.
//!
//! ## Submodules
//! - **`handlers`**: HTTP handler and the pure parameter translation step.
//! - **`filter`**: The shared type-union filter clause, including the date
//!   range sub-clauses.
//! - **`types`**: Public request parameters, the document-type selector and
//!   translation errors.

pub mod filter;
pub mod handlers;
pub mod types;
