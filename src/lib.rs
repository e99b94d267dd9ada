//! Archive Search Gateway Library
//!
//! This library crate defines the handler surfaces of a stateless HTTP gateway
//! sitting in front of an externally-owned search engine. Each surface
//! translates simplified public query parameters into the engine's native
//! parameter set and delegates execution and result serialization to the
//! engine; nothing is indexed, ranked or stored here.
//!
//! ## Architecture Modules
//! - **`solr`**: The engine integration layer: parameter bag, query-parser
//!   escaping, the structured query expression tree and the execution seam.
//! - **`schema`**: Read-only field tables built once at startup and injected
//!   into every handler.
//! - **`tags`**: Tag lookup by asset identifier.
//! - **`search`**: Faceted, paged archive search across seven document types.
//! - **`autocomplete`**: Facet-only tag suggestions for typed fragments.
//! - **`http`**: Response plumbing shared by the surfaces.

pub mod autocomplete;
pub mod http;
pub mod schema;
pub mod search;
pub mod solr;
pub mod tags;
