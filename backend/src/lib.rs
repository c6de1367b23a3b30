//! Gazette backend library modules.
//!
//! CRUD over users and articles backed by a MongoDB document store, split
//! hexagonally: [`domain`] holds entities and ports, [`inbound`] the HTTP
//! adapter, [`outbound`] the store adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
