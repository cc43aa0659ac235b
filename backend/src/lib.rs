//! User profile service library.
//!
//! CRUD over an in-memory set of user profiles, exposed over HTTP with
//! field validation and a uniform JSON error envelope.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
