//! Academic records backend: REST and RPC adapters over the shared
//! learner/course registry.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
