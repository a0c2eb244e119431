// Service Adapter
// Thin HTTP surface over the pipeline: routing, request validation, and
// error mapping. No state beyond the shared pipeline handle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
