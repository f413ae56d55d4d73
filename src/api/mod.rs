//! HTTP API module

mod routes;

pub use routes::{create_router, GenerateBody, GenerateResponseBody, ReferenceImagePayload};
