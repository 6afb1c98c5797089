//! HTTP request handlers.
//!
//! Controllers extract the request, hand it to a service and shape the result into the
//! JSON body the front-end expects. Each handler carries a `#[utoipa::path]` annotation
//! from which the OpenAPI document is generated.

pub mod health;
pub mod static_files;
pub mod submission;
