//! Data transfer objects exchanged with the front-end.
//!
//! These are the JSON bodies the API returns. They carry no behavior beyond construction
//! helpers and derive `ToSchema` for the OpenAPI document.

pub mod api;
pub mod health;
pub mod submission;
