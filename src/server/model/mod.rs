//! Server-side domain models and parameter types.
//!
//! This module contains the types that flow through the service layer: the decoded
//! submission payload, the descriptors that parameterize the submission pipeline, and the
//! records and rows exchanged with the persistence gateway. Domain models are converted to
//! DTOs at the controller boundary.

pub mod form;
pub mod payload;
pub mod record;
