//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the persistence gateway. They validate and
//! sanitize submissions, classify persistence failures into client-facing outcomes, and
//! run the diagnostic probes. Services borrow the gateway as a trait object, so the same
//! code runs against the REST store, a SQL database, or a test double.

pub mod classifier;
pub mod health;
pub mod schema_probe;
pub mod submission;

#[cfg(test)]
mod test;
