//! Persistence gateway layer.
//!
//! The backend never talks to a database driver directly from its services. It goes through
//! a [`PersistenceGateway`], constructed once at startup and shared through the application
//! state. Two gateways exist:
//!
//! - [`rest::RestGateway`] - the managed store's REST interface (PostgREST dialect)
//! - [`database::DatabaseGateway`] - a direct SQL connection through SeaORM
//!
//! Gateways are table-scoped and untyped: they take a [`Record`] of sanitized columns and
//! hand back rows as JSON maps. Errors are returned as [`GatewayError`], whose rendered text
//! feeds the error classifier.

pub mod database;
pub mod rest;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::server::{
    error::gateway::GatewayError,
    model::record::{Filter, Record, Row},
};

/// Table-scoped access to the remote data store.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Inserts one record and returns the stored rows, including store-assigned columns
    /// such as `id`.
    ///
    /// # Returns
    /// - `Ok(Vec<Row>)` - Rows the store reports as inserted; may be empty
    /// - `Err(GatewayError)` - The store refused the row or could not be reached
    async fn insert(&self, table: &str, record: &Record) -> Result<Vec<Row>, GatewayError>;

    /// Reads `column` from at most `limit` rows.
    async fn select(&self, table: &str, column: &str, limit: u64)
        -> Result<Vec<Row>, GatewayError>;

    /// Deletes every row matching `filter`.
    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), GatewayError>;
}
