use dioxus_logger::tracing;

use crate::server::data::PersistenceGateway;

/// Table probed to decide whether the store is usable.
pub const PROBE_TABLE: &str = "inscricoes";

/// State of the persistence store as seen by the health check.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseStatus {
    Connected,
    /// The store answered but the probe query failed, usually because the table is missing.
    TableMissing { error: String },
    Disconnected { error: String },
}

impl DatabaseStatus {
    pub fn is_healthy(&self) -> bool {
        !matches!(self, Self::Disconnected { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::TableMissing { .. } => "connected_but_table_missing",
            Self::Disconnected { .. } => "disconnected",
        }
    }
}

pub struct HealthService<'a> {
    gateway: &'a dyn PersistenceGateway,
}

impl<'a> HealthService<'a> {
    pub fn new(gateway: &'a dyn PersistenceGateway) -> Self {
        Self { gateway }
    }

    /// Probes the store with a single-row select on the registrations table.
    ///
    /// A store that answers with an error still counts as reachable; only connectivity
    /// failures mark it disconnected.
    pub async fn check(&self) -> DatabaseStatus {
        match self.gateway.select(PROBE_TABLE, "id", 1).await {
            Ok(_) => DatabaseStatus::Connected,
            Err(err) if err.is_unreachable() => {
                tracing::error!("Health check could not reach the store: {}", err);
                DatabaseStatus::Disconnected {
                    error: err.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!("Health check probe on {} failed: {}", PROBE_TABLE, err);
                DatabaseStatus::TableMissing {
                    error: err.to_string(),
                }
            }
        }
    }
}
