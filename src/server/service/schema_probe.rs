use dioxus_logger::tracing;
use serde_json::{json, Value};

use crate::server::{
    data::PersistenceGateway,
    error::gateway::GatewayError,
    model::record::{Filter, Record},
};

const TEST_TABLE: &str = "inscricoes";
const TEST_EMAIL: &str = "teste@teste.com";

/// Outcome of writing the known test record.
#[derive(Debug)]
pub enum SchemaProbe {
    /// Insert succeeded; lists the columns the test record wrote.
    Working { columns: Vec<String> },
    /// Insert reported success without returning the row.
    NoRowsReturned,
    /// Insert was refused, typically because a column is missing or mistyped.
    SchemaError(GatewayError),
}

/// Record written by the probe, shaped like a general registration.
pub fn test_record() -> Record {
    [
        ("nome", json!("TESTE")),
        ("email", json!(TEST_EMAIL)),
        ("telefone", json!("11999999999")),
        ("faculdade", json!("TESTE")),
        ("curso", json!("TESTE")),
        ("ano_ingresso", Value::from(2024)),
    ]
    .into_iter()
    .collect()
}

pub struct SchemaProbeService<'a> {
    gateway: &'a dyn PersistenceGateway,
}

impl<'a> SchemaProbeService<'a> {
    pub fn new(gateway: &'a dyn PersistenceGateway) -> Self {
        Self { gateway }
    }

    /// Inserts the test record into the registrations table, then deletes it again.
    ///
    /// Cleanup failures are logged and do not change the outcome; the insert already proved
    /// the schema accepts the record.
    pub async fn run(&self) -> SchemaProbe {
        let record = test_record();

        let rows = match self.gateway.insert(TEST_TABLE, &record).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!("Schema probe insert failed: {}", err);
                return SchemaProbe::SchemaError(err);
            }
        };

        if rows.is_empty() {
            return SchemaProbe::NoRowsReturned;
        }

        if let Err(err) = self
            .gateway
            .delete(TEST_TABLE, &Filter::eq("email", TEST_EMAIL))
            .await
        {
            tracing::warn!("Failed to remove schema probe record: {}", err);
        }

        SchemaProbe::Working {
            columns: record.columns().map(|(column, _)| column.to_string()).collect(),
        }
    }
}
