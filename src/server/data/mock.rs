//! In-process gateway double for service and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    data::PersistenceGateway,
    error::gateway::GatewayError,
    model::record::{Filter, Record, Row},
};

/// What the mock answers to an insert or select.
pub enum Reply {
    Rows(Vec<Row>),
    Rejected(String),
    Unreachable,
    /// Panics with the given message, standing in for a bug below the handler.
    Panic(&'static str),
}

impl Reply {
    fn produce(&self) -> Result<Vec<Row>, GatewayError> {
        match self {
            Reply::Rows(rows) => Ok(rows.clone()),
            Reply::Rejected(message) => Err(GatewayError::Rejected {
                status: 400,
                message: message.clone(),
                code: None,
                details: None,
                hint: None,
            }),
            Reply::Unreachable => Err(GatewayError::Database(sea_orm::DbErr::Conn(
                sea_orm::RuntimeErr::Internal("connection refused".to_string()),
            ))),
            Reply::Panic(message) => panic!("{}", message),
        }
    }
}

/// Gateway that records every call and answers with canned replies.
pub struct MockGateway {
    insert_reply: Reply,
    select_reply: Reply,
    pub inserts: Mutex<Vec<(String, Record)>>,
    pub deletes: Mutex<Vec<(String, Filter)>>,
}

impl MockGateway {
    pub fn new(insert_reply: Reply, select_reply: Reply) -> Self {
        Self {
            insert_reply,
            select_reply,
            inserts: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
        }
    }

    /// Accepts inserts, assigning `id` to the returned row.
    pub fn storing(id: i64) -> Self {
        let mut row = Row::new();
        row.insert("id".to_string(), id.into());
        Self::new(Reply::Rows(vec![row]), Reply::Rows(Vec::new()))
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }

    pub fn last_insert(&self) -> Option<(String, Record)> {
        self.inserts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl PersistenceGateway for MockGateway {
    async fn insert(&self, table: &str, record: &Record) -> Result<Vec<Row>, GatewayError> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        self.insert_reply.produce()
    }

    async fn select(&self, _table: &str, _column: &str, _limit: u64) -> Result<Vec<Row>, GatewayError> {
        self.select_reply.produce()
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), GatewayError> {
        self.deletes
            .lock()
            .unwrap()
            .push((table.to_string(), filter.clone()));
        Ok(())
    }
}
