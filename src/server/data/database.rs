use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbBackend, FromQueryResult, JsonValue,
    Statement, Value,
};

use crate::server::{
    data::PersistenceGateway,
    error::gateway::GatewayError,
    model::record::{Filter, Record, Row},
};

/// Gateway writing straight to a SQL database through SeaORM.
///
/// Tables are addressed by name, so statements are assembled here rather than through entity
/// models. Identifiers come from form descriptors and are quoted. Values other than null are
/// bound as parameters. Rows come back as JSON objects, mirroring the REST gateway.
#[derive(Clone)]
pub struct DatabaseGateway {
    db: DatabaseConnection,
}

impl DatabaseGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to the database at `url`.
    ///
    /// # Returns
    /// - `Ok(DatabaseGateway)` - Connected gateway
    /// - `Err(DbErr)` - Failed to establish the connection pool
    pub async fn connect(url: &str) -> Result<Self, sea_orm::DbErr> {
        let mut opt = ConnectOptions::new(url);
        opt.sqlx_logging(false);

        Ok(Self::new(Database::connect(opt).await?))
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    /// Runs a statement expected to yield rows and converts them to JSON objects.
    async fn rows(&self, sql: String, values: Vec<Value>) -> Result<Vec<Row>, GatewayError> {
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);

        let rows = JsonValue::find_by_statement(statement).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                JsonValue::Object(columns) => Some(columns),
                _ => None,
            })
            .collect())
    }
}

#[async_trait]
impl PersistenceGateway for DatabaseGateway {
    async fn insert(&self, table: &str, record: &Record) -> Result<Vec<Row>, GatewayError> {
        let (sql, values) = insert_statement(self.backend(), table, record);

        self.rows(sql, values).await
    }

    async fn select(
        &self,
        table: &str,
        column: &str,
        limit: u64,
    ) -> Result<Vec<Row>, GatewayError> {
        let sql = format!(
            "SELECT {} FROM {} LIMIT {}",
            quote(column),
            quote(table),
            limit
        );

        self.rows(sql, Vec::new()).await
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), GatewayError> {
        use sea_orm::ConnectionTrait;

        let (sql, values) = delete_statement(self.backend(), table, filter);
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);

        self.db.execute_raw(statement).await?;

        Ok(())
    }
}

/// Assembles `INSERT ... RETURNING *` for a record.
///
/// Null columns are written as a `NULL` literal instead of a bound parameter. An untyped
/// bound null is sent as text, which PostgreSQL refuses for integer columns.
fn insert_statement(backend: DbBackend, table: &str, record: &Record) -> (String, Vec<Value>) {
    let mut columns = Vec::new();
    let mut slots = Vec::new();
    let mut values = Vec::new();

    for (column, value) in record.columns() {
        columns.push(quote(column));
        if value.is_null() {
            slots.push("NULL".to_string());
        } else {
            values.push(bind_value(value));
            slots.push(placeholder(backend, values.len()));
        }
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        quote(table),
        columns.join(", "),
        slots.join(", ")
    );

    (sql, values)
}

fn delete_statement(backend: DbBackend, table: &str, filter: &Filter) -> (String, Vec<Value>) {
    if filter.value.is_null() {
        let sql = format!(
            "DELETE FROM {} WHERE {} IS NULL",
            quote(table),
            quote(&filter.column)
        );
        return (sql, Vec::new());
    }

    let sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quote(table),
        quote(&filter.column),
        placeholder(backend, 1)
    );

    (sql, vec![bind_value(&filter.value)])
}

/// Double-quotes an identifier, valid for both PostgreSQL and SQLite.
fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn placeholder(backend: DbBackend, index: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${}", index),
        _ => "?".to_string(),
    }
}

/// Converts a non-null JSON value to a bound parameter.
fn bind_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Bool(flag) => (*flag).into(),
        JsonValue::Number(number) => match number.as_i64() {
            Some(integer) => integer.into(),
            None => number.as_f64().unwrap_or_default().into(),
        },
        JsonValue::String(text) => text.clone().into(),
        // Null never reaches here; arrays and objects are stored as their JSON text.
        other => other.to_string().into(),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityTrait;
    use serde_json::json;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn fiber_record(telefone: &str) -> Record {
        [
            ("nome", json!("Diego Ramos")),
            ("telefone", json!(telefone)),
            ("nusp", JsonValue::Null),
        ]
        .into_iter()
        .collect()
    }

    /// Tests inserting a record into an existing table.
    ///
    /// Expected: Ok with the stored row including its assigned id
    #[tokio::test]
    async fn insert_returns_row_with_assigned_id() -> Result<(), GatewayError> {
        let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
        let db = test.connection().await.unwrap();
        let gateway = DatabaseGateway::new(db.clone());

        let rows = gateway
            .insert("minicurso_fibra_inscricoes", &fiber_record("11955554444"))
            .await?;

        assert_eq!(rows.len(), 1);
        let id = rows[0].get("id").and_then(JsonValue::as_i64).unwrap();

        let stored = entity::prelude::MinicursoFibraInscricao::find_by_id(id as i32)
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(stored.telefone, "11955554444");
        assert_eq!(stored.nusp, None);

        Ok(())
    }

    /// Tests that a duplicate unique value is reported with the driver's message.
    ///
    /// Expected: Err mentioning the unique constraint
    #[tokio::test]
    async fn duplicate_unique_value_is_rejected() {
        let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
        let db = test.connection().await.unwrap();
        factory::workshop::FiberSignupFactory::new(&db)
            .telefone("11955554444")
            .build()
            .await
            .unwrap();

        let err = DatabaseGateway::new(db)
            .insert("minicurso_fibra_inscricoes", &fiber_record("11955554444"))
            .await
            .unwrap_err();

        assert!(err.to_string().to_lowercase().contains("unique constraint failed"));
        assert!(!err.is_unreachable());
    }

    /// Tests selecting a single column with a limit.
    ///
    /// Expected: Ok with at most `limit` rows holding only the requested column
    #[tokio::test]
    async fn select_honors_column_and_limit() -> Result<(), GatewayError> {
        let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
        let db = test.connection().await.unwrap();
        factory::create_inscription(&db).await?;
        factory::create_inscription(&db).await?;

        let rows = DatabaseGateway::new(db).select("inscricoes", "id", 1).await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["id"]);

        Ok(())
    }

    /// Tests that selecting from a missing table fails without looking like a lost connection.
    ///
    /// Expected: Err that is not a connectivity failure
    #[tokio::test]
    async fn missing_table_is_not_unreachable() {
        let mut test = TestBuilder::new().build().await.unwrap();
        let db = test.connection().await.unwrap();

        let err = DatabaseGateway::new(db)
            .select("inscricoes", "id", 1)
            .await
            .unwrap_err();

        assert!(!err.is_unreachable());
    }

    /// Tests deleting rows by equality filter.
    ///
    /// Expected: Ok with only the matching row removed
    #[tokio::test]
    async fn delete_removes_matching_rows() -> Result<(), GatewayError> {
        let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
        let db = test.connection().await.unwrap();
        factory::inscription::InscriptionFactory::new(&db)
            .email("teste@teste.com")
            .build()
            .await?;
        let kept = factory::create_inscription(&db).await?;

        DatabaseGateway::new(db.clone())
            .delete("inscricoes", &Filter::eq("email", "teste@teste.com"))
            .await?;

        let remaining = entity::prelude::Inscricao::find().all(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);

        Ok(())
    }

    #[test]
    fn null_columns_are_written_as_literals() {
        let record: Record = [
            ("ano_ingresso", JsonValue::Null),
            ("nome", json!("Ana Souza")),
            ("nusp", JsonValue::Null),
            ("telefone", json!("11988887777")),
        ]
        .into_iter()
        .collect();

        let (sql, values) = insert_statement(DbBackend::Postgres, "inscricoes", &record);

        assert_eq!(
            sql,
            "INSERT INTO \"inscricoes\" (\"ano_ingresso\", \"nome\", \"nusp\", \"telefone\") \
             VALUES (NULL, $1, NULL, $2) RETURNING *"
        );
        assert_eq!(
            values,
            vec![
                Value::from("Ana Souza".to_string()),
                Value::from("11988887777".to_string())
            ]
        );
    }

    #[test]
    fn sqlite_placeholders_skip_null_columns() {
        let record: Record = [("ano_ingresso", JsonValue::Null), ("nome", json!("Ana"))]
            .into_iter()
            .collect();

        let (sql, values) = insert_statement(DbBackend::Sqlite, "inscricoes", &record);

        assert_eq!(
            sql,
            "INSERT INTO \"inscricoes\" (\"ano_ingresso\", \"nome\") VALUES (NULL, ?) RETURNING *"
        );
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn null_filter_matches_with_is_null() {
        let (sql, values) = delete_statement(
            DbBackend::Postgres,
            "inscricoes",
            &Filter::eq("nusp", JsonValue::Null),
        );

        assert_eq!(sql, "DELETE FROM \"inscricoes\" WHERE \"nusp\" IS NULL");
        assert!(values.is_empty());
    }

    /// Tests storing a record whose integer column is null.
    ///
    /// Expected: Ok with the integer column left empty
    #[tokio::test]
    async fn insert_stores_null_integer_column() -> Result<(), GatewayError> {
        let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
        let db = test.connection().await.unwrap();
        let record: Record = [
            ("ano_ingresso", JsonValue::Null),
            ("curso", json!("Engenharia Elétrica")),
            ("email", json!("ana@usp.br")),
            ("faculdade", json!("EESC")),
            ("nome", json!("Ana Souza")),
            ("telefone", json!("11988887777")),
        ]
        .into_iter()
        .collect();

        let rows = DatabaseGateway::new(db).insert("inscricoes", &record).await?;

        assert_eq!(rows[0].get("ano_ingresso"), Some(&JsonValue::Null));

        Ok(())
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote("inscricoes"), "\"inscricoes\"");
        assert_eq!(quote("we\"ird"), "\"we\"\"ird\"");
    }
}
