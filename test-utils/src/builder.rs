use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context. A builder without tables yields a reachable
/// database where every signup table is missing, which is what health checks need
/// to observe a degraded store.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Inscricao;
///
/// let test = TestBuilder::new()
///     .with_table(Inscricao)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Unique and
    /// nullable column attributes of the entity are carried into the statement, so
    /// constraint violations surface the same way they would in production.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table a form submission can target.
    ///
    /// This convenience method adds the following tables:
    /// - Inscricao (`inscricoes`)
    /// - HackathonInscricao (`hackathon_inscricoes`)
    /// - MinicursoFibraInscricao (`minicurso_fibra_inscricoes`)
    /// - MinicursoQuanticaInscricao (`minicurso_quantica_inscricoes`)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_signup_tables(self) -> Self {
        self.with_table(Inscricao)
            .with_table(HackathonInscricao)
            .with_table(MinicursoFibraInscricao)
            .with_table(MinicursoQuanticaInscricao)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
