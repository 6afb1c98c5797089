//! Factory for general event registrations (`inscricoes`).

use crate::factory::helpers::{next_id, next_phone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let inscription = InscriptionFactory::new(&db)
///     .email("ana@usp.br")
///     .build()
///     .await?;
/// ```
pub struct InscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    email: String,
    telefone: String,
}

impl<'a> InscriptionFactory<'a> {
    /// Creates a new InscriptionFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Participant {id}"`
    /// - email: `"participant{id}@example.com"`
    /// - telefone: unique 11-digit number
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nome: format!("Participant {}", id),
            email: format!("participant{}@example.com", id),
            telefone: next_phone(),
        }
    }

    /// Sets the e-mail address for the registration.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the registration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::inscricao::Model)` - The created registration
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::inscricao::Model, DbErr> {
        entity::inscricao::ActiveModel {
            nome: ActiveValue::Set(self.nome),
            email: ActiveValue::Set(self.email),
            telefone: ActiveValue::Set(self.telefone),
            faculdade: ActiveValue::Set("USP".to_string()),
            nusp: ActiveValue::Set(None),
            curso: ActiveValue::Set("Engenharia Elétrica".to_string()),
            ano_ingresso: ActiveValue::Set(Some(2023)),
            membro_ieee: ActiveValue::Set(None),
            voluntario_ieee: ActiveValue::Set(None),
            divulgacao: ActiveValue::Set(None),
            indicacao: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a registration with default values.
pub async fn create_inscription(
    db: &DatabaseConnection,
) -> Result<entity::inscricao::Model, DbErr> {
    InscriptionFactory::new(db).build().await
}
