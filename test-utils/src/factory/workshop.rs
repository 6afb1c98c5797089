//! Factory for fiber optics workshop signups (`minicurso_fibra_inscricoes`).

use crate::factory::helpers::{next_id, next_phone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating workshop signups with customizable fields.
pub struct FiberSignupFactory<'a> {
    db: &'a DatabaseConnection,
    nome: String,
    telefone: String,
    nusp: Option<String>,
}

impl<'a> FiberSignupFactory<'a> {
    /// Creates a new FiberSignupFactory with default values.
    ///
    /// Defaults:
    /// - nome: `"Student {id}"`
    /// - telefone: unique 11-digit number
    /// - nusp: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            nome: format!("Student {}", next_id()),
            telefone: next_phone(),
            nusp: None,
        }
    }

    /// Sets the phone number, which is unique per signup.
    pub fn telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = telefone.into();
        self
    }

    /// Sets the student number.
    pub fn nusp(mut self, nusp: impl Into<String>) -> Self {
        self.nusp = Some(nusp.into());
        self
    }

    /// Builds and inserts the signup into the database.
    ///
    /// # Returns
    /// - `Ok(entity::minicurso_fibra_inscricao::Model)` - The created signup
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::minicurso_fibra_inscricao::Model, DbErr> {
        entity::minicurso_fibra_inscricao::ActiveModel {
            nome: ActiveValue::Set(self.nome),
            telefone: ActiveValue::Set(self.telefone),
            nusp: ActiveValue::Set(self.nusp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fiber workshop signup with default values.
pub async fn create_fiber_signup(
    db: &DatabaseConnection,
) -> Result<entity::minicurso_fibra_inscricao::Model, DbErr> {
    FiberSignupFactory::new(db).build().await
}
