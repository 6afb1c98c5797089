//! Translation of raw persistence errors into user-facing failures.
//!
//! Databases report constraint violations only as message text, so classification matches
//! known message signatures. Rules are tried in order and the first rule with a matching
//! signature wins; text that matches nothing is a generic persistence failure. Matching is
//! case-insensitive. Signatures cover both the PostgreSQL wording returned by the managed
//! store and the SQLite wording of the same violations.

use std::sync::LazyLock;

use axum::http::StatusCode;
use regex::Regex;

/// Column name used when a not-null violation does not name its column.
const UNKNOWN_COLUMN: &str = "desconhecida";

/// PostgreSQL: `null value in column "email" of relation ...`
static QUOTED_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"column "([^"]+)""#).expect("valid column pattern"));

/// SQLite: `NOT NULL constraint failed: inscricoes.email`
static QUALIFIED_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)constraint failed: [^\s.]+\.([^\s,]+)").expect("valid column pattern")
});

/// What went wrong while persisting, as far as the user is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    /// A row with the same unique value already exists.
    Conflict,
    /// An access policy refused the write.
    AccessDenied,
    /// A value does not fit its column type.
    MalformedField,
    /// A not-null column received no value.
    MissingColumn { column: String },
    /// Anything else.
    Generic,
}

/// A classified persistence error.
///
/// Holds the `(status, user message, technical detail)` triple returned to the caller. The
/// technical detail is always the unmodified error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceFailure {
    pub kind: PersistenceErrorKind,
    technical_detail: String,
}

impl PersistenceFailure {
    pub fn status(&self) -> StatusCode {
        match self.kind {
            PersistenceErrorKind::Conflict => StatusCode::CONFLICT,
            PersistenceErrorKind::AccessDenied => StatusCode::FORBIDDEN,
            PersistenceErrorKind::MalformedField | PersistenceErrorKind::MissingColumn { .. } => {
                StatusCode::BAD_REQUEST
            }
            PersistenceErrorKind::Generic => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match &self.kind {
            PersistenceErrorKind::Conflict => {
                "Já existe uma inscrição registrada com estes dados.".to_string()
            }
            PersistenceErrorKind::AccessDenied => {
                "Permissão negada para gravar os dados. Verifique as policies do banco de dados."
                    .to_string()
            }
            PersistenceErrorKind::MalformedField => {
                "Algum campo possui formato inválido. Revise os dados digitados e tente novamente."
                    .to_string()
            }
            PersistenceErrorKind::MissingColumn { column } => {
                format!("Campo obrigatório ausente ou vazio: {}.", column)
            }
            PersistenceErrorKind::Generic => "Erro ao salvar dados no banco".to_string(),
        }
    }

    pub fn technical_detail(&self) -> &str {
        &self.technical_detail
    }
}

struct Rule {
    signatures: &'static [&'static str],
    kind: fn(&str) -> PersistenceErrorKind,
}

static RULES: &[Rule] = &[
    Rule {
        signatures: &[
            "duplicate key value violates unique constraint",
            "unique constraint failed",
        ],
        kind: |_| PersistenceErrorKind::Conflict,
    },
    Rule {
        signatures: &["row level security", "row-level security"],
        kind: |_| PersistenceErrorKind::AccessDenied,
    },
    Rule {
        signatures: &["invalid input syntax for type"],
        kind: |_| PersistenceErrorKind::MalformedField,
    },
    Rule {
        signatures: &["null value in column", "not null constraint failed"],
        kind: missing_column,
    },
];

fn missing_column(error: &str) -> PersistenceErrorKind {
    let column = QUOTED_COLUMN
        .captures(error)
        .or_else(|| QUALIFIED_COLUMN.captures(error))
        .and_then(|captures| captures.get(1))
        .map_or(UNKNOWN_COLUMN, |column| column.as_str());

    PersistenceErrorKind::MissingColumn {
        column: column.to_string(),
    }
}

/// Classifies the text of a persistence error.
///
/// # Arguments
/// - `error` - Rendered error as surfaced by the persistence gateway
///
/// # Returns
/// - `PersistenceFailure` - Kind of the first matching rule, or `Generic`
pub fn classify(error: &str) -> PersistenceFailure {
    let lowered = error.to_lowercase();

    let kind = RULES
        .iter()
        .find(|rule| rule.signatures.iter().any(|sig| lowered.contains(sig)))
        .map_or(PersistenceErrorKind::Generic, |rule| (rule.kind)(error));

    PersistenceFailure {
        kind,
        technical_detail: error.to_string(),
    }
}
