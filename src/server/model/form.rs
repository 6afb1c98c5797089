//! Descriptors of the forms the site posts.
//!
//! Every form is handled by the same submission pipeline; a [`FormDescriptor`] supplies the
//! only things that differ between them: which fields are required, which field is the
//! honeypot, how each field is sanitized into which column, and the target table.

use serde_json::Value;

use crate::server::util::sanitize::{parse_year, sanitize_digits, sanitize_text};

/// Hidden field legitimate users never fill.
pub const HONEYPOT_FIELD: &str = "_hp";

const NAME_MAX: usize = 150;
const EMAIL_MAX: usize = 160;
const TEXT_MAX: usize = 200;
const PHONE_MAX: usize = 25;
const ID_NUMBER_MAX: usize = 30;

/// How a raw field becomes a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed, capped text; empty input is stored as `""`.
    Text(usize),
    /// Digits only, capped; empty input is stored as `""`.
    Digits(usize),
    /// Digits only, capped; empty input is stored as `null`.
    OptionalDigits(usize),
    /// Integer year, or `null` when it does not parse.
    Year,
}

impl FieldKind {
    /// Sanitizes a raw field value into the value stored in the column.
    ///
    /// Non-text input sanitizes like absent input, except that `Year` also accepts a JSON
    /// integer.
    pub fn sanitize(self, raw: Option<&Value>) -> Value {
        let text = raw.and_then(Value::as_str);

        match self {
            FieldKind::Text(max) => Value::String(sanitize_text(text, max)),
            FieldKind::Digits(max) => Value::String(sanitize_digits(text, max)),
            FieldKind::OptionalDigits(max) => non_empty(sanitize_digits(text, max)),
            FieldKind::Year => raw
                .and_then(Value::as_i64)
                .and_then(|year| i32::try_from(year).ok())
                .or_else(|| parse_year(text))
                .map_or(Value::Null, Value::from),
        }
    }
}

fn non_empty(text: String) -> Value {
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text)
    }
}

/// Maps one submitted field onto one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Field name as posted by the form.
    pub field: &'static str,
    /// Column the sanitized value is written to.
    pub column: &'static str,
    pub kind: FieldKind,
}

const fn rule(field: &'static str, column: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule {
        field,
        column,
        kind,
    }
}

/// Everything the submission pipeline needs to know about one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDescriptor {
    /// Short name used in logs.
    pub name: &'static str,
    /// Destination table.
    pub table: &'static str,
    /// Fields that must be present and non-empty, in the order they are reported.
    pub required: &'static [&'static str],
    pub honeypot: &'static str,
    pub fields: &'static [FieldRule],
    /// Message shown to the user once the row is stored.
    pub success_message: &'static str,
}

/// General event registration, stored in `inscricoes`.
pub const INSCRIPTION: FormDescriptor = FormDescriptor {
    name: "inscricao",
    table: "inscricoes",
    required: &["nome", "email", "telefone", "faculdade", "curso", "ingresso"],
    honeypot: HONEYPOT_FIELD,
    fields: &[
        rule("nome", "nome", FieldKind::Text(NAME_MAX)),
        rule("email", "email", FieldKind::Text(EMAIL_MAX)),
        rule("telefone", "telefone", FieldKind::Digits(PHONE_MAX)),
        rule("faculdade", "faculdade", FieldKind::Text(TEXT_MAX)),
        rule("nusp", "nusp", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
        rule("curso", "curso", FieldKind::Text(TEXT_MAX)),
        rule("ingresso", "ano_ingresso", FieldKind::Year),
        rule("membro_ieee", "membro_ieee", FieldKind::Text(TEXT_MAX)),
        rule("voluntario_ieee", "voluntario_ieee", FieldKind::Text(TEXT_MAX)),
        rule("divulgacao", "divulgacao", FieldKind::Text(TEXT_MAX)),
        rule("indicacao", "indicacao", FieldKind::Text(TEXT_MAX)),
    ],
    success_message: "Inscrição enviada com sucesso!",
};

/// Hackathon team of three, stored in `hackathon_inscricoes`.
pub const HACKATHON_TEAM: FormDescriptor = FormDescriptor {
    name: "hackathon",
    table: "hackathon_inscricoes",
    required: &["nome1", "nome2", "nome3", "celular", "email"],
    honeypot: HONEYPOT_FIELD,
    fields: &[
        rule("nome1", "nome1", FieldKind::Text(NAME_MAX)),
        rule("nome2", "nome2", FieldKind::Text(NAME_MAX)),
        rule("nome3", "nome3", FieldKind::Text(NAME_MAX)),
        rule("nusp1", "nusp1", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
        rule("nusp2", "nusp2", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
        rule("nusp3", "nusp3", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
        rule("celular", "celular", FieldKind::Digits(PHONE_MAX)),
        rule("email", "email", FieldKind::Text(EMAIL_MAX)),
    ],
    success_message: "Inscrição do hackathon enviada com sucesso!",
};

/// Fiber optics workshop signup, stored in `minicurso_fibra_inscricoes`.
pub const FIBER_WORKSHOP: FormDescriptor = FormDescriptor {
    name: "minicurso-fibra",
    table: "minicurso_fibra_inscricoes",
    required: &["nome", "telefone"],
    honeypot: HONEYPOT_FIELD,
    fields: &[
        rule("nome", "nome", FieldKind::Text(NAME_MAX)),
        rule("telefone", "telefone", FieldKind::Digits(PHONE_MAX)),
        rule("nusp", "nusp", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
    ],
    success_message: "Inscrição registrada com sucesso!",
};

/// Quantum computing workshop signup, stored in `minicurso_quantica_inscricoes`.
pub const QUANTUM_WORKSHOP: FormDescriptor = FormDescriptor {
    name: "minicurso-quantica",
    table: "minicurso_quantica_inscricoes",
    required: &["nome", "telefone", "email"],
    honeypot: HONEYPOT_FIELD,
    fields: &[
        rule("nome", "nome", FieldKind::Text(NAME_MAX)),
        rule("telefone", "telefone", FieldKind::Digits(PHONE_MAX)),
        rule("email", "email", FieldKind::Text(EMAIL_MAX)),
        rule("nusp", "nusp", FieldKind::OptionalDigits(ID_NUMBER_MAX)),
    ],
    success_message: "Inscrição registrada com sucesso!",
};
