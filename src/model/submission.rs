use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Outcome of a form submission.
///
/// `id` is present only when the record was stored. `technical_error` is present only for
/// failures reported by the persistence layer and carries the store's raw error text.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SubmissionResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_error: Option<String>,
}

impl SubmissionResponseDto {
    pub fn stored(id: Value, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id),
            technical_error: None,
        }
    }

    pub fn failed(message: impl Into<String>, technical_error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
            technical_error,
        }
    }
}
