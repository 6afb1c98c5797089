use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for paths that resolve to nothing.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain `{success, message}` body for failures outside the submission flow.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
