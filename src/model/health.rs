use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of `GET /api/health`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HealthDto {
    /// `healthy` or `unhealthy`.
    pub status: String,
    /// `connected`, `connected_but_table_missing` or `disconnected`.
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of `GET /api/test-schema`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SchemaProbeDto {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_working: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Whether each credential the deployment expects is configured.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct EnvCheckDto {
    pub supabase_url: String,
    pub supabase_key: String,
    pub supabase_service_key: String,
    pub database_url: String,
}

/// Result of `GET /api/test`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeploymentCheckDto {
    pub success: bool,
    pub message: String,
    pub method: String,
    pub url: String,
    /// RFC 3339 timestamp of the request.
    pub timestamp: String,
    pub env_check: EnvCheckDto,
}
