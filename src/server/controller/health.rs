use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::health::{DeploymentCheckDto, EnvCheckDto, HealthDto, SchemaProbeDto},
    server::{
        service::{
            health::{DatabaseStatus, HealthService},
            schema_probe::{SchemaProbe, SchemaProbeService},
        },
        state::AppState,
    },
};

/// Tag for grouping diagnostic endpoints in OpenAPI documentation
pub static DIAGNOSTIC_TAG: &str = "diagnostic";

/// Check service and database health.
///
/// Runs a single-row select against the registrations table. A store that answers with an
/// error, typically because the table has not been created yet, still counts as healthy.
///
/// # Returns
/// - `200 OK` - Store reachable; `database` is `connected` or `connected_but_table_missing`
/// - `500 Internal Server Error` - Store unreachable
#[utoipa::path(
    get,
    path = "/api/health",
    tag = DIAGNOSTIC_TAG,
    responses(
        (status = 200, description = "Store reachable", body = HealthDto),
        (status = 500, description = "Store unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthService::new(state.gateway.as_ref()).check().await;

    let (code, status_label) = if status.is_healthy() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "unhealthy")
    };
    let database = status.label().to_string();

    let (note, error) = match status {
        DatabaseStatus::Connected => (None, None),
        DatabaseStatus::TableMissing { error } => (
            Some("Execute create_table.sql in Supabase".to_string()),
            Some(error),
        ),
        DatabaseStatus::Disconnected { error } => (None, Some(error)),
    };

    (
        code,
        Json(HealthDto {
            status: status_label.to_string(),
            database,
            note,
            error,
        }),
    )
}

/// Verify the registrations table accepts a record.
///
/// Inserts a known test record and deletes it again.
///
/// # Returns
/// - `200 OK` - Insert succeeded; lists the columns written
/// - `500 Internal Server Error` - Insert refused, or no row returned
#[utoipa::path(
    get,
    path = "/api/test-schema",
    tag = DIAGNOSTIC_TAG,
    responses(
        (status = 200, description = "Schema accepts the test record", body = SchemaProbeDto),
        (status = 500, description = "Schema rejected the test record", body = SchemaProbeDto)
    ),
)]
pub async fn test_schema(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = SchemaProbeService::new(state.gateway.as_ref()).run().await;

    let (code, dto) = match outcome {
        SchemaProbe::Working { columns } => (
            StatusCode::OK,
            SchemaProbeDto {
                success: true,
                message: "Schema está funcionando corretamente".to_string(),
                columns_working: Some(columns),
                suggestion: None,
            },
        ),
        SchemaProbe::NoRowsReturned => (
            StatusCode::INTERNAL_SERVER_ERROR,
            SchemaProbeDto {
                success: false,
                message: "Falha na inserção de teste".to_string(),
                columns_working: None,
                suggestion: None,
            },
        ),
        SchemaProbe::SchemaError(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            SchemaProbeDto {
                success: false,
                message: format!("Erro de schema: {}", err),
                columns_working: None,
                suggestion: Some("Execute fix_supabase_schema.sql no Supabase".to_string()),
            },
        ),
    };

    (code, Json(dto))
}

/// Report the request as received and which credentials are configured.
#[utoipa::path(
    get,
    path = "/api/test",
    tag = DIAGNOSTIC_TAG,
    responses(
        (status = 200, description = "Deployment is serving requests", body = DeploymentCheckDto)
    ),
)]
pub async fn deployment_check(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Json<DeploymentCheckDto> {
    let presence = |configured: bool| {
        let label = if configured { "configured" } else { "missing" };
        label.to_string()
    };
    let credentials = state.credentials;

    Json(DeploymentCheckDto {
        success: true,
        message: "API is working!".to_string(),
        method: method.to_string(),
        url: uri.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        env_check: EnvCheckDto {
            supabase_url: presence(credentials.supabase_url),
            supabase_key: presence(credentials.supabase_key),
            supabase_service_key: presence(credentials.supabase_service_key),
            database_url: presence(credentials.database_url),
        },
    })
}
