use std::{any::Any, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use dioxus_logger::tracing;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    model::submission::SubmissionResponseDto,
    server::{
        config::{Config, GatewayConfig},
        data::{database::DatabaseGateway, rest::RestGateway, PersistenceGateway},
        error::AppError,
        router,
        service::health::{DatabaseStatus, HealthService, PROBE_TABLE},
        state::AppState,
    },
};

/// Builds the persistence gateway selected by the configuration.
///
/// The REST gateway makes no request until first use. The database gateway opens its
/// connection pool here, so an unreachable database fails startup.
///
/// # Returns
/// - `Ok(Arc<dyn PersistenceGateway>)` - Gateway shared by all handlers
/// - `Err(AppError::GatewayErr)` - Store URL is invalid
/// - `Err(AppError::DbErr)` - Failed to connect to the database
pub async fn connect_gateway(config: &Config) -> Result<Arc<dyn PersistenceGateway>, AppError> {
    match &config.gateway {
        GatewayConfig::Rest { url, api_key } => {
            tracing::info!("Using REST persistence gateway at {}", url);
            Ok(Arc::new(RestGateway::new(
                url,
                api_key.clone(),
                config.request_timeout,
            )?))
        }
        GatewayConfig::Database { url } => {
            tracing::info!("Using direct database persistence gateway");
            Ok(Arc::new(DatabaseGateway::connect(url).await?))
        }
    }
}

/// Logs whether the registrations table is reachable.
///
/// Startup continues either way; the health endpoint reports the same state later.
pub async fn probe_store(gateway: &dyn PersistenceGateway) {
    match HealthService::new(gateway).check().await {
        DatabaseStatus::Connected => tracing::info!("Table {} is reachable", PROBE_TABLE),
        DatabaseStatus::TableMissing { error } => {
            tracing::warn!("Table {} is not usable yet: {}", PROBE_TABLE, error)
        }
        DatabaseStatus::Disconnected { error } => {
            tracing::error!("Persistence store is unreachable: {}", error)
        }
    }
}

/// Wraps the router with the state and the cross-cutting layers.
///
/// CORS allows any origin to `GET`, `POST` and `OPTIONS` with a `Content-Type` header. A
/// panicking handler is answered with the generic internal error body.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    router::router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmissionResponseDto::failed("Erro interno do servidor", None)),
    )
        .into_response()
}

/// Binds the listener and serves until Ctrl+C.
pub async fn serve(app: Router, bind_address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
