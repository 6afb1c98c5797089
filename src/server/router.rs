use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health::*, static_files::serve_static, submission::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Desk API",
        description = "Registration and workshop signup intake for the student branch site"
    ),
    tags(
        (name = "submission", description = "Form submissions"),
        (name = "diagnostic", description = "Health and deployment checks")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// API routes are registered with their OpenAPI annotations; the generated document is
/// served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`. Every other path falls
/// through to the static file handler.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(submit_inscription))
        .routes(routes!(submit_hackathon))
        .routes(routes!(submit_fiber_workshop))
        .routes(routes!(submit_quantum_workshop))
        .routes(routes!(health))
        .routes(routes!(test_schema))
        .routes(routes!(deployment_check))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(serve_static)
}

#[cfg(test)]
mod test;
