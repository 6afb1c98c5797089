use std::path::{Component, Path, PathBuf};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
    model::api::MessageDto,
    server::{error::AppError, state::AppState},
};

const INDEX_FILE: &str = "index.html";

/// Serves the site's static files for every path no API route claimed.
///
/// `/` serves `index.html`. Any other path serves the file it names, or the file with
/// `.html` appended so pages can be linked without their extension. Paths under `/api`
/// are never served from disk.
///
/// # Returns
/// - `200 OK` - File contents
/// - `404 Not Found` - No such file, an `/api` path, or a path escaping the static root
pub async fn serve_static(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    if path == "/" {
        let index = state.static_root.join(INDEX_FILE);
        if !is_file(&index).await {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(MessageDto::failed("Arquivo index.html não encontrado")),
            )
                .into_response());
        }

        return serve_file(index, request).await;
    }

    let relative = resolve(&path).ok_or_else(not_found)?;

    let exact = state.static_root.join(&relative);
    if is_file(&exact).await {
        return serve_file(exact, request).await;
    }

    let mut page = relative.into_os_string();
    page.push(".html");
    let page = state.static_root.join(page);
    if is_file(&page).await {
        return serve_file(page, request).await;
    }

    Err(not_found())
}

/// Maps a request path onto a path relative to the static root.
///
/// Returns `None` for API paths and for anything that is not a plain sequence of file name
/// components after percent-decoding, which rules out `..` and absolute paths.
pub fn resolve(request_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(request_path).ok()?;
    let trimmed = decoded.trim_start_matches('/');

    if trimmed.is_empty() || trimmed == "api" || trimmed.starts_with("api/") {
        return None;
    }

    let relative = Path::new(trimmed);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }

    Some(relative.to_path_buf())
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_file())
}

async fn serve_file(path: PathBuf, request: Request) -> Result<Response, AppError> {
    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(response.into_response())
}

fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
