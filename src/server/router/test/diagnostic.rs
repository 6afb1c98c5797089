use test_utils::builder::TestBuilder;

use super::*;
use crate::server::data::database::DatabaseGateway;

#[tokio::test]
async fn health_reports_connected_store() {
    let (status, body) = send_json(mock_app(MockGateway::storing(1)), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "database": "connected"}));
}

/// Tests the health check against a database that lacks the registrations table.
///
/// Expected: 200 healthy with `connected_but_table_missing`, a note and the error
#[tokio::test]
async fn health_reports_missing_table() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let gateway = Arc::new(DatabaseGateway::new(test.connection().await.unwrap()));

    let (status, body) = send_json(app(gateway, Path::new(".")), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected_but_table_missing");
    assert!(body["note"].is_string());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_reports_unreachable_store() {
    let gateway = MockGateway::new(Reply::Unreachable, Reply::Unreachable);

    let (status, body) = send_json(mock_app(gateway), get("/api/health")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
}

/// Tests the schema probe against a correctly created table.
///
/// Expected: 200 with the probed columns and an empty table afterwards
#[tokio::test]
async fn schema_probe_succeeds_and_cleans_up() {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let mut test = TestBuilder::new().with_signup_tables().build().await.unwrap();
    let db = test.connection().await.unwrap();
    let gateway = Arc::new(DatabaseGateway::new(db.clone()));

    let (status, body) = send_json(app(gateway, Path::new(".")), get("/api/test-schema")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let mut columns: Vec<&str> = body["columns_working"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    columns.sort_unstable();
    assert_eq!(
        columns,
        vec!["ano_ingresso", "curso", "email", "faculdade", "nome", "telefone"]
    );
    assert_eq!(entity::prelude::Inscricao::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn schema_probe_reports_schema_error() {
    let gateway = MockGateway::new(
        Reply::Rejected("Could not find the 'ano_ingresso' column of 'inscricoes' in the schema cache".to_string()),
        Reply::Rows(Vec::new()),
    );

    let (status, body) = send_json(mock_app(gateway), get("/api/test-schema")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().starts_with("Erro de schema: "));
    assert_eq!(body["suggestion"], "Execute fix_supabase_schema.sql no Supabase");
}

#[tokio::test]
async fn deployment_check_echoes_request() {
    let (status, body) = send_json(
        mock_app(MockGateway::storing(1)),
        get("/api/test?probe=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "GET");
    assert_eq!(body["url"], "/api/test?probe=1");
    assert_eq!(body["env_check"]["supabase_url"], "missing");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (status, body) = send_json(
        mock_app(MockGateway::storing(1)),
        get("/api/docs/openapi.json"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for route in ["/api/inscricao", "/api/hackathon", "/api/health", "/api/test-schema"] {
        assert!(body["paths"].get(route).is_some(), "{} missing", route);
    }
}

/// Tests that a CORS preflight from any origin is allowed.
///
/// Expected: 200 with a wildcard allow-origin header
#[tokio::test]
async fn preflight_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/inscricao")
        .header("origin", "https://ieee.example.org")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = mock_app(MockGateway::storing(1))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
