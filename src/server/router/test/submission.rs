use super::*;

/// Tests a url-encoded workshop signup end to end.
///
/// Expected: 200 with success, the stored id and the form's message
#[tokio::test]
async fn url_encoded_signup_is_stored() {
    let (status, body) = send_json(
        mock_app(MockGateway::storing(42)),
        form_post("/api/minicurso-fibra", &payload::fiber_signup()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Inscrição registrada com sucesso!", "id": 42})
    );
}

/// Tests that JSON bodies are accepted alongside url-encoded forms.
///
/// Expected: 200 with the stored id
#[tokio::test]
async fn json_signup_is_stored() {
    let gateway = Arc::new(MockGateway::storing(7));
    let request = json_post(
        "/api/minicurso-quantica",
        &json!({"nome": "Elisa Prado", "telefone": "11 93333-2222", "email": "elisa@usp.br"}),
    );

    let (status, body) = send_json(app(gateway.clone(), Path::new(".")), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(7));
    let (table, record) = gateway.last_insert().unwrap();
    assert_eq!(table, "minicurso_quantica_inscricoes");
    assert_eq!(record.get("telefone"), Some(&json!("11933332222")));
    assert_eq!(record.get("nusp"), Some(&Value::Null));
}

#[tokio::test]
async fn missing_fields_are_listed() {
    let pairs = payload::without_field(payload::hackathon_team(), "nome2");
    let pairs = payload::without_field(pairs, "email");

    let (status, body) = send_json(
        mock_app(MockGateway::storing(1)),
        form_post("/api/hackathon", &pairs),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "message": "Campos obrigatórios não preenchidos: nome2, email"})
    );
}

#[tokio::test]
async fn empty_body_is_no_data() {
    let (status, body) = send_json(
        mock_app(MockGateway::storing(1)),
        form_post("/api/inscricao", &Vec::new()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nenhum dado recebido");
}

/// Tests that the honeypot answer does not reveal why the submission failed.
///
/// Expected: 400 with the generic validation message and no insert
#[tokio::test]
async fn honeypot_gets_vague_rejection() {
    let gateway = Arc::new(MockGateway::storing(1));
    let pairs = payload::with_field(payload::inscription(), "_hp", "buy now");

    let (status, body) = send_json(
        app(gateway.clone(), Path::new(".")),
        form_post("/api/inscricao", &pairs),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Erro de validação");
    assert_eq!(gateway.insert_count(), 0);
}

/// Tests that numeric zero counts as empty in JSON bodies.
///
/// Expected: a zero honeypot is accepted, a zero required field is reported missing
#[tokio::test]
async fn json_zero_counts_as_empty() {
    let gateway = Arc::new(MockGateway::storing(3));
    let signup = json!({
        "nome": "Elisa Prado",
        "telefone": "11 93333-2222",
        "email": "elisa@usp.br",
        "_hp": 0
    });

    let (status, _) = send_json(
        app(gateway.clone(), Path::new(".")),
        json_post("/api/minicurso-quantica", &signup),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(gateway.insert_count(), 1);

    let mut inscription: serde_json::Map<String, Value> = payload::inscription()
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();
    inscription.insert("ingresso".to_string(), json!(0));

    let (status, body) = send_json(
        mock_app(MockGateway::storing(1)),
        json_post("/api/inscricao", &Value::Object(inscription)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Campos obrigatórios não preenchidos: ingresso"
    );
}

/// Tests that a duplicate reported by the store becomes a conflict with the raw error echoed.
///
/// Expected: 409 with the conflict message and `technical_error`
#[tokio::test]
async fn duplicate_is_reported_as_conflict() {
    let detail = "duplicate key value violates unique constraint \"hackathon_inscricoes_celular_key\"";
    let gateway = MockGateway::new(Reply::Rejected(detail.to_string()), Reply::Rows(Vec::new()));

    let (status, body) = send_json(
        mock_app(gateway),
        form_post("/api/hackathon", &payload::hackathon_team()),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Já existe uma inscrição registrada com estes dados."
    );
    assert_eq!(body["technical_error"], detail);
}

#[tokio::test]
async fn access_policy_refusal_is_forbidden() {
    let gateway = MockGateway::new(
        Reply::Rejected(
            "new row violates row-level security policy for table \"inscricoes\"".to_string(),
        ),
        Reply::Rows(Vec::new()),
    );

    let (status, body) = send_json(
        mock_app(gateway),
        form_post("/api/inscricao", &payload::inscription()),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["technical_error"].as_str().unwrap().contains("row-level security"));
}

/// Tests that a body declared as JSON but not parseable gets the generic error.
///
/// Expected: 500 with the internal error message and no technical detail
#[tokio::test]
async fn malformed_json_is_internal_error() {
    let request = Request::post("/api/minicurso-fibra")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"nome\": "))
        .unwrap();

    let (status, body) = send_json(mock_app(MockGateway::storing(1)), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"success": false, "message": "Erro interno do servidor"})
    );
}

/// Tests that a panic inside the pipeline is answered with the generic error body.
///
/// Expected: 500 with the internal error message and none of the panic text
#[tokio::test]
async fn panicking_gateway_is_internal_error() {
    let gateway = MockGateway::new(
        Reply::Panic("gateway exploded: secret-token-123"),
        Reply::Rows(Vec::new()),
    );

    let (status, body) = send(
        mock_app(gateway),
        form_post("/api/minicurso-fibra", &payload::fiber_signup()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).unwrap();
    assert!(!text.contains("exploded"));
    assert!(!text.contains("secret-token-123"));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({"success": false, "message": "Erro interno do servidor"})
    );
}

#[tokio::test]
async fn empty_insert_result_is_save_error() {
    let gateway = MockGateway::new(Reply::Rows(Vec::new()), Reply::Rows(Vec::new()));

    let (status, body) = send_json(
        mock_app(gateway),
        form_post("/api/minicurso-fibra", &payload::fiber_signup()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Erro ao salvar dados");
}

#[tokio::test]
async fn submission_routes_reject_get() {
    let (status, _) = send(mock_app(MockGateway::storing(1)), get("/api/inscricao")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
