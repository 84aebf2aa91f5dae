use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{maria, register_maria, test_server, MARIA_EMAIL, MARIA_PASSWORD};

async fn register_error(server: &TestServer, body: Value) -> (StatusCode, String) {
    let response = server.post("/api/clients").json(&body).await;
    let status = response.status_code();
    let error = response.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    (status, error)
}

#[tokio::test]
async fn test_register_then_login() {
    let server = test_server().await;

    let response = server.post("/api/clients").json(&maria()).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["message"], "Cliente cadastrado com sucesso");

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": MARIA_EMAIL, "password": MARIA_PASSWORD }))
        .await;
    response.assert_status(StatusCode::OK);
    let session: Value = response.json();
    assert_eq!(session["clientId"], body["id"]);
    assert_eq!(session["name"], "Maria Silva");
    assert_eq!(session["email"], MARIA_EMAIL);
    assert!(session.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_failures_return_401() {
    let server = test_server().await;
    register_maria(&server).await;

    for (email, password) in [(MARIA_EMAIL, "Errada@123"), ("ninguem@fogtech.com.br", MARIA_PASSWORD)] {
        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["error"], "Email ou senha incorretos");
    }
}

#[tokio::test]
async fn test_duplicate_email_and_cpf_return_409() {
    let server = test_server().await;
    register_maria(&server).await;

    let mut same_email = maria();
    same_email["cpf"] = json!("111.444.777-35");
    assert_eq!(
        register_error(&server, same_email).await,
        (StatusCode::CONFLICT, "Email já cadastrado".to_string())
    );

    let mut same_cpf = maria();
    same_cpf["email"] = json!("outra@fogtech.com.br");
    assert_eq!(
        register_error(&server, same_cpf).await,
        (StatusCode::CONFLICT, "CPF já cadastrado".to_string())
    );
}

#[tokio::test]
async fn test_register_rejects_invalid_fields() {
    let server = test_server().await;

    let cases = [
        ("email", json!("maria.fogtech"), "Email inválido"),
        ("password", json!("Fog2024"), "Senha deve conter pelo menos 1 caractere especial permitido."),
        ("name", json!("M Silva"), "O primeiro nome deve ter pelo menos 2 caracteres."),
        ("cpf", json!("123.456.789-00"), "CPF inválido"),
        ("birthDate", json!("2015-03-01"), "Você deve ter pelo menos 18 anos"),
        ("phone", json!("98765"), "Telefone inválido"),
    ];

    for (field, value, message) in cases {
        let mut body = maria();
        body[field] = value;
        assert_eq!(
            register_error(&server, body).await,
            (StatusCode::BAD_REQUEST, message.to_string()),
            "campo {field}"
        );
    }
}

#[tokio::test]
async fn test_change_password() {
    let server = test_server().await;
    register_maria(&server).await;

    let response = server
        .post("/api/auth/change-password")
        .json(&json!({
            "email": MARIA_EMAIL,
            "currentPassword": "Errada@123",
            "newPassword": "Nova@2025"
        }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"], "Senha atual incorreta");

    let response = server
        .post("/api/auth/change-password")
        .json(&json!({
            "email": "ninguem@fogtech.com.br",
            "currentPassword": MARIA_PASSWORD,
            "newPassword": "Nova@2025"
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Usuário não encontrado");

    let response = server
        .post("/api/auth/change-password")
        .json(&json!({
            "email": MARIA_EMAIL,
            "currentPassword": MARIA_PASSWORD,
            "newPassword": "Nova@2025"
        }))
        .await;
    response.assert_status(StatusCode::OK);

    server
        .post("/api/auth/login")
        .json(&json!({ "email": MARIA_EMAIL, "password": "Nova@2025" }))
        .await
        .assert_status(StatusCode::OK);
}
