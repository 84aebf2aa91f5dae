#![allow(dead_code)]

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};

use fogtech::{router, AppState, CorsOrigin};

pub const MARIA_EMAIL: &str = "maria@fogtech.com.br";
pub const MARIA_PASSWORD: &str = "Fog@2024";

/// Servidor sobre o armazenamento em memória, com o catálogo padrão.
pub async fn test_server() -> TestServer {
    // Custo mínimo do bcrypt para os testes não ficarem lentos
    let app_state = AppState::in_memory(4);
    app_state
        .catalog_service
        .seed_defaults_if_empty()
        .await
        .unwrap();
    TestServer::new(router(app_state, &CorsOrigin::Any)).unwrap()
}

pub fn maria() -> Value {
    json!({
        "email": MARIA_EMAIL,
        "password": MARIA_PASSWORD,
        "name": "Maria Silva",
        "cpf": "529.982.247-25",
        "birthDate": "1990-05-17",
        "phone": "(11) 98765-4321",
        "maritalStatus": "Casado(a)",
        "education": "Pós-graduação"
    })
}

pub async fn register_maria(server: &TestServer) -> i64 {
    let response = server.post("/api/clients").json(&maria()).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
