// src/handlers/clients.rs

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::client::{RegisterClientPayload, RegisteredClient},
};

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = RegisterClientPayload,
    responses(
        (status = 201, description = "Cliente cadastrado", body = RegisteredClient),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Email ou CPF já cadastrado")
    )
)]
pub async fn register_client(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterClientPayload>,
) -> Result<(StatusCode, Json<RegisteredClient>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let client = app_state.client_service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredClient {
            id: client.id,
            message: "Cliente cadastrado com sucesso".to_string(),
        }),
    ))
}
