// src/handlers/auth.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{ChangePasswordPayload, LoginPayload, MessageResponse, Session},
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login realizado", body = Session),
        (status = 401, description = "Email ou senha incorretos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Session>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let session = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "Auth",
    request_body = ChangePasswordPayload,
    responses(
        (status = 200, description = "Senha alterada", body = MessageResponse),
        (status = 400, description = "Nova senha fora da política"),
        (status = 401, description = "Senha atual incorreta"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn change_password(
    State(app_state): State<AppState>,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state
        .auth_service
        .change_password(&payload.email, &payload.current_password, &payload.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Senha alterada com sucesso")))
}
