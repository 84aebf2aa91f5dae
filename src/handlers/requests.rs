// src/handlers/requests.rs

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::request::{ReplaceRequestsPayload, RequestList},
};

#[utoipa::path(
    get,
    path = "/api/requests/{email}",
    tag = "Requests",
    responses(
        (status = 200, description = "Solicitações do cliente, mais recentes primeiro", body = RequestList),
        (status = 404, description = "Cliente não encontrado")
    ),
    params(
        ("email" = String, Path, description = "Email do cliente")
    )
)]
pub async fn list_requests(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RequestList>, AppError> {
    let requests = app_state.request_service.list_for_email(&email).await?;
    Ok(Json(RequestList { requests }))
}

// Substitui o conjunto inteiro (é assim que o carrinho "salva")
#[utoipa::path(
    put,
    path = "/api/requests/{email}",
    tag = "Requests",
    request_body = ReplaceRequestsPayload,
    responses(
        (status = 200, description = "Conjunto gravado", body = RequestList),
        (status = 400, description = "Lote inválido; nada foi alterado"),
        (status = 404, description = "Cliente não encontrado")
    ),
    params(
        ("email" = String, Path, description = "Email do cliente")
    )
)]
pub async fn replace_requests(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<ReplaceRequestsPayload>,
) -> Result<Json<RequestList>, AppError> {
    let requests = app_state
        .request_service
        .replace_for_email(&email, payload.requests)
        .await?;
    Ok(Json(RequestList { requests }))
}
