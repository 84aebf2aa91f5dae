// src/handlers/catalog.rs

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::catalog::{CreateServicePayload, Service, ServiceList},
};

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Catalog",
    responses(
        (status = 200, description = "Catálogo ordenado por nome", body = ServiceList)
    )
)]
pub async fn list_services(State(app_state): State<AppState>) -> Result<Json<ServiceList>, AppError> {
    let services = app_state.catalog_service.list().await?;
    Ok(Json(ServiceList { services }))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Catalog",
    request_body = CreateServicePayload,
    responses(
        (status = 201, description = "Serviço criado", body = Service),
        (status = 409, description = "Código de serviço já existe")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServicePayload>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let service = app_state.catalog_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}
