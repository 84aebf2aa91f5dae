// src/handlers/validation.rs

// Expõe o motor de validação para o front checar campos antes do envio.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{
    digits_only, format_cpf, is_valid_cpf, password_strength, validate_password, PasswordCheck,
    PasswordStrength,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PasswordProbe {
    #[schema(example = "Fog@2024")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordVerdict {
    #[serde(flatten)]
    pub check: PasswordCheck,
    pub strength: PasswordStrength,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CpfProbe {
    #[schema(example = "529.982.247-25")]
    pub cpf: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CpfVerdict {
    pub valid: bool,
    #[schema(example = "529.982.247-25")]
    pub formatted: String,
    #[schema(example = "52998224725")]
    pub digits: String,
}

#[utoipa::path(
    post,
    path = "/api/validation/password",
    tag = "Validation",
    request_body = PasswordProbe,
    responses(
        (status = 200, description = "Veredito da política e força da senha", body = PasswordVerdict)
    )
)]
pub async fn check_password(Json(probe): Json<PasswordProbe>) -> Json<PasswordVerdict> {
    Json(PasswordVerdict {
        check: validate_password(&probe.password),
        strength: password_strength(&probe.password),
    })
}

#[utoipa::path(
    post,
    path = "/api/validation/cpf",
    tag = "Validation",
    request_body = CpfProbe,
    responses(
        (status = 200, description = "Veredito e máscara do CPF", body = CpfVerdict)
    )
)]
pub async fn check_cpf(Json(probe): Json<CpfProbe>) -> Json<CpfVerdict> {
    Json(CpfVerdict {
        valid: is_valid_cpf(&probe.cpf),
        formatted: format_cpf(&probe.cpf),
        digits: digits_only(&probe.cpf),
    })
}
