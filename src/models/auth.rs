// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::client::Client;

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "O e-mail deve ser preenchido."))]
    #[schema(example = "maria@fogtech.com.br")]
    pub email: String,
    #[validate(length(min = 1, message = "A senha deve ser preenchida."))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    #[validate(length(min = 1, message = "O e-mail deve ser preenchido."))]
    pub email: String,
    #[validate(length(min = 1, message = "Informe a senha atual."))]
    pub current_password: String,
    pub new_password: String,
}

/// O "usuário logado". Substitui o estado global do navegador:
/// quem precisa dele recebe explicitamente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub client_id: i64,
    #[schema(example = "Maria Silva")]
    pub name: String,
    #[schema(example = "maria@fogtech.com.br")]
    pub email: String,
}

impl From<&Client> for Session {
    fn from(client: &Client) -> Self {
        Self {
            client_id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
