use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::PasswordFailure;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Erros de formato da entrada (e-mail, CPF, senha fraca...). A mensagem vai direto ao usuário.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Serviço {0} não encontrado")]
    UnknownService(String),

    #[error("Email ou senha incorretos")]
    InvalidCredentials,

    #[error("Senha atual incorreta")]
    WrongCurrentPassword,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Email já cadastrado")]
    EmailAlreadyExists,

    #[error("CPF já cadastrado")]
    CpfAlreadyExists,

    #[error("Código de serviço já existe")]
    ServiceCodeAlreadyExists,

    #[error("Todos os números de solicitação estão em uso")]
    NoRequestNumberAvailable,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl From<PasswordFailure> for AppError {
    fn from(failure: PasswordFailure) -> Self {
        AppError::InvalidInput(failure.message().to_string())
    }
}

impl AppError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidInput(_)
            | AppError::UnknownService(_)
            | AppError::NoRequestNumberAvailable => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::WrongCurrentPassword => StatusCode::UNAUTHORIZED,
            AppError::ClientNotFound | AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::EmailAlreadyExists
            | AppError::CpfAlreadyExists
            | AppError::ServiceCodeAlreadyExists => StatusCode::CONFLICT,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (status, body).into_response();
            }

            // Falhas internas: loga o detalhe e devolve mensagem genérica.
            ref e if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                "Ocorreu um erro inesperado.".to_string()
            }

            other => other.to_string(),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status() {
        assert_eq!(AppError::invalid("CPF inválido").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ClientNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::CpfAlreadyExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn password_failure_becomes_input_error() {
        let err: AppError = PasswordFailure::MissingDigit.into();
        assert_eq!(err.to_string(), "Senha deve conter pelo menos 1 número.");
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = AppError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
