// src/services/auth.rs

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::auth::Session,
    validation::validate_password,
};

// bcrypt é CPU-bound: roda no pool de threads bloqueantes do tokio
pub(crate) async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password_clone = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, cost))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
    Ok(hashed)
}

pub(crate) async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let password_clone = password.to_owned();
    let password_hash_clone = password_hash.to_owned();
    let is_valid = tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;
    Ok(is_valid)
}

#[derive(Clone)]
pub struct AuthService {
    clients: Arc<dyn ClientRepository>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(clients: Arc<dyn ClientRepository>, bcrypt_cost: u32) -> Self {
        Self { clients, bcrypt_cost }
    }

    /// E-mail desconhecido e senha errada dão o mesmo erro.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let client = self
            .clients
            .find_by_email(email.trim())
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &client.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("🔑 Login do cliente {}.", client.id);
        Ok(Session::from(&client))
    }

    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        validate_password(new_password).into_result()?;

        let client = self
            .clients
            .find_by_email(email.trim())
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !verify_password(current_password, &client.password_hash).await? {
            return Err(AppError::WrongCurrentPassword);
        }

        let new_hash = hash_password(new_password, self.bcrypt_cost).await?;
        self.clients.update_password(client.id, &new_hash).await?;

        tracing::info!("🔒 Senha do cliente {} alterada.", client.id);
        Ok(())
    }
}
