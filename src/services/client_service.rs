// src/services/client_service.rs

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, NewClient, RegisterClientPayload},
    services::auth::hash_password,
    validation::{
        digits_only, is_adult, is_email, is_phone_br, is_valid_cpf, validate_full_name,
        validate_password,
    },
};

#[derive(Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    bcrypt_cost: u32,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>, bcrypt_cost: u32) -> Self {
        Self { clients, bcrypt_cost }
    }

    /// Cadastra um cliente. As regras são checadas na mesma ordem do
    /// formulário e a primeira que falhar define a mensagem.
    pub async fn register(&self, payload: RegisterClientPayload) -> Result<Client, AppError> {
        let email = payload.email.trim();
        if !is_email(email) {
            return Err(AppError::invalid("Email inválido"));
        }

        validate_password(&payload.password).into_result()?;
        validate_full_name(&payload.name).map_err(AppError::invalid)?;

        if !is_valid_cpf(&payload.cpf) {
            return Err(AppError::invalid("CPF inválido"));
        }
        if !is_adult(&payload.birth_date) {
            return Err(AppError::invalid("Você deve ter pelo menos 18 anos"));
        }
        let birth_date = NaiveDate::parse_from_str(payload.birth_date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::invalid("Data de nascimento inválida"))?;

        let phone = payload.phone.as_deref().unwrap_or_default();
        if !is_phone_br(phone) {
            return Err(AppError::invalid("Telefone inválido"));
        }
        let phone = Some(digits_only(phone)).filter(|p| !p.is_empty());

        // Unicidade antes de qualquer escrita
        let cpf = digits_only(&payload.cpf);
        if self.clients.find_by_email(email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }
        if self.clients.find_by_cpf(&cpf).await?.is_some() {
            return Err(AppError::CpfAlreadyExists);
        }

        let password_hash = hash_password(&payload.password, self.bcrypt_cost).await?;

        let client = self
            .clients
            .create(&NewClient {
                name: payload.name.trim().to_string(),
                email: email.to_string(),
                password_hash,
                cpf,
                birth_date,
                phone,
                marital_status: payload.marital_status,
                education: payload.education,
            })
            .await?;

        tracing::info!("✅ Cliente {} cadastrado.", client.id);
        Ok(client)
    }

    /// E-mail -> cliente. Ausência vira `ClientNotFound`.
    pub async fn resolve(&self, email: &str) -> Result<Client, AppError> {
        self.clients
            .find_by_email(email.trim())
            .await?
            .ok_or(AppError::ClientNotFound)
    }
}
