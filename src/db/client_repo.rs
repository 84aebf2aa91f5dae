// src/db/client_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, NewClient},
};

const CLIENT_COLUMNS: &str = r#"
    id, name, email, password_hash, cpf, birth_date, phone,
    marital_status, education, created_at
"#;

// O repositório de clientes, responsável por todas as interações com a tabela 'clients'
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError> {
        let maybe_client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_client)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, AppError> {
        let maybe_client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE cpf = $1"
        ))
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_client)
    }

    // Com tratamento de erro específico para e-mail e CPF duplicados,
    // caso dois cadastros iguais passem juntos pela checagem do serviço.
    async fn create(&self, client: &NewClient) -> Result<Client, AppError> {
        let created = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (
                name, email, password_hash, cpf, birth_date, phone, marital_status, education
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.password_hash)
        .bind(&client.cpf)
        .bind(client.birth_date)
        .bind(client.phone.as_deref())
        .bind(client.marital_status)
        .bind(client.education)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    match db_err.constraint() {
                        Some("clients_email_key") => return AppError::EmailAlreadyExists,
                        Some("clients_cpf_key") => return AppError::CpfAlreadyExists,
                        _ => {}
                    }
                }
            }
            e.into()
        })?;

        Ok(created)
    }

    async fn update_password(&self, client_id: i64, password_hash: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE clients SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}
