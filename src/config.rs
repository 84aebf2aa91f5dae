// src/config.rs

use std::{env, time::Duration};

use anyhow::{anyhow, Context};
use axum::http::HeaderValue;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::Repositories,
    services::{AuthService, CatalogService, ClientService, RequestService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    // Modo só-local: nada sobrevive a um restart
    Memory,
}

/// Origem liberada no CORS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

impl CorsOrigin {
    /// `*` ou uma origem `http(s)://host[:porta]`.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        if raw == "*" {
            return Ok(CorsOrigin::Any);
        }

        let host = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))
            .ok_or_else(|| anyhow!("CORS_ORIGIN inválida: {raw}"))?;
        if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
            return Err(anyhow!("CORS_ORIGIN inválida: {raw}"));
        }

        let value = HeaderValue::from_str(raw).with_context(|| format!("CORS_ORIGIN inválida: {raw}"))?;
        Ok(CorsOrigin::Exact(value))
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: Option<String>,
    pub storage: StorageBackend,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub bcrypt_cost: u32,
    pub seed_catalog: bool,
    pub cors_origin: CorsOrigin,
}

impl Settings {
    /// Lê as variáveis de ambiente (e o `.env`, se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => return Err(anyhow!("STORAGE_BACKEND inválido: {other}")),
        };

        let database_url = lookup("DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("DATABASE_URL deve ser definida"));
        }

        Ok(Self {
            database_url,
            storage,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3001)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            seed_catalog: parse_or(&lookup, "SEED_CATALOG", true)?,
            cors_origin: CorsOrigin::parse(
                lookup("CORS_ORIGIN").as_deref().unwrap_or("http://localhost:3000"),
            )?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválida: {raw}")),
        None => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub client_service: ClientService,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub request_service: RequestService,
}

impl AppState {
    /// Monta o gráfico de dependências sobre um conjunto de repositórios.
    pub fn new(repos: Repositories, bcrypt_cost: u32) -> Self {
        let client_service = ClientService::new(repos.clients.clone(), bcrypt_cost);
        let auth_service = AuthService::new(repos.clients, bcrypt_cost);
        let catalog_service = CatalogService::new(repos.catalog.clone());
        let request_service =
            RequestService::new(client_service.clone(), repos.catalog, repos.requests);

        Self {
            client_service,
            auth_service,
            catalog_service,
            request_service,
        }
    }

    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::new(Repositories::in_memory(), bcrypt_cost)
    }

    /// Conecta no backend configurado. No Postgres, roda as migrações antes.
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let repos = match settings.storage {
            StorageBackend::Memory => {
                tracing::warn!("⚠️ Armazenamento em memória: os dados somem ao reiniciar.");
                Repositories::in_memory()
            }
            StorageBackend::Postgres => {
                let pool = connect(settings).await?;
                sqlx::migrate!().run(&pool).await?;
                tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
                Repositories::postgres(pool)
            }
        };

        Ok(Self::new(repos, settings.bcrypt_cost))
    }
}

async fn connect(settings: &Settings) -> anyhow::Result<PgPool> {
    let database_url = settings
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow!("DATABASE_URL deve ser definida"))?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}
