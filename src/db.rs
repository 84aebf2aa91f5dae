use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        catalog::{NewService, Service},
        client::{Client, NewClient},
        request::{ResolvedRequest, ServiceRequest},
    },
};

pub mod catalog_repo;
pub mod client_repo;
pub mod memory;
pub mod request_repo;

pub use catalog_repo::PgCatalogRepository;
pub use client_repo::PgClientRepository;
pub use memory::MemoryStore;
pub use request_repo::PgRequestRepository;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError>;

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, AppError>;

    /// Violações de unicidade viram `EmailAlreadyExists` / `CpfAlreadyExists`.
    async fn create(&self, client: &NewClient) -> Result<Client, AppError>;

    async fn update_password(&self, client_id: i64, password_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Ordenado por nome.
    async fn list(&self) -> Result<Vec<Service>, AppError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Service>, AppError>;

    async fn create(&self, service: &NewService) -> Result<Service, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Mais recentes primeiro; no mesmo dia, na ordem de inserção.
    async fn list_by_client(&self, client_id: i64) -> Result<Vec<ServiceRequest>, AppError>;

    /// Apaga todas as solicitações do cliente e insere `requests`, atomicamente:
    /// ou a troca inteira acontece, ou o conjunto anterior continua lá.
    async fn replace_all(&self, client_id: i64, requests: &[ResolvedRequest]) -> Result<(), AppError>;
}

/// Os três repositórios, já como trait objects, para montar os serviços.
#[derive(Clone)]
pub struct Repositories {
    pub clients: Arc<dyn ClientRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub requests: Arc<dyn RequestRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            clients: Arc::new(PgClientRepository::new(pool.clone())),
            catalog: Arc::new(PgCatalogRepository::new(pool.clone())),
            requests: Arc::new(PgRequestRepository::new(pool)),
        }
    }

    // Modo só-local: nada é gravado em disco
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            clients: Arc::new(store.clone()),
            catalog: Arc::new(store.clone()),
            requests: Arc::new(store),
        }
    }
}
