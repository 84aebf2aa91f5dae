// src/db/memory.rs

// Armazenamento em memória: mesmo contrato dos repositórios Postgres,
// usado no modo só-local e nos testes.

use std::{collections::HashSet, sync::Arc};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, ClientRepository, RequestRepository},
    models::{
        catalog::{NewService, Service},
        client::{Client, NewClient},
        request::{RequestStatus, ResolvedRequest, ServiceRequest},
    },
};

#[derive(Debug, Clone)]
struct StoredRequest {
    id: i64,
    client_id: i64,
    service_id: i64,
    request_number: String,
    status: RequestStatus,
    order_date: NaiveDate,
    expected_date: NaiveDate,
    price: Decimal,
    notes: Option<String>,
}

#[derive(Debug, Default)]
struct Tables {
    clients: Vec<Client>,
    services: Vec<Service>,
    requests: Vec<StoredRequest>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.iter().find(|c| c.email == email).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Client>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.iter().find(|c| c.cpf == cpf).cloned())
    }

    async fn create(&self, client: &NewClient) -> Result<Client, AppError> {
        let mut tables = self.tables.write().await;

        if tables.clients.iter().any(|c| c.email == client.email) {
            return Err(AppError::EmailAlreadyExists);
        }
        if tables.clients.iter().any(|c| c.cpf == client.cpf) {
            return Err(AppError::CpfAlreadyExists);
        }

        let created = Client {
            id: tables.next_id(),
            name: client.name.clone(),
            email: client.email.clone(),
            password_hash: client.password_hash.clone(),
            cpf: client.cpf.clone(),
            birth_date: client.birth_date,
            phone: client.phone.clone(),
            marital_status: client.marital_status,
            education: client.education,
            created_at: Utc::now(),
        };
        tables.clients.push(created.clone());
        Ok(created)
    }

    async fn update_password(&self, client_id: i64, password_hash: &str) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let client = tables
            .clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or(AppError::UserNotFound)?;
        client.password_hash = password_hash.to_string();
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Service>, AppError> {
        let tables = self.tables.read().await;
        let mut services = tables.services.clone();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Service>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.services.iter().find(|s| s.code == code).cloned())
    }

    async fn create(&self, service: &NewService) -> Result<Service, AppError> {
        let mut tables = self.tables.write().await;

        if tables.services.iter().any(|s| s.code == service.code) {
            return Err(AppError::ServiceCodeAlreadyExists);
        }

        let created = Service {
            id: tables.next_id(),
            code: service.code.clone(),
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price,
            lead_days: service.lead_days,
            created_at: Utc::now(),
        };
        tables.services.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.services.len() as i64)
    }
}

#[async_trait]
impl RequestRepository for MemoryStore {
    async fn list_by_client(&self, client_id: i64) -> Result<Vec<ServiceRequest>, AppError> {
        let tables = self.tables.read().await;

        let mut requests = Vec::new();
        for stored in tables.requests.iter().filter(|r| r.client_id == client_id) {
            let service = tables
                .services
                .iter()
                .find(|s| s.id == stored.service_id)
                .ok_or_else(|| anyhow!("solicitação {} aponta para serviço inexistente", stored.id))?;

            requests.push(ServiceRequest {
                id: stored.id,
                request_number: stored.request_number.clone(),
                service_code: service.code.clone(),
                service_name: service.name.clone(),
                status: stored.status,
                order_date: stored.order_date,
                expected_date: stored.expected_date,
                price: stored.price,
                notes: stored.notes.clone(),
            });
        }

        // Mesma ordem do SELECT: data desc, id asc (sort estável)
        requests.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(a.id.cmp(&b.id)));
        Ok(requests)
    }

    async fn replace_all(&self, client_id: i64, requests: &[ResolvedRequest]) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;

        // Todas as restrições são checadas antes de tocar nos dados,
        // o que faz o papel do rollback.
        if !tables.clients.iter().any(|c| c.id == client_id) {
            return Err(anyhow!("cliente {client_id} inexistente").into());
        }
        let mut numbers = HashSet::new();
        for request in requests {
            if !tables.services.iter().any(|s| s.id == request.service_id) {
                return Err(anyhow!("serviço {} inexistente", request.service_id).into());
            }
            if !numbers.insert(request.request_number.as_str()) {
                return Err(anyhow!("número {} repetido", request.request_number).into());
            }
        }

        tables.requests.retain(|r| r.client_id != client_id);
        for request in requests {
            let id = tables.next_id();
            tables.requests.push(StoredRequest {
                id,
                client_id,
                service_id: request.service_id,
                request_number: request.request_number.clone(),
                status: request.status,
                order_date: request.order_date,
                expected_date: request.expected_date,
                price: request.price,
                notes: request.notes.clone(),
            });
        }

        tracing::debug!("Solicitações do cliente {} substituídas em memória.", client_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::client::{Education, MaritalStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_client(email: &str, cpf: &str) -> NewClient {
        NewClient {
            name: "Maria Silva".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            cpf: cpf.to_string(),
            birth_date: date(1990, 5, 17),
            phone: None,
            marital_status: MaritalStatus::Single,
            education: Education::Superior,
        }
    }

    fn new_service(code: &str, name: &str) -> NewService {
        NewService {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            price: Decimal::new(150000, 2),
            lead_days: 7,
        }
    }

    fn line(service_id: i64, number: &str, day: u32) -> ResolvedRequest {
        ResolvedRequest {
            service_id,
            request_number: number.to_string(),
            status: RequestStatus::Pending,
            order_date: date(2026, 10, day),
            expected_date: date(2026, 10, day + 7),
            price: Decimal::new(150000, 2),
            notes: None,
        }
    }

    #[tokio::test]
    async fn enforces_unique_email_and_cpf() {
        let store = MemoryStore::new();
        ClientRepository::create(&store, &new_client("a@b.com", "52998224725")).await.unwrap();

        let dup_email = ClientRepository::create(&store, &new_client("a@b.com", "11144477735")).await;
        assert!(matches!(dup_email, Err(AppError::EmailAlreadyExists)));

        let dup_cpf = ClientRepository::create(&store, &new_client("c@d.com", "52998224725")).await;
        assert!(matches!(dup_cpf, Err(AppError::CpfAlreadyExists)));
    }

    #[tokio::test]
    async fn lists_catalog_by_name() {
        let store = MemoryStore::new();
        CatalogRepository::create(&store, &new_service("SUP", "Suporte Técnico")).await.unwrap();
        CatalogRepository::create(&store, &new_service("DEV", "Desenvolvimento Web")).await.unwrap();

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Desenvolvimento Web", "Suporte Técnico"]);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn replace_all_swaps_the_whole_set() {
        let store = MemoryStore::new();
        let client = ClientRepository::create(&store, &new_client("a@b.com", "52998224725")).await.unwrap();
        let service = CatalogRepository::create(&store, &new_service("SUP", "Suporte")).await.unwrap();

        store
            .replace_all(client.id, &[line(service.id, "1001", 1), line(service.id, "1002", 5)])
            .await
            .unwrap();
        let listed = store.list_by_client(client.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].request_number, "1002");
        assert_eq!(listed[0].service_code, "SUP");

        store.replace_all(client.id, &[line(service.id, "2001", 3)]).await.unwrap();
        let listed = store.list_by_client(client.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].request_number, "2001");

        store.replace_all(client.id, &[]).await.unwrap();
        assert!(store.list_by_client(client.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_replace_keeps_previous_set() {
        let store = MemoryStore::new();
        let client = ClientRepository::create(&store, &new_client("a@b.com", "52998224725")).await.unwrap();
        let service = CatalogRepository::create(&store, &new_service("SUP", "Suporte")).await.unwrap();
        store.replace_all(client.id, &[line(service.id, "1001", 1)]).await.unwrap();

        // Segunda linha aponta para um serviço que não existe
        let result = store
            .replace_all(client.id, &[line(service.id, "3001", 2), line(9999, "3002", 2)])
            .await;
        assert!(result.is_err());

        let listed = store.list_by_client(client.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].request_number, "1001");
    }

    #[tokio::test]
    async fn replace_only_touches_the_owner() {
        let store = MemoryStore::new();
        let maria = ClientRepository::create(&store, &new_client("a@b.com", "52998224725")).await.unwrap();
        let joao = ClientRepository::create(&store, &new_client("c@d.com", "11144477735")).await.unwrap();
        let service = CatalogRepository::create(&store, &new_service("SUP", "Suporte")).await.unwrap();

        store.replace_all(maria.id, &[line(service.id, "1001", 1)]).await.unwrap();
        store.replace_all(joao.id, &[line(service.id, "1001", 1)]).await.unwrap();
        store.replace_all(maria.id, &[]).await.unwrap();

        assert!(store.list_by_client(maria.id).await.unwrap().is_empty());
        assert_eq!(store.list_by_client(joao.id).await.unwrap().len(), 1);
    }
}
