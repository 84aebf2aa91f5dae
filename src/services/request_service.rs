// src/services/request_service.rs

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use chrono::Days;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, RequestRepository},
    models::{
        catalog::Service,
        request::{RequestLine, ResolvedRequest, ServiceRequest},
    },
    services::ClientService,
    validation::fits_price_column,
};

#[derive(Clone)]
pub struct RequestService {
    clients: ClientService,
    catalog: Arc<dyn CatalogRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl RequestService {
    pub fn new(
        clients: ClientService,
        catalog: Arc<dyn CatalogRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self { clients, catalog, requests }
    }

    pub async fn list_for_email(&self, email: &str) -> Result<Vec<ServiceRequest>, AppError> {
        let client = self.clients.resolve(email).await?;
        self.requests.list_by_client(client.id).await
    }

    /// Troca o conjunto inteiro de solicitações do cliente pelo lote recebido.
    /// Lote vazio limpa tudo. Devolve a lista como ficou gravada.
    pub async fn replace_for_email(
        &self,
        email: &str,
        lines: Vec<RequestLine>,
    ) -> Result<Vec<ServiceRequest>, AppError> {
        let client = self.clients.resolve(email).await?;
        let resolved = self.resolve_lines(lines).await?;

        self.requests.replace_all(client.id, &resolved).await?;
        self.requests.list_by_client(client.id).await
    }

    // Valida o lote inteiro antes de abrir a transação
    async fn resolve_lines(&self, lines: Vec<RequestLine>) -> Result<Vec<ResolvedRequest>, AppError> {
        let mut services: HashMap<String, Service> = HashMap::new();
        let mut numbers = HashSet::new();
        let mut resolved = Vec::with_capacity(lines.len());

        for line in lines {
            let code = line.service_code.trim().to_uppercase();
            let service = match services.get(&code) {
                Some(service) => service.clone(),
                None => {
                    let service = self
                        .catalog
                        .find_by_code(&code)
                        .await?
                        .ok_or_else(|| AppError::UnknownService(code.clone()))?;
                    services.insert(code, service.clone());
                    service
                }
            };

            let request_number = line.request_number.trim().to_string();
            if request_number.is_empty() {
                return Err(AppError::invalid("Número da solicitação é obrigatório"));
            }
            // Limite da coluna request_number
            if request_number.chars().count() > 50 {
                return Err(AppError::invalid("Número da solicitação muito longo"));
            }
            if !numbers.insert(request_number.clone()) {
                return Err(AppError::invalid(format!(
                    "Número de solicitação {request_number} repetido"
                )));
            }

            if line.price < Decimal::ZERO || !fits_price_column(line.price) {
                return Err(AppError::invalid(format!(
                    "Preço inválido na solicitação {request_number}"
                )));
            }

            let expected_date = match line.expected_date {
                Some(date) => date,
                None => line
                    .order_date
                    .checked_add_days(Days::new(service.lead_days.max(0) as u64))
                    .ok_or_else(|| AppError::invalid("Data prevista fora do intervalo"))?,
            };
            if expected_date < line.order_date {
                return Err(AppError::invalid(format!(
                    "Data prevista anterior à data do pedido na solicitação {request_number}"
                )));
            }

            resolved.push(ResolvedRequest {
                service_id: service.id,
                request_number,
                status: line.status.unwrap_or_default(),
                order_date: line.order_date,
                expected_date,
                price: line.price,
                notes: line.notes.filter(|n| !n.trim().is_empty()),
            });
        }

        Ok(resolved)
    }
}
