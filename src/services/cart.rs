// src/services/cart.rs

// Carrinho de solicitações do cliente: lista local sincronizada com o
// servidor por substituição completa.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::error::AppError,
    models::{
        auth::Session,
        catalog::Service,
        request::{RequestLine, RequestStatus, ServiceRequest},
    },
    services::RequestService,
};

const FIRST_NUMBER: u32 = 1000;
const LAST_NUMBER: u32 = 9999;

/// Quem guarda as solicitações do lado do servidor.
#[async_trait]
pub trait RequestSync: Send + Sync {
    async fn fetch(&self, session: &Session) -> Result<Vec<ServiceRequest>, AppError>;

    /// Substitui tudo e devolve a lista como ficou gravada.
    async fn replace_all(
        &self,
        session: &Session,
        lines: Vec<RequestLine>,
    ) -> Result<Vec<ServiceRequest>, AppError>;
}

#[async_trait]
impl RequestSync for RequestService {
    async fn fetch(&self, session: &Session) -> Result<Vec<ServiceRequest>, AppError> {
        self.list_for_email(&session.email).await
    }

    async fn replace_all(
        &self,
        session: &Session,
        lines: Vec<RequestLine>,
    ) -> Result<Vec<ServiceRequest>, AppError> {
        self.replace_for_email(&session.email, lines).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub request_number: String,
    pub service_code: String,
    pub service_name: String,
    pub status: RequestStatus,
    pub order_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub price: Decimal,
    pub notes: Option<String>,
}

impl From<ServiceRequest> for CartItem {
    fn from(request: ServiceRequest) -> Self {
        Self {
            request_number: request.request_number,
            service_code: request.service_code,
            service_name: request.service_name,
            status: request.status,
            order_date: request.order_date,
            expected_date: request.expected_date,
            price: request.price,
            notes: request.notes,
        }
    }
}

impl From<&CartItem> for RequestLine {
    fn from(item: &CartItem) -> Self {
        Self {
            request_number: item.request_number.clone(),
            service_code: item.service_code.clone(),
            status: Some(item.status),
            order_date: item.order_date,
            expected_date: Some(item.expected_date),
            price: item.price,
            notes: item.notes.clone(),
        }
    }
}

/// Sorteia um número de 1000 a 9999 que ainda não esteja no carrinho.
pub fn next_request_number<R: Rng>(
    existing: &[CartItem],
    rng: &mut R,
) -> Result<String, AppError> {
    let used: HashSet<u32> = existing
        .iter()
        .filter_map(|item| item.request_number.parse::<u32>().ok())
        .filter(|n| (FIRST_NUMBER..=LAST_NUMBER).contains(n))
        .collect();

    if used.len() as u32 > LAST_NUMBER - FIRST_NUMBER {
        return Err(AppError::NoRequestNumberAvailable);
    }

    loop {
        let candidate = rng.gen_range(FIRST_NUMBER..=LAST_NUMBER);
        if !used.contains(&candidate) {
            return Ok(candidate.to_string());
        }
    }
}

pub struct RequestCart<S: RequestSync> {
    sync: S,
    session: Session,
    items: Vec<CartItem>,
}

impl<S: RequestSync> RequestCart<S> {
    /// Carrinho vazio; chame `reload` para trazer o que já está gravado.
    pub fn new(sync: S, session: Session) -> Self {
        Self { sync, session, items: Vec::new() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    pub async fn reload(&mut self) -> Result<(), AppError> {
        let requests = self.sync.fetch(&self.session).await?;
        self.items = requests.into_iter().map(CartItem::from).collect();
        Ok(())
    }

    /// Inclui uma solicitação "EM ELABORAÇÃO" do serviço. Com `persist`, já grava;
    /// se a gravação falhar o item sai do carrinho. Retorna o número sorteado.
    pub async fn add(
        &mut self,
        service: &Service,
        today: NaiveDate,
        persist: bool,
    ) -> Result<String, AppError> {
        let request_number = next_request_number(&self.items, &mut rand::thread_rng())?;
        let expected_date = today
            .checked_add_days(Days::new(service.lead_days.max(0) as u64))
            .ok_or_else(|| AppError::invalid("Data prevista fora do intervalo"))?;

        self.items.push(CartItem {
            request_number: request_number.clone(),
            service_code: service.code.clone(),
            service_name: service.name.clone(),
            status: RequestStatus::Drafting,
            order_date: today,
            expected_date,
            price: service.price,
            notes: None,
        });

        if persist {
            if let Err(e) = self.save().await {
                self.items.pop();
                return Err(e);
            }
        }

        Ok(request_number)
    }

    /// Remove pelo número, se `confirm` aceitar. Retorna `false` quando nada
    /// mudou (número desconhecido ou remoção recusada). Se a gravação falhar,
    /// o item volta para a mesma posição.
    pub async fn remove<F>(&mut self, request_number: &str, confirm: F) -> Result<bool, AppError>
    where
        F: FnOnce(&CartItem) -> bool,
    {
        let Some(position) = self
            .items
            .iter()
            .position(|item| item.request_number == request_number)
        else {
            return Ok(false);
        };

        if !confirm(&self.items[position]) {
            return Ok(false);
        }

        let removed = self.items.remove(position);
        if let Err(e) = self.save().await {
            tracing::warn!("Falha ao remover a solicitação {}: {}", removed.request_number, e);
            self.items.insert(position, removed);
            return Err(e);
        }

        Ok(true)
    }

    /// Grava o carrinho inteiro e recarrega a partir da resposta do servidor,
    /// mantendo a ordem local dos itens.
    pub async fn save(&mut self) -> Result<(), AppError> {
        let lines = self.items.iter().map(RequestLine::from).collect();
        let saved = self.sync.replace_all(&self.session, lines).await?;

        // O servidor devolve por data; o carrinho fica na ordem em que os itens entraram
        let mut items: Vec<CartItem> = saved.into_iter().map(CartItem::from).collect();
        {
            let local_order: HashMap<&str, usize> = self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| (item.request_number.as_str(), i))
                .collect();
            items.sort_by_key(|item| {
                local_order
                    .get(item.request_number.as_str())
                    .copied()
                    .unwrap_or(usize::MAX)
            });
        }

        self.items = items;
        Ok(())
    }
}
