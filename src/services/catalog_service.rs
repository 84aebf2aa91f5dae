// src/services/catalog_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{default_catalog, CreateServicePayload, NewService, Service},
    validation::fits_price_column,
};

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        self.catalog.list().await
    }

    pub async fn create(&self, payload: CreateServicePayload) -> Result<Service, AppError> {
        let code = payload.code.trim().to_uppercase();
        if !(2..=10).contains(&code.chars().count()) {
            return Err(AppError::invalid("O código deve ter entre 2 e 10 caracteres."));
        }
        let name = payload.name.trim();
        if name.chars().count() < 3 {
            return Err(AppError::invalid("O nome deve ter pelo menos 3 caracteres."));
        }
        if payload.price <= Decimal::ZERO {
            return Err(AppError::invalid("O preço deve ser maior que zero."));
        }
        if !fits_price_column(payload.price) {
            return Err(AppError::invalid(
                "O preço deve ter no máximo 2 casas decimais e ser menor que 100.000.000.",
            ));
        }
        if payload.lead_days <= 0 {
            return Err(AppError::invalid("O prazo deve ser um número inteiro positivo."));
        }

        if self.catalog.find_by_code(&code).await?.is_some() {
            return Err(AppError::ServiceCodeAlreadyExists);
        }

        let description = payload
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let service = self
            .catalog
            .create(&NewService {
                code,
                name: name.to_string(),
                description,
                price: payload.price,
                lead_days: payload.lead_days,
            })
            .await?;

        tracing::info!("✅ Serviço {} criado no catálogo.", service.code);
        Ok(service)
    }

    /// Insere o catálogo padrão se não houver nenhum serviço. Retorna quantos foram inseridos.
    pub async fn seed_defaults_if_empty(&self) -> Result<usize, AppError> {
        if self.catalog.count().await? > 0 {
            return Ok(0);
        }

        let defaults = default_catalog();
        for service in &defaults {
            self.catalog.create(service).await?;
        }

        tracing::info!("🌱 Catálogo inicial criado com {} serviços.", defaults.len());
        Ok(defaults.len())
    }
}
