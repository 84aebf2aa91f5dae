// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Um item do catálogo de serviços de TI
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    #[schema(example = "DEV")]
    pub code: String,
    #[schema(example = "Desenvolvimento Web")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "5000.00")]
    pub price: Decimal,
    // Prazo de entrega em dias, usado para a data prevista das solicitações
    #[schema(example = 30)]
    pub lead_days: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub lead_days: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 2, max = 10, message = "O código deve ter entre 2 e 10 caracteres."))]
    #[schema(example = "BKP")]
    pub code: String,

    #[validate(length(min = 3, message = "O nome deve ter pelo menos 3 caracteres."))]
    #[schema(example = "Backup Gerenciado")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "1200.00")]
    pub price: Decimal,

    #[validate(range(min = 1, message = "O prazo deve ser um número inteiro positivo."))]
    #[schema(example = 10)]
    pub lead_days: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    pub services: Vec<Service>,
}

/// Catálogo inicial, inserido quando a tabela está vazia.
pub fn default_catalog() -> Vec<NewService> {
    let entry = |code: &str, name: &str, description: &str, price: i64, lead_days: i32| NewService {
        code: code.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Decimal::new(price * 100, 2),
        lead_days,
    };

    vec![
        entry(
            "DEV",
            "Desenvolvimento Web",
            "Desenvolvimento de aplicações web modernas e responsivas",
            5000,
            30,
        ),
        entry(
            "SEC",
            "Segurança & Pentest",
            "Auditoria de segurança e testes de penetração",
            3000,
            15,
        ),
        entry(
            "CLOUD",
            "Migração para Cloud",
            "Migração completa para AWS, Azure ou Google Cloud",
            8000,
            45,
        ),
        entry("SUP", "Suporte Técnico", "Suporte técnico especializado 24/7", 1500, 7),
    ]
}
