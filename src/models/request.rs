// src/models/request.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Enums ---

// Os rótulos são os mesmos gravados no banco (CREATE TYPE request_status)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status")]
pub enum RequestStatus {
    #[default]
    #[serde(rename = "Pendente")]
    #[sqlx(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em Andamento")]
    #[sqlx(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    #[sqlx(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    #[sqlx(rename = "Cancelado")]
    Cancelled,
    // Recém incluída no carrinho, ainda não enviada
    #[serde(rename = "EM ELABORAÇÃO")]
    #[sqlx(rename = "EM ELABORAÇÃO")]
    Drafting,
}

// --- Leitura ---

/// Uma solicitação persistida, já com os dados do serviço (JOIN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: i64,
    #[schema(example = "4821")]
    pub request_number: String,
    #[schema(example = "DEV")]
    pub service_code: String,
    #[schema(example = "Desenvolvimento Web")]
    pub service_name: String,
    pub status: RequestStatus,
    pub order_date: NaiveDate,
    pub expected_date: NaiveDate,
    #[schema(example = "5000.00")]
    pub price: Decimal,
    pub notes: Option<String>,
}

// --- Escrita ---

/// Uma linha enviada pelo cliente no "salvar" do carrinho.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestLine {
    // O front antigo mandava número; aceitamos número ou texto
    #[serde(deserialize_with = "request_number_from_any")]
    #[schema(value_type = String, example = "4821")]
    pub request_number: String,

    #[schema(example = "DEV")]
    pub service_code: String,

    // Ausente -> Pendente
    #[serde(default)]
    pub status: Option<RequestStatus>,

    pub order_date: NaiveDate,

    // Ausente -> data do pedido + prazo do serviço
    #[serde(default)]
    pub expected_date: Option<NaiveDate>,

    #[schema(example = "5000.00")]
    pub price: Decimal,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Linha resolvida contra o catálogo, pronta para o INSERT.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub service_id: i64,
    pub request_number: String,
    pub status: RequestStatus,
    pub order_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequestsPayload {
    pub requests: Vec<RequestLine>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestList {
    pub requests: Vec<ServiceRequest>,
}

fn request_number_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text.trim().to_string(),
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_number_accepts_text_or_number() {
        let from_number: RequestLine = serde_json::from_value(json!({
            "requestNumber": 4821,
            "serviceCode": "DEV",
            "orderDate": "2026-10-19",
            "price": 5000.0
        }))
        .unwrap();
        assert_eq!(from_number.request_number, "4821");
        assert_eq!(from_number.status, None);
        assert_eq!(from_number.expected_date, None);

        let from_text: RequestLine = serde_json::from_value(json!({
            "requestNumber": " 4821 ",
            "serviceCode": "DEV",
            "status": "EM ELABORAÇÃO",
            "orderDate": "2026-10-19",
            "expectedDate": "2026-11-18",
            "price": 5000.0
        }))
        .unwrap();
        assert_eq!(from_text.request_number, "4821");
        assert_eq!(from_text.status, Some(RequestStatus::Drafting));
    }

    #[test]
    fn status_uses_portuguese_labels() {
        assert_eq!(
            serde_json::to_value(RequestStatus::InProgress).unwrap(),
            json!("Em Andamento")
        );
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }
}
