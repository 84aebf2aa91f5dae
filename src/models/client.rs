// src/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- ENUMS ---

// Mapeia o CREATE TYPE marital_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "marital_status")]
pub enum MaritalStatus {
    #[serde(rename = "Solteiro(a)")]
    #[sqlx(rename = "Solteiro(a)")]
    Single,
    #[serde(rename = "Casado(a)")]
    #[sqlx(rename = "Casado(a)")]
    Married,
    #[serde(rename = "Divorciado(a)")]
    #[sqlx(rename = "Divorciado(a)")]
    Divorced,
    #[serde(rename = "Viúvo(a)")]
    #[sqlx(rename = "Viúvo(a)")]
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "education_level")]
pub enum Education {
    Fundamental,
    #[serde(rename = "Médio")]
    #[sqlx(rename = "Médio")]
    HighSchool,
    Superior,
    #[serde(rename = "Pós-graduação")]
    #[sqlx(rename = "Pós-graduação")]
    Postgraduate,
    Mestrado,
    Doutorado,
}

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    #[schema(example = "Maria Silva")]
    pub name: String,
    #[schema(example = "maria@fogtech.com.br")]
    pub email: String,

    #[serde(skip_serializing)] // nunca sai na resposta
    #[schema(ignore)]
    pub password_hash: String,

    // Só dígitos
    #[schema(example = "52998224725")]
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub phone: Option<String>,
    pub marital_status: MaritalStatus,
    pub education: Education,
    pub created_at: DateTime<Utc>,
}

/// Dados já validados e normalizados, prontos para o repositório.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub phone: Option<String>,
    pub marital_status: MaritalStatus,
    pub education: Education,
}

// Dados para cadastro de um novo cliente.
// As regras de e-mail, senha, CPF e idade ficam no motor de validação;
// aqui só o que o derive resolve bem.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientPayload {
    #[validate(length(min = 1, message = "O e-mail deve ser preenchido."))]
    #[schema(example = "maria@fogtech.com.br")]
    pub email: String,

    #[schema(example = "Fog@2024")]
    pub password: String,

    #[validate(length(max = 255, message = "O nome deve ter no máximo 255 caracteres."))]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[schema(example = "529.982.247-25")]
    pub cpf: String,

    // Texto ISO (YYYY-MM-DD); data inválida é tratada como menor de idade
    #[schema(example = "1990-05-17")]
    pub birth_date: String,

    #[serde(default)]
    #[schema(example = "(11) 98765-4321")]
    pub phone: Option<String>,

    pub marital_status: MaritalStatus,
    pub education: Education,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredClient {
    pub id: i64,
    #[schema(example = "Cliente cadastrado com sucesso")]
    pub message: String,
}
