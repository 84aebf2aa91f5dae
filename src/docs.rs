// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::validation;

#[derive(OpenApi)]
#[openapi(
    info(title = "FogTech API", description = "Cadastro de clientes e solicitações de serviços de TI"),
    paths(
        // --- Health ---
        handlers::health::health,

        // --- Auth ---
        handlers::auth::login,
        handlers::auth::change_password,

        // --- Clients ---
        handlers::clients::register_client,

        // --- Catalog ---
        handlers::catalog::list_services,
        handlers::catalog::create_service,

        // --- Requests ---
        handlers::requests::list_requests,
        handlers::requests::replace_requests,

        // --- Validation ---
        handlers::validation::check_password,
        handlers::validation::check_cpf,
    ),
    components(
        schemas(
            handlers::health::Health,

            // --- Auth ---
            models::auth::LoginPayload,
            models::auth::ChangePasswordPayload,
            models::auth::Session,
            models::auth::MessageResponse,

            // --- Clients ---
            models::client::MaritalStatus,
            models::client::Education,
            models::client::Client,
            models::client::RegisterClientPayload,
            models::client::RegisteredClient,

            // --- Catalog ---
            models::catalog::Service,
            models::catalog::ServiceList,
            models::catalog::CreateServicePayload,

            // --- Requests ---
            models::request::RequestStatus,
            models::request::ServiceRequest,
            models::request::RequestLine,
            models::request::ReplaceRequestsPayload,
            models::request::RequestList,

            // --- Validation ---
            validation::PasswordCheck,
            validation::PasswordFailure,
            validation::PasswordStrength,
            handlers::validation::PasswordProbe,
            handlers::validation::PasswordVerdict,
            handlers::validation::CpfProbe,
            handlers::validation::CpfVerdict,
        )
    ),
    tags(
        (name = "Health", description = "Estado do servidor"),
        (name = "Auth", description = "Login e Troca de Senha"),
        (name = "Clients", description = "Cadastro de Clientes"),
        (name = "Catalog", description = "Catálogo de Serviços de TI"),
        (name = "Requests", description = "Solicitações de Serviço (carrinho)"),
        (name = "Validation", description = "Motor de Validação (senha e CPF)")
    )
)]
pub struct ApiDoc;
