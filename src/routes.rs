// src/routes.rs

use axum::{
    http::Method,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::{AppState, CorsOrigin},
    docs::ApiDoc,
    handlers,
};

/// Monta o router completo. `cors_origin` é a origem do front (ou qualquer uma).
pub fn router(app_state: AppState, cors_origin: &CorsOrigin) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/change-password", post(handlers::auth::change_password));

    let validation_routes = Router::new()
        .route("/password", post(handlers::validation::check_password))
        .route("/cpf", post(handlers::validation::check_cpf));

    let api = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/clients", post(handlers::clients::register_client))
        .route(
            "/services",
            get(handlers::catalog::list_services).post(handlers::catalog::create_service),
        )
        .route(
            "/requests/{email}",
            get(handlers::requests::list_requests).put(handlers::requests::replace_requests),
        )
        .nest("/auth", auth_routes)
        .nest("/validation", validation_routes);

    Router::new()
        .nest("/api", api)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    match origin {
        CorsOrigin::Any => cors.allow_origin(Any),
        CorsOrigin::Exact(value) => cors.allow_origin(value.clone()),
    }
}
