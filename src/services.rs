// src/services.rs

pub mod auth;
pub mod cart;
pub mod catalog_service;
pub mod client_service;
pub mod request_service;

pub use auth::AuthService;
pub use cart::{CartItem, RequestCart, RequestSync};
pub use catalog_service::CatalogService;
pub use client_service::ClientService;
pub use request_service::RequestService;
