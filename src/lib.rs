// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

pub use config::{AppState, CorsOrigin, Settings};
pub use routes::router;
