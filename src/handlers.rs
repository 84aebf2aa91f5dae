// src/handlers.rs

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod health;
pub mod requests;
pub mod validation;
