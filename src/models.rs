pub mod auth;
pub mod catalog;
pub mod client;
pub mod request;
