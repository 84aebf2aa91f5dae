// src/validation.rs

// Motor de validação: funções puras, sem estado compartilhado.
// Usado tanto pelos serviços do servidor quanto pelo carrinho do cliente.

pub mod age;
pub mod contact;
pub mod cpf;
pub mod money;
pub mod password;

pub use age::{is_adult, is_adult_on};
pub use contact::{digits_only, format_cpf, format_phone, is_email, is_phone_br, validate_full_name};
pub use cpf::is_valid_cpf;
pub use money::{fits_price_column, max_price};
pub use password::{
    password_strength, validate_password, PasswordCheck, PasswordFailure, PasswordStrength,
    ALLOWED_SPECIALS, FORBIDDEN_CHARS,
};
