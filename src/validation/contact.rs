// src/validation/contact.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::password::{ALLOWED_SPECIALS, FORBIDDEN_CHARS};

// Checagem de formato propositalmente frouxa: algo@algo.algo, sem espaços
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de e-mail válida"));

pub fn is_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Remove tudo que não for dígito ASCII.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Telefone é opcional: vazio é válido. Caso contrário, 10 ou 11 dígitos (DDD + número).
pub fn is_phone_br(phone: &str) -> bool {
    if phone.trim().is_empty() {
        return true;
    }
    matches!(digits_only(phone).len(), 10 | 11)
}

/// Regras do nome completo no cadastro. Retorna a mensagem do primeiro problema.
pub fn validate_full_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("O nome deve ser preenchido.");
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return Err("Informe nome e sobrenome.");
    }
    if parts[0].chars().count() < 2 {
        return Err("O primeiro nome deve ter pelo menos 2 caracteres.");
    }
    if name
        .chars()
        .any(|c| FORBIDDEN_CHARS.contains(c) || ALLOWED_SPECIALS.contains(c))
    {
        return Err("O nome não pode conter caracteres especiais.");
    }

    Ok(())
}

/// Máscara progressiva de CPF: `000.000.000-00`.
pub fn format_cpf(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(11).collect();
    let (a, rest) = split_at_char(&digits, 3);
    let (b, rest) = split_at_char(rest, 3);
    let (c, d) = split_at_char(rest, 3);

    match digits.len() {
        0..=3 => digits.clone(),
        4..=6 => format!("{a}.{b}"),
        7..=9 => format!("{a}.{b}.{c}"),
        _ => format!("{a}.{b}.{c}-{d}"),
    }
}

/// Máscara progressiva de telefone: `(00) 00000-0000` ou `(00) 0000-0000`.
pub fn format_phone(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(11).collect();
    let (area, number) = split_at_char(&digits, 2);

    match digits.len() {
        0..=2 => digits.clone(),
        3..=6 => format!("({area}) {number}"),
        7..=10 => {
            let (head, tail) = split_at_char(number, 4);
            format!("({area}) {head}-{tail}")
        }
        _ => {
            let (head, tail) = split_at_char(number, 5);
            format!("({area}) {head}-{tail}")
        }
    }
}

// Só é chamado com strings de dígitos ASCII, então índice de byte == índice de char
fn split_at_char(value: &str, at: usize) -> (&str, &str) {
    value.split_at(at.min(value.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_email("cliente@fogtech.com.br"));
        assert!(is_email("  a@b.c  "));
        assert!(!is_email(""));
        assert!(!is_email("cliente"));
        assert!(!is_email("cliente@fogtech"));
        assert!(!is_email("cli ente@fogtech.com"));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email("@fogtech.com"));
    }

    #[test]
    fn phone_digit_count() {
        assert!(is_phone_br(""));
        assert!(is_phone_br("(11) 98765-4321"));
        assert!(is_phone_br("1133334444"));
        assert!(!is_phone_br("123456789"));
        assert!(!is_phone_br("119876543210"));
    }

    #[test]
    fn full_name_rules() {
        assert_eq!(validate_full_name("Maria Silva"), Ok(()));
        assert_eq!(validate_full_name("   "), Err("O nome deve ser preenchido."));
        assert_eq!(validate_full_name("Maria"), Err("Informe nome e sobrenome."));
        assert_eq!(
            validate_full_name("M Silva"),
            Err("O primeiro nome deve ter pelo menos 2 caracteres.")
        );
        assert_eq!(
            validate_full_name("Maria Silva!"),
            Err("O nome não pode conter caracteres especiais.")
        );
        assert_eq!(
            validate_full_name("Maria D'Ávila"),
            Err("O nome não pode conter caracteres especiais.")
        );
        assert_eq!(validate_full_name("João da Conceição"), Ok(()));
    }

    #[test]
    fn cpf_mask_is_progressive() {
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("5299822"), "529.982.2");
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-2599"), "529.982.247-25");
    }

    #[test]
    fn phone_mask_is_progressive() {
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }
}
