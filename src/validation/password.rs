// src/validation/password.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Caracteres especiais aceitos (ao menos um é obrigatório).
pub const ALLOWED_SPECIALS: &str = "@#$%&*!?/\\|-_+.=";

/// Caracteres que nunca podem aparecer numa senha.
pub const FORBIDDEN_CHARS: &str = "¨{}[]´`~^:;<>,\"'";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Motivo da reprovação, na ordem em que as regras são avaliadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PasswordFailure {
    Empty,
    TooShort,
    MissingDigit,
    MissingUppercase,
    MissingSpecial,
    ForbiddenCharacter,
}

impl PasswordFailure {
    pub fn message(self) -> &'static str {
        match self {
            PasswordFailure::Empty => "Senha é obrigatória.",
            PasswordFailure::TooShort => "Senha deve ter pelo menos 6 caracteres.",
            PasswordFailure::MissingDigit => "Senha deve conter pelo menos 1 número.",
            PasswordFailure::MissingUppercase => "Senha deve conter pelo menos 1 letra maiúscula.",
            PasswordFailure::MissingSpecial => {
                "Senha deve conter pelo menos 1 caractere especial permitido."
            }
            PasswordFailure::ForbiddenCharacter => "Senha contém caracteres não permitidos.",
        }
    }
}

/// Veredito da política de senha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCheck {
    pub valid: bool,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<PasswordFailure>,
}

impl PasswordCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: "Senha válida.".to_string(),
            failure: None,
        }
    }

    fn fail(failure: PasswordFailure) -> Self {
        Self {
            valid: false,
            reason: failure.message().to_string(),
            failure: Some(failure),
        }
    }

    pub fn into_result(self) -> Result<(), PasswordFailure> {
        match self.failure {
            Some(f) => Err(f),
            None => Ok(()),
        }
    }
}

/// Aplica a política de senha, parando na primeira regra violada.
pub fn validate_password(password: &str) -> PasswordCheck {
    if password.is_empty() {
        return PasswordCheck::fail(PasswordFailure::Empty);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return PasswordCheck::fail(PasswordFailure::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordCheck::fail(PasswordFailure::MissingDigit);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordCheck::fail(PasswordFailure::MissingUppercase);
    }
    if !password.chars().any(|c| ALLOWED_SPECIALS.contains(c)) {
        return PasswordCheck::fail(PasswordFailure::MissingSpecial);
    }
    if password.chars().any(|c| FORBIDDEN_CHARS.contains(c)) {
        return PasswordCheck::fail(PasswordFailure::ForbiddenCharacter);
    }

    PasswordCheck::ok()
}

/// Força da senha, só para feedback na tela (não bloqueia nada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub score: u8,
    #[schema(value_type = String)]
    pub label: &'static str,
}

// 1 e 2 compartilham o rótulo
const STRENGTH_LABELS: [&str; 6] = [
    "Muito fraca",
    "Fraca",
    "Fraca",
    "Média",
    "Forte",
    "Muito forte",
];

pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());

    let criteria = [
        len >= 6,
        len >= 10,
        has_lower && has_upper,
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| ALLOWED_SPECIALS.contains(c)),
    ];
    let score = criteria.iter().filter(|&&met| met).count() as u8;

    PasswordStrength {
        score,
        label: STRENGTH_LABELS[score as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_compliant_password() {
        let check = validate_password("Abc123!");
        assert!(check.valid);
        assert_eq!(check.reason, "Senha válida.");
        assert_eq!(check.failure, None);
    }

    #[test]
    fn empty_password_is_required() {
        assert_eq!(validate_password("").failure, Some(PasswordFailure::Empty));
    }

    #[test]
    fn short_passwords_fail_on_length_first() {
        for candidate in ["a", "A1!", "A1!b", "Zz9@x", "{{{{{"] {
            let check = validate_password(candidate);
            assert!(!check.valid);
            assert_eq!(check.failure, Some(PasswordFailure::TooShort), "{candidate}");
            assert_eq!(check.reason, "Senha deve ter pelo menos 6 caracteres.");
        }
    }

    #[test]
    fn rules_are_checked_in_order() {
        assert_eq!(validate_password("abcdef").failure, Some(PasswordFailure::MissingDigit));
        assert_eq!(validate_password("abcde1").failure, Some(PasswordFailure::MissingUppercase));
        assert_eq!(validate_password("Abcde1").failure, Some(PasswordFailure::MissingSpecial));
        assert_eq!(
            validate_password("Abcde1!;").failure,
            Some(PasswordFailure::ForbiddenCharacter)
        );
    }

    #[test]
    fn rejects_each_forbidden_character() {
        for c in FORBIDDEN_CHARS.chars() {
            let candidate = format!("Abc123#{c}");
            assert_eq!(
                validate_password(&candidate).failure,
                Some(PasswordFailure::ForbiddenCharacter),
                "{candidate}"
            );
        }
    }

    #[test]
    fn accepts_each_allowed_special() {
        for c in ALLOWED_SPECIALS.chars() {
            let candidate = format!("Abc123{c}");
            assert!(validate_password(&candidate).valid, "{candidate}");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // "Çç" ocupa 4 bytes mas são 2 caracteres
        assert_eq!(validate_password("Çç1A!").failure, Some(PasswordFailure::TooShort));
    }

    #[test]
    fn strength_scores_each_criterion() {
        assert_eq!(password_strength("").score, 0);
        assert_eq!(password_strength("").label, "Muito fraca");
        assert_eq!(password_strength("abcdef").score, 1);
        assert_eq!(password_strength("abcdef").label, "Fraca");
        assert_eq!(password_strength("abcdeF").score, 2);
        assert_eq!(password_strength("abcdeF1").label, "Média");
        assert_eq!(password_strength("abcdeF1!").label, "Forte");
        let strongest = password_strength("abcdeF1!xyz");
        assert_eq!(strongest.score, 5);
        assert_eq!(strongest.label, "Muito forte");
    }

    #[test]
    fn into_result_exposes_failure() {
        assert_eq!(validate_password("Abc123!").into_result(), Ok(()));
        assert_eq!(
            validate_password("abc").into_result(),
            Err(PasswordFailure::TooShort)
        );
    }
}
