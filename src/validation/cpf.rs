// src/validation/cpf.rs

use super::contact::digits_only;

/// Valida um CPF pelos dois dígitos verificadores.
///
/// Caracteres de formatação (pontos, hífen) são descartados antes do cálculo,
/// então tanto `52998224725` quanto `529.982.247-25` são aceitos.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = digits_only(raw)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }

    // Sequências repetidas (000..., 111...) passam no cálculo mas são inválidas
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 11) == digits[9] && check_digit(&digits[..10], 12) == digits[10]
}

// Soma ponderada: o primeiro dígito recebe peso `top - 1`, o seguinte `top - 2`...
fn check_digit(digits: &[u32], top: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - 1 - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        rest => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reference_cpf() {
        assert!(is_valid_cpf("52998224725"));
    }

    #[test]
    fn accepts_masked_cpf() {
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn rejects_altered_last_digit() {
        assert!(!is_valid_cpf("52998224726"));
        assert!(!is_valid_cpf("52998224724"));
    }

    #[test]
    fn rejects_altered_first_check_digit() {
        assert!(!is_valid_cpf("52998224735"));
    }

    #[test]
    fn rejects_repeated_digits() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{cpf} deveria ser inválido");
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
    }

    #[test]
    fn accepts_other_known_cpfs() {
        assert!(is_valid_cpf("11144477735"));
    }

    #[test]
    fn remainder_ten_becomes_zero() {
        // Primeiro dígito: (210 * 10) % 11 == 10 -> 0
        assert!(is_valid_cpf("12345678909"));
        assert!(!is_valid_cpf("12345678919"));
    }
}
