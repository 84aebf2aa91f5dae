// src/validation/money.rs

use rust_decimal::Decimal;

/// Casas decimais da coluna NUMERIC(10, 2).
pub const PRICE_SCALE: u32 = 2;

/// Maior valor que cabe em NUMERIC(10, 2): 99.999.999,99.
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999_99, PRICE_SCALE)
}

/// No máximo 2 casas decimais e dentro do limite da coluna. Sinal é checado por quem chama.
pub fn fits_price_column(price: Decimal) -> bool {
    price.normalize().scale() <= PRICE_SCALE && price.abs() <= max_price()
}
