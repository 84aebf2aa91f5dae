// src/validation/age.rs

use chrono::{Datelike, Local, NaiveDate};

pub const AGE_OF_MAJORITY: i32 = 18;

/// Recebe a data no formato `YYYY-MM-DD`. Datas inválidas nunca são maiores de idade.
pub fn is_adult(birth_date: &str) -> bool {
    match NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d") {
        Ok(birth) => is_adult_on(birth, Local::now().date_naive()),
        Err(_) => false,
    }
}

pub fn is_adult_on(birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth, today) >= AGE_OF_MAJORITY
}

/// Idade em anos completos.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exactly_eighteen_is_adult() {
        assert!(is_adult_on(date(2008, 10, 19), date(2026, 10, 19)));
    }

    #[test]
    fn one_day_short_is_not_adult() {
        assert!(!is_adult_on(date(2008, 10, 20), date(2026, 10, 19)));
    }

    #[test]
    fn earlier_month_counts_the_birthday() {
        assert_eq!(age_on(date(2000, 3, 1), date(2026, 10, 19)), 26);
        assert_eq!(age_on(date(2000, 12, 1), date(2026, 10, 19)), 25);
    }

    #[test]
    fn leap_day_birthday_waits_for_march() {
        assert!(!is_adult_on(date(2008, 2, 29), date(2026, 2, 28)));
        assert!(is_adult_on(date(2008, 2, 29), date(2026, 3, 1)));
    }

    #[test]
    fn relative_to_today() {
        let today = Local::now().date_naive();
        let eighteen = today.checked_sub_months(chrono::Months::new(12 * 18)).unwrap();
        assert!(is_adult(&eighteen.format("%Y-%m-%d").to_string()));

        let one_day_short = eighteen + chrono::Days::new(1);
        assert!(!is_adult(&one_day_short.format("%Y-%m-%d").to_string()));
    }

    #[test]
    fn unparseable_dates_are_not_adult() {
        assert!(!is_adult(""));
        assert!(!is_adult("19/10/2000"));
        assert!(!is_adult("2000-13-01"));
    }
}
