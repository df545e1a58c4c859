//! Feriados nationaux brésiliens (2025 et 2026).

use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

const NATIONAL_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2025, 1, 1, "Confraternização Universal"),
    (2025, 3, 3, "Carnaval"),
    (2025, 3, 4, "Carnaval"),
    (2025, 4, 18, "Paixão de Cristo"),
    (2025, 4, 21, "Tiradentes"),
    (2025, 5, 1, "Dia do Trabalho"),
    (2025, 6, 19, "Corpus Christi"),
    (2025, 9, 7, "Independência do Brasil"),
    (2025, 10, 12, "Nossa Sr.a Aparecida - Padroeira do Brasil"),
    (2025, 11, 2, "Finados"),
    (2025, 11, 15, "Proclamação da República"),
    (2025, 11, 20, "Dia Nacional de Zumbi e da Consciência Negra"),
    (2025, 12, 25, "Natal"),
    (2026, 1, 1, "Confraternização Universal"),
    (2026, 2, 16, "Carnaval"),
    (2026, 2, 17, "Carnaval"),
    (2026, 4, 3, "Paixão de Cristo"),
    (2026, 4, 21, "Tiradentes"),
    (2026, 5, 1, "Dia do Trabalho"),
    (2026, 6, 4, "Corpus Christi"),
    (2026, 9, 7, "Independência do Brasil"),
    (2026, 10, 12, "Nossa Sr.a Aparecida - Padroeira do Brasil"),
    (2026, 11, 2, "Finados"),
    (2026, 11, 15, "Proclamação da República"),
    (2026, 11, 20, "Dia Nacional de Zumbi e da Consciência Negra"),
    (2026, 12, 25, "Natal"),
];

fn table() -> impl Iterator<Item = Holiday> {
    NATIONAL_HOLIDAYS.iter().filter_map(|&(y, m, d, name)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday { date, name })
    })
}

/// Feriados d'une année ; vide hors 2025/2026.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    table().filter(|h| h.date.year() == year).collect()
}

pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    table().find(|h| h.date == date)
}
