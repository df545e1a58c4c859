use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use super::cycle::REFERENCE_DATE;

/// Options du calcul de cycle.
///
/// `reference_date` doit tomber un lundi : c'est le jour 0 de la semaine 1
/// pour les deux escales. Ce n'est pas vérifié ; voir [`CycleOptions::is_aligned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOptions {
    pub reference_date: NaiveDate,
}

impl CycleOptions {
    pub fn with_reference(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Vrai si l'ancre est un lundi.
    pub fn is_aligned(&self) -> bool {
        chrono::Datelike::weekday(&self.reference_date) == Weekday::Mon
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            reference_date: REFERENCE_DATE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("invalid roster: {0:?} (expected ALFA or BRAVO)")]
    InvalidRoster(String),
    #[error("invalid date {input:?}: {reason}")]
    DateParsing { input: String, reason: &'static str },
}
