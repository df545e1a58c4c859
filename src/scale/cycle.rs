use super::{pattern, CycleOptions, ScaleError};
use crate::model::RosterId;
use chrono::{Datelike, NaiveDate};

/// Longueur du cycle en jours (2 semaines).
pub const CYCLE_DAYS: i64 = 14;

/// Ancre du cycle : lundi 6 octobre 2025, jour 0 de la semaine 1.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 6) {
    Some(d) => d,
    None => panic!("invalid reference date"),
};

/// Position 0..=13 de `date` dans le cycle ancré sur `reference`.
///
/// Reste euclidien : les dates antérieures à l'ancre donnent aussi un offset positif.
pub fn cycle_offset(date: NaiveDate, reference: NaiveDate) -> u8 {
    let delta_days = date.signed_duration_since(reference).num_days();
    delta_days.rem_euclid(CYCLE_DAYS) as u8
}

pub fn is_day_off(date: NaiveDate, roster: RosterId) -> bool {
    is_day_off_with(date, roster, &CycleOptions::default())
}

pub fn is_day_off_with(date: NaiveDate, roster: RosterId, opts: &CycleOptions) -> bool {
    let day_in_cycle = cycle_offset(date, opts.reference_date);
    let week_in_pattern = if day_in_cycle < 7 { 0 } else { 1 };
    let day_of_week = date.weekday().num_days_from_monday() as usize;
    pattern::get_pattern(roster)[week_in_pattern][day_of_week] == 0
}

pub fn is_day_off_by_name(
    date: NaiveDate,
    roster: &str,
    opts: &CycleOptions,
) -> Result<bool, ScaleError> {
    let roster: RosterId = roster.parse()?;
    Ok(is_day_off_with(date, roster, opts))
}
