use super::{cycle, CycleOptions};
use crate::holiday;
use crate::model::{DayReport, DayStatus, RosterId};
use chrono::NaiveDate;

pub(super) fn work_status_for_date(
    date: NaiveDate,
    roster: RosterId,
    opts: &CycleOptions,
) -> DayReport {
    let is_off = cycle::is_day_off_with(date, roster, opts);
    DayReport {
        date,
        roster,
        status: DayStatus::from_off(is_off),
        is_off,
        holiday: holiday::holiday_on(date).map(|h| h.name.to_string()),
    }
}

/// Un rapport par jour, bornes incluses. Vide si `end < start`.
pub(super) fn work_status_for_period(
    start: NaiveDate,
    end: NaiveDate,
    roster: RosterId,
    opts: &CycleOptions,
) -> Vec<DayReport> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| work_status_for_date(d, roster, opts))
        .collect()
}

/// Première folga à partir de `from` (inclus).
///
/// Chaque semaine des deux grilles contient au moins un jour de repos : `None`
/// n'arrive qu'en bout de calendrier, près de `NaiveDate::MAX`.
pub(super) fn next_day_off(
    from: NaiveDate,
    roster: RosterId,
    opts: &CycleOptions,
) -> Option<NaiveDate> {
    from.iter_days()
        .find(|d| cycle::is_day_off_with(*d, roster, opts))
}
