mod cycle;
mod inference;
mod pattern;
mod period;
mod types;

pub use cycle::{
    cycle_offset, is_day_off, is_day_off_by_name, is_day_off_with, CYCLE_DAYS, REFERENCE_DATE,
};
pub use inference::{
    determine_initial_scale, determine_initial_scale_str, determine_initial_scale_str_with,
    determine_initial_scale_with,
};
pub use pattern::{get_pattern, get_pattern_by_name, ALFA_PATTERN, BRAVO_PATTERN};
pub use types::{CycleOptions, ScaleError};

use crate::model::{DayReport, RosterId};
use chrono::NaiveDate;

pub fn work_status_for_date(date: NaiveDate, roster: RosterId, opts: &CycleOptions) -> DayReport {
    period::work_status_for_date(date, roster, opts)
}

pub fn work_status_for_period(
    start: NaiveDate,
    end: NaiveDate,
    roster: RosterId,
    opts: &CycleOptions,
) -> Vec<DayReport> {
    period::work_status_for_period(start, end, roster, opts)
}

pub fn next_day_off(
    from: NaiveDate,
    roster: RosterId,
    opts: &CycleOptions,
) -> Option<NaiveDate> {
    period::next_day_off(from, roster, opts)
}

/// ScaleCalendar : une escale connue et son ancre de cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleCalendar {
    roster: RosterId,
    opts: CycleOptions,
}

impl ScaleCalendar {
    pub fn new(roster: RosterId) -> Self {
        Self {
            roster,
            opts: CycleOptions::default(),
        }
    }

    pub fn with_options(roster: RosterId, opts: CycleOptions) -> Self {
        Self { roster, opts }
    }

    /// Construit le calendrier d'une personne à partir de son statut du jour.
    pub fn infer(is_off_today: bool, today: NaiveDate, opts: CycleOptions) -> Self {
        let roster = determine_initial_scale_with(is_off_today, today, &opts);
        Self { roster, opts }
    }

    pub fn roster(&self) -> RosterId {
        self.roster
    }

    pub fn options(&self) -> &CycleOptions {
        &self.opts
    }

    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        is_day_off_with(date, self.roster, &self.opts)
    }

    pub fn status(&self, date: NaiveDate) -> DayReport {
        period::work_status_for_date(date, self.roster, &self.opts)
    }

    pub fn period(&self, start: NaiveDate, end: NaiveDate) -> Vec<DayReport> {
        period::work_status_for_period(start, end, self.roster, &self.opts)
    }

    pub fn next_day_off(&self, from: NaiveDate) -> Option<NaiveDate> {
        period::next_day_off(from, self.roster, &self.opts)
    }
}
