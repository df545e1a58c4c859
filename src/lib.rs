#![forbid(unsafe_code)]
//! Escala — calcul des jours de travail et de folga des escales ALFA et BRAVO.
//!
//! - Cycle de 14 jours ancré sur le lundi 06/10/2025.
//! - Grilles ALFA et BRAVO exactement complémentaires.
//! - Déduction de l'escale à partir d'un seul jour observé.
//! - Dates calendaires sans fuseau ; parsing `DD/MM/YYYY` à la frontière.

pub mod date;
pub mod holiday;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod scale;

pub use date::{format_date, parse_date};
pub use holiday::{holiday_on, holidays_for_year, Holiday};
pub use model::{DayReport, DayStatus, RosterId, ShiftPattern};
pub use report::{render_period, StatusRenderer, TextStatus};
pub use scale::{
    cycle_offset, determine_initial_scale, determine_initial_scale_str,
    determine_initial_scale_str_with, determine_initial_scale_with, get_pattern,
    get_pattern_by_name, is_day_off, is_day_off_by_name, is_day_off_with, next_day_off,
    work_status_for_date, work_status_for_period, CycleOptions, ScaleCalendar, ScaleError,
    REFERENCE_DATE,
};
