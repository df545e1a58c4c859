use super::{cycle, CycleOptions, ScaleError};
use crate::date::parse_date;
use crate::model::RosterId;
use chrono::NaiveDate;

pub fn determine_initial_scale(is_off_today: bool, current_date: NaiveDate) -> RosterId {
    determine_initial_scale_with(is_off_today, current_date, &CycleOptions::default())
}

/// Déduit l'escale d'une personne à partir de son statut observé un jour donné.
///
/// ALFA et BRAVO étant complémentaires chaque jour, la réponse est toujours unique :
/// BRAVO si le statut observé coïncide avec celui de BRAVO, ALFA sinon.
pub fn determine_initial_scale_with(
    is_off_today: bool,
    current_date: NaiveDate,
    opts: &CycleOptions,
) -> RosterId {
    let bravo_off_today = cycle::is_day_off_with(current_date, RosterId::Bravo, opts);
    if is_off_today == bravo_off_today {
        RosterId::Bravo
    } else {
        RosterId::Alfa
    }
}

/// Point d'entrée texte (`DD/MM/YYYY`).
pub fn determine_initial_scale_str(
    is_off_today: bool,
    current_date: &str,
) -> Result<RosterId, ScaleError> {
    determine_initial_scale_str_with(is_off_today, current_date, &CycleOptions::default())
}

pub fn determine_initial_scale_str_with(
    is_off_today: bool,
    current_date: &str,
    opts: &CycleOptions,
) -> Result<RosterId, ScaleError> {
    let date = parse_date(current_date)?;
    Ok(determine_initial_scale_with(is_off_today, date, opts))
}
