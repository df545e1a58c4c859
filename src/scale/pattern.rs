use super::ScaleError;
use crate::model::{RosterId, ShiftPattern};

pub const ALFA_PATTERN: ShiftPattern = [
    [0, 1, 0, 1, 1, 0, 0], // semaine 1 : lun..dim
    [1, 0, 1, 0, 0, 1, 1], // semaine 2
];

pub const BRAVO_PATTERN: ShiftPattern = [
    [1, 0, 1, 0, 0, 1, 1],
    [0, 1, 0, 1, 1, 0, 0],
];

/// Grille immuable de l'escale.
pub fn get_pattern(roster: RosterId) -> &'static ShiftPattern {
    match roster {
        RosterId::Alfa => &ALFA_PATTERN,
        RosterId::Bravo => &BRAVO_PATTERN,
    }
}

/// Variante à la frontière texte : aucun nom inconnu n'obtient de grille par défaut.
pub fn get_pattern_by_name(name: &str) -> Result<&'static ShiftPattern, ScaleError> {
    let roster: RosterId = name.parse()?;
    Ok(get_pattern(roster))
}
