use crate::scale::ScaleError;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grille fixe 2 semaines × 7 jours (lundi = 0). 0 = folga, 1 = travail.
pub type ShiftPattern = [[u8; 7]; 2];

/// Identifiant d'escale. Seules ALFA et BRAVO existent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum RosterId {
    Alfa,
    Bravo,
}

impl RosterId {
    pub const ALL: [RosterId; 2] = [RosterId::Alfa, RosterId::Bravo];

    pub fn as_str(&self) -> &'static str {
        match self {
            RosterId::Alfa => "ALFA",
            RosterId::Bravo => "BRAVO",
        }
    }

    /// L'autre escale : les deux grilles sont complémentaires.
    pub fn complement(self) -> Self {
        match self {
            RosterId::Alfa => RosterId::Bravo,
            RosterId::Bravo => RosterId::Alfa,
        }
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Nom exact `ALFA` ou `BRAVO` ; aucune autre forme n'est acceptée.
impl FromStr for RosterId {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALFA" => Ok(RosterId::Alfa),
            "BRAVO" => Ok(RosterId::Bravo),
            _ => Err(ScaleError::InvalidRoster(s.to_string())),
        }
    }
}

/// Statut d'une journée pour une escale donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayStatus {
    Off,
    Work,
}

impl DayStatus {
    pub fn from_off(is_off: bool) -> Self {
        if is_off {
            DayStatus::Off
        } else {
            DayStatus::Work
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Off => "FOLGA",
            DayStatus::Work => "TRABALHA",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Statut calculé pour une date (avec le nom du férié éventuel).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayReport {
    pub date: NaiveDate,
    pub roster: RosterId,
    pub status: DayStatus,
    pub is_off: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub holiday: Option<String>,
}
