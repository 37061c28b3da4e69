use crate::model::DateError;
use thiserror::Error;

/// Titre sentinelle pour une grille sans participant.
pub const UNASSIGNED: &str = "Unassigned";

/// Options de génération
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Si défini et que le roster est vide, chaque jour ouvré reçoit ce titre
    /// au lieu d'un résultat vide.
    pub placeholder: Option<String>,
}

impl GenerateOptions {
    pub fn with_unassigned() -> Self {
        Self {
            placeholder: Some(UNASSIGNED.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error(transparent)]
    InvalidRange(#[from] DateError),
}
