mod generation;
mod types;
pub mod util;

pub use types::{GenerateOptions, ScheduleError, UNASSIGNED};

use crate::model::{DateRange, Roster, ScheduleDocument, ScheduleEvent};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Génère le planning ; rend un `Result` au lieu de dégrader.
///
/// Le roster vide est vérifié avant les dates.
pub fn try_generate<S: AsRef<str>>(
    roster: &[S],
    start: NaiveDate,
    end: NaiveDate,
    opts: &GenerateOptions,
) -> Result<Vec<ScheduleEvent>, ScheduleError> {
    generation::generate_events(roster, || DateRange::new(start, end), opts)
}

/// Variante sur chaînes ISO (`YYYY-MM-DD`).
pub fn try_generate_from_iso<S: AsRef<str>>(
    roster: &[S],
    start: &str,
    end: &str,
    opts: &GenerateOptions,
) -> Result<Vec<ScheduleEvent>, ScheduleError> {
    generation::generate_events(roster, || DateRange::parse(start, end), opts)
}

/// Variante sur un intervalle déjà validé.
pub fn try_generate_range<S: AsRef<str>>(
    roster: &[S],
    range: DateRange,
    opts: &GenerateOptions,
) -> Result<Vec<ScheduleEvent>, ScheduleError> {
    generation::generate_events(roster, || Ok(range), opts)
}

/// Génère le planning ; roster vide ou dates invalides donnent un planning vide.
pub fn generate<S: AsRef<str>>(roster: &[S], start: NaiveDate, end: NaiveDate) -> Vec<ScheduleEvent> {
    degrade(try_generate(roster, start, end, &GenerateOptions::default()))
}

pub fn generate_from_iso<S: AsRef<str>>(roster: &[S], start: &str, end: &str) -> Vec<ScheduleEvent> {
    degrade(try_generate_from_iso(
        roster,
        start,
        end,
        &GenerateOptions::default(),
    ))
}

fn degrade(outcome: Result<Vec<ScheduleEvent>, ScheduleError>) -> Vec<ScheduleEvent> {
    match outcome {
        Ok(events) => {
            debug!(events = events.len(), "schedule generated");
            events
        }
        Err(err) => {
            warn!(error = %err, "schedule generation skipped, returning empty schedule");
            Vec::new()
        }
    }
}

/// Scheduler : encapsule un document de planning (roster + dates).
///
/// Aucune réactivité : l'appelant régénère après chaque mutation.
#[derive(Debug, Clone)]
pub struct Scheduler {
    document: ScheduleDocument,
    opts: GenerateOptions,
}

impl Scheduler {
    pub fn new(document: ScheduleDocument) -> Self {
        Self {
            document,
            opts: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: GenerateOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn document(&self) -> &ScheduleDocument {
        &self.document
    }
    pub fn document_mut(&mut self) -> &mut ScheduleDocument {
        &mut self.document
    }
    pub fn roster(&self) -> &Roster {
        &self.document.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.document.roster
    }

    /// Résultat structuré sur l'état courant.
    pub fn try_events(&self) -> Result<Vec<ScheduleEvent>, ScheduleError> {
        let names = self.document.roster.names();
        generation::generate_events(&names, || self.document.dates.range(), &self.opts)
    }

    /// Planning courant, vide si l'état est incomplet.
    pub fn events(&self) -> Vec<ScheduleEvent> {
        degrade(self.try_events())
    }
}
