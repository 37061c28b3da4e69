#![forbid(unsafe_code)]
//! Corvée — bibliothèque de rotation de corvées locale (sans BD).
//!
//! - Rotation round-robin sur les jours ouvrés (lundi → vendredi).
//! - Export CSV `Title,Day,StartDate` et JSON pour un calendrier.
//! - Stockage fichier (JSON) d'un planning : roster + dates.
//! - Dates calendaires sans fuseau (`NaiveDate`), jours numérotés 0=dimanche.

pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use io::{to_csv, CsvOptions, Quoting};
pub use model::{
    DateError, DateRange, DateSettings, Participant, ParticipantId, Roster, RosterError,
    ScheduleDocument, ScheduleEvent, WeekdayNames, COLOR_PALETTE,
};
pub use scheduler::{
    generate, generate_from_iso, try_generate, try_generate_from_iso, try_generate_range,
    GenerateOptions, ScheduleError, Scheduler, UNASSIGNED,
};
pub use storage::{JsonStorage, Storage};
