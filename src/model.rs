use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Longueur maximale d'un nom de participant (en caractères).
pub const MAX_NAME_LEN: usize = 50;

/// Palette fixe, parcourue par index de créneau modulo sa taille.
pub const COLOR_PALETTE: [&str; 7] = [
    "#007bff", "#28a745", "#dc3545", "#ffc107", "#17a2b8", "#6610f2", "#fd7e14",
];

pub const DEFAULT_START_DATE: &str = "2025-06-18";
pub const DEFAULT_END_DATE: &str = "2025-12-31";

/// Identité stable d'un participant : survit aux renommages et réordonnancements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Participant à la rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: ParticipantId::random(),
            name: name.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("name longer than 50 characters: {0}")]
    NameTooLong(String),
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("no participant at position {0}")]
    UnknownPosition(usize),
    #[error("new order is not a permutation of the current roster")]
    InvalidOrder,
}

/// Roster ordonné : l'ordre d'insertion est l'ordre de rotation.
///
/// La désérialisation repasse par les mêmes règles que `add` (nom non vide,
/// au plus 50 caractères, unique).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRoster")]
pub struct Roster {
    pub participants: Vec<Participant>,
}

#[derive(Deserialize)]
struct StoredRoster {
    #[serde(default)]
    participants: Vec<Participant>,
}

impl TryFrom<StoredRoster> for Roster {
    type Error = RosterError;

    fn try_from(stored: StoredRoster) -> Result<Self, Self::Error> {
        let mut roster = Self::default();
        for Participant { id, name } in stored.participants {
            let name = validate_name(&name)?;
            if roster.contains(&name) {
                return Err(RosterError::DuplicateName(name));
            }
            roster.participants.push(Participant { id, name });
        }
        Ok(roster)
    }
}

impl Roster {
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::default();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Instantané des noms, dans l'ordre de rotation.
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.name == name)
    }

    /// Ajoute en fin de rotation.
    pub fn add(&mut self, name: &str) -> Result<&Participant, RosterError> {
        let name = validate_name(name)?;
        if self.contains(&name) {
            return Err(RosterError::DuplicateName(name));
        }
        self.participants.push(Participant::new(name));
        let last = self.participants.len() - 1;
        Ok(&self.participants[last])
    }

    pub fn remove(&mut self, position: usize) -> Result<Participant, RosterError> {
        if position >= self.participants.len() {
            return Err(RosterError::UnknownPosition(position));
        }
        Ok(self.participants.remove(position))
    }

    /// Renomme sans changer la position ni l'identifiant.
    pub fn rename(&mut self, position: usize, new_name: &str) -> Result<(), RosterError> {
        let new_name = validate_name(new_name)?;
        if position >= self.participants.len() {
            return Err(RosterError::UnknownPosition(position));
        }
        if self.contains(&new_name) {
            return Err(RosterError::DuplicateName(new_name));
        }
        self.participants[position].name = new_name;
        Ok(())
    }

    /// Remplace l'ordre de rotation. `order` doit être une permutation des noms actuels.
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) -> Result<(), RosterError> {
        if order.len() != self.participants.len() {
            return Err(RosterError::InvalidOrder);
        }
        let mut remaining = self.participants.clone();
        let mut reordered = Vec::with_capacity(remaining.len());
        for name in order {
            let idx = remaining
                .iter()
                .position(|p| p.name == name.as_ref())
                .ok_or(RosterError::InvalidOrder)?;
            reordered.push(remaining.swap_remove(idx));
        }
        self.participants = reordered;
        Ok(())
    }

    /// Déplacement unitaire (glisser-déposer).
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<(), RosterError> {
        let len = self.participants.len();
        if from >= len {
            return Err(RosterError::UnknownPosition(from));
        }
        if to >= len {
            return Err(RosterError::UnknownPosition(to));
        }
        let p = self.participants.remove(from);
        self.participants.insert(to, p);
        Ok(())
    }
}

fn validate_name(raw: &str) -> Result<String, RosterError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(RosterError::NameTooLong(name.to_string()));
    }
    Ok(name.to_string())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: {0}")]
    Unparsable(String),
    #[error("invalid range: start {start} is after end {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// Intervalle de dates inclusif, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse deux dates ISO (`YYYY-MM-DD`).
    pub fn parse(start: &str, end: &str) -> Result<Self, DateError> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Jours calendaires de `start` à `end` inclus.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::Unparsable(raw.to_string()))
}

/// Réglages de dates tels que stockés (chaînes ISO).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSettings {
    pub start_date: String,
    pub end_date: String,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START_DATE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
        }
    }
}

impl DateSettings {
    pub fn range(&self) -> Result<DateRange, DateError> {
        DateRange::parse(&self.start_date, &self.end_date)
    }

    /// Valide puis remplace ; en cas d'erreur les valeurs précédentes sont conservées.
    pub fn update(&mut self, start: &str, end: &str) -> Result<DateRange, DateError> {
        let range = DateRange::parse(start, end)?;
        self.start_date = range.start().to_string();
        self.end_date = range.end().to_string();
        Ok(range)
    }
}

/// Événement journée entière produit par le générateur.
///
/// Sérialisé avec les clés d'un calendrier type FullCalendar
/// (`start`, `backgroundColor`, `allDay`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub title: String,
    #[serde(rename = "start", alias = "date")]
    pub date: NaiveDate,
    pub color_index: usize,
    #[serde(rename = "backgroundColor", alias = "color")]
    pub color: String,
    pub all_day: bool,
}

impl ScheduleEvent {
    /// Date au format ISO (`YYYY-MM-DD`).
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Table des noms de jours, indexée 0=dimanche … 6=samedi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayNames([String; 7]);

impl WeekdayNames {
    pub fn new(names: [String; 7]) -> Self {
        Self(names)
    }

    pub fn english() -> Self {
        Self([
            "Sunday".into(),
            "Monday".into(),
            "Tuesday".into(),
            "Wednesday".into(),
            "Thursday".into(),
            "Friday".into(),
            "Saturday".into(),
        ])
    }

    /// `number` : 0=dimanche … 6=samedi.
    pub fn name(&self, number: u8) -> &str {
        &self.0[usize::from(number) % 7]
    }
}

impl Default for WeekdayNames {
    fn default() -> Self {
        Self::english()
    }
}

/// Document persisté : un planning nommé (roster + dates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub name: String,
    #[serde(default)]
    pub roster: Roster,
    #[serde(default)]
    pub dates: DateSettings,
}

impl ScheduleDocument {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            roster: Roster::default(),
            dates: DateSettings::default(),
        }
    }
}
