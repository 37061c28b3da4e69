use crate::model::{ScheduleEvent, WeekdayNames};
use crate::scheduler::util::weekday_number;
use crate::storage::write_atomic;
use anyhow::Context;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;

pub const CSV_HEADER: [&str; 3] = ["Title", "Day", "StartDate"];

/// Politique de quoting des champs CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Quote RFC 4180 si le champ contient `,`, `"` ou un saut de ligne.
    /// Le nombre de colonnes reste toujours 3.
    #[default]
    Necessary,
    /// Aucun échappement : un nom contenant une virgule casse la ligne.
    Never,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    pub quoting: Quoting,
}

/// Rendu CSV `Title,Day,StartDate`, une ligne par événement, ordre conservé.
///
/// Écrit en mémoire : une erreur ne peut venir que du writer `csv` lui-même.
pub fn to_csv(
    events: &[ScheduleEvent],
    weekdays: &WeekdayNames,
    opts: CsvOptions,
) -> Result<String, csv::Error> {
    let quote_style = match opts.quoting {
        Quoting::Necessary => QuoteStyle::Necessary,
        Quoting::Never => QuoteStyle::Never,
    };
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    w.write_record(CSV_HEADER)?;
    for event in events {
        let date = event.iso_date();
        w.write_record([
            event.title.as_str(),
            weekdays.name(weekday_number(event.date)),
            date.as_str(),
        ])?;
    }
    let bytes = w.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    // que des `&str` en entrée : toujours de l'UTF-8 valide
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Nom de fichier d'export par défaut : `<planning>.csv`.
pub fn default_export_filename(schedule_name: &str) -> String {
    format!("{schedule_name}.csv")
}

/// Export CSV sur disque (écriture atomique).
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    events: &[ScheduleEvent],
    weekdays: &WeekdayNames,
    opts: CsvOptions,
) -> anyhow::Result<()> {
    let csv = to_csv(events, weekdays, opts)?;
    write_atomic(path.as_ref(), csv.as_bytes())
        .with_context(|| format!("exporting {}", path.as_ref().display()))
}

/// Export JSON des événements pour un affichage calendrier.
pub fn export_events_json<P: AsRef<Path>>(path: P, events: &[ScheduleEvent]) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(events)?;
    write_atomic(path.as_ref(), &json)
        .with_context(|| format!("exporting {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(title: &str, y: i32, m: u32, d: u32) -> ScheduleEvent {
        ScheduleEvent {
            title: title.into(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            color_index: 0,
            color: "#007bff".into(),
            all_day: true,
        }
    }

    #[test]
    fn header_only_for_empty_schedule() {
        let out: Result<String, csv::Error> =
            to_csv(&[], &WeekdayNames::english(), CsvOptions::default());
        assert_eq!(out.unwrap(), "Title,Day,StartDate\n");
    }

    #[test]
    fn comma_in_name_keeps_three_columns() {
        let events = [event("Doe, John", 2025, 6, 16)];
        let out = to_csv(&events, &WeekdayNames::english(), CsvOptions::default()).unwrap();
        assert_eq!(out, "Title,Day,StartDate\n\"Doe, John\",Monday,2025-06-16\n");

        let mut rdr = csv::ReaderBuilder::new().from_reader(out.as_bytes());
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(rec.len(), 3);
        assert_eq!(&rec[0], "Doe, John");
    }

    #[test]
    fn raw_policy_writes_names_verbatim() {
        let events = [event("Doe, John", 2025, 6, 16)];
        let opts = CsvOptions { quoting: Quoting::Never };
        let out = to_csv(&events, &WeekdayNames::english(), opts).unwrap();
        assert_eq!(out, "Title,Day,StartDate\nDoe, John,Monday,2025-06-16\n");
    }

    #[test]
    fn injected_weekday_table_is_used() {
        let fr = WeekdayNames::new(
            ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"]
                .map(String::from),
        );
        let out = to_csv(&[event("A", 2025, 6, 18)], &fr, CsvOptions::default()).unwrap();
        assert_eq!(out.lines().nth(1), Some("A,mercredi,2025-06-18"));
    }

    #[test]
    fn export_filename_follows_schedule_name() {
        assert_eq!(default_export_filename("dishwasher"), "dishwasher.csv");
    }
}
