use crate::model::DateRange;
use chrono::{Datelike, NaiveDate};

/// Numéro du jour : 0=dimanche … 6=samedi.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Jour ouvré = ni samedi ni dimanche.
pub fn is_working_day(date: NaiveDate) -> bool {
    (1..=5).contains(&weekday_number(date))
}

pub fn count_working_days(range: &DateRange) -> usize {
    range.days().filter(|d| is_working_day(*d)).count()
}
