use super::{types::ScheduleError, util, GenerateOptions};
use crate::model::{DateError, DateRange, ScheduleEvent, COLOR_PALETTE};

/// Round-robin sur les jours ouvrés : le créneau `i` revient à `roster[i % n]`
/// et prend la couleur `i % 7`. Les week-ends ne consomment pas de créneau.
///
/// Le roster vide est signalé avant toute erreur de dates : `range` n'est
/// évalué qu'une fois le roster accepté.
pub(super) fn generate_events<S, F>(
    roster: &[S],
    range: F,
    opts: &GenerateOptions,
) -> Result<Vec<ScheduleEvent>, ScheduleError>
where
    S: AsRef<str>,
    F: FnOnce() -> Result<DateRange, DateError>,
{
    let placeholder = match (roster.is_empty(), opts.placeholder.as_deref()) {
        (false, _) => None,
        (true, Some(title)) => Some(title),
        (true, None) => return Err(ScheduleError::EmptyRoster),
    };
    let range = range()?;

    let total = roster.len();
    let mut slot = 0usize;
    let mut events = Vec::new();

    for day in range.days().filter(|d| util::is_working_day(*d)) {
        let title = match placeholder {
            Some(title) => title,
            None => roster[slot % total].as_ref(),
        };
        let color_index = slot % COLOR_PALETTE.len();
        events.push(ScheduleEvent {
            title: title.to_string(),
            date: day,
            color_index,
            color: COLOR_PALETTE[color_index].to_string(),
            all_day: true,
        });
        slot += 1;
    }

    Ok(events)
}
