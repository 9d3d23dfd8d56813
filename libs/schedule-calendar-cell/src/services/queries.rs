use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::models::{CalendarEvent, StatusDistribution};

pub fn events_for_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    sorted(events.iter().filter(|event| event.date() == date))
}

pub fn group_events_by_date(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();

    for event in events {
        days.entry(event.date()).or_default().push(event.clone());
    }
    for day_events in days.values_mut() {
        day_events.sort_by_key(|event| event.start);
    }

    days
}

/// `month` is 1-based.
pub fn events_for_month(events: &[CalendarEvent], month: u32, year: i32) -> Vec<CalendarEvent> {
    sorted(
        events
            .iter()
            .filter(|event| event.start.month() == month && event.start.year() == year),
    )
}

/// Events starting between `now` and `now + days`, both ends inclusive.
/// A horizon past the last representable date-time is clamped to it.
pub fn upcoming_events(events: &[CalendarEvent], now: NaiveDateTime, days: u32) -> Vec<CalendarEvent> {
    let horizon = now
        .checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(NaiveDateTime::MAX);
    sorted(
        events
            .iter()
            .filter(|event| event.start >= now && event.start <= horizon),
    )
}

pub fn has_events_on(events: &[CalendarEvent], date: NaiveDate) -> bool {
    events.iter().any(|event| event.date() == date)
}

/// Tallies statuses of events starting inside `[start, end]`.
pub fn status_distribution(
    events: &[CalendarEvent],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> StatusDistribution {
    events
        .iter()
        .filter(|event| event.start >= start && event.start <= end)
        .fold(StatusDistribution::default(), |mut tally, event| {
            tally.record(event.status);
            tally
        })
}

fn sorted<'a>(events: impl Iterator<Item = &'a CalendarEvent>) -> Vec<CalendarEvent> {
    let mut out: Vec<CalendarEvent> = events.cloned().collect();
    out.sort_by_key(|event| event.start);
    out
}
