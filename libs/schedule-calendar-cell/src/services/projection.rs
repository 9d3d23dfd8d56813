use tracing::{debug, warn};

use shared_config::MalformedSlotPolicy;

use crate::error::CalendarError;
use crate::models::{CalendarEvent, ScheduleEntry, Slot, WeekDay};
use crate::services::time_range::parse_slot_time;

/// Flattens schedules into calendar events sorted by start time.
///
/// Fails on the first slot whose time string doesn't parse.
pub fn project_events(schedules: &[ScheduleEntry]) -> Result<Vec<CalendarEvent>, CalendarError> {
    project_events_with_policy(schedules, MalformedSlotPolicy::Reject)
}

pub fn project_events_with_policy(
    schedules: &[ScheduleEntry],
    policy: MalformedSlotPolicy,
) -> Result<Vec<CalendarEvent>, CalendarError> {
    let mut events = Vec::with_capacity(slot_count(schedules));

    for schedule in schedules {
        for (day, slot) in schedule.slots() {
            match build_event(schedule, day, slot) {
                Ok(event) => events.push(event),
                Err(e) if policy == MalformedSlotPolicy::Skip => {
                    warn!("Skipping unparseable slot: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    // stable: equal starts keep input order
    events.sort_by_key(|event| event.start);

    debug!("Projected {} calendar events from {} schedules", events.len(), schedules.len());
    Ok(events)
}

pub fn slot_count(schedules: &[ScheduleEntry]) -> usize {
    schedules
        .iter()
        .flat_map(|schedule| &schedule.week_days)
        .map(|day| day.slots.len())
        .sum()
}

fn build_event(
    schedule: &ScheduleEntry,
    day: &WeekDay,
    slot: &Slot,
) -> Result<CalendarEvent, CalendarError> {
    let range = parse_slot_time(&slot.time).map_err(|e| CalendarError::MalformedSlot {
        schedule_id: schedule.id.clone(),
        day_id: day.id.clone(),
        slot_id: slot.id.clone(),
        source: Box::new(e),
    })?;
    let (start, end) = range.on(day.date);

    Ok(CalendarEvent {
        id: event_id(&schedule.id, &day.id, &slot.id),
        title: format!("{} - {}", slot.status.label(), schedule.doctor_name),
        start,
        end,
        slot_time: slot.time.clone(),
        status: slot.status,
        doctor_id: schedule.doctor_id.clone(),
        doctor_name: schedule.doctor_name.clone(),
        colors: slot.status.colors(),
    })
}

/// Joins the three ids with `/`, escaping `\` and `/` inside each part so
/// distinct id triples never produce the same event id.
pub fn event_id(schedule_id: &str, day_id: &str, slot_id: &str) -> String {
    [schedule_id, day_id, slot_id]
        .iter()
        .map(|part| part.replace('\\', "\\\\").replace('/', "\\/"))
        .collect::<Vec<_>>()
        .join("/")
}
