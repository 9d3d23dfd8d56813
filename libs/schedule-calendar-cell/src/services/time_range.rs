use chrono::NaiveTime;

use crate::error::CalendarError;
use crate::models::SlotTimeRange;

/// Parses a slot time such as `"07:00-08:30"`.
pub fn parse_slot_time(value: &str) -> Result<SlotTimeRange, CalendarError> {
    let (start_raw, end_raw) = value
        .split_once('-')
        .ok_or_else(|| CalendarError::MissingRangeSeparator(value.to_string()))?;

    let start = parse_clock(value, start_raw)?;
    let end = parse_clock(value, end_raw)?;

    if start >= end {
        return Err(CalendarError::EmptyRange(value.to_string()));
    }

    Ok(SlotTimeRange { start, end })
}

fn parse_clock(value: &str, part: &str) -> Result<NaiveTime, CalendarError> {
    let malformed = || CalendarError::MalformedClock {
        value: value.to_string(),
        part: part.trim().to_string(),
    };

    let (hour, minute) = part.trim().split_once(':').ok_or_else(malformed)?;
    let hour = clock_number(hour).ok_or_else(malformed)?;
    let minute = clock_number(minute).ok_or_else(malformed)?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| CalendarError::ClockOutOfRange(value.to_string()))
}

// digits only: `u32::from_str` would also take a leading `+`
fn clock_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
