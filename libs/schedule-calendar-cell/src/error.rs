use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Slot time '{0}' is missing the '-' separator")]
    MissingRangeSeparator(String),

    #[error("Slot time '{value}' has a malformed clock value '{part}'")]
    MalformedClock { value: String, part: String },

    #[error("Slot time '{0}' has an hour or minute out of range")]
    ClockOutOfRange(String),

    #[error("Slot time '{0}' does not end after it starts")]
    EmptyRange(String),

    #[error("Slot {slot_id} on day {day_id} of schedule {schedule_id}: {source}")]
    MalformedSlot {
        schedule_id: String,
        day_id: String,
        slot_id: String,
        #[source]
        source: Box<CalendarError>,
    },
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
