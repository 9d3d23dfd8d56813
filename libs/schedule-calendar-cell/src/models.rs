use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// ==============================================================================
// SCHEDULE INPUT (as returned by the backend)
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Free,
    Booked,
    Absent,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 3] = [SlotStatus::Free, SlotStatus::Booked, SlotStatus::Absent];

    pub fn label(self) -> &'static str {
        match self {
            SlotStatus::Free => "Available",
            SlotStatus::Booked => "Booked",
            SlotStatus::Absent => "Absent",
        }
    }

    pub fn colors(self) -> EventColors {
        match self {
            SlotStatus::Free => EventColors {
                background: "#22c55e",
                border: "#16a34a",
            },
            SlotStatus::Booked => EventColors {
                background: "#3b82f6",
                border: "#2563eb",
            },
            SlotStatus::Absent => EventColors {
                background: "#ef4444",
                border: "#dc2626",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub time: String, // "HH:MM-HH:MM"
    pub status: SlotStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDay {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub week_days: Vec<WeekDay>,
}

impl ScheduleEntry {
    /// Every slot paired with the day it belongs to, in input order.
    pub fn slots(&self) -> impl Iterator<Item = (&WeekDay, &Slot)> + '_ {
        self.week_days
            .iter()
            .flat_map(|day| day.slots.iter().map(move |slot| (day, slot)))
    }
}

// ==============================================================================
// DERIVED CALENDAR VIEW
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventColors {
    pub background: &'static str,
    pub border: &'static str,
}

/// Parsed form of a slot's "HH:MM-HH:MM" string. `start` is always before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SlotTimeRange {
    pub fn on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.start), date.and_time(self.end))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub slot_time: String,
    pub status: SlotStatus,
    pub doctor_id: String,
    pub doctor_name: String,
    pub colors: EventColors,
}

impl CalendarEvent {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScheduleStats {
    pub total_slots: u32,
    pub free_slots: u32,
    pub booked_slots: u32,
    pub absent_slots: u32,
    pub utilization_rate: u32,
    pub availability_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusDistribution {
    pub free: u32,
    pub booked: u32,
    pub absent: u32,
    pub total: u32,
}

impl StatusDistribution {
    pub fn record(&mut self, status: SlotStatus) {
        match status {
            SlotStatus::Free => self.free += 1,
            SlotStatus::Booked => self.booked += 1,
            SlotStatus::Absent => self.absent += 1,
        }
        self.total += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsScope {
    All,
    Day(NaiveDate),
}

impl StatsScope {
    pub fn includes(&self, date: NaiveDate) -> bool {
        match self {
            StatsScope::All => true,
            StatsScope::Day(day) => *day == date,
        }
    }
}

// ==============================================================================
// REQUEST DTOs
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub doctor_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
