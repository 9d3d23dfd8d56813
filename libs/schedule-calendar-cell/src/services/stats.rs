use chrono::{Local, NaiveDate};

use crate::models::{ScheduleEntry, ScheduleStats, StatsScope, StatusDistribution};

pub fn compute_stats(schedules: &[ScheduleEntry], scope: StatsScope) -> ScheduleStats {
    let mut tally = StatusDistribution::default();

    for schedule in schedules {
        for (day, slot) in schedule.slots() {
            if scope.includes(day.date) {
                tally.record(slot.status);
            }
        }
    }

    ScheduleStats {
        total_slots: tally.total,
        free_slots: tally.free,
        booked_slots: tally.booked,
        absent_slots: tally.absent,
        utilization_rate: percentage(tally.booked, tally.total),
        availability_rate: percentage(tally.free, tally.total),
    }
}

pub fn overall_stats(schedules: &[ScheduleEntry]) -> ScheduleStats {
    compute_stats(schedules, StatsScope::All)
}

pub fn stats_for_date(schedules: &[ScheduleEntry], date: NaiveDate) -> ScheduleStats {
    compute_stats(schedules, StatsScope::Day(date))
}

/// Stats for the current local date.
pub fn today_stats(schedules: &[ScheduleEntry]) -> ScheduleStats {
    stats_for_date(schedules, Local::now().date_naive())
}

fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(total) * 100.0).round() as u32
}
