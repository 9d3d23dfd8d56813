use chrono::{Local, NaiveDate};

use schedule_calendar_cell::models::*;
use schedule_calendar_cell::services::stats::{
    compute_stats, overall_stats, stats_for_date, today_stats,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day(id: &str, on: NaiveDate, statuses: &[SlotStatus]) -> WeekDay {
    WeekDay {
        id: id.to_string(),
        date: on,
        slots: statuses
            .iter()
            .enumerate()
            .map(|(i, status)| Slot {
                id: format!("{}-{}", id, i),
                time: format!("{:02}:00-{:02}:00", 7 + i, 8 + i),
                status: *status,
            })
            .collect(),
    }
}

fn schedule(week_days: Vec<WeekDay>) -> ScheduleEntry {
    ScheduleEntry {
        id: "sch".to_string(),
        doctor_id: "doc".to_string(),
        doctor_name: "Dr. Test".to_string(),
        week_days,
    }
}

#[test]
fn test_single_day_scenario_stats() {
    let schedules = vec![schedule(vec![day(
        "d",
        date(2024, 6, 10),
        &[SlotStatus::Free, SlotStatus::Booked],
    )])];

    assert_eq!(
        overall_stats(&schedules),
        ScheduleStats {
            total_slots: 2,
            free_slots: 1,
            booked_slots: 1,
            absent_slots: 0,
            utilization_rate: 50,
            availability_rate: 50,
        }
    );
}

#[test]
fn test_empty_scope_has_zero_rates() {
    assert_eq!(overall_stats(&[]), ScheduleStats::default());

    let only_empty_day = vec![schedule(vec![day("d", date(2024, 6, 10), &[])])];
    let stats = overall_stats(&only_empty_day);
    assert_eq!(stats.total_slots, 0);
    assert_eq!(stats.utilization_rate, 0);
    assert_eq!(stats.availability_rate, 0);
}

#[test]
fn test_counts_add_up_in_every_scope() {
    use SlotStatus::*;

    let schedules = vec![
        schedule(vec![
            day("a", date(2024, 6, 10), &[Free, Booked, Absent, Booked]),
            day("b", date(2024, 6, 11), &[Absent, Absent, Free]),
        ]),
        schedule(vec![day("c", date(2024, 6, 10), &[Booked, Booked, Free])]),
    ];

    for scope in [
        StatsScope::All,
        StatsScope::Day(date(2024, 6, 10)),
        StatsScope::Day(date(2024, 6, 11)),
        StatsScope::Day(date(2024, 6, 12)),
    ] {
        let stats = compute_stats(&schedules, scope);
        assert_eq!(
            stats.free_slots + stats.booked_slots + stats.absent_slots,
            stats.total_slots
        );
        assert!(stats.utilization_rate <= 100);
        assert!(stats.availability_rate <= 100);
    }

    let all = overall_stats(&schedules);
    assert_eq!(all.total_slots, 10);
    assert_eq!(all.booked_slots, 4);
    assert_eq!(all.utilization_rate, 40);
    assert_eq!(all.availability_rate, 30);

    let tenth = stats_for_date(&schedules, date(2024, 6, 10));
    assert_eq!(tenth.total_slots, 7);
    assert_eq!(tenth.booked_slots, 4);
    assert_eq!(tenth.utilization_rate, 57);
    assert_eq!(tenth.availability_rate, 29);
}

#[test]
fn test_malformed_times_do_not_affect_counts() {
    let mut schedules = vec![schedule(vec![day("d", date(2024, 6, 10), &[SlotStatus::Free])])];
    schedules[0].week_days[0].slots[0].time = "garbage".to_string();

    assert_eq!(overall_stats(&schedules).free_slots, 1);
}

#[test]
fn test_today_stats_only_counts_local_today() {
    let today = Local::now().date_naive();
    let yesterday = today.pred_opt().unwrap();

    let schedules = vec![schedule(vec![
        day("today", today, &[SlotStatus::Booked, SlotStatus::Free, SlotStatus::Free, SlotStatus::Free]),
        day("yesterday", yesterday, &[SlotStatus::Booked]),
    ])];

    let stats = today_stats(&schedules);
    assert_eq!(stats.total_slots, 4);
    assert_eq!(stats.booked_slots, 1);
    assert_eq!(stats.utilization_rate, 25);
    assert_eq!(stats.availability_rate, 75);
}
