pub mod projection;
pub mod queries;
pub mod schedule;
pub mod stats;
pub mod time_range;

pub use projection::{event_id, project_events, project_events_with_policy, slot_count};
pub use schedule::ScheduleService;
pub use stats::{compute_stats, overall_stats, stats_for_date, today_stats};
pub use time_range::parse_slot_time;
