use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use axum_extra::TypedHeader;
use chrono::{Local, NaiveDate, NaiveDateTime};
use headers::{authorization::Bearer, Authorization};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{CalendarEvent, ScheduleEntry, ScheduleQuery};
use crate::services::{
    projection::project_events_with_policy,
    queries,
    schedule::ScheduleService,
    stats::{overall_stats, today_stats},
};

const DEFAULT_UPCOMING_DAYS: u32 = 7;
const MAX_UPCOMING_DAYS: u32 = 366;

#[derive(Debug, Deserialize)]
pub struct DoctorFilter {
    pub doctor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: u32,
    pub year: i32,
    pub doctor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub days: Option<u32>,
    pub doctor_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DistributionQuery {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub doctor_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsScopeParam {
    #[default]
    All,
    Today,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub scope: Option<StatsScopeParam>,
    pub doctor_id: Option<String>,
}

// ==============================================================================
// HELPERS
// ==============================================================================

async fn load_schedules(
    state: &AppConfig,
    token: &str,
    query: ScheduleQuery,
) -> Result<Vec<ScheduleEntry>, AppError> {
    ScheduleService::new(state)
        .fetch_schedules(&query, token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))
}

async fn load_events(
    state: &AppConfig,
    token: &str,
    query: ScheduleQuery,
) -> Result<Vec<CalendarEvent>, AppError> {
    let schedules = load_schedules(state, token, query).await?;
    Ok(project_events_with_policy(&schedules, state.malformed_slot_policy)?)
}

fn doctor_only(doctor_id: Option<String>) -> ScheduleQuery {
    ScheduleQuery {
        doctor_id,
        ..ScheduleQuery::default()
    }
}

// ==============================================================================
// CALENDAR HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_calendar_events(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Extension(user): Extension<User>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    debug!("User {} requested calendar events", user.id);

    let events = load_events(&state, auth.token(), query).await?;

    Ok(Json(json!({
        "events": events,
        "total": events.len()
    })))
}

#[axum::debug_handler]
pub async fn get_events_by_date(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let events = load_events(&state, auth.token(), query).await?;

    Ok(Json(json!({
        "days": queries::group_events_by_date(&events)
    })))
}

#[axum::debug_handler]
pub async fn get_events_on_date(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(date): Path<NaiveDate>,
    Query(filter): Query<DoctorFilter>,
) -> Result<Json<Value>, AppError> {
    let events = load_events(&state, auth.token(), doctor_only(filter.doctor_id)).await?;

    Ok(Json(json!({
        "date": date,
        "has_events": queries::has_events_on(&events, date),
        "events": queries::events_for_date(&events, date)
    })))
}

#[axum::debug_handler]
pub async fn get_events_for_month(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Value>, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::BadRequest("Month must be between 1 and 12".to_string()));
    }

    let events = load_events(&state, auth.token(), doctor_only(query.doctor_id)).await?;

    Ok(Json(json!({
        "month": query.month,
        "year": query.year,
        "events": queries::events_for_month(&events, query.month, query.year)
    })))
}

#[axum::debug_handler]
pub async fn get_upcoming_events(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Value>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_UPCOMING_DAYS);
    if days > MAX_UPCOMING_DAYS {
        return Err(AppError::BadRequest(format!(
            "days must be at most {}",
            MAX_UPCOMING_DAYS
        )));
    }

    let events = load_events(&state, auth.token(), doctor_only(query.doctor_id)).await?;
    let now = Local::now().naive_local();

    Ok(Json(json!({
        "days": days,
        "events": queries::upcoming_events(&events, now, days)
    })))
}

#[axum::debug_handler]
pub async fn get_status_distribution(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(query): Query<DistributionQuery>,
) -> Result<Json<Value>, AppError> {
    if query.start > query.end {
        return Err(AppError::BadRequest("start must not be after end".to_string()));
    }

    let events = load_events(&state, auth.token(), doctor_only(query.doctor_id)).await?;
    let distribution = queries::status_distribution(&events, query.start, query.end);

    Ok(Json(json!(distribution)))
}

// ==============================================================================
// STATISTICS HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_schedule_stats(
    State(state): State<Arc<AppConfig>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Value>, AppError> {
    // Stats only count statuses, so malformed slot times never fail this endpoint.
    let schedules = load_schedules(&state, auth.token(), doctor_only(query.doctor_id)).await?;

    let stats = match query.scope.unwrap_or_default() {
        StatsScopeParam::All => overall_stats(&schedules),
        StatsScopeParam::Today => today_stats(&schedules),
    };

    Ok(Json(json!(stats)))
}
