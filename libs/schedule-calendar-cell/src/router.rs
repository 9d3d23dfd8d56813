use std::sync::Arc;

use axum::{
    middleware,
    routing::get,
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn calendar_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/events", get(handlers::get_calendar_events))
        .route("/events/by-date", get(handlers::get_events_by_date))
        .route("/events/date/{date}", get(handlers::get_events_on_date))
        .route("/events/month", get(handlers::get_events_for_month))
        .route("/events/upcoming", get(handlers::get_upcoming_events))
        .route("/events/distribution", get(handlers::get_status_distribution))
        .route("/stats", get(handlers::get_schedule_stats))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
