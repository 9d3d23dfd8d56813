use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use schedule_calendar_cell::router::calendar_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic calendar API is running!" }))
        .nest("/calendar", calendar_routes(state))
}
