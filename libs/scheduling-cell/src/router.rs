use axum::{routing::get, Router};

use crate::handlers;
use crate::services::slots::SlotPlanner;

pub fn schedule_routes(planner: SlotPlanner) -> Router {
    Router::new()
        .route("/dates", get(handlers::get_available_dates))
        .route("/times", get(handlers::get_time_slots))
        .with_state(planner)
}
