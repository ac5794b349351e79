use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::services::slots::SlotPlanner;

#[derive(Debug, Deserialize)]
pub struct DatesQuery {
    pub from: Option<NaiveDate>,
}

#[axum::debug_handler]
pub async fn get_available_dates(
    State(planner): State<SlotPlanner>,
    Query(query): Query<DatesQuery>,
) -> Json<Value> {
    let from = query.from.unwrap_or_else(|| Utc::now().date_naive());
    let dates = planner.generate_dates(from);

    Json(json!({
        "dates": dates,
        "total": dates.len()
    }))
}

#[axum::debug_handler]
pub async fn get_time_slots(State(planner): State<SlotPlanner>) -> Json<Value> {
    let times = planner.generate_time_slots();

    Json(json!({
        "times": times,
        "total": times.len()
    }))
}
