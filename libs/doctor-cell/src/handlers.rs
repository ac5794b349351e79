use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::SearchFilters;
use crate::services::directory::DoctorDirectory;
use crate::services::search::DoctorSearchService;

#[axum::debug_handler]
pub async fn search_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
    Json(filters): Json<SearchFilters>,
) -> Result<Json<Value>, AppError> {
    let search_service = DoctorSearchService::with_directory(Arc::clone(&directory));

    let doctors = search_service
        .search(&filters)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_search_options(
    State(_directory): State<Arc<DoctorDirectory>>,
) -> Json<Value> {
    Json(json!({
        "specialties": DoctorDirectory::specialty_options(),
        "locations": DoctorDirectory::location_options()
    }))
}
