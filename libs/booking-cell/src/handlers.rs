use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use doctor_cell::models::DoctorRecord;
use shared_models::error::AppError;
use shared_models::identity::PatientIdentity;

use crate::models::{BookingDraft, PatientInfo};
use crate::services::submission::BookingSubmissionService;

#[derive(Debug, Deserialize)]
pub struct SubmitBookingRequest {
    pub doctor: DoctorRecord,
    pub date: String,
    pub time: String,
    pub patient_info: PatientInfo,
    pub identity: Option<PatientIdentity>,
}

#[axum::debug_handler]
pub async fn submit_booking(
    State(submission): State<Arc<BookingSubmissionService>>,
    Json(request): Json<SubmitBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let draft = BookingDraft {
        doctor: Some(request.doctor),
        date: Some(request.date),
        time: Some(request.time),
        patient_info: request.patient_info,
    };

    let confirmation = submission
        .submit(&draft, request.identity.as_ref())
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({
        "booking": confirmation.record,
        "navigate_to": confirmation.navigate_to
    })))
}
