use thiserror::Error;

use shared_models::error::AppError;

use crate::models::BookingStep;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Action not available in the {0} step")]
    InvalidStep(BookingStep),

    #[error("Doctor is not in the current search results")]
    UnknownDoctor,

    #[error("{0} is not open for booking")]
    SlotUnavailable(String),

    #[error("A date and a time must both be selected")]
    ScheduleIncomplete,

    #[error("Missing required patient fields: {0}")]
    MissingFields(String),

    #[error("Booking draft is missing its doctor or schedule selection")]
    IncompleteDraft,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Booking submission failed: {0}")]
    Gateway(String),

    #[error(transparent)]
    Search(#[from] doctor_cell::models::DoctorError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MissingFields(_)
            | BookingError::ScheduleIncomplete
            | BookingError::IncompleteDraft => AppError::ValidationError(err.to_string()),
            BookingError::Gateway(_) => AppError::ExternalService(err.to_string()),
            BookingError::UnknownDoctor => AppError::NotFound(err.to_string()),
            BookingError::Search(_) => AppError::Internal(err.to_string()),
            BookingError::InvalidStep(_)
            | BookingError::SlotUnavailable(_)
            | BookingError::SubmissionInFlight => AppError::BadRequest(err.to_string()),
        }
    }
}
