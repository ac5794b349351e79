pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::BookingError;
pub use models::{
    BookingConfirmation, BookingDraft, BookingRecord, BookingStatus, BookingStep,
    NavigationTarget, PatientInfo, PatientInfoUpdate, VisitReason,
};
pub use router::booking_routes;
pub use services::submission::{
    issue_record, BookingGateway, BookingSubmissionService, SimulatedGateway,
    SUBMIT_LATENCY,
};
pub use services::workflow::BookingWorkflow;
