use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::services::submission::BookingSubmissionService;

pub fn booking_routes(submission: Arc<BookingSubmissionService>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_booking))
        .with_state(submission)
}
