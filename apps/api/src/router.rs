use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use booking_cell::services::submission::{BookingSubmissionService, SimulatedGateway};
use doctor_cell::router::doctor_routes;
use doctor_cell::services::directory::DoctorDirectory;
use notification_cell::router::notification_routes;
use notification_cell::services::queue::NotificationQueue;
use scheduling_cell::services::slots::{AvailabilityPolicy, SampledAvailability, SlotPlanner};
use scheduling_cell::router::schedule_routes;
use shared_config::AppConfig;

pub fn create_router(config: &AppConfig) -> Router {
    let directory = Arc::new(DoctorDirectory::sample());

    let policy: Arc<dyn AvailabilityPolicy> = match config.availability_seed {
        Some(seed) => Arc::new(SampledAvailability::seeded(seed)),
        None => Arc::new(SampledAvailability::from_entropy()),
    };
    let planner = SlotPlanner::new(policy);

    let notifications = NotificationQueue::new();
    let submission = Arc::new(BookingSubmissionService::new(
        Arc::new(SimulatedGateway::new()),
        notifications.clone(),
    ));

    Router::new()
        .route("/", get(|| async { "StayHealthy booking API is running!" }))
        .nest("/api/doctors", doctor_routes(directory))
        .nest("/api/schedule", schedule_routes(planner))
        .nest("/api/bookings", booking_routes(submission))
        .nest("/api/notifications", notification_routes(notifications))
}
