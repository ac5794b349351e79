use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers;
use crate::services::queue::NotificationQueue;

pub fn notification_routes(queue: NotificationQueue) -> Router {
    Router::new()
        .route("/", get(handlers::list_notifications))
        .route("/{notification_id}", delete(handlers::dismiss_notification))
        .with_state(queue)
}
