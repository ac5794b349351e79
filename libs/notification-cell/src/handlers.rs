use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::services::queue::NotificationQueue;

#[axum::debug_handler]
pub async fn list_notifications(State(queue): State<NotificationQueue>) -> Json<Value> {
    let notifications = queue.snapshot().await;

    Json(json!({
        "notifications": notifications,
        "total": notifications.len()
    }))
}

#[axum::debug_handler]
pub async fn dismiss_notification(
    State(queue): State<NotificationQueue>,
    Path(notification_id): Path<Uuid>,
) -> StatusCode {
    // Dismissing an already-removed id is a no-op, not an error.
    queue.dismiss(notification_id).await;
    StatusCode::NO_CONTENT
}
