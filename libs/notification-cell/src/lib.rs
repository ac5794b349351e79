pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Notification, Severity};
pub use router::notification_routes;
pub use services::queue::{NotificationQueue, AUTO_DISMISS_AFTER};
