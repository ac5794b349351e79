use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::directory::DoctorDirectory;

pub fn doctor_routes(directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route("/search", post(handlers::search_doctors))
        .route("/search/options", get(handlers::get_search_options))
        .with_state(directory)
}
