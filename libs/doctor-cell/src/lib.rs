pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{DoctorError, DoctorRecord, SearchFilters, SearchState};
pub use router::doctor_routes;
pub use services::directory::DoctorDirectory;
pub use services::search::{
    DirectoryBackend, DoctorSearchService, SearchBackend, SEARCH_LATENCY,
};
