use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::debug;

use crate::models::{DoctorError, DoctorRecord, SearchFilters, SearchState};
use crate::services::directory::DoctorDirectory;

/// Simulated round-trip latency for a directory search.
pub const SEARCH_LATENCY: Duration = Duration::from_secs(1);

/// Injectable search boundary, so a real networked directory can replace
/// the in-memory one without touching the workflow.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<DoctorRecord>>;
}

/// Default backend: filters the in-memory directory after a simulated
/// network delay.
pub struct DirectoryBackend {
    directory: Arc<DoctorDirectory>,
    latency: Duration,
}

impl DirectoryBackend {
    pub fn new(directory: Arc<DoctorDirectory>) -> Self {
        Self {
            directory,
            latency: SEARCH_LATENCY,
        }
    }

    pub fn with_latency(directory: Arc<DoctorDirectory>, latency: Duration) -> Self {
        Self { directory, latency }
    }
}

#[async_trait]
impl SearchBackend for DirectoryBackend {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<DoctorRecord>> {
        tokio::time::sleep(self.latency).await;

        Ok(self
            .directory
            .all()
            .iter()
            .filter(|doctor| filters.matches(doctor))
            .cloned()
            .collect())
    }
}

pub struct DoctorSearchService {
    backend: Arc<dyn SearchBackend>,
    state: watch::Sender<SearchState>,
}

impl DoctorSearchService {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self { backend, state }
    }

    pub fn with_directory(directory: Arc<DoctorDirectory>) -> Self {
        Self::new(Arc::new(DirectoryBackend::new(directory)))
    }

    /// Run a search, surfacing the transient `Searching` phase to state
    /// watchers. Results come back in directory order.
    pub async fn search(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<DoctorRecord>, DoctorError> {
        debug!("Searching doctors with filters: {:?}", filters);
        self.state.send_replace(SearchState::Searching);

        match self.backend.fetch(filters).await {
            Ok(doctors) => {
                debug!("Search complete, {} doctors found", doctors.len());
                self.state.send_replace(SearchState::Complete {
                    found: doctors.len(),
                });
                Ok(doctors)
            }
            Err(e) => {
                self.state.send_replace(SearchState::Idle);
                Err(DoctorError::SearchFailed(e.to_string()))
            }
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn watch_state(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }
}
