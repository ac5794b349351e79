use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable provider record owned by the directory for the lifetime of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub rating: f32,
    pub experience: String,
    pub availability: String,
    pub next_slot: String,
    pub consultation_fee: u32,
    pub reviews: u32,
}

/// Query state for a directory search. All constraints are combined
/// conjunctively; unset fields and "All …" dropdown sentinels match
/// everything. Only reset by explicit caller action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
}

impl SearchFilters {
    /// True when the record satisfies every non-empty constraint.
    pub fn matches(&self, doctor: &DoctorRecord) -> bool {
        constrains(&self.name, &doctor.name)
            && constrains(&self.specialty, &doctor.specialty)
            && constrains(&self.location, &doctor.location)
            && constrains(&self.availability, &doctor.availability)
    }
}

fn constrains(filter: &Option<String>, field: &str) -> bool {
    match filter {
        Some(value) if !value.trim().is_empty() && !is_sentinel(value) => field
            .to_lowercase()
            .contains(&value.trim().to_lowercase()),
        _ => true,
    }
}

fn is_sentinel(value: &str) -> bool {
    value.trim().to_lowercase().starts_with("all ")
}

/// Transient phase of a search, observable while the simulated round trip
/// is in flight. Zero results is a valid `Complete`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Searching,
    Complete { found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor search failed: {0}")]
    SearchFailed(String),
}
