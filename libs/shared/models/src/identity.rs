use serde::{Deserialize, Serialize};

/// Read-only identity record supplied by the session layer.
///
/// `None` at the workflow boundary means the caller proceeds as a guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIdentity {
    pub name: String,
    pub email: String,
    pub phone: String,
}
