use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::models::DoctorRecord;
use shared_models::identity::PatientIdentity;

// ==============================================================================
// PATIENT INFORMATION
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitReason {
    RoutineCheckup,
    FollowUp,
    NewSymptoms,
    ChronicCondition,
    PreventiveCare,
    Other,
}

impl fmt::Display for VisitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitReason::RoutineCheckup => write!(f, "routine-checkup"),
            VisitReason::FollowUp => write!(f, "follow-up"),
            VisitReason::NewSymptoms => write!(f, "new-symptoms"),
            VisitReason::ChronicCondition => write!(f, "chronic-condition"),
            VisitReason::PreventiveCare => write!(f, "preventive-care"),
            VisitReason::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub reason: Option<VisitReason>,
    pub notes: String,
}

impl PatientInfo {
    /// Seed the form from the session identity; guests start blank.
    pub fn from_identity(identity: Option<&PatientIdentity>) -> Self {
        match identity {
            Some(identity) => Self {
                name: identity.name.clone(),
                email: identity.email.clone(),
                phone: identity.phone.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Mandatory fields still blocking submission.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.reason.is_none() {
            missing.push("reason");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn apply(&mut self, update: PatientInfoUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(reason) = update.reason {
            self.reason = Some(reason);
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}

/// Partial edit of the confirmation form. Unset fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfoUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<VisitReason>,
    pub notes: Option<String>,
}

// ==============================================================================
// DRAFT AND RECORD
// ==============================================================================

/// Accumulated state of one booking attempt. Lives exactly as long as the
/// workflow instance that owns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub doctor: Option<DoctorRecord>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub patient_info: PatientInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Terminal artifact of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: String,
    pub doctor: DoctorRecord,
    pub date: String,
    pub time: String,
    pub patient_info: PatientInfo,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// ==============================================================================
// WORKFLOW STATE
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Search,
    Schedule,
    Confirm,
    Submitting,
    Done,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStep::Search => write!(f, "search"),
            BookingStep::Schedule => write!(f, "schedule"),
            BookingStep::Confirm => write!(f, "confirm"),
            BookingStep::Submitting => write!(f, "submitting"),
            BookingStep::Done => write!(f, "done"),
        }
    }
}

/// Where the caller should route after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Profile,
    Landing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub record: BookingRecord,
    pub navigate_to: NavigationTarget,
}
