use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use notification_cell::models::Severity;
use notification_cell::services::queue::NotificationQueue;
use shared_models::identity::PatientIdentity;

use crate::error::BookingError;
use crate::models::{
    BookingConfirmation, BookingDraft, BookingRecord, BookingStatus, NavigationTarget,
};

/// Simulated round-trip latency for submitting a booking.
pub const SUBMIT_LATENCY: Duration = Duration::from_secs(2);

/// The single external-call boundary of a submission. Swap this for a real
/// client to talk to a live scheduling service.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(&self, draft: &BookingDraft) -> Result<()>;
}

/// Default gateway: a fixed delay standing in for the network round trip.
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self {
            latency: SUBMIT_LATENCY,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingGateway for SimulatedGateway {
    async fn submit(&self, _draft: &BookingDraft) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Build the terminal record for a draft. Pure in `(draft, issued_at)`:
/// the id is derived from the issue instant and the status is always
/// confirmed at creation.
pub fn issue_record(
    draft: &BookingDraft,
    issued_at: DateTime<Utc>,
) -> Result<BookingRecord, BookingError> {
    let doctor = draft.doctor.clone().ok_or(BookingError::IncompleteDraft)?;
    let date = draft.date.clone().ok_or(BookingError::IncompleteDraft)?;
    let time = draft.time.clone().ok_or(BookingError::IncompleteDraft)?;

    Ok(BookingRecord {
        booking_id: format!("APT{}", issued_at.timestamp_millis()),
        doctor,
        date,
        time,
        patient_info: draft.patient_info.clone(),
        status: BookingStatus::Confirmed,
        created_at: issued_at,
    })
}

/// Terminal step of the workflow: validates the draft, crosses the gateway
/// boundary once, and reports the outcome through the notification queue.
pub struct BookingSubmissionService {
    gateway: Arc<dyn BookingGateway>,
    notifications: NotificationQueue,
    last_issued_ms: AtomicI64,
}

impl BookingSubmissionService {
    pub fn new(gateway: Arc<dyn BookingGateway>, notifications: NotificationQueue) -> Self {
        Self {
            gateway,
            notifications,
            last_issued_ms: AtomicI64::new(0),
        }
    }

    /// Submit a completed draft. All-or-nothing: a gateway failure leaves
    /// no record behind and surfaces exactly one error notification.
    pub async fn submit(
        &self,
        draft: &BookingDraft,
        identity: Option<&PatientIdentity>,
    ) -> Result<BookingConfirmation, BookingError> {
        let missing = draft.patient_info.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing.join(", ")));
        }
        if draft.doctor.is_none() || draft.date.is_none() || draft.time.is_none() {
            return Err(BookingError::IncompleteDraft);
        }

        if let Err(e) = self.gateway.submit(draft).await {
            warn!("Booking submission failed: {}", e);
            self.notifications
                .notify("Failed to book appointment. Please try again.", Severity::Error)
                .await;
            return Err(BookingError::Gateway(e.to_string()));
        }

        let record = issue_record(draft, self.next_issue_time())?;
        info!(
            "Booking {} confirmed with {} on {} at {}",
            record.booking_id, record.doctor.name, record.date, record.time
        );

        self.notifications
            .notify(
                format!(
                    "Appointment booked successfully with {} on {} at {}",
                    record.doctor.name, record.date, record.time
                ),
                Severity::Success,
            )
            .await;

        let navigate_to = if identity.is_some() {
            NavigationTarget::Profile
        } else {
            NavigationTarget::Landing
        };

        Ok(BookingConfirmation {
            record,
            navigate_to,
        })
    }

    /// Issue instants are strictly increasing, so ids derived from them
    /// never collide even when submissions land in the same millisecond.
    fn next_issue_time(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last_issued_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or(0);
        let stamped = now.max(prev + 1);

        DateTime::<Utc>::from_timestamp_millis(stamped).unwrap_or_else(Utc::now)
    }
}
