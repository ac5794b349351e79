use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::models::{DoctorRecord, SearchFilters};
use doctor_cell::services::search::DoctorSearchService;
use scheduling_cell::models::SlotCalendar;
use scheduling_cell::services::slots::{long_date_label, SlotPlanner};
use shared_models::identity::PatientIdentity;

use crate::error::BookingError;
use crate::models::{
    BookingConfirmation, BookingDraft, BookingStep, NavigationTarget, PatientInfo,
    PatientInfoUpdate,
};
use crate::services::submission::BookingSubmissionService;

/// One booking attempt: Search → Schedule → Confirm → Submitting → Done,
/// with back edges from Schedule to Search and from Confirm to Schedule.
///
/// The workflow owns its draft exclusively; the identity is fixed at
/// construction and never read from ambient state. Dropping the workflow
/// discards the draft.
pub struct BookingWorkflow {
    step: BookingStep,
    draft: BookingDraft,
    identity: Option<PatientIdentity>,
    doctor_search: DoctorSearchService,
    planner: SlotPlanner,
    submission: BookingSubmissionService,
    results: Vec<DoctorRecord>,
    calendar: Option<SlotCalendar>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
    submitting: bool,
    navigation: Option<NavigationTarget>,
}

impl BookingWorkflow {
    pub fn new(
        doctor_search: DoctorSearchService,
        planner: SlotPlanner,
        submission: BookingSubmissionService,
        identity: Option<PatientIdentity>,
    ) -> Self {
        let draft = BookingDraft {
            patient_info: PatientInfo::from_identity(identity.as_ref()),
            ..BookingDraft::default()
        };

        Self {
            step: BookingStep::Search,
            draft,
            identity,
            doctor_search,
            planner,
            submission,
            results: Vec::new(),
            calendar: None,
            selected_date: None,
            selected_time: None,
            submitting: false,
            navigation: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn results(&self) -> &[DoctorRecord] {
        &self.results
    }

    /// The frozen calendar snapshot for the current schedule visit.
    pub fn calendar(&self) -> Option<&SlotCalendar> {
        self.calendar.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn navigation(&self) -> Option<NavigationTarget> {
        self.navigation
    }

    /// Run a directory search and retain the results for selection.
    pub async fn search(
        &mut self,
        filters: &SearchFilters,
    ) -> Result<&[DoctorRecord], BookingError> {
        if self.step != BookingStep::Search {
            return Err(BookingError::InvalidStep(self.step));
        }

        self.results = self.doctor_search.search(filters).await?;
        Ok(&self.results)
    }

    /// Pick a doctor from the latest results and move to the schedule step.
    pub fn select_doctor(&mut self, doctor_id: Uuid) -> Result<(), BookingError> {
        if self.step != BookingStep::Search {
            return Err(BookingError::InvalidStep(self.step));
        }

        let doctor = self
            .results
            .iter()
            .find(|d| d.id == doctor_id)
            .cloned()
            .ok_or(BookingError::UnknownDoctor)?;

        debug!("Doctor {} selected, entering schedule step", doctor.name);
        self.draft.doctor = Some(doctor);
        self.enter_schedule();
        Ok(())
    }

    /// Entering Schedule regenerates the calendar and freezes that snapshot
    /// for the duration of the visit.
    fn enter_schedule(&mut self) {
        assert!(
            self.draft.doctor.is_some(),
            "schedule step entered without a doctor"
        );

        self.calendar = Some(self.planner.calendar(Utc::now().date_naive()));
        self.selected_date = None;
        self.selected_time = None;
        self.draft.date = None;
        self.draft.time = None;
        self.step = BookingStep::Schedule;
    }

    /// Select a candidate date. Closed or unknown dates are refused and the
    /// previous selection stands.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if self.step != BookingStep::Schedule {
            return Err(BookingError::InvalidStep(self.step));
        }

        let calendar = self
            .calendar
            .as_ref()
            .expect("schedule step active without a calendar");
        if !calendar.date_open(date) {
            return Err(BookingError::SlotUnavailable(date.to_string()));
        }

        self.selected_date = Some(date);
        Ok(())
    }

    /// Select a time-of-day slot under the same rules as `select_date`.
    pub fn select_time(&mut self, label: &str) -> Result<(), BookingError> {
        if self.step != BookingStep::Schedule {
            return Err(BookingError::InvalidStep(self.step));
        }

        let calendar = self
            .calendar
            .as_ref()
            .expect("schedule step active without a calendar");
        if !calendar.time_open(label) {
            return Err(BookingError::SlotUnavailable(label.to_string()));
        }

        self.selected_time = Some(label.to_string());
        Ok(())
    }

    /// Move to Confirm once both slots are chosen, storing the long display
    /// form of the date in the draft.
    pub fn continue_to_confirm(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Schedule {
            return Err(BookingError::InvalidStep(self.step));
        }

        let (date, time) = match (self.selected_date, self.selected_time.clone()) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(BookingError::ScheduleIncomplete),
        };

        self.draft.date = Some(long_date_label(date));
        self.draft.time = Some(time);
        self.step = BookingStep::Confirm;
        Ok(())
    }

    /// Back out of Schedule, discarding doctor, date, and time.
    pub fn back_to_search(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Schedule {
            return Err(BookingError::InvalidStep(self.step));
        }

        self.draft.doctor = None;
        self.draft.date = None;
        self.draft.time = None;
        self.calendar = None;
        self.selected_date = None;
        self.selected_time = None;
        self.step = BookingStep::Search;
        Ok(())
    }

    /// Back out of Confirm. The schedule choice is discarded but the doctor
    /// and any patient info typed so far survive.
    pub fn back_to_schedule(&mut self) -> Result<(), BookingError> {
        if self.step != BookingStep::Confirm {
            return Err(BookingError::InvalidStep(self.step));
        }

        self.enter_schedule();
        Ok(())
    }

    /// Edit the confirmation form. The draft is the only buffer, so what is
    /// displayed and what gets submitted cannot diverge.
    pub fn update_patient_info(
        &mut self,
        update: PatientInfoUpdate,
    ) -> Result<(), BookingError> {
        if self.step != BookingStep::Confirm {
            return Err(BookingError::InvalidStep(self.step));
        }

        self.draft.patient_info.apply(update);
        Ok(())
    }

    /// Submit the booking. Refused without side effects while a submission
    /// is in flight or while mandatory fields are missing; on gateway
    /// failure the Confirm step stays active with everything retained so
    /// the caller can retry.
    pub async fn confirm(&mut self) -> Result<BookingConfirmation, BookingError> {
        if self.step != BookingStep::Confirm {
            return Err(BookingError::InvalidStep(self.step));
        }
        if self.submitting {
            return Err(BookingError::SubmissionInFlight);
        }

        let missing = self.draft.patient_info.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing.join(", ")));
        }

        self.submitting = true;
        self.step = BookingStep::Submitting;
        let result = self
            .submission
            .submit(&self.draft, self.identity.as_ref())
            .await;
        self.submitting = false;

        match result {
            Ok(confirmation) => {
                info!(
                    "Booking workflow finished with {}",
                    confirmation.record.booking_id
                );
                self.step = BookingStep::Done;
                self.navigation = Some(confirmation.navigate_to);
                Ok(confirmation)
            }
            Err(e) => {
                self.step = BookingStep::Confirm;
                Err(e)
            }
        }
    }
}
