use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::models::{DateSlot, SlotCalendar, TimeSlot};

/// Booking horizon in days, starting the day after `from`.
pub const HORIZON_DAYS: i64 = 14;

/// Bookable times of day. The gap between 11:30 AM and 2:00 PM is the
/// clinic lunch break, not a missing entry.
pub const TIME_SLOT_LABELS: [&str; 13] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM",
];

/// Availability oracle behind the generated calendar. Each slot is asked
/// about independently; nothing correlates a date's flag with the time
/// flags.
pub trait AvailabilityPolicy: Send + Sync {
    fn date_available(&self, date: NaiveDate) -> bool;
    fn time_available(&self, label: &str) -> bool;
}

/// Draws independent availability flags from a seedable generator.
pub struct SampledAvailability {
    rng: Mutex<StdRng>,
    date_open_rate: f64,
    time_open_rate: f64,
}

impl SampledAvailability {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            date_open_rate: 0.7,
            time_open_rate: 0.6,
        }
    }

    pub fn with_rates(mut self, date_open_rate: f64, time_open_rate: f64) -> Self {
        self.date_open_rate = date_open_rate;
        self.time_open_rate = time_open_rate;
        self
    }

    fn draw(&self, rate: f64) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(rate)
    }
}

impl AvailabilityPolicy for SampledAvailability {
    fn date_available(&self, _date: NaiveDate) -> bool {
        self.draw(self.date_open_rate)
    }

    fn time_available(&self, _label: &str) -> bool {
        self.draw(self.time_open_rate)
    }
}

/// Everything bookable. Used by tests and demos.
pub struct AlwaysOpen;

impl AvailabilityPolicy for AlwaysOpen {
    fn date_available(&self, _date: NaiveDate) -> bool {
        true
    }

    fn time_available(&self, _label: &str) -> bool {
        true
    }
}

/// Generates candidate dates and time slots for the schedule step.
#[derive(Clone)]
pub struct SlotPlanner {
    policy: Arc<dyn AvailabilityPolicy>,
}

impl SlotPlanner {
    pub fn new(policy: Arc<dyn AvailabilityPolicy>) -> Self {
        Self { policy }
    }

    /// Consecutive calendar days from the day after `from` through
    /// `from + HORIZON_DAYS`, each independently flagged.
    pub fn generate_dates(&self, from: NaiveDate) -> Vec<DateSlot> {
        (1..=HORIZON_DAYS)
            .map(|offset| {
                let date = from + Duration::days(offset);
                DateSlot {
                    date,
                    label: short_date_label(date),
                    available: self.policy.date_available(date),
                }
            })
            .collect()
    }

    pub fn generate_time_slots(&self) -> Vec<TimeSlot> {
        TIME_SLOT_LABELS
            .iter()
            .map(|label| TimeSlot {
                label: (*label).to_string(),
                available: self.policy.time_available(label),
            })
            .collect()
    }

    pub fn calendar(&self, from: NaiveDate) -> SlotCalendar {
        debug!("Generating slot calendar from {}", from);

        SlotCalendar {
            dates: self.generate_dates(from),
            times: self.generate_time_slots(),
        }
    }
}

/// Date-grid form, e.g. "Thu, Aug 7".
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Confirmation form, e.g. "Thursday, August 7, 2026".
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
