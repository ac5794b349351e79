use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable calendar day inside the horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateSlot {
    pub date: NaiveDate,
    pub label: String,
    pub available: bool,
}

/// One bookable time of day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub label: String,
    pub available: bool,
}

/// A generated calendar snapshot. Availability flags are fixed at
/// generation time; selection checks read this snapshot, never the
/// policy again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCalendar {
    pub dates: Vec<DateSlot>,
    pub times: Vec<TimeSlot>,
}

impl SlotCalendar {
    pub fn date_open(&self, date: NaiveDate) -> bool {
        self.dates.iter().any(|slot| slot.date == date && slot.available)
    }

    pub fn time_open(&self, label: &str) -> bool {
        self.times.iter().any(|slot| slot.label == label && slot.available)
    }
}
