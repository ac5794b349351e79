pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{DateSlot, SlotCalendar, TimeSlot};
pub use router::schedule_routes;
pub use services::slots::{
    long_date_label, short_date_label, AlwaysOpen, AvailabilityPolicy,
    SampledAvailability, SlotPlanner, HORIZON_DAYS, TIME_SLOT_LABELS,
};
