use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use scheduling_cell::services::slots::{
    long_date_label, short_date_label, AlwaysOpen, SampledAvailability, SlotPlanner,
    HORIZON_DAYS, TIME_SLOT_LABELS,
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid anchor date")
}

#[test]
fn dates_cover_fourteen_consecutive_days_starting_tomorrow() {
    let planner = SlotPlanner::new(Arc::new(AlwaysOpen));

    let dates = planner.generate_dates(anchor());

    assert_eq!(dates.len(), HORIZON_DAYS as usize);
    assert_eq!(dates[0].date, anchor() + Duration::days(1));
    for pair in dates.windows(2) {
        assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
    }
}

#[test]
fn time_slots_keep_the_lunch_gap() {
    let planner = SlotPlanner::new(Arc::new(AlwaysOpen));

    let times = planner.generate_time_slots();

    assert_eq!(times.len(), TIME_SLOT_LABELS.len());
    let labels: Vec<&str> = times.iter().map(|slot| slot.label.as_str()).collect();
    assert!(labels.contains(&"11:30 AM"));
    assert!(labels.contains(&"2:00 PM"));
    assert!(!labels.contains(&"12:00 PM"));
    assert!(!labels.contains(&"1:00 PM"));
}

#[test]
fn always_open_policy_marks_everything_available() {
    let planner = SlotPlanner::new(Arc::new(AlwaysOpen));

    let calendar = planner.calendar(anchor());

    assert!(calendar.dates.iter().all(|slot| slot.available));
    assert!(calendar.times.iter().all(|slot| slot.available));
    assert!(calendar.date_open(anchor() + Duration::days(3)));
    assert!(calendar.time_open("2:30 PM"));
}

#[test]
fn calendar_lookups_reject_unknown_slots() {
    let planner = SlotPlanner::new(Arc::new(AlwaysOpen));

    let calendar = planner.calendar(anchor());

    // Today itself is outside the horizon, and lunch was never generated.
    assert!(!calendar.date_open(anchor()));
    assert!(!calendar.time_open("12:30 PM"));
}

#[test]
fn equal_seeds_produce_equal_availability() {
    let first = SlotPlanner::new(Arc::new(SampledAvailability::seeded(42)));
    let second = SlotPlanner::new(Arc::new(SampledAvailability::seeded(42)));

    let a = first.calendar(anchor());
    let b = second.calendar(anchor());

    let flags = |calendar: &scheduling_cell::models::SlotCalendar| -> Vec<bool> {
        calendar
            .dates
            .iter()
            .map(|slot| slot.available)
            .chain(calendar.times.iter().map(|slot| slot.available))
            .collect()
    };
    assert_eq!(flags(&a), flags(&b));
}

#[test]
fn closed_everything_when_rates_are_zero() {
    let policy = SampledAvailability::seeded(7).with_rates(0.0, 0.0);
    let planner = SlotPlanner::new(Arc::new(policy));

    let calendar = planner.calendar(anchor());

    assert!(calendar.dates.iter().all(|slot| !slot.available));
    assert!(calendar.times.iter().all(|slot| !slot.available));
}

#[test]
fn date_labels_match_the_two_display_forms() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");

    assert_eq!(short_date_label(date), "Fri, Aug 7");
    assert_eq!(long_date_label(date), "Friday, August 7, 2026");
}
