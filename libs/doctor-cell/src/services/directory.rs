use uuid::Uuid;

use crate::models::DoctorRecord;

/// Static provider directory. Records keep their insertion order for the
/// whole session; search never re-sorts them.
pub struct DoctorDirectory {
    doctors: Vec<DoctorRecord>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<DoctorRecord>) -> Self {
        Self { doctors }
    }

    /// The five-provider sample set the application ships with.
    pub fn sample() -> Self {
        Self::new(vec![
            record(
                "Dr. Sarah Johnson",
                "Cardiology",
                "New York, NY",
                4.9,
                "15 years",
                "Available Today",
                "2:30 PM",
                250,
                120,
            ),
            record(
                "Dr. Michael Chen",
                "Pediatrics",
                "Los Angeles, CA",
                4.8,
                "12 years",
                "Available Tomorrow",
                "10:00 AM",
                120,
                95,
            ),
            record(
                "Dr. Emily Rodriguez",
                "Neurology",
                "Chicago, IL",
                4.9,
                "10 years",
                "Available Today",
                "4:00 PM",
                320,
                88,
            ),
            record(
                "Dr. David Williams",
                "Dermatology",
                "Miami, FL",
                4.7,
                "8 years",
                "Available Today",
                "11:30 AM",
                150,
                76,
            ),
            record(
                "Dr. Lisa Thompson",
                "General Medicine",
                "Seattle, WA",
                4.8,
                "14 years",
                "Available Tomorrow",
                "9:00 AM",
                85,
                134,
            ),
        ])
    }

    pub fn all(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    /// Specialty dropdown values, sentinel first.
    pub fn specialty_options() -> Vec<&'static str> {
        vec![
            "All Specialties",
            "Cardiology",
            "Dermatology",
            "General Medicine",
            "Neurology",
            "Pediatrics",
            "Orthopedics",
            "Psychiatry",
        ]
    }

    /// Location dropdown values, sentinel first.
    pub fn location_options() -> Vec<&'static str> {
        vec![
            "All Locations",
            "New York, NY",
            "Los Angeles, CA",
            "Chicago, IL",
            "Miami, FL",
            "Seattle, WA",
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    specialty: &str,
    location: &str,
    rating: f32,
    experience: &str,
    availability: &str,
    next_slot: &str,
    consultation_fee: u32,
    reviews: u32,
) -> DoctorRecord {
    DoctorRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        location: location.to_string(),
        rating,
        experience: experience.to_string(),
        availability: availability.to_string(),
        next_slot: next_slot.to_string(),
        consultation_fee,
        reviews,
    }
}
