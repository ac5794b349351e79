use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use doctor_cell::models::{DoctorError, DoctorRecord, SearchFilters, SearchState};
use doctor_cell::services::directory::DoctorDirectory;
use doctor_cell::services::search::{DirectoryBackend, DoctorSearchService, SearchBackend};

fn sample_service() -> (Arc<DoctorDirectory>, DoctorSearchService) {
    let directory = Arc::new(DoctorDirectory::sample());
    let service = DoctorSearchService::with_directory(Arc::clone(&directory));
    (directory, service)
}

#[tokio::test(start_paused = true)]
async fn empty_filters_return_full_directory_in_order() {
    let (directory, service) = sample_service();

    let results = service.search(&SearchFilters::default()).await.unwrap();

    assert_eq!(results.len(), directory.all().len());
    for (result, expected) in results.iter().zip(directory.all()) {
        assert_eq!(result.id, expected.id);
    }
}

#[tokio::test(start_paused = true)]
async fn cardiology_filter_matches_exactly_one_doctor() {
    let (_, service) = sample_service();

    let filters = SearchFilters {
        specialty: Some("Cardiology".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Dr. Sarah Johnson");
}

#[tokio::test(start_paused = true)]
async fn name_filter_is_case_insensitive_substring() {
    let (_, service) = sample_service();

    let filters = SearchFilters {
        name: Some("CHEN".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Dr. Michael Chen");
}

#[tokio::test(start_paused = true)]
async fn location_filter_matches_partial_value() {
    let (_, service) = sample_service();

    let filters = SearchFilters {
        location: Some("New York".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].location, "New York, NY");
}

#[tokio::test(start_paused = true)]
async fn sentinel_dropdown_values_impose_no_constraint() {
    let (directory, service) = sample_service();

    let filters = SearchFilters {
        specialty: Some("All Specialties".to_string()),
        location: Some("All Locations".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert_eq!(results.len(), directory.all().len());
}

#[tokio::test(start_paused = true)]
async fn availability_tag_filters_by_substring() {
    let (_, service) = sample_service();

    let filters = SearchFilters {
        availability: Some("today".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|d| d.availability == "Available Today"));
}

#[tokio::test(start_paused = true)]
async fn zero_results_is_a_valid_outcome() {
    let (_, service) = sample_service();

    let filters = SearchFilters {
        specialty: Some("Oncology".to_string()),
        ..SearchFilters::default()
    };
    let results = service.search(&filters).await.unwrap();

    assert!(results.is_empty());
    assert_eq!(service.state(), SearchState::Complete { found: 0 });
}

#[tokio::test(start_paused = true)]
async fn results_agree_with_filter_predicate() {
    let (directory, service) = sample_service();

    let combos = vec![
        SearchFilters::default(),
        SearchFilters {
            specialty: Some("Cardiology".to_string()),
            ..SearchFilters::default()
        },
        SearchFilters {
            name: Some("dr".to_string()),
            availability: Some("tomorrow".to_string()),
            ..SearchFilters::default()
        },
        SearchFilters {
            specialty: Some("Pediatrics".to_string()),
            location: Some("Chicago".to_string()),
            ..SearchFilters::default()
        },
        SearchFilters {
            name: Some("son".to_string()),
            location: Some("All Locations".to_string()),
            ..SearchFilters::default()
        },
    ];

    for filters in combos {
        let results = service.search(&filters).await.unwrap();

        for doctor in directory.all() {
            let included = results.iter().any(|r| r.id == doctor.id);
            assert_eq!(
                included,
                filters.matches(doctor),
                "{} vs {:?}",
                doctor.name,
                filters
            );
        }
    }
}

#[tokio::test(start_paused = true)]
async fn searching_state_is_visible_while_in_flight() {
    let directory = Arc::new(DoctorDirectory::sample());
    let service = Arc::new(DoctorSearchService::with_directory(directory));

    assert_eq!(service.state(), SearchState::Idle);

    let mut rx = service.watch_state();
    let in_flight = Arc::clone(&service);
    let handle = tokio::spawn(async move {
        in_flight.search(&SearchFilters::default()).await
    });

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), SearchState::Searching);

    let results = handle.await.unwrap().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(service.state(), SearchState::Complete { found: 5 });
}

struct FailingBackend;

#[async_trait]
impl SearchBackend for FailingBackend {
    async fn fetch(&self, _filters: &SearchFilters) -> anyhow::Result<Vec<DoctorRecord>> {
        Err(anyhow!("directory unreachable"))
    }
}

#[tokio::test]
async fn backend_failure_surfaces_error_and_resets_state() {
    let service = DoctorSearchService::new(Arc::new(FailingBackend));

    let err = service.search(&SearchFilters::default()).await.unwrap_err();

    assert!(matches!(err, DoctorError::SearchFailed(_)));
    assert_eq!(service.state(), SearchState::Idle);
}

#[tokio::test]
async fn zero_latency_backend_skips_the_simulated_delay() {
    let directory = Arc::new(DoctorDirectory::sample());
    let backend = DirectoryBackend::with_latency(
        Arc::clone(&directory),
        std::time::Duration::ZERO,
    );
    let service = DoctorSearchService::new(Arc::new(backend));

    let results = service.search(&SearchFilters::default()).await.unwrap();
    assert_eq!(results.len(), directory.all().len());
}
