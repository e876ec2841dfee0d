//! Integration tests for the discovery engine.
//!
//! These exercise the full `filter_and_sort` path — criteria parsing,
//! pipeline construction, every facet filter, and sorting — over a
//! realistic mixed-quality trainer list, including the contract properties
//! the rendering layer relies on (determinism, subset membership,
//! monotonic narrowing).

use discovery::{FilterCriteria, SortKey, assign_top_trainer, filter_and_sort};
use trainer_data::{Proficiency, TaughtLanguage, TrainerRecord, unique_nationalities};

fn trainer(id: &str) -> TrainerRecord {
    TrainerRecord {
        id: id.to_string(),
        ..TrainerRecord::default()
    }
}

/// A small catalog with deliberate gaps: missing rates, missing ratings,
/// languages split across both facet sources.
fn sample_trainers() -> Vec<TrainerRecord> {
    vec![
        TrainerRecord {
            name: Some("Ana".to_string()),
            bio: Some("Business English coach".to_string()),
            languages: vec!["English".to_string(), "Spanish".to_string()],
            hourly_rate: Some(20.0),
            years_experience: Some(3.0),
            specializations: vec!["Business English".to_string()],
            nationality: Some("ES".to_string()),
            rating: Some(4.8),
            review_count: 31,
            is_available: true,
            ..trainer("ana")
        },
        TrainerRecord {
            name: Some("Leo".to_string()),
            bio: Some("Exam preparation specialist".to_string()),
            taught_languages: vec![TaughtLanguage {
                language: "English".to_string(),
                proficiency: Proficiency::Native,
                teaching_levels: vec!["Advanced".to_string()],
            }],
            hourly_rate: Some(50.0),
            years_experience: Some(1.0),
            specializations: vec!["IELTS".to_string()],
            nationality: Some("US".to_string()),
            rating: Some(4.2),
            review_count: 12,
            is_available: true,
            ..trainer("leo")
        },
        TrainerRecord {
            name: Some("Mia".to_string()),
            languages: vec!["French".to_string()],
            hourly_rate: Some(35.0),
            years_experience: Some(7.0),
            nationality: Some("FR".to_string()),
            rating: Some(4.9),
            review_count: 88,
            ..trainer("mia")
        },
        // No published rate, no reviews yet
        TrainerRecord {
            name: Some("Noor".to_string()),
            languages: vec!["English".to_string(), "Hindi".to_string()],
            years_experience: Some(2.0),
            nationality: Some("IN".to_string()),
            is_available: true,
            ..trainer("noor")
        },
        // Mostly-empty record; must be tolerated everywhere
        trainer("ghost"),
    ]
}

fn ids(trainers: &[TrainerRecord]) -> Vec<&str> {
    trainers.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_scenario_max_rate_bound() {
    let trainers = vec![
        TrainerRecord {
            name: Some("Ana".to_string()),
            hourly_rate: Some(20.0),
            years_experience: Some(3.0),
            rating: Some(4.8),
            ..trainer("ana")
        },
        TrainerRecord {
            name: Some("Leo".to_string()),
            hourly_rate: Some(50.0),
            years_experience: Some(1.0),
            rating: Some(4.2),
            ..trainer("leo")
        },
    ];

    let criteria = FilterCriteria {
        max_rate: "30".to_string(),
        ..FilterCriteria::default()
    };

    let result = filter_and_sort(&trainers, &criteria);
    assert_eq!(ids(&result), vec!["ana"]);
}

#[test]
fn test_scenario_price_high_ordering() {
    let trainers = vec![
        TrainerRecord {
            hourly_rate: Some(20.0),
            rating: Some(4.8),
            ..trainer("ana")
        },
        TrainerRecord {
            hourly_rate: Some(50.0),
            rating: Some(4.2),
            ..trainer("leo")
        },
    ];

    let criteria = FilterCriteria {
        sort: SortKey::PriceHigh,
        ..FilterCriteria::default()
    };

    let result = filter_and_sort(&trainers, &criteria);
    assert_eq!(ids(&result), vec!["leo", "ana"]);
}

#[test]
fn test_scenario_unique_nationalities() {
    let trainers = vec![
        TrainerRecord {
            nationality: Some("IN".to_string()),
            ..trainer("a")
        },
        TrainerRecord {
            nationality: Some("US".to_string()),
            ..trainer("b")
        },
        TrainerRecord {
            nationality: Some("IN".to_string()),
            ..trainer("c")
        },
    ];

    let codes = unique_nationalities(&trainers);
    assert_eq!(codes.len(), 2);
    assert!(codes.contains("IN") && codes.contains("US"));
}

#[test]
fn test_scenario_missing_rate_fails_min_bound() {
    let trainers = vec![TrainerRecord {
        name: Some("Noor".to_string()),
        ..trainer("noor")
    }];

    let criteria = FilterCriteria {
        min_rate: "10".to_string(),
        ..FilterCriteria::default()
    };

    // Missing rate coerces to 0, which fails `>= 10`
    assert!(filter_and_sort(&trainers, &criteria).is_empty());
}

#[test]
fn test_scenario_empty_records_never_error() {
    let criteria = FilterCriteria {
        search_text: "english".to_string(),
        language: "english".to_string(),
        min_rate: "10".to_string(),
        max_rate: "60".to_string(),
        min_experience: "1".to_string(),
        specialization: "exam".to_string(),
        min_rating: "4".to_string(),
        nationality: "US".to_string(),
        sort: SortKey::Experience,
    };

    assert!(filter_and_sort(&[], &criteria).is_empty());
}

#[test]
fn test_determinism() {
    let trainers = sample_trainers();
    let criteria = FilterCriteria {
        search_text: "english".to_string(),
        sort: SortKey::PriceLow,
        ..FilterCriteria::default()
    };

    let first = filter_and_sort(&trainers, &criteria);
    let second = filter_and_sort(&trainers, &criteria);
    assert_eq!(first, second);
}

#[test]
fn test_output_is_subset_of_input() {
    let trainers = sample_trainers();
    let criteria = FilterCriteria {
        language: "english".to_string(),
        min_rating: "4".to_string(),
        ..FilterCriteria::default()
    };

    let result = filter_and_sort(&trainers, &criteria);
    assert!(result.len() <= trainers.len());
    for record in &result {
        assert!(
            trainers.iter().any(|t| t.id == record.id),
            "result contains an id not present in the input"
        );
    }
}

#[test]
fn test_empty_criteria_identity() {
    let trainers = sample_trainers();

    let result = filter_and_sort(&trainers, &FilterCriteria::default());

    assert_eq!(result.len(), trainers.len());
    let mut result_ids = ids(&result);
    let mut input_ids = ids(&trainers);
    result_ids.sort_unstable();
    input_ids.sort_unstable();
    assert_eq!(result_ids, input_ids);
}

#[test]
fn test_monotonic_narrowing() {
    let trainers = sample_trainers();

    let mut criteria = FilterCriteria::default();
    let mut previous = filter_and_sort(&trainers, &criteria).len();

    // Add one filter field at a time; the result may only shrink.
    criteria.search_text = "english".to_string();
    let narrowed = filter_and_sort(&trainers, &criteria).len();
    assert!(narrowed <= previous);
    previous = narrowed;

    criteria.min_experience = "2".to_string();
    let narrowed = filter_and_sort(&trainers, &criteria).len();
    assert!(narrowed <= previous);
    previous = narrowed;

    criteria.nationality = "ES".to_string();
    let narrowed = filter_and_sort(&trainers, &criteria).len();
    assert!(narrowed <= previous);
}

#[test]
fn test_price_low_adjacent_pairs_are_ordered() {
    let trainers = sample_trainers();
    let criteria = FilterCriteria {
        sort: SortKey::PriceLow,
        ..FilterCriteria::default()
    };

    let result = filter_and_sort(&trainers, &criteria);
    for pair in result.windows(2) {
        assert!(
            pair[0].effective_rate() <= pair[1].effective_rate(),
            "adjacent pair out of order under price_low"
        );
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let trainers = sample_trainers();

    let upper = filter_and_sort(
        &trainers,
        &FilterCriteria {
            search_text: "ENGLISH".to_string(),
            ..FilterCriteria::default()
        },
    );
    let lower = filter_and_sort(
        &trainers,
        &FilterCriteria {
            search_text: "english".to_string(),
            ..FilterCriteria::default()
        },
    );

    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn test_unparseable_bounds_are_ignored() {
    let trainers = sample_trainers();

    let criteria = FilterCriteria {
        min_rate: "cheap".to_string(),
        max_rate: "".to_string(),
        min_rating: "lots".to_string(),
        ..FilterCriteria::default()
    };

    // Garbage bounds mean "no bound": full membership, default sort.
    let result = filter_and_sort(&trainers, &criteria);
    assert_eq!(result.len(), trainers.len());
}

#[test]
fn test_top_match_over_filtered_results() {
    let trainers = sample_trainers();

    // Filter to English speakers first, as the booking flow does.
    let criteria = FilterCriteria {
        language: "english".to_string(),
        ..FilterCriteria::default()
    };
    let filtered = filter_and_sort(&trainers, &criteria);

    // Ana (4.8) outranks Leo (4.2); Noor is available but unrated; Mia is
    // filtered out and ghost is unavailable.
    let top = assign_top_trainer(&filtered, Some("English")).unwrap();
    assert_eq!(top.id, "ana");
}
