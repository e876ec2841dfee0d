//! Benchmarks for the discovery hot path.
//!
//! Run with: cargo bench --package discovery
//!
//! The engine reruns on every keystroke in the host page, so the number
//! that matters is a full filter-and-sort pass over a catalog-sized list.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use discovery::{FilterCriteria, SortKey, filter_and_sort};
use trainer_data::{TrainerRecord, unique_nationalities};

const LANGUAGES: &[&str] = &["English", "Spanish", "French", "German", "Hindi", "Mandarin"];
const NATIONALITIES: &[&str] = &["US", "ES", "FR", "DE", "IN", "CN", "BR", "GB"];

/// Deterministic synthetic catalog, sized like a busy marketplace page.
fn synthetic_trainers(count: usize) -> Vec<TrainerRecord> {
    (0..count)
        .map(|i| TrainerRecord {
            id: format!("trainer-{i}"),
            name: Some(format!("Trainer {i}")),
            bio: Some(format!("Tutor number {i}, patient and structured")),
            languages: vec![LANGUAGES[i % LANGUAGES.len()].to_string()],
            hourly_rate: Some(10.0 + (i % 70) as f64),
            years_experience: Some((i % 15) as f64),
            specializations: vec![if i % 3 == 0 {
                "Business".to_string()
            } else {
                "Conversation".to_string()
            }],
            nationality: Some(NATIONALITIES[i % NATIONALITIES.len()].to_string()),
            rating: Some(3.0 + ((i % 20) as f64) / 10.0),
            review_count: (i % 100) as u32,
            is_available: i % 2 == 0,
            ..TrainerRecord::default()
        })
        .collect()
}

fn bench_full_criteria(c: &mut Criterion) {
    let trainers = synthetic_trainers(500);
    let criteria = FilterCriteria {
        search_text: "tutor".to_string(),
        language: "english".to_string(),
        min_rate: "10".to_string(),
        max_rate: "60".to_string(),
        min_experience: "2".to_string(),
        min_rating: "3.5".to_string(),
        sort: SortKey::PriceLow,
        ..FilterCriteria::default()
    };

    c.bench_function("filter_and_sort_full_criteria", |b| {
        b.iter(|| {
            let result = filter_and_sort(black_box(&trainers), black_box(&criteria));
            black_box(result)
        })
    });
}

fn bench_empty_criteria(c: &mut Criterion) {
    let trainers = synthetic_trainers(500);
    let criteria = FilterCriteria::default();

    c.bench_function("filter_and_sort_empty_criteria", |b| {
        b.iter(|| {
            let result = filter_and_sort(black_box(&trainers), black_box(&criteria));
            black_box(result)
        })
    });
}

fn bench_facet_vocabulary(c: &mut Criterion) {
    let trainers = synthetic_trainers(500);

    c.bench_function("unique_nationalities", |b| {
        b.iter(|| {
            let codes = unique_nationalities(black_box(&trainers));
            black_box(codes)
        })
    });
}

criterion_group!(
    benches,
    bench_full_criteria,
    bench_empty_criteria,
    bench_facet_vocabulary
);
criterion_main!(benches);
