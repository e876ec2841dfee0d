//! "Assign top trainer" convenience helper.
//!
//! Used by the booking flow to suggest one trainer for a student: from an
//! already-filtered list, keep the available trainers, optionally restrict
//! to those teaching the student's preferred language, and pick the best
//! rated one. Shares the engine's coercion semantics via the `effective_*`
//! methods.

use trainer_data::TrainerRecord;

/// Pick the best available trainer, or `None` if nobody qualifies.
///
/// ## Algorithm
/// 1. Keep only `is_available` records
/// 2. If a preferred language is supplied (non-empty), keep only records
///    whose language facets contain it (case-insensitive equality)
/// 3. Return the record with the highest effective rating; ties go to the
///    first encountered
pub fn assign_top_trainer<'a>(
    trainers: &'a [TrainerRecord],
    preferred_language: Option<&str>,
) -> Option<&'a TrainerRecord> {
    let preferred = preferred_language
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_lowercase);

    let mut best: Option<&TrainerRecord> = None;
    for trainer in trainers.iter().filter(|t| t.is_available) {
        if let Some(lang) = &preferred {
            let teaches = trainer
                .language_facets()
                .any(|facet| facet.to_lowercase() == *lang);
            if !teaches {
                continue;
            }
        }

        // Strict comparison keeps the first of equally-rated trainers.
        match best {
            Some(current) if trainer.effective_rating() <= current.effective_rating() => {}
            _ => best = Some(trainer),
        }
    }

    best
}
