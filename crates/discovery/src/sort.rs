//! Sort comparators for the discovery result set.
//!
//! All comparators run over coerced values (`effective_*` methods), so
//! records with missing numerics order as zero rather than panicking or
//! clustering unpredictably. `slice::sort_by` is stable: ties keep their
//! original relative order, which is part of the engine's contract.

use crate::criteria::SortKey;
use trainer_data::TrainerRecord;

/// Reorder `trainers` in place according to `key`.
pub fn sort_trainers(trainers: &mut [TrainerRecord], key: SortKey) {
    match key {
        SortKey::Rating => trainers.sort_by(|a, b| {
            b.effective_rating().total_cmp(&a.effective_rating())
        }),
        SortKey::PriceLow => {
            trainers.sort_by(|a, b| a.effective_rate().total_cmp(&b.effective_rate()))
        }
        SortKey::PriceHigh => {
            trainers.sort_by(|a, b| b.effective_rate().total_cmp(&a.effective_rate()))
        }
        SortKey::Experience => trainers.sort_by(|a, b| {
            b.effective_experience().total_cmp(&a.effective_experience())
        }),
    }
}
