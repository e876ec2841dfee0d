//! Parser for the trainers endpoint payload.
//!
//! The list-trainers API is backed by a document store and a JavaScript
//! backend, so the payload is loose: fields live either at the top level or
//! under a nested `profile`/`stats` object, numbers sometimes arrive as
//! strings, and whole entries can be `null`. This module turns that shape
//! into clean [`TrainerRecord`]s:
//!
//! - one small helper per coerced field, no inline fallbacks
//! - a bad entry is dropped, it never fails the whole load
//! - the effective rating is resolved here, once (stats rating first,
//!   then the profile average), so no downstream code repeats the fallback

use crate::error::{Result, TrainerDataError};
use crate::types::{Proficiency, TaughtLanguage, TrainerRecord};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a trainers payload into records.
///
/// Accepts either a bare JSON array or a `{ "trainers": [...] }` envelope
/// (the endpoint has shipped both shapes). Entries that are `null`, not an
/// object, or missing a usable id are skipped.
///
/// # Arguments
/// * `json` - The raw response body
/// * `source_name` - Label used in error messages (file name, URL, ...)
pub fn parse_trainers(json: &str, source_name: &str) -> Result<Vec<TrainerRecord>> {
    let root: Value = serde_json::from_str(json).map_err(|e| TrainerDataError::InvalidJson {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;

    let entries = match &root {
        Value::Array(entries) => entries,
        Value::Object(map) => map
            .get("trainers")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                TrainerDataError::UnexpectedShape(format!(
                    "{source_name}: expected an array or a 'trainers' envelope"
                ))
            })?,
        other => {
            return Err(TrainerDataError::UnexpectedShape(format!(
                "{source_name}: expected an array, got {other}"
            )));
        }
    };

    Ok(entries.iter().filter_map(normalize_trainer).collect())
}

/// Read and parse a trainers JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<TrainerRecord>> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TrainerDataError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => TrainerDataError::IoError(e),
    })?;

    parse_trainers(&json, &path.display().to_string())
}

/// Normalize one wire entry into a record, or `None` if it is unusable.
fn normalize_trainer(entry: &Value) -> Option<TrainerRecord> {
    let top = entry.as_object()?;
    let profile = top.get("profile").and_then(Value::as_object);
    let stats = top.get("stats").and_then(Value::as_object);

    // A field may live at the top level or under profile; top level wins.
    let field = |key: &str| -> Option<&Value> {
        top.get(key)
            .filter(|v| !v.is_null())
            .or_else(|| profile.and_then(|p| p.get(key)))
    };

    // Without an id the record can't be rendered or deduplicated.
    let id = top
        .get("_id")
        .or_else(|| top.get("id"))
        .and_then(clean_string)?;

    Some(TrainerRecord {
        id,
        name: field("name").and_then(clean_string),
        bio: field("bio").and_then(clean_string),
        languages: field("languages").map(string_list).unwrap_or_default(),
        taught_languages: field("taughtLanguages")
            .map(taught_language_list)
            .unwrap_or_default(),
        hourly_rate: field("hourlyRate")
            .and_then(lenient_number)
            .filter(|r| *r >= 0.0),
        years_experience: field("yearsExperience")
            .and_then(lenient_number)
            .filter(|y| *y >= 0.0),
        specializations: field("specializations")
            .map(string_list)
            .unwrap_or_default(),
        nationality: field("nationality")
            .and_then(clean_string)
            .map(|code| code.to_uppercase()),
        rating: resolve_rating(stats, profile),
        review_count: resolve_review_count(stats, profile),
        is_available: field("isAvailable").and_then(Value::as_bool).unwrap_or(false),
    })
}

/// Resolve the effective rating: stats rating first, then profile average.
///
/// The backend stores a rating in both places and they drift; the stats
/// value is the one recomputed on every review, so it takes precedence.
/// Out-of-range values are clamped into [0, 5].
fn resolve_rating(
    stats: Option<&serde_json::Map<String, Value>>,
    profile: Option<&serde_json::Map<String, Value>>,
) -> Option<f64> {
    stats
        .and_then(|s| s.get("rating"))
        .and_then(lenient_number)
        .or_else(|| {
            profile
                .and_then(|p| p.get("averageRating"))
                .and_then(lenient_number)
        })
        .map(|r| r.clamp(0.0, 5.0))
}

fn resolve_review_count(
    stats: Option<&serde_json::Map<String, Value>>,
    profile: Option<&serde_json::Map<String, Value>>,
) -> u32 {
    stats
        .and_then(|s| s.get("reviewCount"))
        .or_else(|| profile.and_then(|p| p.get("reviewCount")))
        .and_then(lenient_number)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
        .unwrap_or(0)
}

/// Accept a JSON number or a numeric string ("30"), reject everything else.
fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Non-empty trimmed string, or `None`.
fn clean_string(value: &Value) -> Option<String> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// String array with nulls and non-strings dropped.
fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|entries| entries.iter().filter_map(clean_string).collect())
        .unwrap_or_default()
}

/// Taught-language array; entries without a language are dropped.
fn taught_language_list(value: &Value) -> Vec<TaughtLanguage> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            let language = obj.get("language").and_then(clean_string)?;
            Some(TaughtLanguage {
                language,
                proficiency: obj
                    .get("proficiency")
                    .and_then(Value::as_str)
                    .map(parse_proficiency)
                    .unwrap_or(Proficiency::Fluent),
                teaching_levels: obj
                    .get("teachingLevels")
                    .map(string_list)
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_proficiency(s: &str) -> Proficiency {
    if s.trim().eq_ignore_ascii_case("native") {
        Proficiency::Native
    } else {
        Proficiency::Fluent
    }
}
