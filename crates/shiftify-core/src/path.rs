//! Dotted-path resolution over nested JSON records
//!
//! A path such as `"user.address.city"` is split on `.` and walked from the
//! root. Objects are entered by key, arrays by a non-negative integer segment.
//! Anything else - a missing key, an out-of-range index, a scalar in the
//! middle of the path, an empty segment - resolves to absence (`None`).
//!
//! Absence is distinct from an explicitly stored `null`: `null`, `0`, `false`
//! and empty containers are all present values.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Split a dotted path into its segments
///
/// Returns `None` for the empty path or when any segment is empty.
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Resolve `path` against `record`, returning `None` when the value is absent
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = split_path(path)?;
    segments
        .into_iter()
        .try_fold(record, |current, segment| step(current, segment))
}

/// Check whether `path` resolves to a present value
pub fn exists(record: &Value, path: &str) -> bool {
    resolve(record, path).is_some()
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => array_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Canonical decimal index only: no sign, no leading zeros
fn array_index(segment: &str) -> Option<usize> {
    let canonical = segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}
