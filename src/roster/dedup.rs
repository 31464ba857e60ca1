//! Stable deduplication on `employee_id`.

use super::RawEmployee;
use std::collections::HashSet;

/// Keep the first record seen for each `employee_id`, preserving input order.
///
/// No merging: a later, more complete duplicate is still discarded. Records
/// without an id share a single key, so only the first of them survives.
pub fn dedup_by_employee_id(records: Vec<RawEmployee>) -> Vec<RawEmployee> {
    let mut seen: HashSet<Option<String>> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(r.employee_id.clone()))
        .collect()
}
