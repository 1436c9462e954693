//! Month index helpers.

use chrono::NaiveDate;

/// Every zero-based month index, January first.
pub const MONTH_INDICES: [u32; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Full English month name for a zero-based month index.
///
/// Built by formatting a reference date in that month, so the names come
/// from chrono's `%B` rather than a hand-kept table. Out-of-range indices
/// yield an empty string.
pub fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(1970, month + 1, 1)
        .map(|date| date.format("%B").to_string())
        .unwrap_or_default()
}
