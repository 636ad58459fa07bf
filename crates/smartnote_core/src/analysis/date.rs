//! Note date estimation.

use chrono::{DateTime, Datelike, Utc};
use log::warn;

/// Output format for `Note::date`.
pub const NOTE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Years that render as exactly four digits under `NOTE_DATE_FORMAT`.
const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Returns the UTC calendar date of `last_modified_ms`, or of `now` when the
/// timestamp is missing, unrepresentable, or falls outside years 0000-9999.
pub fn estimate_date(last_modified_ms: Option<i64>, now: DateTime<Utc>) -> String {
    let at = match last_modified_ms {
        Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
            .filter(|at| FOUR_DIGIT_YEARS.contains(&at.year()))
            .unwrap_or_else(|| {
                warn!(
                    "event=date_estimate module=analysis status=fallback reason=timestamp_out_of_range millis={}",
                    millis
                );
                now
            }),
        None => now,
    };
    at.format(NOTE_DATE_FORMAT).to_string()
}
