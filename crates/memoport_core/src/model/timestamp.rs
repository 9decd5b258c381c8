//! Timestamp conversion for note records.
//!
//! # Invariants
//! - Output is always `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
//! - Years outside `0000..=9999` are rejected so the width stays fixed.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

const MILLIS_PER_SECOND: i64 = 1000;

/// Formats an instant as ISO-8601 with exactly three fractional digits.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Rebuilds an instant from epoch milliseconds.
///
/// With `keep_millis == false` the value is floor-divided to whole seconds
/// first, so the emitted millisecond field is always `000`.
///
/// Returns `None` when the value is outside the representable range.
pub fn instant_from_epoch_millis(millis: i64, keep_millis: bool) -> Option<DateTime<Utc>> {
    let seconds = millis.div_euclid(MILLIS_PER_SECOND);
    let nanos = if keep_millis {
        // rem_euclid keeps the remainder non-negative for pre-epoch values
        (millis.rem_euclid(MILLIS_PER_SECOND) * 1_000_000) as u32
    } else {
        0
    };
    DateTime::<Utc>::from_timestamp(seconds, nanos).filter(|instant| (0..=9999).contains(&instant.year()))
}

/// Parses a decimal epoch-millisecond string such as `1642343811283`.
pub fn parse_epoch_millis(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, instant_from_epoch_millis, parse_epoch_millis};
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_pads_milliseconds_to_three_digits() {
        let instant = Utc.with_ymd_and_hms(2022, 1, 16, 14, 36, 51).unwrap()
            + chrono::Duration::milliseconds(7);
        assert_eq!(format_timestamp(instant), "2022-01-16T14:36:51.007Z");
    }

    #[test]
    fn millis_are_truncated_by_default() {
        let instant = instant_from_epoch_millis(1_642_343_811_283, false).unwrap();
        assert_eq!(format_timestamp(instant), "2022-01-16T14:36:51.000Z");
    }

    #[test]
    fn millis_can_be_carried_through() {
        let instant = instant_from_epoch_millis(1_642_343_811_283, true).unwrap();
        assert_eq!(format_timestamp(instant), "2022-01-16T14:36:51.283Z");
    }

    #[test]
    fn pre_epoch_values_floor_to_the_earlier_second() {
        let instant = instant_from_epoch_millis(-1, false).unwrap();
        assert_eq!(format_timestamp(instant), "1969-12-31T23:59:59.000Z");
        let kept = instant_from_epoch_millis(-1, true).unwrap();
        assert_eq!(format_timestamp(kept), "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(instant_from_epoch_millis(i64::MAX, false).is_none());
        assert!(instant_from_epoch_millis(300_000_000_000_000, false).is_none());
    }

    #[test]
    fn parse_accepts_decimal_and_rejects_garbage() {
        assert_eq!(parse_epoch_millis(" 1642343811283 "), Some(1_642_343_811_283));
        assert_eq!(parse_epoch_millis("yesterday"), None);
        assert_eq!(parse_epoch_millis(""), None);
    }
}
