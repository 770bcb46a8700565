// Date utility functions

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolve a wall-clock time in `tz` to a UTC instant.
///
/// Returns `None` when the local time is skipped or repeated by a DST change.
pub fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_kolkata_is_five_thirty_ahead() {
        let instant = resolve_local(naive(2025, 3, 15, 9, 0), chrono_tz::Asia::Kolkata).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 3, 15, 3, 30, 0).unwrap());
    }

    #[test]
    fn test_skipped_hour_is_none() {
        // Clocks jump from 02:00 to 03:00 in New York on this date
        assert_eq!(
            resolve_local(naive(2025, 3, 9, 2, 30), chrono_tz::America::New_York),
            None
        );
    }
}
