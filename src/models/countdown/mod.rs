use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time until the festival opens, split into display units.
///
/// Always derived from `target - now`; never edited field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub done: bool,
}

impl CountdownState {
    /// The state once the target has been reached.
    pub const fn finished() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            done: true,
        }
    }

    /// Whole seconds represented by the four fields.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds)
    }

    /// `(value, label)` pairs in display order, each value zero-padded to two digits.
    pub fn display_units(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "Days"),
            (format!("{:02}", self.hours), "Hrs"),
            (format!("{:02}", self.minutes), "Min"),
            (format!("{:02}", self.seconds), "Sec"),
        ]
    }
}

/// Compute the remaining time between `now` and `target`.
///
/// Total over every pair of instants: a target in the past yields
/// [`CountdownState::finished`].
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    let diff = target
        .signed_duration_since(now)
        .num_milliseconds()
        .max(0);

    if diff == 0 {
        return CountdownState::finished();
    }

    CountdownState {
        days: (diff / MS_PER_DAY) as u64,
        hours: ((diff / MS_PER_HOUR) % 24) as u8,
        minutes: ((diff / MS_PER_MINUTE) % 60) as u8,
        seconds: ((diff / MS_PER_SECOND) % 60) as u8,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 3, 30, 0).unwrap()
    }

    #[test]
    fn test_one_of_each_unit() {
        let now = target() - Duration::milliseconds(90_061_000);
        assert_eq!(
            compute_remaining(target(), now),
            CountdownState {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
                done: false,
            }
        );
    }

    #[test]
    fn test_past_target_is_done() {
        let now = target() + Duration::milliseconds(5_000);
        assert_eq!(compute_remaining(target(), now), CountdownState::finished());
    }

    #[test]
    fn test_exact_target_is_done() {
        assert_eq!(compute_remaining(target(), target()), CountdownState::finished());
    }

    #[test_case(999, 0, 0, 0, 0 ; "sub second rounds down but is not done")]
    #[test_case(59_999, 0, 0, 0, 59 ; "just under a minute")]
    #[test_case(3_600_000, 0, 1, 0, 0 ; "one hour")]
    #[test_case(86_399_999, 0, 23, 59, 59 ; "just under a day")]
    #[test_case(864_000_000, 10, 0, 0, 0 ; "ten days")]
    fn test_decomposes_milliseconds(ms: i64, days: u64, hours: u8, minutes: u8, seconds: u8) {
        let state = compute_remaining(target(), target() - Duration::milliseconds(ms));
        assert_eq!(
            (state.days, state.hours, state.minutes, state.seconds, state.done),
            (days, hours, minutes, seconds, false)
        );
    }

    #[test]
    fn test_display_units_are_zero_padded() {
        let state = CountdownState {
            days: 123,
            hours: 4,
            minutes: 0,
            seconds: 9,
            done: false,
        };
        let rendered: Vec<(String, &str)> = state.display_units().into_iter().collect();
        assert_eq!(
            rendered,
            vec![
                ("123".to_string(), "Days"),
                ("04".to_string(), "Hrs"),
                ("00".to_string(), "Min"),
                ("09".to_string(), "Sec"),
            ]
        );
    }

    #[test]
    fn test_total_seconds_matches_fields() {
        let state = compute_remaining(target(), target() - Duration::milliseconds(90_061_000));
        assert_eq!(state.total_seconds(), 90_061);
    }
}
