use crate::models::countdown::{compute_remaining, CountdownState};
use crate::services::timer::IntervalTimer;
use chrono::{DateTime, Duration, Utc};

/// Recompute cadence for the countdown display.
pub const COUNTDOWN_TICK_MS: i64 = 1_000;

/// Countdown component: a fixed target plus the state last published to the UI.
///
/// `mount` computes the first state immediately and starts the one-second
/// timer; `unmount` (or dropping the component) cancels it.
#[derive(Debug)]
pub struct CountdownTimer {
    target: DateTime<Utc>,
    state: CountdownState,
    timer: Option<IntervalTimer>,
}

impl CountdownTimer {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            state: CountdownState::default(),
            timer: None,
        }
    }

    pub fn mount(&mut self, now: DateTime<Utc>) {
        if self.timer.is_some() {
            log::warn!("Countdown already mounted; ignoring second mount");
            return;
        }

        self.state = compute_remaining(self.target, now);
        self.timer = Some(IntervalTimer::start(
            "countdown",
            Duration::milliseconds(COUNTDOWN_TICK_MS),
            now,
        ));
        log::info!(
            "Countdown mounted: target {}, done={}",
            self.target,
            self.state.done
        );
    }

    /// Recompute if a tick fell due. Returns true when the published state changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.poll(now) == 0 {
            return false;
        }

        let next = compute_remaining(self.target, now);
        if next.done && !self.state.done {
            log::info!("Countdown reached its target");
        }
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            log::info!("Countdown unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn time_until_next_tick(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.timer.as_ref().and_then(|timer| timer.time_until_due(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::timer::{Clock, ManualClock};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 13, 3, 30, 0).unwrap()
    }

    #[test]
    fn test_mount_publishes_initial_state_synchronously() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::days(2));
        assert!(!countdown.is_mounted());

        countdown.mount(clock.now());
        assert!(countdown.is_mounted());
        assert_eq!(countdown.state().days, 2);
        assert!(!countdown.state().done);
    }

    #[test]
    fn test_recomputes_once_per_second() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::seconds(10));
        countdown.mount(clock.now());
        assert_eq!(countdown.state().seconds, 10);

        clock.advance_ms(400);
        assert!(!countdown.tick(clock.now()));
        assert_eq!(countdown.state().seconds, 10);

        clock.advance_ms(600);
        assert!(countdown.tick(clock.now()));
        assert_eq!(countdown.state().seconds, 9);
    }

    #[test]
    fn test_holds_at_zero_after_target() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::seconds(2));
        countdown.mount(clock.now());

        for _ in 0..5 {
            clock.advance_ms(1_000);
            countdown.tick(clock.now());
        }
        assert_eq!(countdown.state(), CountdownState::finished());

        clock.advance_ms(1_000);
        assert!(!countdown.tick(clock.now()));
        assert_eq!(countdown.state(), CountdownState::finished());
    }

    #[test]
    fn test_past_target_is_done_at_mount() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() - Duration::days(30));
        countdown.mount(clock.now());
        assert_eq!(countdown.state(), CountdownState::finished());
    }

    #[test]
    fn test_no_updates_after_unmount() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::hours(1));
        countdown.mount(clock.now());
        let frozen = countdown.state();

        countdown.unmount();
        assert!(!countdown.is_mounted());
        for _ in 0..10 {
            clock.advance_ms(1_000);
            assert!(!countdown.tick(clock.now()));
        }
        assert_eq!(countdown.state(), frozen);
        assert_eq!(countdown.time_until_next_tick(clock.now()), None);
    }

    #[test]
    fn test_clock_set_back_keeps_one_second_cadence() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::days(1));
        countdown.mount(clock.now());

        clock.advance(Duration::hours(-1));
        let mut updates = 0;
        for _ in 0..5 {
            clock.advance_ms(1_000);
            if countdown.tick(clock.now()) {
                updates += 1;
            }
        }
        assert_eq!(updates, 5);
        assert_eq!(countdown.state().hours, 0);
        assert_eq!(countdown.state().minutes, 59);
        assert_eq!(countdown.state().seconds, 55);
        assert_eq!(countdown.state().days, 1);
    }

    #[test]
    fn test_second_mount_keeps_original_schedule() {
        let clock = ManualClock::new(start());
        let mut countdown = CountdownTimer::new(start() + Duration::minutes(5));
        countdown.mount(clock.now());
        clock.advance_ms(700);
        countdown.mount(clock.now());
        assert_eq!(
            countdown.time_until_next_tick(clock.now()),
            Some(std::time::Duration::from_millis(300))
        );
    }
}
