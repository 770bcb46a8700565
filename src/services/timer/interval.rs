use chrono::{DateTime, Duration, Utc};

/// Owned handle to a fixed-cadence periodic timer.
///
/// The timer does not run on its own thread: the owner polls it from the
/// UI loop with the current instant and learns how many periods have
/// elapsed. Ticks land on `start + k * period` regardless of how late the
/// poll happens. If the wall clock is set back behind the last tick, the
/// schedule restarts from the new instant. Once stopped (explicitly or by dropping the handle) it
/// never reports another tick.
#[derive(Debug)]
pub struct IntervalTimer {
    label: &'static str,
    period: Duration,
    next_due: DateTime<Utc>,
    active: bool,
}

impl IntervalTimer {
    /// Start a timer whose first tick is due one `period` after `now`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not strictly positive.
    pub fn start(label: &'static str, period: Duration, now: DateTime<Utc>) -> Self {
        assert!(
            period > Duration::zero(),
            "timer period must be positive, got {period}"
        );
        log::debug!("{label} timer started with period {}ms", period.num_milliseconds());
        Self {
            label,
            period,
            next_due: now + period,
            active: true,
        }
    }

    /// Number of ticks that fell due since the previous poll.
    ///
    /// A poll that lands before the last tick means the wall clock moved
    /// backwards. That counts as one tick and the next is due one period later.
    pub fn poll(&mut self, now: DateTime<Utc>) -> u32 {
        if !self.active {
            return 0;
        }
        if now + self.period < self.next_due {
            log::warn!(
                "{} timer saw the clock move back by {}ms; rescheduling",
                self.label,
                self.next_due
                    .signed_duration_since(now + self.period)
                    .num_milliseconds()
            );
            self.next_due = now + self.period;
            return 1;
        }
        if now < self.next_due {
            return 0;
        }

        let period_ms = self.period.num_milliseconds();
        let overdue_ms = now.signed_duration_since(self.next_due).num_milliseconds();
        let fired = overdue_ms / period_ms + 1;
        self.next_due = self.next_due + Duration::milliseconds(period_ms * fired);

        if fired > 1 {
            log::debug!("{} timer caught up {} missed ticks", self.label, fired - 1);
        }
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    /// Cancel the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            log::debug!("{} timer stopped", self.label);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Instant of the next tick, or `None` once stopped.
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.active.then_some(self.next_due)
    }

    /// How long the UI may sleep before the next tick is due.
    pub fn time_until_due(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.next_due().map(|due| {
            due.signed_duration_since(now)
                .to_std()
                .unwrap_or(std::time::Duration::ZERO)
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
