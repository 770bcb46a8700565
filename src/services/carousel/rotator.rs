use crate::models::carousel::{CarouselError, CarouselState, ImageRef};
use crate::services::timer::IntervalTimer;
use chrono::{DateTime, Duration, Utc};

/// Auto-advance cadence for the gallery.
pub const CAROUSEL_ADVANCE_MS: i64 = 3_500;

/// Gallery component: carousel state plus the timer that advances it.
///
/// Every mount starts from the first image. Manual selection never touches the timer, so the next automatic advance
/// still happens on the original schedule and continues from the chosen
/// image.
#[derive(Debug)]
pub struct CarouselRotator {
    state: CarouselState,
    timer: Option<IntervalTimer>,
}

impl CarouselRotator {
    pub fn new(images: Vec<ImageRef>) -> Result<Self, CarouselError> {
        Ok(Self {
            state: CarouselState::new(images)?,
            timer: None,
        })
    }

    pub fn mount(&mut self, now: DateTime<Utc>) {
        if self.timer.is_some() {
            log::warn!("Carousel already mounted; ignoring second mount");
            return;
        }

        self.state.select(0);
        self.timer = Some(IntervalTimer::start(
            "carousel",
            Duration::milliseconds(CAROUSEL_ADVANCE_MS),
            now,
        ));
        log::info!("Carousel mounted with {} images", self.state.len());
    }

    /// Advance once per elapsed period. Returns true when the active image changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        let fired = timer.poll(now);
        if fired == 0 {
            return false;
        }

        let before = self.state.current_index();
        let steps = fired as usize % self.state.len();
        for _ in 0..steps {
            self.state.advance();
        }
        log::debug!(
            "Carousel advanced {} -> {}",
            before,
            self.state.current_index()
        );
        before != self.state.current_index()
    }

    /// Show image `index` now. See [`CarouselState::select`] for the range contract.
    pub fn select(&mut self, index: usize) {
        self.state.select(index);
    }

    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            log::info!("Carousel unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn time_until_next_tick(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.timer.as_ref().and_then(|timer| timer.time_until_due(now))
    }
}
