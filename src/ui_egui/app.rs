mod lifecycle;
mod navigation;
mod page;
mod state;
mod toast;

pub use self::state::PageAction;

use self::navigation::ScrollNavigator;
use self::state::AppState;
use self::toast::ToastManager;
use crate::models::countdown::CountdownState;
use crate::models::festival::{FestivalContent, Section};
use crate::models::registration::RegistrationForm;
use crate::services::carousel::CarouselRotator;
use crate::services::countdown::CountdownTimer;
use crate::services::registration::{submit_form, RegistrationHandler, SubmissionOutcome};
use crate::services::timer::Clock;
use crate::ui_egui::theme::FestivalTheme;
use std::time::Duration;

/// Windows narrower than this get the collapsed navbar and single-column sections
pub(crate) const NARROW_LAYOUT_WIDTH: f32 = 768.0;

pub struct FestivalApp {
    /// Static copy rendered by the sections
    content: FestivalContent,
    theme: FestivalTheme,
    /// Source of `now` for both timers
    clock: Box<dyn Clock>,
    countdown: CountdownTimer,
    carousel: CarouselRotator,
    navigator: ScrollNavigator,
    registration_handler: Box<dyn RegistrationHandler>,
    toast_manager: ToastManager,
    state: AppState,
}

impl eframe::App for FestivalApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl FestivalApp {
    pub fn content(&self) -> &FestivalContent {
        &self.content
    }

    pub fn countdown_state(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn timers_running(&self) -> bool {
        self.countdown.is_mounted() || self.carousel.is_mounted()
    }

    pub fn pending_scroll(&self) -> Option<Section> {
        self.navigator.pending()
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    pub fn registration_form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.state.registration
    }

    /// Poll both timers against the clock. Returns true if anything visible changed.
    pub fn advance_timers(&mut self) -> bool {
        let now = self.clock.now();
        let countdown_changed = self.countdown.tick(now);
        let carousel_changed = self.carousel.tick(now);
        countdown_changed || carousel_changed
    }

    /// Shortest wait until either timer is due, used to schedule the next repaint.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        let now = self.clock.now();
        [
            self.countdown.time_until_next_tick(now),
            self.carousel.time_until_next_tick(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Carry out the actions collected while drawing a frame.
    /// Returns true when another frame is needed to show the result.
    pub fn apply_actions(&mut self, actions: Vec<PageAction>) -> bool {
        let mut needs_repaint = false;
        for action in actions {
            match action {
                PageAction::ScrollTo(anchor) => {
                    self.state.menu_open = false;
                    self.navigator.scroll_to(anchor);
                }
                PageAction::SelectSlide(index) => self.carousel.select(index),
                PageAction::ToggleMenu => self.state.menu_open = !self.state.menu_open,
                PageAction::SubmitRegistration => self.submit_registration(),
            }
            needs_repaint = true;
        }
        needs_repaint
    }

    /// Stop both timers. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.countdown.unmount();
        self.carousel.unmount();
    }

    fn submit_registration(&mut self) {
        match submit_form(
            &mut self.state.registration,
            self.registration_handler.as_mut(),
        ) {
            SubmissionOutcome::Accepted(ack) => self.toast_manager.success(ack.message),
            SubmissionOutcome::Invalid(err) => self.toast_manager.error(err.to_string()),
            SubmissionOutcome::Failed(reason) => self
                .toast_manager
                .error(format!("Could not submit registration: {reason}")),
        }
    }
}
