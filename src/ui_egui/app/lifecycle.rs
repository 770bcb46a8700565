use super::navigation::ScrollNavigator;
use super::state::AppState;
use super::toast::ToastManager;
use super::{FestivalApp, NARROW_LAYOUT_WIDTH};
use crate::services::carousel::CarouselRotator;
use crate::services::config::FestivalConfig;
use crate::services::countdown::CountdownTimer;
use crate::services::registration::RegistrationHandler;
use crate::services::timer::Clock;
use crate::ui_egui::sections::navbar;
use crate::ui_egui::theme::FestivalTheme;
use anyhow::{Context, Result};

impl FestivalApp {
    /// Build the page from configuration and mount both timers at `clock.now()`.
    pub fn from_config(
        config: &FestivalConfig,
        clock: Box<dyn Clock>,
        registration_handler: Box<dyn RegistrationHandler>,
    ) -> Result<Self> {
        let target = config
            .target_instant()
            .context("Failed to resolve countdown target")?;
        let mut carousel =
            CarouselRotator::new(config.gallery_images()).context("Failed to build gallery")?;
        let mut countdown = CountdownTimer::new(target);

        let now = clock.now();
        countdown.mount(now);
        carousel.mount(now);

        Ok(Self {
            content: config.content(),
            theme: FestivalTheme::neon(),
            clock,
            countdown,
            carousel,
            navigator: ScrollNavigator::new(),
            registration_handler,
            toast_manager: ToastManager::new(),
            state: AppState::default(),
        })
    }

    /// Hook the app into a freshly created egui context.
    pub fn install(&self, ctx: &egui::Context) {
        egui_extras::install_image_loaders(ctx);
        self.theme.apply_to_context(ctx);
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.advance_timers() {
            ctx.request_repaint();
        }

        let narrow = ctx.screen_rect().width() < NARROW_LAYOUT_WIDTH;
        let mut actions = Vec::new();

        // Navbar first so it claims the top strip before the scrolling page
        navbar::render(
            ctx,
            &self.theme,
            &self.content,
            narrow,
            self.state.menu_open,
            &mut actions,
        );
        self.render_page(ctx, narrow, &mut actions);

        if self.apply_actions(actions) {
            ctx.request_repaint();
        }

        // Toasts last, so they appear on top
        self.toast_manager.render(ctx);

        if let Some(wait) = self.time_until_next_tick() {
            ctx.request_repaint_after(wait);
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Shutting down festival page");
        self.shutdown();
    }
}
