use crate::models::festival::Section;
use crate::models::registration::RegistrationForm;

/// Something a section asked the app to do while it was being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Scroll to the section with this anchor id
    ScrollTo(&'static str),
    /// Show gallery image `n`
    SelectSlide(usize),
    ToggleMenu,
    SubmitRegistration,
}

impl PageAction {
    pub fn scroll_to(section: Section) -> Self {
        PageAction::ScrollTo(section.anchor())
    }
}

/// Transient UI state that only reflects the last user action.
#[derive(Debug, Default)]
pub struct AppState {
    /// Collapsed navbar menu shown on narrow windows
    pub menu_open: bool,
    pub registration: RegistrationForm,
}
