use crate::models::festival::Section;

/// Pending smooth-scroll request, consumed when the target section is laid out.
#[derive(Debug, Default)]
pub struct ScrollNavigator {
    pending: Option<Section>,
}

impl ScrollNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for the section with anchor id `anchor` to be scrolled to the top
    /// of the viewport. Unknown ids are ignored.
    pub fn scroll_to(&mut self, anchor: &str) {
        match Section::from_anchor(anchor) {
            Some(section) => self.pending = Some(section),
            None => log::debug!("Ignoring scroll to unknown section '{anchor}'"),
        }
    }

    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    /// True exactly once for the section that was requested.
    pub fn take_if(&mut self, section: Section) -> bool {
        if self.pending == Some(section) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
