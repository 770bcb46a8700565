//! Theme module for the festival page
//!
//! Neon-on-black palette: cyan primary, orange highlight, near-black panels.

use egui::Color32;

/// Colors used across every page section
#[derive(Debug, Clone, PartialEq)]
pub struct FestivalTheme {
    /// Page background
    pub background: Color32,

    /// Card and panel fill
    pub surface: Color32,

    /// Thin borders around cards
    pub border: Color32,

    /// Cyan accent (links, labels, active indicator)
    pub primary: Color32,

    /// Orange accent (year tag, call to action)
    pub highlight: Color32,

    /// Headline text
    pub text_primary: Color32,

    /// Body copy
    pub text_secondary: Color32,

    /// Inactive carousel indicator
    pub indicator_idle: Color32,
}

impl FestivalTheme {
    pub fn neon() -> Self {
        Self {
            background: Color32::from_rgb(10, 10, 10),
            surface: Color32::from_rgb(20, 22, 24),
            border: Color32::from_white_alpha(26),
            primary: Color32::from_rgb(34, 211, 238),
            highlight: Color32::from_rgb(249, 115, 22),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(190, 232, 240),
            indicator_idle: Color32::from_white_alpha(51),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = Color32::from_rgb(5, 5, 5);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.25);
        visuals.widgets.active.bg_fill = self.primary.gamma_multiply(0.4);
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.5);
        visuals.hyperlink_color = self.primary;

        visuals.override_text_color = Some(self.text_secondary);

        ctx.set_visuals(visuals);
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }

    /// Like [`Self::hex_to_color`] but falls back to the primary accent.
    pub fn accent_or_primary(&self, hex: &str) -> Color32 {
        Self::hex_to_color(hex).unwrap_or(self.primary)
    }
}

impl Default for FestivalTheme {
    fn default() -> Self {
        Self::neon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        let result = FestivalTheme::hex_to_color("#22D3EE").unwrap();
        assert_eq!(result, Color32::from_rgb(34, 211, 238));

        let result2 = FestivalTheme::hex_to_color("f97316").unwrap();
        assert_eq!(result2, Color32::from_rgb(249, 115, 22));
    }

    #[test]
    fn test_bad_hex_falls_back_to_primary() {
        let theme = FestivalTheme::neon();
        assert!(FestivalTheme::hex_to_color("#12345").is_err());
        assert!(FestivalTheme::hex_to_color("#zzzzzz").is_err());
        assert_eq!(theme.accent_or_primary("nope"), theme.primary);
    }

    #[test]
    fn test_neon_background() {
        let theme = FestivalTheme::default();
        assert_eq!(theme.background, Color32::from_rgb(10, 10, 10));
    }
}
