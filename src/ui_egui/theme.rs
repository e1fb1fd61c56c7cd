//! Theme module for the calendar window
//!
//! Colour palettes for the month grid, event markers and filter buttons.

use egui::Color32;

use crate::models::event::EventTiming;
use crate::models::settings::Settings;

/// Colours used by the calendar views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    pub day_background: Color32,
    /// Padding days from the previous/next month
    pub other_month_background: Color32,
    pub today_background: Color32,
    pub today_border: Color32,
    pub day_border: Color32,
    pub header_background: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub past_event: Color32,
    pub upcoming_event: Color32,
    pub filter_active: Color32,
    pub filter_inactive: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            day_background: Color32::from_rgb(255, 255, 255),
            other_month_background: Color32::from_rgb(236, 236, 240),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(228, 232, 240),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(140, 140, 140),
            past_event: Color32::from_rgb(222, 105, 135),
            upcoming_event: Color32::from_rgb(140, 189, 76),
            filter_active: Color32::from_rgb(0, 123, 255),
            filter_inactive: Color32::from_rgb(108, 117, 125),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            day_background: Color32::from_rgb(40, 40, 40),
            other_month_background: Color32::from_rgb(33, 33, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 52, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(130, 130, 130),
            past_event: Color32::from_rgb(190, 80, 110),
            upcoming_event: Color32::from_rgb(110, 160, 55),
            filter_active: Color32::from_rgb(0, 123, 255),
            filter_inactive: Color32::from_rgb(88, 96, 104),
        }
    }

    /// Pick the palette named by the settings, asking the OS for "system"
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.uses_system_theme() {
            return match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            };
        }

        if settings.theme.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Marker colour for an event
    pub fn event_color(&self, timing: EventTiming) -> Color32 {
        match timing {
            EventTiming::Past => self.past_event,
            EventTiming::Upcoming => self.upcoming_event,
        }
    }

    pub fn filter_button_color(&self, active: bool) -> Color32 {
        if active {
            self.filter_active
        } else {
            self.filter_inactive
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.day_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_colors_follow_timing() {
        let theme = CalendarTheme::light();
        assert_eq!(
            theme.event_color(EventTiming::Past),
            Color32::from_rgb(222, 105, 135)
        );
        assert_eq!(
            theme.event_color(EventTiming::Upcoming),
            Color32::from_rgb(140, 189, 76)
        );
    }

    #[test]
    fn test_filter_button_colors() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.filter_button_color(true), Color32::from_rgb(0, 123, 255));
        assert_eq!(theme.filter_button_color(false), Color32::from_rgb(108, 117, 125));
    }

    #[test]
    fn test_from_settings_dark() {
        let settings = Settings {
            theme: "Dark".to_string(),
            ..Settings::default()
        };
        assert!(CalendarTheme::from_settings(&settings).is_dark);
    }

    #[test]
    fn test_from_settings_light() {
        assert!(!CalendarTheme::from_settings(&Settings::default()).is_dark);
    }
}
