// Settings module
// User configuration loaded from settings.toml

use serde::{Deserialize, Serialize};

use crate::models::filter::FilterMode;

pub const THEMES: [&str; 3] = ["light", "dark", "system"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// Filter applied when the window opens
    pub default_filter: FilterMode,
    pub window_width: f32,
    pub window_height: f32,
    /// Show toast feedback for saved, deleted and rejected events
    pub show_toasts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            default_filter: FilterMode::All,
            window_width: 1000.0,
            window_height: 760.0,
            show_toasts: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let theme = self.theme.to_lowercase();
        if !THEMES.contains(&theme.as_str()) {
            return Err(format!(
                "Unknown theme '{}', expected one of: {}",
                self.theme,
                THEMES.join(", ")
            ));
        }

        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err("Window size must be positive".to_string());
        }

        Ok(())
    }

    pub fn uses_system_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("system")
    }
}
