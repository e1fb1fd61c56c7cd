use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Loads the TOML settings file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `settings.toml` in the platform config directory
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "KenBoyle", "EventTrackerCalendar")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, or defaults when no file exists yet
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        parse_settings(&contents)
            .with_context(|| format!("Invalid settings file {}", self.path.display()))
    }

    /// Write `settings`, creating the config directory if needed
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }

    /// Load settings, writing a default file on first launch so it can be edited
    pub fn load_or_init(&self) -> Result<Settings> {
        if self.path.exists() {
            return self.get();
        }

        let settings = Settings::default();
        self.update(&settings)?;
        log::info!("Wrote default settings to {}", self.path.display());
        Ok(settings)
    }
}

/// Parse and validate settings TOML
pub fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).context("Failed to parse settings")?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(settings)
}
