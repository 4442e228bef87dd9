//! Demo settings, read from a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dropdown::{ConfigError, DropdownConfig, LayoutMetrics};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dropdown configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Where the dropdown button sits, in cells.
///
/// Negative coordinates count from the right and bottom edges, so a button
/// at `x: -20` stays 20 cells from the right edge across resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPosition {
    pub x: i32,
    pub y: i32,
    pub width: u16,
}

impl Default for ButtonPosition {
    fn default() -> Self {
        Self {
            x: 2,
            y: 2,
            width: 24,
        }
    }
}

impl ButtonPosition {
    /// Absolute `(x, y)` on a screen of the given size, or `None` if the
    /// button would not be on screen.
    pub fn resolve(&self, width: u16, height: u16) -> Option<(u16, u16)> {
        let x = if self.x < 0 { width as i32 + self.x } else { self.x };
        let y = if self.y < 0 { height as i32 + self.y } else { self.y };

        let on_screen = x >= 0
            && y >= 0
            && x + self.width as i32 <= width as i32
            && y < height as i32
            && self.width > 0;
        on_screen.then_some((x as u16, y as u16))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Options shown in the dropdown: strings, numbers or objects with a `label`.
    pub options: Vec<Value>,
    /// Cell metrics; replaces `dropdown.metrics`.
    pub metrics: LayoutMetrics,
    pub dropdown: DropdownConfig,
    pub button: ButtonPosition,
    /// Hold the options back this long to show the loading state.
    pub options_delay_ms: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        let options = [
            "Apple",
            "Apricot",
            "Banana",
            "Blackberry",
            "Cherry",
            "Grape",
            "Kiwi",
            "Mango",
            "Orange",
            "Pear",
        ]
        .into_iter()
        .map(Value::from)
        .collect();

        let metrics = LayoutMetrics::terminal();
        Self {
            options,
            metrics,
            dropdown: DropdownConfig::new()
                .default_value("Pick a fruit")
                .show_search()
                .metrics(metrics),
            button: ButtonPosition::default(),
            options_delay_ms: 0,
        }
    }
}

/// Parse and validate settings JSON.
pub fn parse(json: &str) -> Result<DemoSettings, SettingsError> {
    let mut settings: DemoSettings = serde_json::from_str(json)?;
    settings.dropdown.metrics = settings.metrics;
    settings
        .dropdown
        .validate(Some(settings.options.len()))?;
    Ok(settings)
}

/// Load settings from `path`, or from the default settings file.
///
/// A missing default file yields the built-in settings; a missing explicit
/// path is an error.
pub fn load(path: Option<&Path>) -> Result<DemoSettings, SettingsError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match paths::settings_file() {
            Some(path) => (path, false),
            None => {
                log::info!("No config directory; using built-in settings");
                return Ok(DemoSettings::default());
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(json) => {
            log::info!("Loading settings from {}", path.display());
            parse(&json)
        }
        Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found; using built-in settings", path.display());
            Ok(DemoSettings::default())
        }
        Err(source) => Err(SettingsError::Io { path, source }),
    }
}
