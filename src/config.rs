//! Persisted user settings.
//!
//! Stored as pretty JSON in the OS config directory. Every struct carries
//! `#[serde(default)]`, so a partial file is valid and missing keys fall
//! back to the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::ChartStyle;

/// View preferences for the chart canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub pixels_per_day: f32,
    pub row_height: f32,
    /// Directory the file dialog opens in.
    pub last_directory: Option<PathBuf>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            pixels_per_day: 18.0,
            row_height: 30.0,
            last_directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub chart: ChartStyle,
    pub view: ViewSettings,
}

impl AppSettings {
    /// Settings directory, falling back to the working directory.
    pub fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "CsvGanttViewer")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load settings, using defaults for a missing or unreadable file.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings {:?}: {}", path, e);
                return Self::default();
            }
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse settings {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Write settings. Failures are logged, not returned.
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create settings directory {:?}: {}", parent, e);
            }
        }
        if let Err(e) = std::fs::write(path, json) {
            tracing::warn!("Failed to write settings {:?}: {}", path, e);
        }
    }
}
