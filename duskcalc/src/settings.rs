//! Persisted interface preferences

use duskcore::storage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Interface preferences that survive restarts. Calculator state itself
/// is never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalcSettings {
    /// Interface scale factor (1.0, 1.25, 1.5).
    #[serde(default = "default_scale")]
    pub ui_scale: f32,
    /// Brighten keys under the pointer.
    #[serde(default = "default_hover")]
    pub hover_highlight: bool,
}

fn default_scale() -> f32 {
    1.0
}

fn default_hover() -> bool {
    true
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            ui_scale: default_scale(),
            hover_highlight: default_hover(),
        }
    }
}

impl CalcSettings {
    fn config_path() -> PathBuf {
        storage::config_dir("duskcalc").join("settings.json")
    }

    /// Load saved preferences, falling back to defaults on any error.
    pub fn load() -> Self {
        storage::load_json(&Self::config_path()).unwrap_or_default()
    }

    pub fn save(&self) -> storage::Result<()> {
        storage::save_json(&Self::config_path(), self)
    }
}
