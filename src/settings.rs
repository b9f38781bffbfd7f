//! User preferences persisted as a small JSON object.
//!
//! ```json
//! { "DarkMode": false, "DefaultRPEForLoad": 5 }
//! ```
//!
//! Loading never fails: a missing or broken file yields the defaults.
//! Saving always writes the whole object.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_RPE_FOR_LOAD: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(rename = "DarkMode")]
    pub dark_mode: bool,
    #[serde(rename = "DefaultRPEForLoad")]
    pub default_rpe_for_load: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            default_rpe_for_load: DEFAULT_RPE_FOR_LOAD,
        }
    }
}

/// On-disk shape; unknown keys are ignored, missing keys take defaults.
#[derive(Deserialize)]
struct RawSettings {
    #[serde(rename = "DarkMode")]
    dark_mode: Option<bool>,
    #[serde(rename = "DefaultRPEForLoad")]
    default_rpe_for_load: Option<i64>,
}

impl Settings {
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| Self::from_json(&content))
            .unwrap_or_default()
    }

    fn from_json(content: &str) -> Option<Self> {
        let raw: RawSettings = serde_json::from_str(content).ok()?;
        let defaults = Settings::default();

        Some(Settings {
            dark_mode: raw.dark_mode.unwrap_or(defaults.dark_mode),
            default_rpe_for_load: raw
                .default_rpe_for_load
                .map(|v| v.clamp(1, 10) as u8)
                .unwrap_or(defaults.default_rpe_for_load),
        })
    }

    /// Replace the settings file with this object. The content is written to a
    /// sibling temp file first and renamed into place.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Default RPE clamped to the valid 1..=10 range.
    pub fn default_rpe(&self) -> u8 {
        self.default_rpe_for_load.clamp(1, 10)
    }
}
