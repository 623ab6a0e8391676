//! Toy settings and preferences
//!
//! Persisted as a JSON file next to the working directory. Everything here
//! has a sensible default so a missing or unreadable file is never an error.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime preferences for both toys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render target width in pixels
    pub screen_width: f32,
    /// Render target height in pixels
    pub screen_height: f32,
    /// Number of heartbeat circles (and trails)
    pub circle_count: usize,
    /// Fixed RNG seed; `None` seeds from entropy at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            circle_count: CIRCLE_COUNT,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    const FILE_NAME: &'static str = "vector-toys.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::FILE_NAME, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk; failure is logged, not fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::FILE_NAME, json) {
                    log::warn!("Could not write {}: {}", Self::FILE_NAME, e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
