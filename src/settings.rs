//! Presentation preferences
//!
//! These only change how snapshots are dressed (tints, poses, HUD colours).
//! Gameplay constants live in `consts` and are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Presentation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Red tint on struck enemies and on the player when hit
    pub hit_flash: bool,
    /// Stretch the player pose while punching
    pub punch_stretch: bool,
    /// Colour the health readout by band (healthy/warning/critical)
    pub hud_color_bands: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses flashes and pose stretching)
    pub reduced_motion: bool,

    // === Diagnostics ===
    /// Log every frame event in the headless driver
    pub log_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hit_flash: true,
            punch_stretch: true,
            hud_color_bands: true,
            reduced_motion: false,
            log_events: false,
        }
    }
}

impl Settings {
    /// Effective hit flash (respects reduced_motion)
    pub fn effective_hit_flash(&self) -> bool {
        self.hit_flash && !self.reduced_motion
    }

    /// Effective punch stretch (respects reduced_motion)
    pub fn effective_punch_stretch(&self) -> bool {
        self.punch_stretch && !self.reduced_motion
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_overrides() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(settings.hit_flash);
        assert!(!settings.effective_hit_flash());
        assert!(!settings.effective_punch_stretch());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "hit_flash": false }"#).unwrap();
        assert!(!settings.hit_flash);
        assert!(settings.punch_stretch);
        assert!(settings.hud_color_bands);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            log_events: true,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ hit_flash: ").is_err());
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/brawler-settings.json"));
        assert_eq!(settings, Settings::default());
    }
}
