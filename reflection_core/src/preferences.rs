//! Display preferences - the configuration object handed to the rendering
//! layer.
//!
//! Replaces ambient per-key flags with one explicit value that screens
//! receive from their owner. Persisted as a TOML file next to the journal
//! records; loading follows the same policy as the journal (missing or
//! corrupt file means defaults, never a startup failure).

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smallest accepted font scale.
pub const MIN_FONT_SCALE: f32 = 0.8;

/// Largest accepted font scale.
pub const MAX_FONT_SCALE: f32 = 1.4;

/// User-facing display and accessibility options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub high_contrast: bool,
    pub dyslexic_font: bool,
    /// Multiplier applied to base type sizes, kept within [0.8, 1.4].
    pub font_scale: f32,
    pub reduce_motion: bool,
    pub haptics_enabled: bool,
    /// Cleared from settings to replay the intro screens on next launch.
    pub has_seen_onboarding: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            high_contrast: false,
            dyslexic_font: false,
            font_scale: 1.0,
            reduce_motion: false,
            haptics_enabled: true,
            has_seen_onboarding: false,
        }
    }
}

impl DisplayPreferences {
    /// Set the font scale, clamped into the accepted range.
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
    }

    /// Load preferences from a TOML file. A missing or unreadable file
    /// yields the defaults; an out-of-range stored font scale is clamped.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                warn!("could not read preferences {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&text) {
            Ok(mut prefs) => {
                prefs.set_font_scale(prefs.font_scale);
                prefs
            }
            Err(err) => {
                warn!("preferences {} are corrupt, using defaults: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write preferences to a TOML file. Failures are logged and absorbed,
    /// matching the journal's persistence policy.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let text = match toml::to_string_pretty(self) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not encode preferences: {}", err);
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("could not create {}: {}", parent.display(), err);
                return;
            }
        }
        if let Err(err) = fs::write(path, text) {
            warn!("could not write preferences {}: {}", path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let prefs = DisplayPreferences::default();
        assert!(!prefs.high_contrast);
        assert!(!prefs.dyslexic_font);
        assert_eq!(prefs.font_scale, 1.0);
        assert!(!prefs.reduce_motion);
        assert!(prefs.haptics_enabled);
        assert!(!prefs.has_seen_onboarding);
    }

    #[test]
    fn test_font_scale_clamping() {
        let mut prefs = DisplayPreferences::default();

        prefs.set_font_scale(2.0);
        assert_eq!(prefs.font_scale, MAX_FONT_SCALE);

        prefs.set_font_scale(0.1);
        assert_eq!(prefs.font_scale, MIN_FONT_SCALE);

        prefs.set_font_scale(1.2);
        assert_eq!(prefs.font_scale, 1.2);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("display_preferences.toml");

        let mut prefs = DisplayPreferences::default();
        prefs.high_contrast = true;
        prefs.set_font_scale(1.3);
        prefs.has_seen_onboarding = true;
        prefs.save(&path);

        let loaded = DisplayPreferences::load(&path);
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = DisplayPreferences::load(dir.path().join("nope.toml"));
        assert_eq!(loaded, DisplayPreferences::default());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("display_preferences.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let loaded = DisplayPreferences::load(&path);
        assert_eq!(loaded, DisplayPreferences::default());
    }

    #[test]
    fn test_out_of_range_stored_scale_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("display_preferences.toml");
        std::fs::write(&path, "font_scale = 9.0\n").unwrap();

        let loaded = DisplayPreferences::load(&path);
        assert_eq!(loaded.font_scale, MAX_FONT_SCALE);
    }
}
