//! Application configuration
//!
//! Read from `<config dir>/quiz_maker/config.json` (for example
//! `~/.config/quiz_maker/config.json` on Linux). Every field is optional;
//! missing fields take their default value.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Window, timing and asset settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    /// Frames per second of the event loop
    pub tick_rate: u32,
    pub background_path: PathBuf,
    /// TrueType font (only used with the `ttf` feature)
    pub font_path: PathBuf,
    pub small_font_size: u16,
    pub large_font_size: u16,
    /// Looping background track (WAV)
    pub music_path: PathBuf,
    /// 0.0 (silent) to 1.0 (full volume)
    pub music_volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: 800,
            window_height: 600,
            title: "Quiz Maker".to_string(),
            tick_rate: 30,
            background_path: PathBuf::from("assets/background.png"),
            font_path: PathBuf::from("assets/font.ttf"),
            small_font_size: 24,
            large_font_size: 36,
            music_path: PathBuf::from("assets/music.wav"),
            music_volume: 0.5,
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults
    ///
    /// A missing file is normal and silently yields the defaults. A file
    /// that can't be read or parsed is reported and also yields the defaults.
    pub fn load() -> Self {
        let path = match config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}, using default settings", e);
                return Self::default();
            }
        };

        if !path.exists() {
            log::debug!("No config at {}, using default settings", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reads and validates a config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        Ok(config.sanitized())
    }

    /// Frame duration for the configured tick rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::new(0, 1_000_000_000u32 / self.tick_rate.max(1))
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.window_width == 0 || self.window_height == 0 {
            log::warn!(
                "Window size {}x{} is invalid, using {}x{}",
                self.window_width,
                self.window_height,
                defaults.window_width,
                defaults.window_height
            );
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if self.tick_rate == 0 {
            self.tick_rate = defaults.tick_rate;
        }
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

/// Get the config file path (`<config dir>/quiz_maker/config.json`)
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("quiz_maker").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.frame_duration(), std::time::Duration::from_nanos(33_333_333));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "title": "Lulu's Quiz Maker", "tick_rate": 60 }"#).unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.title, "Lulu's Quiz Maker");
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.music_path, PathBuf::from("assets/music.wav"));
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "window_width": 0, "tick_rate": 0, "music_volume": 3.0 }"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.music_volume, 1.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(ConfigError::Serde(_))
        ));
    }
}
