//! Configuration loading for the uju space tour.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/uju/config.toml`). Every field is optional; a missing
//! or unparseable file silently falls back to defaults, matching the
//! app's degrade-by-not-animating philosophy.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use uju_core::AnimationSpeed;

/// Application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Global animation speed.
    pub animation: AnimationSpeed,
    /// How long the intro splash stays up, in milliseconds.
    pub intro_ms: u64,
    /// Whether to show the intro splash at all.
    pub show_intro: bool,
    /// Hard cap on concurrently live meteors.
    pub meteor_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation: AnimationSpeed::Medium,
            intro_ms: 3000,
            show_intro: true,
            meteor_cap: 128,
        }
    }
}

impl Config {
    /// Load the user config, falling back to defaults on any failure.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| Self::from_toml(&text))
            .unwrap_or_default()
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Option<Self> {
        toml::from_str(text).ok()
    }

    /// Platform path of the config file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "uju").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.intro_ms, 3000);
        assert!(config.show_intro);
        assert_eq!(config.animation, AnimationSpeed::Medium);
        assert_eq!(config.meteor_cap, 128);
    }

    #[test]
    fn test_full_config_parses() {
        let config = Config::from_toml(
            r#"
            animation = "fast"
            intro_ms = 1500
            show_intro = false
            meteor_cap = 32
            "#,
        )
        .unwrap();
        assert_eq!(config.animation, AnimationSpeed::Fast);
        assert_eq!(config.intro_ms, 1500);
        assert!(!config.show_intro);
        assert_eq!(config.meteor_cap, 32);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("animation = \"slow\"").unwrap();
        assert_eq!(config.animation, AnimationSpeed::Slow);
        assert_eq!(config.intro_ms, 3000);
    }

    #[test]
    fn test_garbage_config_is_rejected() {
        assert!(Config::from_toml("animation = 3").is_none());
        assert!(Config::from_toml("{not toml").is_none());
    }
}
