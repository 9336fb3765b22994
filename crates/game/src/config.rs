//! Simulation configuration. Loaded from a RON file at startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a simulation run. Any missing or invalid file falls back
/// to defaults with a warning; a bad config never stops a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World generation seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// How long the demo harness runs, in simulated seconds.
    #[serde(default = "default_demo_duration")]
    pub demo_duration_secs: f32,
    /// Seconds between cannon shots.
    #[serde(default = "default_fire_cooldown")]
    pub fire_cooldown: f32,
    /// Disable to skip the rain layer entirely.
    #[serde(default = "default_true")]
    pub rain_enabled: bool,
}

fn default_seed() -> u64 {
    42
}
fn default_demo_duration() -> f32 {
    30.0
}
fn default_fire_cooldown() -> f32 {
    0.15
}
fn default_true() -> bool {
    true
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            demo_duration_secs: default_demo_duration(),
            fire_cooldown: default_fire_cooldown(),
            rain_enabled: default_true(),
        }
    }
}

impl SimConfig {
    /// Load from `path`. Missing or unparsable files yield defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(data) => match ron::from_str(&data) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("invalid config at {path:?}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::warn!("no config at {path:?}, using defaults");
                Self::default()
            }
        }
    }

    /// Save to `path`, best effort.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => {
                if let Err(e) = std::fs::write(path, s) {
                    log::warn!("could not write config to {path:?}: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize config: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = SimConfig::load("does/not/exist.ron");
        assert_eq!(config.seed, 42);
        assert_eq!(config.demo_duration_secs, 30.0);
        assert_eq!(config.fire_cooldown, 0.15);
        assert!(config.rain_enabled);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config: SimConfig = ron::from_str("(seed: 7)").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.fire_cooldown, 0.15);
    }

    #[test]
    fn garbage_parses_to_defaults() {
        let dir = std::env::temp_dir().join("skyring-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.ron");
        std::fs::write(&path, "not ron at all {{{").unwrap();
        let config = SimConfig::load(&path);
        assert_eq!(config.seed, 42);
    }
}
