//! Simulation settings
//!
//! Loaded from an optional JSON file; any field left out takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::IndexMode;

/// Errors from loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Which tap rule the engine applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapRuleKind {
    /// Every tapped block splits
    #[default]
    SplitAll,
    /// Outcome depends on the block's class
    ByClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for spawn positions and classes
    pub seed: u64,
    /// Spin rate shared by all blocks
    pub degrees_per_second: f32,
    /// Countdown before the first periodic spawn (seconds)
    pub initial_spawn_delay: f32,
    /// Starting difficulty; the host may change it per step
    pub difficulty: f32,

    /// Seconds between spawns. `None` reuses the difficulty value.
    pub spawn_interval: Option<f32>,
    /// Approach speed of new blocks. `None` reuses the difficulty value.
    pub fall_speed: Option<f32>,

    /// Inclusive range of spawn x positions
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    /// Chance a periodic spawn is `Bad` (0.0 - 1.0)
    pub bad_spawn_chance: f32,
    /// Blocks placed when the engine starts
    pub seed_blocks: Vec<[f32; 3]>,

    /// Sideways distance of split halves from the tapped block
    pub split_offset: f32,
    pub tap_rule: TapRuleKind,
    pub score_per_split: i64,
    /// Score lost for tapping a `Bad` block (by-class rule)
    pub bad_tap_penalty: i64,

    pub index_mode: IndexMode,
    /// Remove blocks whose z falls below this. `None` keeps them forever.
    pub despawn_z: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            degrees_per_second: DEGREES_PER_SECOND,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            difficulty: DEFAULT_DIFFICULTY,

            // Difficulty drives both by default
            spawn_interval: None,
            fall_speed: None,

            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            bad_spawn_chance: 0.0,
            seed_blocks: SEED_BLOCKS.to_vec(),

            split_offset: SPLIT_OFFSET,
            tap_rule: TapRuleKind::SplitAll,
            score_per_split: SCORE_PER_SPLIT,
            bad_tap_penalty: SCORE_PER_SPLIT,

            index_mode: IndexMode::Absolute,
            despawn_z: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("difficulty", self.difficulty)?;
        if let Some(interval) = self.spawn_interval {
            positive("spawn_interval", interval)?;
        }
        // Zero is a stationary block; negative would move away from the viewer
        if let Some(speed) = self.fall_speed {
            non_negative("fall_speed", speed)?;
        }
        finite("degrees_per_second", self.degrees_per_second)?;
        // Zero spawns on the first step
        non_negative("initial_spawn_delay", self.initial_spawn_delay)?;
        finite("split_offset", self.split_offset)?;
        if let Some(z) = self.despawn_z {
            finite("despawn_z", z)?;
        }
        if self.spawn_x_min > self.spawn_x_max {
            return Err(ConfigError::Invalid {
                field: "spawn_x_min",
                reason: format!("{} > spawn_x_max {}", self.spawn_x_min, self.spawn_x_max),
            });
        }
        if !(0.0..=1.0).contains(&self.bad_spawn_chance) {
            return Err(ConfigError::Invalid {
                field: "bad_spawn_chance",
                reason: format!("{} is outside 0.0 - 1.0", self.bad_spawn_chance),
            });
        }
        if self.score_per_split < 0 {
            return Err(ConfigError::Invalid {
                field: "score_per_split",
                reason: format!("{} is negative", self.score_per_split),
            });
        }
        if self.bad_tap_penalty < 0 {
            return Err(ConfigError::Invalid {
                field: "bad_tap_penalty",
                reason: format!("{} is negative", self.bad_tap_penalty),
            });
        }
        if self.seed_blocks.iter().flatten().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "seed_blocks",
                reason: "coordinates must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Seconds between periodic spawns at the given difficulty
    #[inline]
    pub fn effective_spawn_interval(&self, difficulty: f32) -> f32 {
        self.spawn_interval.unwrap_or(difficulty)
    }

    /// Approach speed for blocks spawned at the given difficulty
    #[inline]
    pub fn effective_fall_speed(&self, difficulty: f32) -> f32 {
        self.fall_speed.unwrap_or(difficulty)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} is not finite", value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} is negative", value),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} must be positive", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.effective_spawn_interval(0.5), 0.5);
        assert_eq!(settings.effective_fall_speed(2.0), 2.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "spawn_interval": 0.25 }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.effective_spawn_interval(3.0), 0.25);
        assert_eq!(settings.degrees_per_second, DEGREES_PER_SECOND);
        assert_eq!(settings.seed_blocks.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.tap_rule = TapRuleKind::ByClass;
        settings.index_mode = IndexMode::Legacy;
        settings.despawn_z = Some(-10.0);
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"by_class\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "difficulty": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "difficulty", .. }));

        let err = Settings::from_json(r#"{ "spawn_x_min": 3, "spawn_x_max": -3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "spawn_x_min", .. }));

        let err = Settings::from_json(r#"{ "bad_spawn_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bad_spawn_chance", .. }));

        let err = Settings::from_json(r#"{ "fall_speed": -2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fall_speed", .. }));

        let err = Settings::from_json(r#"{ "initial_spawn_delay": -0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "initial_spawn_delay", .. }));

        let err = Settings::from_json(r#"{ "bad_tap_penalty": -9223372036854775808 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bad_tap_penalty", .. }));

        let err = Settings::from_json(r#"{ "score_per_split": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "score_per_split", .. }));
    }

    #[test]
    fn test_zero_fall_speed_and_delay_allowed() {
        let settings =
            Settings::from_json(r#"{ "fall_speed": 0.0, "initial_spawn_delay": 0.0 }"#).unwrap();
        assert_eq!(settings.effective_fall_speed(3.0), 0.0);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/block-burst.json");
        assert_eq!(settings, Settings::default());
    }
}
