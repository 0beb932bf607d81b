//! Game configuration
//!
//! Loaded from JSON (any missing field falls back to the default tuning) and
//! validated before a world is ever built from it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ENEMY_PALETTE;
use crate::consts::*;

/// Configuration errors. Gameplay itself has no error path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("enemy count {count} exceeds the palette size {palette}")]
    TooManyEnemies { count: usize, palette: usize },

    #[error("bounds {width}x{height} must be positive and finite")]
    InvalidBounds { width: f32, height: f32 },

    #[error("bounds {width}x{height} too small for {what} (needs more than {needed} per axis)")]
    BoundsTooSmall {
        what: &'static str,
        width: f32,
        height: f32,
        needed: f32,
    },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("{count} collectibles at {reward} points each overflows the score")]
    ScoreOverflow { count: usize, reward: u32 },

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,

    pub player_start: (f32, f32),
    pub player_radius: f32,
    pub player_speed: f32,

    pub collectible_count: usize,
    pub collectible_radius: f32,
    /// Inset from every canvas edge for random placement
    pub collectible_margin: f32,
    pub collectible_reward: u32,

    pub enemy_count: usize,
    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_margin: f32,

    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            player_start: (PLAYER_START_X, PLAYER_START_Y),
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            collectible_count: COLLECTIBLE_COUNT,
            collectible_radius: COLLECTIBLE_RADIUS,
            collectible_margin: COLLECTIBLE_MARGIN,
            collectible_reward: COLLECTIBLE_REWARD,

            enemy_count: ENEMY_COUNT,
            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_margin: ENEMY_MARGIN,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Reject configurations the entity factory cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_count > ENEMY_PALETTE.len() {
            return Err(ConfigError::TooManyEnemies {
                count: self.enemy_count,
                palette: ENEMY_PALETTE.len(),
            });
        }

        // The score must be able to hold every collectible's reward
        let max_score = self.collectible_count as u64 * u64::from(self.collectible_reward);
        if max_score > u64::from(u32::MAX) {
            return Err(ConfigError::ScoreOverflow {
                count: self.collectible_count,
                reward: self.collectible_reward,
            });
        }

        let (width, height) = (self.width, self.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidBounds { width, height });
        }

        for (field, value) in [
            ("player_radius", self.player_radius),
            ("player_speed", self.player_speed),
            ("collectible_radius", self.collectible_radius),
            ("collectible_margin", self.collectible_margin),
            ("enemy_radius", self.enemy_radius),
            ("enemy_speed", self.enemy_speed),
            ("enemy_margin", self.enemy_margin),
            ("player_start.x", self.player_start.0),
            ("player_start.y", self.player_start.1),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let min_dim = width.min(height);
        if min_dim < 2.0 * self.player_radius {
            return Err(ConfigError::BoundsTooSmall {
                what: "player",
                width,
                height,
                needed: 2.0 * self.player_radius,
            });
        }
        // Placement samples from [margin, dim - margin), which must be non-empty
        if self.collectible_count > 0 && min_dim <= 2.0 * self.collectible_margin {
            return Err(ConfigError::BoundsTooSmall {
                what: "collectible margin",
                width,
                height,
                needed: 2.0 * self.collectible_margin,
            });
        }
        if self.enemy_count > 0 && min_dim <= 2.0 * self.enemy_margin {
            return Err(ConfigError::BoundsTooSmall {
                what: "enemy margin",
                width,
                height,
                needed: 2.0 * self.enemy_margin,
            });
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_many_enemies_rejected() {
        let config = GameConfig {
            enemy_count: ENEMY_PALETTE.len() + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyEnemies { count: 4, palette: 3 })
        ));
    }

    #[test]
    fn test_tiny_bounds_rejected() {
        let config = GameConfig {
            width: 20.0,
            height: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundsTooSmall { what: "player", .. })
        ));

        let config = GameConfig {
            width: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_margin_ignored_when_no_entities() {
        // 30px canvas fits the player but not the enemy margin
        let config = GameConfig {
            width: 30.0,
            height: 30.0,
            collectible_count: 1,
            enemy_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = GameConfig {
            enemy_count: 1,
            ..config
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundsTooSmall { what: "enemy margin", .. })
        ));
    }

    #[test]
    fn test_collectible_margin_too_wide() {
        let config = GameConfig {
            width: 40.0,
            height: 400.0,
            collectible_margin: 20.0,
            enemy_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundsTooSmall { what: "collectible margin", .. })
        ));

        let config = GameConfig {
            collectible_count: 0,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_score_overflow_rejected() {
        let config = GameConfig {
            collectible_count: 2,
            collectible_reward: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScoreOverflow { count: 2, reward: u32::MAX })
        ));

        // Exactly filling the score is fine
        let config = GameConfig {
            collectible_count: 1,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chomp-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_config_path("round-trip");
        let config = GameConfig {
            collectible_count: 12,
            enemy_count: 2,
            seed: Some(99),
            ..Default::default()
        };

        config.save(&path).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, r#"{ "enemy_count": 7 }"#).unwrap();
        let result = GameConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(ConfigError::TooManyEnemies { count: 7, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_config_path("missing");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = GameConfig {
            enemy_speed: -1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "enemy_speed", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "enemy_count": 1, "seed": 7 }"#).unwrap();
        assert_eq!(config.enemy_count, 1);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.collectible_count, COLLECTIBLE_COUNT);
        assert_eq!(config.width, CANVAS_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            seed: Some(42),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
