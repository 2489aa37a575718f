//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Heatmap appearance (level thresholds, week start column)
//! - Daily study goal
//! - Stopwatch presets
//!
//! Configuration is stored at `~/.config/studystreak/config.toml`.
//! Settings are passed into the aggregation functions as explicit
//! parameters; nothing in the derived layers reads this ambiently.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::heatmap::{LevelThresholds, WeekStart};

use super::data_dir;

/// Heatmap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default)]
    pub thresholds: LevelThresholds,
    #[serde(default)]
    pub week_start: WeekStart,
}

/// Daily goal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_daily_goal_min")]
    pub daily_goal_min: u32,
}

/// Stopwatch presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_min")]
    pub focus_min: u32,
    #[serde(default = "default_break_min")]
    pub break_min: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studystreak/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub heatmap: HeatmapConfig,
    #[serde(default)]
    pub goal: GoalConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

fn default_daily_goal_min() -> u32 {
    60
}
fn default_focus_min() -> u32 {
    25
}
fn default_break_min() -> u32 {
    5
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            thresholds: LevelThresholds::default(),
            week_start: WeekStart::default(),
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            daily_goal_min: default_daily_goal_min(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_min: default_focus_min(),
            break_min: default_break_min(),
        }
    }
}

impl Config {
    /// Path of the config file on disk.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/studystreak"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the config, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed, or if
    /// the default config cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load the config, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Write the config to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Read one value by dotted key, e.g. `goal.daily_goal_min`.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set one value by dotted key from its string form.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownKey` for a path that does not
    /// exist, or `ConfigError::InvalidValue` when the value does not
    /// fit the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let mut current = &mut root;
        for part in key.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        let new_value = match &*current {
            serde_json::Value::Number(_) => {
                let n: i64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a number, got '{value}'"),
                })?;
                serde_json::Value::from(n)
            }
            serde_json::Value::Bool(_) => {
                let b: bool = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected true/false, got '{value}'"),
                })?;
                serde_json::Value::from(b)
            }
            _ => serde_json::Value::from(value),
        };
        *current = new_value;

        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.goal.daily_goal_min, 60);
        assert_eq!(cfg.timer.focus_min, 25);
        assert_eq!(cfg.heatmap.week_start, WeekStart::Sunday);
        assert_eq!(cfg.heatmap.thresholds, LevelThresholds::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_partial_toml_gets_defaults() {
        let cfg: Config = toml::from_str("[goal]\ndaily_goal_min = 90\n").unwrap();
        assert_eq!(cfg.goal.daily_goal_min, 90);
        assert_eq!(cfg.timer.focus_min, 25);
    }

    #[test]
    fn test_get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("goal.daily_goal_min").as_deref(), Some("60"));
        assert_eq!(cfg.get("heatmap.week_start").as_deref(), Some("sunday"));
        assert!(cfg.get("no.such.key").is_none());
    }

    #[test]
    fn test_set_by_dotted_key() {
        let mut cfg = Config::default();
        cfg.set("goal.daily_goal_min", "120").unwrap();
        assert_eq!(cfg.goal.daily_goal_min, 120);

        cfg.set("heatmap.thresholds.light", "15").unwrap();
        assert_eq!(cfg.heatmap.thresholds.light, 15);

        assert!(matches!(
            cfg.set("goal.daily_goal_min", "lots"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
