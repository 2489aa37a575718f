//! Intensity level classification.
//!
//! Maps a day's total minutes to a discrete level 0-5 used for heatmap
//! coloring. Thresholds are carried in an explicit config object rather
//! than read from ambient state, so callers with different goals can
//! classify against their own scale.

use serde::{Deserialize, Serialize};

/// Minute thresholds for levels 2 through 5.
///
/// Any positive total below `light` classifies as level 1; zero is
/// always level 0. Thresholds must be strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    #[serde(default = "default_light")]
    pub light: u32,
    #[serde(default = "default_medium")]
    pub medium: u32,
    #[serde(default = "default_high")]
    pub high: u32,
    #[serde(default = "default_max")]
    pub max: u32,
}

fn default_light() -> u32 {
    30
}
fn default_medium() -> u32 {
    60
}
fn default_high() -> u32 {
    120
}
fn default_max() -> u32 {
    180
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            light: default_light(),
            medium: default_medium(),
            high: default_high(),
            max: default_max(),
        }
    }
}

/// Classify a day's total minutes as an intensity level in 0..=5.
///
/// Pure and monotonic non-decreasing in `minutes`. Negative input is
/// unrepresentable; the boundary validator rejects it before a duration
/// is ever constructed.
pub fn level_for(minutes: u32, thresholds: &LevelThresholds) -> u8 {
    if minutes == 0 {
        return 0;
    }
    let mut level = 1;
    if minutes >= thresholds.light {
        level = 2;
    }
    if minutes >= thresholds.medium {
        level = 3;
    }
    if minutes >= thresholds.high {
        level = 4;
    }
    if minutes >= thresholds.max {
        level = 5;
    }
    level
}
