//! Data-driven vehicle balance
//!
//! Everything that tunes how the vehicle drives lives here so designers can
//! edit a JSON file instead of recompiling. Defaults are the practice-arena
//! handling; `circuit()` is the stiffer endless-circuit setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Vehicle and pickup balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Throttle/reverse acceleration (units/s²)
    pub accel: f32,
    /// Coast deceleration toward zero with no keys held (units/s²)
    pub coast_decel: f32,
    /// Forward speed cap without boost
    pub max_speed: f32,
    /// Forward speed cap while the boost window is open
    pub boost_max_speed: f32,
    /// Reverse speed cap (most negative allowed speed)
    pub min_speed: f32,
    /// Steering rate (degrees/s)
    pub turn_rate: f32,
    /// Half-extent of the square collision footprint
    pub half_width: f32,
    /// Speed multiplier applied to the reversed velocity on a wall hit
    pub bounce_damping: f32,
    /// Capture distance for collectibles
    pub capture_radius: f32,
    /// Boost window granted per capture (seconds, re-armed not added)
    pub boost_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: 15.0,
            coast_decel: 5.0,
            max_speed: 30.0,
            boost_max_speed: 50.0,
            min_speed: -10.0,
            turn_rate: 100.0,
            half_width: 0.4,
            bounce_damping: 0.5,
            capture_radius: 1.5,
            boost_duration: 2.0,
        }
    }
}

impl Tuning {
    /// Circuit setup: faster, heavier car with a wider footprint
    pub fn circuit() -> Self {
        Self {
            accel: 40.0,
            coast_decel: 15.0,
            max_speed: 70.0,
            boost_max_speed: 90.0,
            min_speed: -20.0,
            turn_rate: 120.0,
            half_width: 0.5,
            ..Self::default()
        }
    }

    /// The speed cap currently in force
    #[inline]
    pub fn effective_max_speed(&self, boosting: bool) -> f32 {
        if boosting {
            self.boost_max_speed
        } else {
            self.max_speed
        }
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("bad tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save as pretty JSON; failures are logged, not propagated
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("could not save tuning to {}: {e}", path.display());
                } else {
                    log::info!("tuning saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("could not serialize tuning: {e}"),
        }
    }
}
