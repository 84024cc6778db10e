//! Tarmac - a top-down driving game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicle kinematics, collisions, pickups)
//! - `track`: Tile-map parsing into walls, floor and finish tiles
//! - `tuning`: Data-driven vehicle balance
//! - `highscores`: Score leaderboard with JSON persistence
//!
//! Rendering, windowing and input polling live outside this crate: the sim
//! consumes a per-frame key snapshot and elapsed time, and exposes the pose,
//! score and boost state a renderer needs to draw the frame.

pub mod highscores;
pub mod sim;
pub mod track;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the frame cap)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Edge length of one track tile, in world units
    pub const TILE_SIZE: f32 = 10.0;

    /// Minimum |speed| below which steering has no effect
    pub const TURN_EPSILON: f32 = 0.1;
    /// Collectible display spin rate (degrees per second)
    pub const COLLECTIBLE_SPIN_RATE: f32 = 90.0;
}

/// Unit vector for a heading in degrees (0 = facing +Y, 90 = facing +X)
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Wrap a degree angle difference into [-180, 180)
#[inline]
pub fn wrap_degrees(mut deg: f32) -> f32 {
    while deg >= 180.0 {
        deg -= 360.0;
    }
    while deg < -180.0 {
        deg += 360.0;
    }
    deg
}
