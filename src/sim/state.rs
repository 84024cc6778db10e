//! Race state and core simulation types
//!
//! Everything the renderer and HUD read after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading_vector;
use crate::track::Track;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RacePhase {
    /// Normal driving
    Driving,
    /// Every collectible has been captured
    Complete,
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Ground-plane position (height is fixed and left to the renderer)
    pub pos: Vec2,
    /// Heading in degrees, 0 = facing +Y
    pub heading: f32,
    /// Signed longitudinal speed (negative = reversing)
    pub speed: f32,
    /// Boost seconds remaining; max speed is elevated while positive
    pub boost_timer: f32,
    /// Collectibles captured this run
    pub score: u32,
}

impl Vehicle {
    pub fn at_spawn(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading,
            speed: 0.0,
            boost_timer: 0.0,
            score: 0,
        }
    }

    /// Unit forward vector for the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Whether the boost window is open (renderer uses this to pick a color)
    #[inline]
    pub fn boosting(&self) -> bool {
        self.boost_timer > 0.0
    }
}

/// A collectible pickup on the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    /// Cleared exactly once on capture, never re-set
    pub active: bool,
    /// Display spin angle in degrees, cosmetic only
    pub rotation: f32,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            active: true,
            rotation: 0.0,
        }
    }

    /// Advance the display spin. No wrapping; the trig consuming it is periodic.
    pub fn spin(&mut self, dt: f32) {
        self.rotation += crate::consts::COLLECTIBLE_SPIN_RATE * dt;
    }
}

/// Complete per-run simulation state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceState {
    pub vehicle: Vehicle,
    /// Collectibles in placement order (capture scan keeps this order)
    pub collectibles: Vec<Collectible>,
    /// Ticks stepped so far
    pub time_ticks: u64,
    /// Finish-line crossings
    pub laps: u32,
    pub phase: RacePhase,
    /// Finish-tile latch: true while the vehicle center sits on the line,
    /// so a crossing counts once
    pub(crate) on_finish: bool,
}

impl RaceState {
    /// Fresh state at the track's spawn point
    pub fn new(track: &Track) -> Self {
        let vehicle = Vehicle::at_spawn(track.spawn, track.spawn_heading);
        // Spawning on the line must not count as a lap
        let on_finish = track.finish.iter().any(|t| t.contains(track.spawn));
        Self {
            vehicle,
            collectibles: Vec::new(),
            time_ticks: 0,
            laps: 0,
            phase: RacePhase::Driving,
            on_finish,
        }
    }

    pub fn with_collectibles(mut self, collectibles: Vec<Collectible>) -> Self {
        self.collectibles = collectibles;
        self
    }

    /// Collectibles still on the track
    pub fn remaining(&self) -> usize {
        self.collectibles.iter().filter(|c| c.active).count()
    }

    /// Elapsed run time assuming fixed-rate stepping
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }
}
