//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time arrives as an opaque `dt` input
//! - Stable iteration order (walls and collectibles keep construction order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use state::{Collectible, RacePhase, RaceState, Vehicle};
pub use tick::{StepEvents, TickInput, tick};
