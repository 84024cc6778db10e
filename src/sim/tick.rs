//! Per-frame simulation step
//!
//! One `tick` advances the vehicle, resolves wall collisions and pickups,
//! spins collectibles and counts finish-line crossings. The step is a pure,
//! always-succeeding transition: malformed `dt` (zero, negative, non-finite)
//! leaves the state untouched instead of propagating NaNs.

use crate::consts::TURN_EPSILON;
use crate::sim::collision::{Aabb, first_hit};
use crate::sim::state::{RacePhase, RaceState, Vehicle};
use crate::track::Track;
use crate::tuning::Tuning;

/// Snapshot of the control keys held this frame (deterministic input)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Forward key held
    pub throttle: bool,
    /// Reverse key held
    pub reverse: bool,
    /// Turn-left key held (adds heading; both turn keys may apply additively)
    pub steer_left: bool,
    /// Turn-right key held
    pub steer_right: bool,
}

/// What happened during one step, for HUD/audio consumers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// The tentative move hit a wall and was rolled back
    pub collided: bool,
    /// Collectibles captured this step (each re-arms the same boost timer)
    pub collected: u32,
    /// The vehicle crossed onto the finish line this step
    pub lap_completed: bool,
}

/// Advance the race by one frame of `dt` seconds
pub fn tick(
    state: &mut RaceState,
    track: &Track,
    input: &TickInput,
    tuning: &Tuning,
    dt: f32,
) -> StepEvents {
    let mut events = StepEvents::default();

    // Treat a malformed frame time as "no frame happened"
    if !dt.is_finite() || dt <= 0.0 {
        return events;
    }

    state.time_ticks += 1;

    events.collided = integrate_vehicle(&mut state.vehicle, &track.walls, input, tuning, dt);

    // Pickups measure distance against the position committed above
    events.collected = resolve_pickups(state, tuning);
    if events.collected > 0 && state.remaining() == 0 {
        state.phase = RacePhase::Complete;
        log::info!(
            "all collectibles captured in {:.1}s",
            state.elapsed_secs()
        );
    }

    for collectible in state.collectibles.iter_mut().filter(|c| c.active) {
        collectible.spin(dt);
    }

    // Lap counting: rising edge of "on a finish tile"
    let on_finish = track.finish.iter().any(|t| t.contains(state.vehicle.pos));
    if on_finish && !state.on_finish {
        state.laps += 1;
        events.lap_completed = true;
        log::debug!("lap {} at {:.1}s", state.laps, state.elapsed_secs());
    }
    state.on_finish = on_finish;

    events
}

/// Advance speed, heading and position; returns whether a wall was hit.
///
/// Order matters and matches the HUD-visible behavior: the boost window is
/// sampled before the timer drains, acceleration and clamping run before
/// steering, and steering before integration.
fn integrate_vehicle(
    vehicle: &mut Vehicle,
    walls: &[Aabb],
    input: &TickInput,
    tuning: &Tuning,
    dt: f32,
) -> bool {
    let max_speed = tuning.effective_max_speed(vehicle.boosting());
    if vehicle.boost_timer > 0.0 {
        vehicle.boost_timer = (vehicle.boost_timer - dt).max(0.0);
    }

    if input.throttle {
        vehicle.speed += tuning.accel * dt;
    } else if input.reverse {
        vehicle.speed -= tuning.accel * dt;
    } else {
        // Coast decay toward zero, clamped so one step never crosses it
        let decay = (tuning.coast_decel * dt).min(vehicle.speed.abs());
        vehicle.speed -= vehicle.speed.signum() * decay;
    }
    vehicle.speed = vehicle.speed.clamp(tuning.min_speed, max_speed);

    // Steering needs motion; turn direction follows the sign of travel
    if vehicle.speed.abs() > TURN_EPSILON {
        let turn = tuning.turn_rate * dt * vehicle.speed.signum();
        if input.steer_left {
            vehicle.heading += turn;
        }
        if input.steer_right {
            vehicle.heading -= turn;
        }
    }

    let tentative = vehicle.pos + vehicle.forward() * vehicle.speed * dt;
    let footprint = Aabb::from_center_half_extent(tentative, tuning.half_width);
    if first_hit(&footprint, walls).is_some() {
        // Bounce: stay put, reverse and damp. Re-clamp so the speed range
        // invariant holds even when the reversal lands outside it.
        vehicle.speed = (-vehicle.speed * tuning.bounce_damping).clamp(tuning.min_speed, max_speed);
        true
    } else {
        vehicle.pos = tentative;
        false
    }
}

/// Capture every active collectible within reach of the committed position.
fn resolve_pickups(state: &mut RaceState, tuning: &Tuning) -> u32 {
    let RaceState {
        vehicle,
        collectibles,
        ..
    } = state;

    let mut captured = 0;
    for collectible in collectibles.iter_mut().filter(|c| c.active) {
        if vehicle.pos.distance(collectible.pos) < tuning.capture_radius {
            collectible.active = false;
            vehicle.score += 1;
            // Re-armed, not accumulated: several captures in one step still
            // grant a single boost window
            vehicle.boost_timer = tuning.boost_duration;
            captured += 1;
        }
    }
    captured
}
