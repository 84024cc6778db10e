//! Tarmac entry point
//!
//! Headless demo: drives the whole crate end to end without a renderer. A
//! small autopilot chases the nearest pickup, first around the practice
//! arena, then on the tile circuit with seeded scattered collectibles. A
//! windowed build would swap the autopilot for real key polling and feed the
//! same `TickInput` into the same `tick`.

use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use tarmac::consts::SIM_DT;
use tarmac::highscores::{HighScoreEntry, HighScores};
use tarmac::sim::{RacePhase, RaceState, TickInput, tick};
use tarmac::track::{Track, arena_collectibles, scatter_collectibles};
use tarmac::{Tuning, wrap_degrees};

fn main() {
    env_logger::init();
    log::info!("Tarmac (headless) starting...");

    let scores_path = Path::new("highscores.json");
    let mut scores = HighScores::load(scores_path);

    // Practice arena: four fixed collectibles, drive until cleared
    let track = Track::practice_arena();
    let tuning = Tuning::default();
    let mut state = RaceState::new(&track).with_collectibles(arena_collectibles());

    let outcome = run_session(&mut state, &track, &tuning, 120.0);
    log::info!(
        "arena {}: score {}/{} in {:.1}s",
        outcome,
        state.vehicle.score,
        state.collectibles.len(),
        state.elapsed_secs()
    );

    if state.vehicle.score > 0 {
        let entry = HighScoreEntry {
            score: state.vehicle.score,
            laps: state.laps,
            time_secs: state.elapsed_secs(),
        };
        match scores.add_score(entry) {
            Some(rank) => log::info!("arena run ranked #{rank}"),
            None => log::info!("arena run did not make the table"),
        }
        scores.save(scores_path);
    }

    // Circuit: seeded collectible scatter, capped session
    let track = Track::circuit();
    let tuning = Tuning::circuit();
    let mut rng = Pcg32::seed_from_u64(2024);
    let pickups = scatter_collectibles(&track, 8, &mut rng);
    let mut state = RaceState::new(&track).with_collectibles(pickups);

    let outcome = run_session(&mut state, &track, &tuning, 60.0);
    log::info!(
        "circuit {}: score {}/{}, {} laps in {:.1}s",
        outcome,
        state.vehicle.score,
        state.collectibles.len(),
        state.laps,
        state.elapsed_secs()
    );
}

/// Step the sim at the fixed rate until the run clears or the cap expires
fn run_session(
    state: &mut RaceState,
    track: &Track,
    tuning: &Tuning,
    limit_secs: f32,
) -> &'static str {
    let max_ticks = (limit_secs / SIM_DT) as u64;
    while state.time_ticks < max_ticks {
        let input = chase_input(state);
        let events = tick(state, track, &input, tuning, SIM_DT);

        if events.collected > 0 {
            log::info!(
                "pickup at {:.1}s, score {}, boost armed",
                state.elapsed_secs(),
                state.vehicle.score
            );
        }
        if events.lap_completed {
            log::info!("lap {} at {:.1}s", state.laps, state.elapsed_secs());
        }
        if events.collided {
            log::debug!(
                "wall hit at ({:.1}, {:.1})",
                state.vehicle.pos.x,
                state.vehicle.pos.y
            );
        }

        if state.phase == RacePhase::Complete {
            return "cleared";
        }
    }
    "timed out"
}

/// Steer toward the nearest active collectible.
///
/// Backs off the throttle on sharp heading errors so the turn radius stays
/// small enough to line up; otherwise a distant target inside the turning
/// circle would be orbited forever.
fn chase_input(state: &RaceState) -> TickInput {
    let vehicle = &state.vehicle;
    let target = state
        .collectibles
        .iter()
        .filter(|c| c.active)
        .min_by(|a, b| {
            let da = vehicle.pos.distance_squared(a.pos);
            let db = vehicle.pos.distance_squared(b.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return TickInput::default();
    };

    let to = target.pos - vehicle.pos;
    let bearing = to.x.atan2(to.y).to_degrees();
    let error = wrap_degrees(bearing - vehicle.heading);

    TickInput {
        throttle: error.abs() < 60.0 || vehicle.speed < 5.0,
        reverse: false,
        steer_left: error > 2.0,
        steer_right: error < -2.0,
    }
}
