//! Track construction
//!
//! A track is a one-time transform of a character grid into an immutable set
//! of wall rectangles, floor-tile centers, finish tiles and a spawn point.
//! The sim only ever reads the result; nothing here mutates after parsing.
//!
//! Grid characters: `'1'` wall, `'0'` floor, `'S'` finish line (the first one
//! in row-major order is the spawn). Anything else is ignored.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;
use crate::sim::collision::Aabb;
use crate::sim::state::Collectible;

/// An immutable track: obstacle rectangles plus the tile layout a renderer
/// needs to paint the course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Wall rectangles in row-major parse order (collision scan order)
    pub walls: Vec<Aabb>,
    /// Drivable tile centers
    pub floor: Vec<Vec2>,
    /// Finish-line tiles
    pub finish: Vec<Aabb>,
    /// Vehicle spawn point
    pub spawn: Vec2,
    /// Spawn heading in degrees (0 = +Y)
    pub spawn_heading: f32,
}

/// Parse a character grid into a track. Pure; row-major; each row may have
/// its own length.
pub fn parse_tile_map(rows: &[&str], tile_size: f32) -> Track {
    let mut walls = Vec::new();
    let mut floor = Vec::new();
    let mut finish = Vec::new();
    let mut spawn = None;

    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let center = Vec2::new(c as f32 * tile_size, r as f32 * tile_size);
            match ch {
                '1' => walls.push(Aabb::from_center_size(center, Vec2::splat(tile_size))),
                '0' => floor.push(center),
                'S' => {
                    finish.push(Aabb::from_center_size(center, Vec2::splat(tile_size)));
                    if spawn.is_none() {
                        spawn = Some(center);
                    }
                }
                _ => {}
            }
        }
    }

    log::debug!(
        "parsed track: {} walls, {} floor tiles, {} finish tiles",
        walls.len(),
        floor.len(),
        finish.len()
    );

    Track {
        walls,
        floor,
        finish,
        spawn: spawn.unwrap_or(Vec2::ZERO),
        spawn_heading: 0.0,
    }
}

/// The endless-circuit layout: a closed loop four tiles wide with a start
/// line on the main straight
pub const CIRCUIT_MAP: [&str; 25] = [
    "1111111111111111111111111111111111111111111",
    "1111111111111100000000011111100000000000001",
    "1111111111111100000000011111100000000000001",
    "1111111111111100001100011111110000111111111",
    "1111111111111100001100011111110000111111111",
    "1111111100000000001100011111110000111111111",
    "1111111100000000001100000000000000111111111",
    "1111111100011111111100000000000000111111111",
    "1111111100011111111111111111110000111111111",
    "1111111100000000000001111111110000111111111",
    "1111111100000000000001111111110000111111111",
    "1111111111111111000001111111110000111111111",
    "1111111111111111000001111111110000000000001",
    "1111111111111111000001111111110000000000001",
    "1111111111111111000001111111111111111110001",
    "1111111111111111000001111111111111111110001",
    "1111111111111111000001111111111111111110001",
    "10000000000000000000011111111111111111110001",
    "1000000000000000000001111111111111111110001",
    "1000011111111111111111111111111111111110001",
    "1000011111111111111111111111111111111110001",
    "1000000000000000000000000SS0000000000000001",
    "1000000000000000000000000SS0000000000000001",
    "1000000000000000000000000SS0000000000000001",
    "1111111111111111111111111111111111111111111",
];

impl Track {
    /// The built-in circuit, spawning on the start line facing along the
    /// main straight
    pub fn circuit() -> Self {
        let mut track = parse_tile_map(&CIRCUIT_MAP, TILE_SIZE);
        track.spawn_heading = 90.0;
        track
    }

    /// A walled 100x100 practice lot with a square block in the middle.
    /// Spawns south of the block, facing the southern collectible spot.
    pub fn practice_arena() -> Self {
        let walls = vec![
            Aabb::from_center_size(Vec2::new(0.0, -50.0), Vec2::new(100.0, 2.0)),
            Aabb::from_center_size(Vec2::new(0.0, 50.0), Vec2::new(100.0, 2.0)),
            Aabb::from_center_size(Vec2::new(-50.0, 0.0), Vec2::new(2.0, 100.0)),
            Aabb::from_center_size(Vec2::new(50.0, 0.0), Vec2::new(2.0, 100.0)),
            Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0)),
        ];
        Track {
            walls,
            floor: Vec::new(),
            finish: Vec::new(),
            spawn: Vec2::new(0.0, -20.0),
            spawn_heading: 180.0,
        }
    }
}

/// The practice arena's four fixed collectibles, one per side of the block
pub fn arena_collectibles() -> Vec<Collectible> {
    vec![
        Collectible::new(Vec2::new(0.0, -30.0)),
        Collectible::new(Vec2::new(-30.0, 0.0)),
        Collectible::new(Vec2::new(30.0, 0.0)),
        Collectible::new(Vec2::new(0.0, 30.0)),
    ]
}

/// Place `count` collectibles on distinct floor tiles, chosen by the given
/// RNG. Deterministic for a seeded generator; capped at the tile count.
pub fn scatter_collectibles(track: &Track, count: usize, rng: &mut impl Rng) -> Vec<Collectible> {
    let mut tiles = track.floor.clone();
    let n = count.min(tiles.len());
    let mut collectibles = Vec::with_capacity(n);
    // Partial Fisher-Yates: the front of `tiles` fills with distinct picks
    for i in 0..n {
        let j = rng.random_range(i..tiles.len());
        tiles.swap(i, j);
        collectibles.push(Collectible::new(tiles[i]));
    }
    collectibles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_small_grid() {
        let rows = ["111", "1S1", "101", "111"];
        let track = parse_tile_map(&rows, 10.0);

        assert_eq!(track.walls.len(), 10);
        assert_eq!(track.floor.len(), 1);
        assert_eq!(track.finish.len(), 1);
        assert_eq!(track.spawn, Vec2::new(10.0, 10.0));
        assert_eq!(track.floor[0], Vec2::new(10.0, 20.0));

        // Wall tiles cover the full tile footprint
        assert_eq!(track.walls[0].min, Vec2::new(-5.0, -5.0));
        assert_eq!(track.walls[0].max, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_parse_handles_ragged_rows() {
        let rows = ["11", "1S111", "1"];
        let track = parse_tile_map(&rows, 10.0);
        assert_eq!(track.walls.len(), 7);
        assert_eq!(track.finish.len(), 1);
    }

    #[test]
    fn test_parse_without_start_tile() {
        let rows = ["111", "101", "111"];
        let track = parse_tile_map(&rows, 10.0);
        assert!(track.finish.is_empty());
        assert_eq!(track.spawn, Vec2::ZERO);
    }

    #[test]
    fn test_circuit_layout() {
        let track = Track::circuit();
        assert_eq!(track.walls.len(), 661);
        assert_eq!(track.floor.len(), 409);
        assert_eq!(track.finish.len(), 6);
        // First start tile in row-major order: row 21, column 25
        assert_eq!(track.spawn, Vec2::new(250.0, 210.0));
        assert_eq!(track.spawn_heading, 90.0);
        assert!(track.finish.iter().any(|t| t.contains(track.spawn)));
    }

    #[test]
    fn test_arena_spawn_is_clear_of_walls() {
        let track = Track::practice_arena();
        let footprint = Aabb::from_center_half_extent(track.spawn, 0.5);
        assert!(crate::sim::collision::first_hit(&footprint, &track.walls).is_none());
    }

    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let track = Track::circuit();
        let a = scatter_collectibles(&track, 8, &mut Pcg32::seed_from_u64(7));
        let b = scatter_collectibles(&track, 8, &mut Pcg32::seed_from_u64(7));
        assert_eq!(a.len(), 8);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.pos, y.pos);
        }
    }

    #[test]
    fn test_scatter_places_distinct_floor_tiles() {
        let track = Track::circuit();
        let mut rng = Pcg32::seed_from_u64(42);
        let placed = scatter_collectibles(&track, 20, &mut rng);
        assert_eq!(placed.len(), 20);
        for c in &placed {
            assert!(track.floor.contains(&c.pos));
        }
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert_ne!(a.pos, b.pos);
            }
        }
    }

    #[test]
    fn test_scatter_caps_at_tile_count() {
        let rows = ["111", "101", "111"];
        let track = parse_tile_map(&rows, 10.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let placed = scatter_collectibles(&track, 5, &mut rng);
        assert_eq!(placed.len(), 1);
    }
}
