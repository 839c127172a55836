//! Spawn search: a dry, prop-free tile near the map center at a comfortable altitude.
//!
//! Phase 1 scores random samples around the center and keeps the best one.
//! Phase 2 walks a square spiral outward and takes the first acceptable tile.
//! Phase 3 falls back to the exact center. Every phase is bounded.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::biome::Biome;
use crate::world::{report, ChunkedWorld, Progress};

/// Random samples taken in phase 1
pub const SPAWN_SAMPLES: usize = 60;
/// Half-size of the phase 1 sampling box, in tiles
pub const SEARCH_RADIUS: i64 = 96;
/// Largest spiral ring of phase 2
pub const SPIRAL_MAX_RADIUS: i64 = 256;
/// Preferred height above sea level
const TARGET_ALTITUDE: f64 = 0.12;
const ALTITUDE_WEIGHT: f64 = 10.0;
/// Samples between cooperative yields
const YIELD_EVERY: usize = 8;

fn biome_preference(biome: Biome) -> f64 {
    match biome {
        Biome::Plains => 2.0,
        Biome::Forest => 1.5,
        Biome::Savanna => 1.2,
        Biome::Coast => 0.8,
        Biome::Taiga => 0.6,
        Biome::Rainforest => 0.5,
        Biome::Tundra => 0.2,
        Biome::Desert | Biome::Snow => -0.5,
        Biome::Ocean | Biome::Lake | Biome::River => f64::NEG_INFINITY,
    }
}

/// Acceptable spawn: not water, no effective overlay.
fn is_acceptable(world: &mut ChunkedWorld, x: i64, y: i64) -> bool {
    !world.get_is_water(x, y) && world.get_overlay(x, y).is_empty()
}

fn score(world: &mut ChunkedWorld, x: i64, y: i64) -> f64 {
    let target = world.sea_level() + TARGET_ALTITUDE;
    let height = world.get_height01(x, y) as f64;
    biome_preference(world.get_biome(x, y)) - (height - target).abs() * ALTITUDE_WEIGHT
}

/// Find the spawn tile of a world. Always returns in-bounds coordinates.
pub fn find_spawn(world: &mut ChunkedWorld, progress: &mut Progress<'_>) -> (usize, usize) {
    let (cx, cy) = ((world.width() / 2) as i64, (world.height() / 2) as i64);
    let mut rng = ChaCha8Rng::seed_from_u64(world.seeds().spawn);

    report(progress, 0.0, "Searching spawn...");

    // Phase 1: best of N random samples
    let mut best: Option<(f64, (usize, usize))> = None;
    for i in 0..SPAWN_SAMPLES {
        let x = cx + rng.gen_range(-SEARCH_RADIUS..=SEARCH_RADIUS);
        let y = (cy + rng.gen_range(-SEARCH_RADIUS..=SEARCH_RADIUS)).clamp(0, world.height() as i64 - 1);

        if is_acceptable(world, x, y) {
            let s = score(world, x, y);
            if best.map_or(true, |(b, _)| s > b) {
                best = Some((s, world.wrap(x, y)));
            }
        }

        if (i + 1) % YIELD_EVERY == 0 {
            report(progress, (i + 1) as f32 / SPAWN_SAMPLES as f32 * 0.8, "Searching spawn...");
            std::thread::yield_now();
        }
    }
    if let Some((s, tile)) = best {
        log::debug!("Spawn sampled at {:?} (score {:.3})", tile, s);
        return tile;
    }

    // Phase 2: square spiral, first acceptable tile
    log::warn!("No spawn among {} samples, falling back to spiral search", SPAWN_SAMPLES);
    let mut visited = 0usize;
    for r in 1..=SPIRAL_MAX_RADIUS {
        for (dx, dy) in ring_offsets(r) {
            let y = cy + dy;
            if y < 0 || y >= world.height() as i64 {
                continue;
            }
            if is_acceptable(world, cx + dx, y) {
                return world.wrap(cx + dx, y);
            }
            visited += 1;
            if visited % (YIELD_EVERY * 64) == 0 {
                std::thread::yield_now();
            }
        }
        report(progress, 0.8 + 0.2 * r as f32 / SPIRAL_MAX_RADIUS as f32, "Searching spawn...");
    }

    // Phase 3: give up on finding dry land
    log::warn!("No acceptable spawn within radius {}, using map center", SPIRAL_MAX_RADIUS);
    world.wrap(cx, cy)
}

/// Offsets of the square ring at Chebyshev distance `r`, clockwise from the top-left.
fn ring_offsets(r: i64) -> impl Iterator<Item = (i64, i64)> {
    let top = (-r..r).map(move |dx| (dx, -r));
    let right = (-r..r).map(move |dy| (r, dy));
    let bottom = (-r..r).map(move |dx| (-dx, r));
    let left = (-r..r).map(move |dy| (-r, -dy));
    top.chain(right).chain(bottom).chain(left)
}
