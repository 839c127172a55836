//! Chunked procedural planet generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biome;
pub mod cache;
pub mod chunk;
pub mod error;
pub mod export;
pub mod generator;
pub mod knobs;
pub mod overlay;
pub mod params;
pub mod scale;
pub mod seeds;
pub mod snapshot;
pub mod spawn;
pub mod tiles;
pub mod value_noise;
pub mod world;

pub use biome::Biome;
pub use error::{Result, WorldGenError};
pub use generator::WorldGenerator;
pub use overlay::{ConstructionSite, Overlay};
pub use params::WorldParams;
pub use seeds::make_final_seed;
pub use snapshot::WorldSnapshot;
pub use world::{ChunkedWorld, TileSnapshot, WorldConfig};

#[cfg(test)]
mod tests {
    use super::*;

    fn water_fraction(ocean_pct: u8) -> f64 {
        let params = WorldParams { ocean_pct, ..WorldParams::default() };
        let mut world = ChunkedWorld::new(
            WorldConfig {
                width: 512,
                height: 256,
                seed: make_final_seed(Some(42), &WorldParams::default()),
                params,
                tiles_levels: 6,
                chunk_size: 32,
                cache_chunks: 128,
            },
            None,
        );
        let mut water = 0usize;
        let mut total = 0usize;
        for y in (0..256).step_by(4) {
            for x in (0..512).step_by(4) {
                total += 1;
                if world.get_is_water(x, y) {
                    water += 1;
                }
            }
        }
        water as f64 / total as f64
    }

    #[test]
    fn test_ocean_coverage_raises_water_fraction() {
        let dry = water_fraction(0);
        let mid = water_fraction(50);
        let wet = water_fraction(100);
        assert!(dry < mid, "dry {dry} vs mid {mid}");
        assert!(mid < wet, "mid {mid} vs wet {wet}");
    }

    #[test]
    fn test_range_invariants_over_sample() {
        let params = WorldParams::default();
        let mut world = ChunkedWorld::new(
            WorldConfig {
                width: 384,
                height: 192,
                seed: make_final_seed(Some(99), &params),
                params,
                tiles_levels: 8,
                chunk_size: 32,
                cache_chunks: 6,
            },
            None,
        );
        for y in (-8..200).step_by(5) {
            for x in (-40..420).step_by(7) {
                assert!((0.0..=1.0).contains(&world.get_height01(x, y)));
                assert!((0.0..=1.0).contains(&world.get_temp01(x, y)));
                assert!((0.0..=1.0).contains(&world.get_moisture01(x, y)));
                assert!(world.get_level(x, y) <= 8);
                assert!(Biome::from_id(world.get_biome_id(x, y)).is_some());
            }
        }
    }
}
