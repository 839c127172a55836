//! Planet generation facade: parameters in, chunked world out.

use crate::chunk::DEFAULT_CHUNK_SIZE;
use crate::params::{WorldParams, WorldSeed};
use crate::scale::PlanetScale;
use crate::seeds::make_final_seed;
use crate::world::{report, ChunkedWorld, Progress, WorldConfig, DEFAULT_CACHE_CHUNKS, DEFAULT_TILES_LEVELS};

/// Engine settings shared by every planet it generates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldGenerator {
    pub tiles_levels: u8,
    pub chunk_size: usize,
    pub cache_chunks: usize,
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self {
            tiles_levels: DEFAULT_TILES_LEVELS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            cache_chunks: DEFAULT_CACHE_CHUNKS,
        }
    }
}

impl WorldGenerator {
    pub fn new(tiles_levels: u8, chunk_size: usize, cache_chunks: usize) -> Self {
        Self { tiles_levels, chunk_size, cache_chunks }
    }

    pub fn with_tiles_levels(mut self, tiles_levels: u8) -> Self {
        self.tiles_levels = tiles_levels;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_cache_chunks(mut self, cache_chunks: usize) -> Self {
        self.cache_chunks = cache_chunks;
        self
    }

    /// Base seed: the explicit one, else the params' fixed seed, else a fresh random one.
    pub fn resolve_base_seed(params: &WorldParams, rng_seed: Option<u64>) -> u64 {
        match (rng_seed, params.seed) {
            (Some(seed), _) => seed,
            (None, WorldSeed::Fixed(seed)) => seed,
            (None, WorldSeed::Random) => rand::random(),
        }
    }

    /// Planet dimensions for these params
    pub fn planet_scale(&self, params: &WorldParams) -> PlanetScale {
        PlanetScale::new(params.size, params.gravity, self.chunk_size)
    }

    /// World configuration without constructing the world (no spawn search).
    pub fn world_config(&self, params: &WorldParams, rng_seed: Option<u64>) -> WorldConfig {
        let base_seed = Self::resolve_base_seed(params, rng_seed);
        let seed = make_final_seed(Some(base_seed), params);
        let scale = self.planet_scale(params);

        log::info!(
            "Planet '{}': base seed {}, final seed {}, {}x{} tiles ({}, {})",
            params.world_name,
            base_seed,
            seed,
            scale.width,
            scale.height,
            scale.name(),
            scale.format_map_size()
        );

        WorldConfig {
            width: scale.width,
            height: scale.height,
            seed,
            params: params.clone(),
            tiles_levels: self.tiles_levels,
            chunk_size: self.chunk_size,
            cache_chunks: self.cache_chunks,
        }
    }

    /// Generate a planet. Never fails: bad labels have already fallen back
    /// to defaults during parsing and the spawn search always terminates.
    pub fn generate_planet(&self, params: &WorldParams, rng_seed: Option<u64>, mut progress: Progress<'_>) -> ChunkedWorld {
        report(&mut progress, 0.0, "Deriving seed...");
        let config = self.world_config(params, rng_seed);
        ChunkedWorld::new(config, progress)
    }
}
