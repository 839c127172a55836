//! Chunk generation: terrain, climate, biome, level and props for one square
//! block of tiles.
//!
//! A chunk is a pure function of the world parameters, the final seed and
//! global tile coordinates. It never reads neighbouring chunks, so chunks can
//! be generated in any order (or in parallel) and regenerated after eviction
//! with bit-identical results.

use crate::biome::{self, Biome, WaterClass};
use crate::knobs::Knobs;
use crate::params::WorldParams;
use crate::seeds::WorldSeeds;
use crate::tiles::{self, NO_PROP};
use crate::value_noise::{hash01, hash01_pair, FbmNoise, NoiseLayer, RidgedNoise};

/// Default chunk edge length in tiles
pub const DEFAULT_CHUNK_SIZE: usize = 64;

// =============================================================================
// TERRAIN PARAMETERS
// =============================================================================

// Domain warp (tiles of displacement, noise frequency per tile)
const WARP_FREQUENCY: f64 = 0.0025;
const WARP_STRENGTH: f64 = 38.0;

// Height: two fbm scales blended 70/30
const CONTINENT_FREQUENCY: f64 = 0.0042;
const HILLS_FREQUENCY: f64 = 0.013;
const CONTINENT_WEIGHT: f64 = 0.7;
const HILLS_WEIGHT: f64 = 0.3;
const CONTRAST_POWER: f64 = 0.85;

// Ridged mountains, gated by a height mask
const RIDGE_FREQUENCY: f64 = 0.009;
const RIDGE_THRESHOLD: f64 = 0.78;
const MOUNTAIN_MASK_START: f64 = 0.55;
const MOUNTAIN_MASK_FULL: f64 = 0.72;
const MOUNTAIN_HEIGHT: f64 = 0.25;

// Micro relief
const RELIEF_FREQUENCY: f64 = 0.09;
const RELIEF_AMPLITUDE: f64 = 0.02;

// Local sea level wobble
const SEA_FREQUENCY: f64 = 0.0012;
const SEA_WOBBLE: f64 = 0.035;

// Climate
const TEMPERATURE_FREQUENCY: f64 = 0.006;
const TEMPERATURE_NOISE: f64 = 0.1;
const ALTITUDE_COOLING: f64 = 0.6;
const MOISTURE_FREQUENCY: f64 = 0.008;
const ALTITUDE_DRYING: f64 = 0.8;

// Water bodies
const LAKE_FREQUENCY: f64 = 0.018;
const LAKE_CUTOFF: f64 = 0.45;
const LAKE_MAX_ABOVE_SEA: f64 = 0.1;
const RIVER_FREQUENCY: f64 = 0.0075;
const RIVER_WIDTH: f64 = 0.02;
const RIVER_MAX_ABOVE_SEA: f64 = 0.22;
const SHORE_BAND: f64 = 0.012;
const LAKE_SHORE_MARGIN: f64 = 0.04;
const RIVER_BANK_MARGIN: f64 = 0.01;

// Vertical levels
const LAND_LEVEL_GAIN: f64 = 1.6;
const MOUNTAIN_LEVEL_BOOST: f64 = 2.0;
const LEVEL_DITHER: f64 = 0.06;

// Props
const ORE_CHANCE: f64 = 0.006;
const CRYSTAL_SHARE: f64 = 0.05;

const FIXED_POINT_MAX: f64 = u16::MAX as f64;

fn to_fixed(value: f64) -> u16 {
    (value.clamp(0.0, 1.0) * FIXED_POINT_MAX).round() as u16
}

fn from_fixed(value: u16) -> f32 {
    (value as f64 / FIXED_POINT_MAX) as f32
}

fn smooth_step(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// =============================================================================
// CHUNK STORAGE
// =============================================================================

/// One generated block of tiles, stored as packed per-tile arrays.
///
/// Edge chunks touching the world bounds may be narrower or shorter than the
/// nominal chunk size.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    pub cx: usize,
    pub cy: usize,
    /// Global coordinates of the top-left tile
    pub origin_x: usize,
    pub origin_y: usize,
    pub width: usize,
    pub height: usize,
    height01: Vec<u16>,
    temperature: Vec<u16>,
    moisture: Vec<u16>,
    level: Vec<u8>,
    ground_id: Vec<u8>,
    biome_id: Vec<u8>,
    /// Baked prop id per tile (0 = none)
    prop: Vec<u16>,
}

impl Chunk {
    fn with_extent(cx: usize, cy: usize, origin_x: usize, origin_y: usize, width: usize, height: usize) -> Self {
        let n = width * height;
        Self {
            cx,
            cy,
            origin_x,
            origin_y,
            width,
            height,
            height01: vec![0; n],
            temperature: vec![0; n],
            moisture: vec![0; n],
            level: vec![0; n],
            ground_id: vec![0; n],
            biome_id: vec![0; n],
            prop: vec![NO_PROP; n],
        }
    }

    fn index(&self, lx: usize, ly: usize) -> usize {
        debug_assert!(lx < self.width && ly < self.height, "local coordinate out of chunk");
        ly * self.width + lx
    }

    fn store(&mut self, lx: usize, ly: usize, tile: &TileSample) {
        let idx = self.index(lx, ly);
        self.height01[idx] = to_fixed(tile.height);
        self.temperature[idx] = to_fixed(tile.temperature);
        self.moisture[idx] = to_fixed(tile.moisture);
        self.level[idx] = tile.level;
        self.ground_id[idx] = tile.ground_id;
        self.biome_id[idx] = tile.biome.id();
        self.prop[idx] = tile.prop;
    }

    pub fn height01(&self, lx: usize, ly: usize) -> f32 {
        from_fixed(self.height01[self.index(lx, ly)])
    }

    pub fn temperature01(&self, lx: usize, ly: usize) -> f32 {
        from_fixed(self.temperature[self.index(lx, ly)])
    }

    pub fn moisture01(&self, lx: usize, ly: usize) -> f32 {
        from_fixed(self.moisture[self.index(lx, ly)])
    }

    pub fn level(&self, lx: usize, ly: usize) -> u8 {
        self.level[self.index(lx, ly)]
    }

    pub fn ground_id(&self, lx: usize, ly: usize) -> u8 {
        self.ground_id[self.index(lx, ly)]
    }

    pub fn biome_id(&self, lx: usize, ly: usize) -> u8 {
        self.biome_id[self.index(lx, ly)]
    }

    pub fn biome(&self, lx: usize, ly: usize) -> Biome {
        Biome::from_id(self.biome_id(lx, ly)).unwrap_or(Biome::Plains)
    }

    pub fn prop_id(&self, lx: usize, ly: usize) -> u16 {
        self.prop[self.index(lx, ly)]
    }

    /// Approximate heap size in bytes
    pub fn memory_size(&self) -> usize {
        self.width * self.height * (2 * 3 + 3 + 2) + std::mem::size_of::<Self>()
    }
}

// =============================================================================
// TILE SAMPLING
// =============================================================================

/// Every generated value for one tile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSample {
    pub height: f64,
    pub temperature: f64,
    pub moisture: f64,
    pub level: u8,
    pub ground_id: u8,
    pub biome: Biome,
    pub prop: u16,
}

/// Noise layers of the generator, one per concern
#[derive(Clone, Copy, Debug)]
struct TerrainLayers {
    warp_x: NoiseLayer<FbmNoise>,
    warp_y: NoiseLayer<FbmNoise>,
    continent: NoiseLayer<FbmNoise>,
    hills: NoiseLayer<FbmNoise>,
    ridge: NoiseLayer<RidgedNoise>,
    relief: NoiseLayer<FbmNoise>,
    sea: NoiseLayer<FbmNoise>,
    temperature: NoiseLayer<FbmNoise>,
    moisture: NoiseLayer<FbmNoise>,
    lakes: NoiseLayer<FbmNoise>,
    rivers: NoiseLayer<FbmNoise>,
}

impl TerrainLayers {
    fn new(seeds: &WorldSeeds) -> Self {
        Self {
            warp_x: NoiseLayer::new(FbmNoise::new(seeds.warp, 3), WARP_FREQUENCY),
            // Second, independent offset field
            warp_y: NoiseLayer::new(FbmNoise::new(seeds.warp.rotate_left(23) ^ 0x2545f4914f6cdd1d, 3), WARP_FREQUENCY),
            continent: NoiseLayer::new(FbmNoise::new(seeds.height, 5), CONTINENT_FREQUENCY),
            hills: NoiseLayer::new(FbmNoise::new(seeds.height.wrapping_add(1000), 4), HILLS_FREQUENCY),
            ridge: NoiseLayer::new(RidgedNoise::new(seeds.ridge, 4), RIDGE_FREQUENCY),
            relief: NoiseLayer::new(FbmNoise::new(seeds.relief, 2), RELIEF_FREQUENCY),
            sea: NoiseLayer::new(FbmNoise::new(seeds.sea, 2), SEA_FREQUENCY),
            temperature: NoiseLayer::new(FbmNoise::new(seeds.climate, 3), TEMPERATURE_FREQUENCY),
            moisture: NoiseLayer::new(FbmNoise::new(seeds.moisture, 4), MOISTURE_FREQUENCY),
            lakes: NoiseLayer::new(FbmNoise::new(seeds.lakes, 3), LAKE_FREQUENCY),
            rivers: NoiseLayer::new(FbmNoise::new(seeds.rivers, 3), RIVER_FREQUENCY),
        }
    }
}

/// Prop palette resolved once from the prop name table
#[derive(Clone, Debug)]
struct PropPalette {
    tree: u16,
    rock: u16,
    bush: u16,
    cactus: u16,
    pine: u16,
    palm: u16,
    flower: u16,
    reed: u16,
    ice_rock: u16,
    coal: u16,
    iron: u16,
    copper: u16,
    gold: u16,
    crystal: u16,
    /// Decoration chance and candidates, indexed by biome id
    decor: Vec<(f64, Vec<u16>)>,
}

impl PropPalette {
    fn new() -> Self {
        let mut palette = Self {
            tree: tiles::get_prop_id("tree"),
            rock: tiles::get_prop_id("rock"),
            bush: tiles::get_prop_id("bush"),
            cactus: tiles::get_prop_id("cactus"),
            pine: tiles::get_prop_id("pine"),
            palm: tiles::get_prop_id("palm"),
            flower: tiles::get_prop_id("flower"),
            reed: tiles::get_prop_id("reed"),
            ice_rock: tiles::get_prop_id("ice_rock"),
            coal: tiles::get_prop_id("ore_coal"),
            iron: tiles::get_prop_id("ore_iron"),
            copper: tiles::get_prop_id("ore_copper"),
            gold: tiles::get_prop_id("ore_gold"),
            crystal: tiles::get_prop_id("crystal"),
            decor: Vec::new(),
        };
        let decor = Biome::all().iter().map(|&b| palette.decoration_table(b)).collect();
        palette.decor = decor;
        palette
    }

    fn decorations(&self, biome: Biome) -> (f64, &[u16]) {
        self.decor
            .get(biome.id() as usize)
            .map(|(chance, set)| (*chance, set.as_slice()))
            .unwrap_or((0.0, &[][..]))
    }

    /// Base decoration chance and candidate set for a biome
    fn decoration_table(&self, biome: Biome) -> (f64, Vec<u16>) {
        match biome {
            Biome::Plains => (0.06, vec![self.tree, self.bush, self.flower, self.rock]),
            Biome::Forest => (0.22, vec![self.tree, self.tree, self.bush, self.pine]),
            Biome::Rainforest => (0.28, vec![self.palm, self.tree, self.tree, self.bush]),
            Biome::Taiga => (0.18, vec![self.pine, self.pine, self.rock, self.bush]),
            Biome::Tundra => (0.04, vec![self.rock, self.ice_rock, self.bush]),
            Biome::Snow => (0.02, vec![self.ice_rock, self.rock]),
            Biome::Desert => (0.03, vec![self.cactus, self.rock, self.cactus]),
            Biome::Savanna => (0.07, vec![self.tree, self.bush, self.rock]),
            Biome::Coast => (0.03, vec![self.palm, self.rock, self.reed]),
            Biome::Ocean | Biome::Lake | Biome::River => (0.0, Vec::new()),
        }
    }

    fn ore(&self, draw: f64, mystic_mul: f64) -> u16 {
        let crystal_share = (CRYSTAL_SHARE * mystic_mul).min(0.5);
        if draw < crystal_share {
            return self.crystal;
        }
        let r = (draw - crystal_share) / (1.0 - crystal_share);
        match r {
            r if r < 0.4 => self.coal,
            r if r < 0.72 => self.iron,
            r if r < 0.92 => self.copper,
            _ => self.gold,
        }
    }
}

/// Generates chunks for one world. Cheap to clone, `Send + Sync`.
#[derive(Clone, Debug)]
pub struct ChunkGenerator {
    params: WorldParams,
    seeds: WorldSeeds,
    layers: TerrainLayers,
    palette: PropPalette,
    world_width: usize,
    world_height: usize,
    sea_level: f64,
    tiles_levels: u8,
    chunk_size: usize,
}

impl ChunkGenerator {
    pub fn new(
        params: WorldParams,
        seed: u64,
        world_width: usize,
        world_height: usize,
        sea_level: f64,
        tiles_levels: u8,
        chunk_size: usize,
    ) -> Self {
        let seeds = WorldSeeds::from_master(seed);
        Self {
            params,
            layers: TerrainLayers::new(&seeds),
            seeds,
            palette: PropPalette::new(),
            world_width: world_width.max(1),
            world_height: world_height.max(1),
            sea_level,
            tiles_levels: tiles_levels.max(2),
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn seeds(&self) -> &WorldSeeds {
        &self.seeds
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks along x and y
    pub fn chunk_counts(&self) -> (usize, usize) {
        (
            self.world_width.div_ceil(self.chunk_size),
            self.world_height.div_ceil(self.chunk_size),
        )
    }

    /// Generate chunk (cx, cy). Tiles outside the world bounds are not stored.
    pub fn generate(&self, cx: usize, cy: usize) -> Chunk {
        let knobs = Knobs::from_params(&self.params);
        let origin_x = cx * self.chunk_size;
        let origin_y = cy * self.chunk_size;
        let width = self.chunk_size.min(self.world_width.saturating_sub(origin_x));
        let height = self.chunk_size.min(self.world_height.saturating_sub(origin_y));
        let mut chunk = Chunk::with_extent(cx, cy, origin_x, origin_y, width, height);

        for ly in 0..self.chunk_size {
            let gy = origin_y + ly;
            if gy >= self.world_height {
                break;
            }
            for lx in 0..self.chunk_size {
                let gx = origin_x + lx;
                if gx >= self.world_width {
                    break;
                }
                let tile = self.sample_with(gx, gy, &knobs);
                chunk.store(lx, ly, &tile);
            }
        }

        chunk
    }

    /// Sample a single tile at global coordinates.
    pub fn sample_tile(&self, gx: usize, gy: usize) -> TileSample {
        self.sample_with(gx, gy, &Knobs::from_params(&self.params))
    }

    fn sample_with(&self, gx: usize, gy: usize, knobs: &Knobs) -> TileSample {
        let layers = &self.layers;
        let fx = gx as f64;
        let fy = gy as f64;

        // 1. Domain warp
        let wx = fx + layers.warp_x.sample(fx, fy) * WARP_STRENGTH;
        let wy = fy + layers.warp_y.sample(fx, fy) * WARP_STRENGTH;

        // 2. Height
        let blended = CONTINENT_WEIGHT * layers.continent.sample(wx, wy) + HILLS_WEIGHT * layers.hills.sample(wx, wy);
        let contrast = blended.signum() * blended.abs().powf(CONTRAST_POWER);
        let mut height = (contrast + 1.0) * 0.5;

        let ridge = layers.ridge.sample(wx, wy);
        let mask = smooth_step(MOUNTAIN_MASK_START, MOUNTAIN_MASK_FULL, height);
        let crest = ((ridge - RIDGE_THRESHOLD) / (1.0 - RIDGE_THRESHOLD)).max(0.0);
        let mountain = crest * mask * MOUNTAIN_HEIGHT * knobs.ruggedness_mul;
        height += mountain;
        height += layers.relief.sample(wx, wy) * RELIEF_AMPLITUDE * knobs.ruggedness_mul;
        height -= knobs.water_bias;
        let height = height.clamp(0.0, 1.0);

        // 3. Local sea level
        let local_sea = (self.sea_level + layers.sea.sample(wx, wy) * SEA_WOBBLE).clamp(0.05, 0.95);
        let above_sea = height - local_sea;
        let altitude = above_sea.max(0.0);

        // 4. Temperature
        let ny = if self.world_height > 1 {
            gy as f64 / (self.world_height - 1) as f64
        } else {
            0.5
        };
        let warmth = 1.0 - (ny * 2.0 - 1.0).abs();
        let temperature = (0.05
            + warmth * 0.9
            + layers.temperature.sample(wx, wy) * TEMPERATURE_NOISE * knobs.weather_variability
            + knobs.temperature_bias
            - altitude * ALTITUDE_COOLING)
            .clamp(0.0, 1.0);

        // 5. Moisture
        let moisture = ((layers.moisture.sample01(wx, wy) + knobs.moisture_bias) * knobs.atmosphere_moisture_scale()
            - altitude * ALTITUDE_DRYING)
            .clamp(0.0, 1.0);

        // 6. Water classification
        let water = if above_sea < 0.0 {
            WaterClass::Ocean
        } else {
            let lake = layers.lakes.sample(wx, wy);
            let river = layers.rivers.sample(wx, wy).abs();
            let lake_ok = above_sea < LAKE_MAX_ABOVE_SEA;
            let river_ok = above_sea < RIVER_MAX_ABOVE_SEA;

            if lake_ok && lake > LAKE_CUTOFF {
                WaterClass::Lake
            } else if river_ok && river < RIVER_WIDTH {
                WaterClass::River
            } else if above_sea < SHORE_BAND
                || (lake_ok && lake > LAKE_CUTOFF - LAKE_SHORE_MARGIN)
                || (river_ok && river < RIVER_WIDTH + RIVER_BANK_MARGIN)
            {
                WaterClass::Coast
            } else {
                WaterClass::Land
            }
        };

        // 7. Biome
        let biome = biome::classify(water, temperature, moisture);

        // 8. Vertical level
        let level = match water {
            WaterClass::Ocean | WaterClass::Lake | WaterClass::River => 0,
            WaterClass::Coast => 1,
            WaterClass::Land => {
                let span = (self.tiles_levels - 2) as f64;
                let norm = (above_sea / (1.0 - local_sea)).clamp(0.0, 1.0);
                let dither = (hash01(gx as i64, gy as i64, self.seeds.levels) - 0.5) * LEVEL_DITHER;
                let boosted = (norm * LAND_LEVEL_GAIN + mountain * MOUNTAIN_LEVEL_BOOST + dither).clamp(0.0, 1.0);
                (2 + (boosted * span).round() as u8).min(self.tiles_levels)
            }
        };
        let peak = water == WaterClass::Land && self.tiles_levels > 2 && level == self.tiles_levels;
        let ground_id = biome.ground_id(-above_sea, peak);

        // 9. Props
        let prop = self.place_prop(gx, gy, biome, level, knobs);

        TileSample {
            height,
            temperature,
            moisture,
            level,
            ground_id,
            biome,
            prop,
        }
    }

    fn place_prop(&self, gx: usize, gy: usize, biome: Biome, level: u8, knobs: &Knobs) -> u16 {
        if biome.is_water() {
            return NO_PROP;
        }
        let (spawn_draw, pick_draw) = hash01_pair(gx as i64, gy as i64, self.seeds.props);
        let level_frac = level as f64 / self.tiles_levels as f64;

        let ore_chance = ORE_CHANCE * knobs.resource_mul * (0.5 + level_frac);
        if spawn_draw < ore_chance {
            return self.palette.ore(pick_draw, knobs.mystic_mul);
        }

        let (base, candidates) = self.palette.decorations(biome);
        let deco_chance = base * knobs.biodiversity_mul;
        if spawn_draw < ore_chance + deco_chance && !candidates.is_empty() {
            let idx = ((pick_draw * candidates.len() as f64) as usize).min(candidates.len() - 1);
            return candidates[idx];
        }

        NO_PROP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knobs::nominal_sea_level;
    use crate::seeds::make_final_seed;

    fn test_generator(width: usize, height: usize, chunk_size: usize) -> ChunkGenerator {
        let params = WorldParams::default();
        let seed = make_final_seed(Some(42), &params);
        let sea = nominal_sea_level(&params);
        ChunkGenerator::new(params, seed, width, height, sea, 6, chunk_size)
    }

    #[test]
    fn test_generation_deterministic() {
        let generator = test_generator(256, 128, 32);
        assert_eq!(generator.generate(2, 1), generator.generate(2, 1));

        let clone = test_generator(256, 128, 32);
        assert_eq!(generator.generate(3, 2), clone.generate(3, 2));
    }

    #[test]
    fn test_generation_order_independent() {
        let a = test_generator(256, 128, 32);
        let first = a.generate(0, 0);
        let _ = a.generate(1, 0);

        let b = test_generator(256, 128, 32);
        let _ = b.generate(1, 0);
        let _ = b.generate(5, 3);
        assert_eq!(first, b.generate(0, 0));
    }

    #[test]
    fn test_chunk_matches_tile_sampling() {
        let generator = test_generator(256, 128, 16);
        let chunk = generator.generate(3, 4);
        for (lx, ly) in [(0, 0), (5, 9), (15, 15)] {
            let gx = chunk.origin_x + lx;
            let gy = chunk.origin_y + ly;
            let tile = generator.sample_tile(gx, gy);
            assert_eq!(chunk.level(lx, ly), tile.level);
            assert_eq!(chunk.biome(lx, ly), tile.biome);
            assert_eq!(chunk.prop_id(lx, ly), tile.prop);
            assert_eq!(chunk.height01(lx, ly), from_fixed(to_fixed(tile.height)));
        }
    }

    #[test]
    fn test_edge_chunks_are_clipped() {
        let generator = test_generator(100, 50, 32);
        assert_eq!(generator.chunk_counts(), (4, 2));

        let corner = generator.generate(3, 1);
        assert_eq!(corner.width, 4);
        assert_eq!(corner.height, 18);
        assert_eq!(corner.origin_x, 96);
        assert_eq!(corner.origin_y, 32);
    }

    #[test]
    fn test_tile_ranges() {
        let generator = test_generator(512, 256, 32);
        for (cx, cy) in [(0, 0), (4, 2), (15, 7), (8, 4)] {
            let chunk = generator.generate(cx, cy);
            for ly in 0..chunk.height {
                for lx in 0..chunk.width {
                    assert!((0.0..=1.0).contains(&chunk.height01(lx, ly)));
                    assert!((0.0..=1.0).contains(&chunk.temperature01(lx, ly)));
                    assert!((0.0..=1.0).contains(&chunk.moisture01(lx, ly)));
                    assert!(chunk.level(lx, ly) <= 6);
                    assert!(Biome::from_id(chunk.biome_id(lx, ly)).is_some());
                }
            }
        }
    }

    #[test]
    fn test_levels_follow_water_class() {
        let generator = test_generator(512, 256, 32);
        for (cx, cy) in [(2, 3), (9, 4), (12, 1)] {
            let chunk = generator.generate(cx, cy);
            for ly in 0..chunk.height {
                for lx in 0..chunk.width {
                    let biome = chunk.biome(lx, ly);
                    let level = chunk.level(lx, ly);
                    if biome.is_water() {
                        assert_eq!(level, 0);
                        assert_eq!(chunk.prop_id(lx, ly), NO_PROP);
                    } else if biome == Biome::Coast {
                        assert_eq!(level, 1);
                    } else {
                        assert!(level >= 2);
                    }
                }
            }
        }
    }

    #[test]
    fn test_poles_colder_than_equator() {
        let generator = test_generator(512, 256, 32);
        let mut pole = 0.0;
        let mut equator = 0.0;
        for x in (0..512).step_by(16) {
            pole += generator.sample_tile(x, 0).temperature;
            equator += generator.sample_tile(x, 128).temperature;
        }
        assert!(pole < equator);
    }

    #[test]
    fn test_props_placed_somewhere() {
        let generator = test_generator(512, 256, 32);
        let mut props = 0;
        for cx in 0..16 {
            let chunk = generator.generate(cx, 4);
            for ly in 0..chunk.height {
                for lx in 0..chunk.width {
                    if chunk.prop_id(lx, ly) != NO_PROP {
                        props += 1;
                    }
                }
            }
        }
        assert!(props > 0);
    }
}
