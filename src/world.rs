//! Chunked world: an on-demand, LRU-cached tile plane with a sparse overlay layer.
//!
//! The plane wraps horizontally (longitude) and clamps vertically (poles).
//! Reads materialize the owning chunk on a cache miss, which is why every
//! read takes `&mut self`. Player edits live in the override map and are
//! never evicted.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::biome::Biome;
use crate::cache::{CacheStats, ChunkCache, ChunkKey};
use crate::chunk::{Chunk, ChunkGenerator, DEFAULT_CHUNK_SIZE};
use crate::knobs::nominal_sea_level;
use crate::overlay::Overlay;
use crate::params::WorldParams;
use crate::seeds::WorldSeeds;
use crate::spawn;

/// Optional progress sink: fraction in [0, 1] and a phase label.
pub type Progress<'a> = Option<&'a mut dyn FnMut(f32, &str)>;

pub(crate) fn report(progress: &mut Progress<'_>, fraction: f32, label: &str) {
    if let Some(callback) = progress.as_mut() {
        callback(fraction.clamp(0.0, 1.0), label);
    }
}

pub const DEFAULT_TILES_LEVELS: u8 = 6;
pub const DEFAULT_CACHE_CHUNKS: usize = 256;
/// Diamond radius, in tiles, of the post-prewarm spawn refinement
pub const SPAWN_REFINE_RADIUS: usize = 36;

/// Construction settings of a [`ChunkedWorld`]
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    /// Final seed (see [`crate::seeds::make_final_seed`])
    pub seed: u64,
    pub params: WorldParams,
    /// Highest vertical level; values below 2 are raised to 2
    pub tiles_levels: u8,
    pub chunk_size: usize,
    /// Maximum number of chunks kept in memory
    pub cache_chunks: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 128,
            seed: 0,
            params: WorldParams::default(),
            tiles_levels: DEFAULT_TILES_LEVELS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            cache_chunks: DEFAULT_CACHE_CHUNKS,
        }
    }
}

/// Cheap read of one tile, as used by walkability checks
#[derive(Clone, Debug, PartialEq)]
pub struct TileSnapshot {
    pub level: u8,
    pub ground_id: u8,
    pub overlay: Overlay,
    pub biome_id: u8,
}

impl TileSnapshot {
    /// Dry land with nothing on it
    pub fn is_walkable(&self) -> bool {
        self.overlay.is_empty() && !Biome::from_id(self.biome_id).is_some_and(Biome::is_water)
    }
}

pub struct ChunkedWorld {
    generator: ChunkGenerator,
    params: WorldParams,
    seed: u64,
    width: usize,
    height: usize,
    tiles_levels: u8,
    chunk_size: usize,
    sea_level: f64,
    cache: ChunkCache,
    /// Overlay overrides keyed by (x, y)
    overrides: BTreeMap<(usize, usize), Overlay>,
    spawn: (usize, usize),
}

impl ChunkedWorld {
    /// Build the world and run the spawn search.
    pub fn new(config: WorldConfig, mut progress: Progress<'_>) -> Self {
        let width = config.width.max(1);
        let height = config.height.max(1);
        let tiles_levels = config.tiles_levels.max(2);
        let chunk_size = config.chunk_size.max(1);
        let sea_level = nominal_sea_level(&config.params);

        report(&mut progress, 0.0, "Preparing world...");
        log::info!(
            "Creating chunked world {}x{} (seed {}, chunk {}, cache {}, sea level {:.3})",
            width,
            height,
            config.seed,
            chunk_size,
            config.cache_chunks,
            sea_level
        );

        let generator = ChunkGenerator::new(
            config.params.clone(),
            config.seed,
            width,
            height,
            sea_level,
            tiles_levels,
            chunk_size,
        );

        let mut world = Self {
            generator,
            params: config.params,
            seed: config.seed,
            width,
            height,
            tiles_levels,
            chunk_size,
            sea_level,
            cache: ChunkCache::new(config.cache_chunks),
            overrides: BTreeMap::new(),
            spawn: (width / 2, height / 2),
        };

        world.spawn = spawn::find_spawn(&mut world, &mut progress);
        log::info!("Spawn at {:?}", world.spawn);
        report(&mut progress, 1.0, "World ready");
        world
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn spawn(&self) -> (usize, usize) {
        self.spawn
    }

    pub fn sea_level(&self) -> f64 {
        self.sea_level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn seeds(&self) -> &WorldSeeds {
        self.generator.seeds()
    }

    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    pub fn tiles_levels(&self) -> u8 {
        self.tiles_levels
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    // =========================================================================
    // ADDRESSING
    // =========================================================================

    /// Wrap x around the planet and clamp y to the poles.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        let gx = x.rem_euclid(self.width as i64) as usize;
        let gy = y.clamp(0, self.height as i64 - 1) as usize;
        (gx, gy)
    }

    /// Chunk key owning a global tile
    pub fn chunk_key(&self, gx: usize, gy: usize) -> ChunkKey {
        (gx / self.chunk_size, gy / self.chunk_size)
    }

    /// Number of chunks along x and y
    pub fn chunk_counts(&self) -> (usize, usize) {
        self.generator.chunk_counts()
    }

    fn with_tile<T>(&mut self, x: i64, y: i64, read: impl FnOnce(&Chunk, usize, usize) -> T) -> T {
        let (gx, gy) = self.wrap(x, y);
        let key = self.chunk_key(gx, gy);
        let generator = &self.generator;
        let chunk = self.cache.get_or_insert_with(key, || generator.generate(key.0, key.1));
        read(chunk, gx - chunk.origin_x, gy - chunk.origin_y)
    }

    /// Materialize the chunk owning (x, y).
    pub fn ensure_chunk_at(&mut self, x: i64, y: i64) -> ChunkKey {
        self.with_tile(x, y, |chunk, _, _| (chunk.cx, chunk.cy))
    }

    // =========================================================================
    // TILE READS
    // =========================================================================

    pub fn get_height01(&mut self, x: i64, y: i64) -> f32 {
        self.with_tile(x, y, |c, lx, ly| c.height01(lx, ly))
    }

    pub fn get_temp01(&mut self, x: i64, y: i64) -> f32 {
        self.with_tile(x, y, |c, lx, ly| c.temperature01(lx, ly))
    }

    pub fn get_moisture01(&mut self, x: i64, y: i64) -> f32 {
        self.with_tile(x, y, |c, lx, ly| c.moisture01(lx, ly))
    }

    pub fn get_level(&mut self, x: i64, y: i64) -> u8 {
        self.with_tile(x, y, |c, lx, ly| c.level(lx, ly))
    }

    pub fn get_ground_id(&mut self, x: i64, y: i64) -> u8 {
        self.with_tile(x, y, |c, lx, ly| c.ground_id(lx, ly))
    }

    pub fn get_biome_id(&mut self, x: i64, y: i64) -> u8 {
        self.with_tile(x, y, |c, lx, ly| c.biome_id(lx, ly))
    }

    pub fn get_biome(&mut self, x: i64, y: i64) -> Biome {
        self.with_tile(x, y, |c, lx, ly| c.biome(lx, ly))
    }

    /// Ocean, lake and river tiles. Derived from the biome.
    pub fn get_is_water(&mut self, x: i64, y: i64) -> bool {
        self.get_biome(x, y).is_water()
    }

    /// Override if present, else the chunk's baked prop.
    pub fn get_overlay(&mut self, x: i64, y: i64) -> Overlay {
        let (gx, gy) = self.wrap(x, y);
        if let Some(value) = self.overrides.get(&(gx, gy)) {
            return value.clone();
        }
        let prop = self.with_tile(x, y, |c, lx, ly| c.prop_id(lx, ly));
        Overlay::from_prop_id(prop)
    }

    /// Full tile read. With `generate == false` only cached chunks are
    /// consulted and LRU order is left untouched.
    pub fn get_tile_snapshot(&mut self, x: i64, y: i64, generate: bool) -> Option<TileSnapshot> {
        let (gx, gy) = self.wrap(x, y);
        let key = self.chunk_key(gx, gy);

        let read = |chunk: &Chunk| {
            let (lx, ly) = (gx - chunk.origin_x, gy - chunk.origin_y);
            (chunk.level(lx, ly), chunk.ground_id(lx, ly), chunk.biome_id(lx, ly), chunk.prop_id(lx, ly))
        };
        let (level, ground_id, biome_id, prop) = if generate {
            let generator = &self.generator;
            read(self.cache.get_or_insert_with(key, || generator.generate(key.0, key.1)))
        } else {
            read(self.cache.peek(key)?)
        };

        let overlay = self
            .overrides
            .get(&(gx, gy))
            .cloned()
            .unwrap_or_else(|| Overlay::from_prop_id(prop));
        Some(TileSnapshot { level, ground_id, overlay, biome_id })
    }

    // =========================================================================
    // OVERLAY WRITES
    // =========================================================================

    /// Record an overlay override. Never touches the chunk cache.
    pub fn set_overlay(&mut self, x: i64, y: i64, value: Overlay) {
        let key = self.wrap(x, y);
        self.overrides.insert(key, value);
    }

    /// Drop an override so the tile shows its baked prop again.
    pub fn clear_overlay_override(&mut self, x: i64, y: i64) -> Option<Overlay> {
        let key = self.wrap(x, y);
        self.overrides.remove(&key)
    }

    /// Mutable access to an existing override (e.g. to advance a construction site)
    pub fn overlay_override_mut(&mut self, x: i64, y: i64) -> Option<&mut Overlay> {
        let key = self.wrap(x, y);
        self.overrides.get_mut(&key)
    }

    /// All overrides as (x, y, value), ordered by x then y
    pub fn overlay_overrides(&self) -> impl Iterator<Item = (usize, usize, &Overlay)> + '_ {
        self.overrides.iter().map(|(&(x, y), value)| (x, y, value))
    }

    pub fn overlay_override_count(&self) -> usize {
        self.overrides.len()
    }

    // =========================================================================
    // CHUNK MANAGEMENT
    // =========================================================================

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Cached chunk keys, least recently used first
    pub fn cached_chunk_coords(&self) -> Vec<ChunkKey> {
        self.cache.keys()
    }

    pub fn is_chunk_cached(&self, key: ChunkKey) -> bool {
        self.cache.contains(&key)
    }

    /// Chunk keys within `radius` chunks of the chunk owning (x, y), nearest first.
    ///
    /// Chunk x wraps around the planet; rows past the poles are skipped.
    pub fn chunk_coords_around(&self, x: i64, y: i64, radius: usize) -> Vec<ChunkKey> {
        let (gx, gy) = self.wrap(x, y);
        let (ccx, ccy) = self.chunk_key(gx, gy);
        let (ncx, ncy) = self.chunk_counts();
        let r = radius as i64;

        let mut coords: Vec<(i64, ChunkKey)> = Vec::new();
        for dy in -r..=r {
            let cy = ccy as i64 + dy;
            if cy < 0 || cy >= ncy as i64 {
                continue;
            }
            for dx in -r..=r {
                let cx = (ccx as i64 + dx).rem_euclid(ncx as i64) as usize;
                let key = (cx, cy as usize);
                if coords.iter().all(|(_, k)| *k != key) {
                    coords.push((dx.abs() + dy.abs(), key));
                }
            }
        }
        coords.sort_by_key(|(distance, _)| *distance);
        coords.into_iter().map(|(_, key)| key).collect()
    }

    /// Generate missing chunks in parallel, then insert them in the given order.
    ///
    /// Out-of-range rows are skipped and chunk x wraps. Returns how many chunks
    /// were generated. If more chunks are requested than the cache holds, the
    /// earliest ones are evicted again.
    pub fn prewarm_chunk_coords(&mut self, coords: &[ChunkKey], mut progress: Progress<'_>, label: &str) -> usize {
        let (ncx, ncy) = self.chunk_counts();
        let mut missing: Vec<ChunkKey> = Vec::new();
        for &(cx, cy) in coords {
            if cy >= ncy {
                continue;
            }
            let key = (cx % ncx, cy);
            if !self.cache.contains(&key) && !missing.contains(&key) {
                missing.push(key);
            }
        }

        if missing.is_empty() {
            report(&mut progress, 1.0, label);
            return 0;
        }

        let generator = &self.generator;
        let chunks: Vec<Chunk> = missing
            .par_iter()
            .map(|&(cx, cy)| generator.generate(cx, cy))
            .collect();

        let total = chunks.len();
        for (i, chunk) in chunks.into_iter().enumerate() {
            self.cache.insert((chunk.cx, chunk.cy), chunk);
            report(&mut progress, (i + 1) as f32 / total as f32, label);
        }
        log::debug!("Prewarmed {} chunks", total);
        total
    }

    // =========================================================================
    // SPAWN REFINEMENT
    // =========================================================================

    /// Move the spawn to the nearest walkable tile.
    ///
    /// First a diamond search of `max_radius` tiles over already cached
    /// chunks; if that finds nothing, chunk rings around the spawn chunk are
    /// generated and scanned for the closest walkable tile. The spawn is left
    /// unchanged when nothing qualifies.
    pub fn refine_spawn_from_loaded(&mut self, max_radius: usize) -> (usize, usize) {
        let (sx, sy) = (self.spawn.0 as i64, self.spawn.1 as i64);

        for r in 0..=max_radius as i64 {
            for dx in -r..=r {
                let dy = r - dx.abs();
                for y in [sy + dy, sy - dy] {
                    if y < 0 || y >= self.height as i64 {
                        continue;
                    }
                    let walkable = self
                        .get_tile_snapshot(sx + dx, y, false)
                        .is_some_and(|snap| snap.is_walkable());
                    if walkable {
                        self.spawn = self.wrap(sx + dx, y);
                        return self.spawn;
                    }
                    if dy == 0 {
                        break;
                    }
                }
            }
        }

        let (ncx, ncy) = self.chunk_counts();
        let (ccx, ccy) = self.chunk_key(self.spawn.0, self.spawn.1);
        let mut best: Option<(u64, (usize, usize))> = None;

        for ring in 0..=3i64 {
            for dy in -ring..=ring {
                let cy = ccy as i64 + dy;
                if cy < 0 || cy >= ncy as i64 {
                    continue;
                }
                let span = ring - dy.abs();
                for dx in [-span, span] {
                    let cx = (ccx as i64 + dx).rem_euclid(ncx as i64);
                    let origin_x = cx * self.chunk_size as i64;
                    let origin_y = cy * self.chunk_size as i64;
                    self.ensure_chunk_at(origin_x, origin_y);

                    let w = self.chunk_size.min(self.width - origin_x as usize) as i64;
                    let h = self.chunk_size.min(self.height - origin_y as usize) as i64;
                    for ly in 0..h {
                        for lx in 0..w {
                            let (x, y) = (origin_x + lx, origin_y + ly);
                            let walkable = self
                                .get_tile_snapshot(x, y, false)
                                .is_some_and(|snap| snap.is_walkable());
                            if !walkable {
                                continue;
                            }
                            let distance = self.wrapped_distance(x, sx) + y.abs_diff(sy);
                            if best.map_or(true, |(d, _)| distance < d) {
                                best = Some((distance, (x as usize, y as usize)));
                            }
                        }
                    }
                    if span == 0 {
                        break;
                    }
                }
            }
            if let Some((_, tile)) = best {
                self.spawn = tile;
                return tile;
            }
        }

        self.spawn
    }

    /// Load the area around the spawn and settle the spawn inside it.
    ///
    /// Prewarms chunks within `radius` of the spawn, refines the spawn over
    /// what is now loaded, then prewarms whatever the moved spawn still
    /// needs. Returns the number of chunks generated.
    pub fn prepare_spawn_area(&mut self, radius: usize, mut progress: Progress<'_>) -> usize {
        let (sx, sy) = self.spawn;
        let targets = self.chunk_coords_around(sx as i64, sy as i64, radius);
        report(&mut progress, 0.0, "Preloading spawn area...");
        let mut generated = self.prewarm_chunk_coords(&targets, None, "Preloading spawn area...");

        report(&mut progress, 0.7, "Refining spawn...");
        let refined = self.refine_spawn_from_loaded(SPAWN_REFINE_RADIUS);
        if refined != (sx, sy) {
            log::info!("Spawn refined from {:?} to {:?}", (sx, sy), refined);
        }

        let missing: Vec<ChunkKey> = self
            .chunk_coords_around(refined.0 as i64, refined.1 as i64, radius)
            .into_iter()
            .filter(|key| !targets.contains(key))
            .collect();
        if !missing.is_empty() {
            generated += self.prewarm_chunk_coords(&missing, None, "Preloading spawn area...");
        }
        report(&mut progress, 1.0, "Spawn area ready");
        log::debug!("Spawn area prepared ({} chunks generated)", generated);
        generated
    }

    fn wrapped_distance(&self, a: i64, b: i64) -> u64 {
        let d = a.abs_diff(b) % self.width as u64;
        d.min(self.width as u64 - d)
    }
}

impl std::fmt::Debug for ChunkedWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkedWorld")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("seed", &self.seed)
            .field("spawn", &self.spawn)
            .field("cached_chunks", &self.cache.len())
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::ConstructionSite;
    use crate::seeds::make_final_seed;

    fn small_config(cache_chunks: usize) -> WorldConfig {
        let params = WorldParams::default();
        WorldConfig {
            width: 128,
            height: 64,
            seed: make_final_seed(Some(42), &params),
            params,
            tiles_levels: 6,
            chunk_size: 16,
            cache_chunks,
        }
    }

    #[test]
    fn test_x_wraps_and_y_clamps() {
        let mut world = ChunkedWorld::new(small_config(8), None);
        assert_eq!(world.wrap(-1, 5), (127, 5));
        assert_eq!(world.wrap(128, -7), (0, 0));
        assert_eq!(world.wrap(300, 1000), (44, 63));

        assert_eq!(world.get_height01(-1, 10), world.get_height01(127, 10));
        assert_eq!(world.get_biome_id(128 + 5, 3), world.get_biome_id(5, 3));
        assert_eq!(world.get_level(10, -20), world.get_level(10, 0));
        assert_eq!(world.get_temp01(10, 999), world.get_temp01(10, 63));
    }

    #[test]
    fn test_same_config_same_world() {
        let mut a = ChunkedWorld::new(small_config(4), None);
        let mut b = ChunkedWorld::new(small_config(64), None);
        assert_eq!(a.spawn(), b.spawn());
        for (x, y) in [(0, 0), (17, 33), (100, 12), (64, 63)] {
            assert_eq!(a.get_height01(x, y), b.get_height01(x, y));
            assert_eq!(a.get_moisture01(x, y), b.get_moisture01(x, y));
            assert_eq!(a.get_ground_id(x, y), b.get_ground_id(x, y));
            assert_eq!(a.get_overlay(x, y), b.get_overlay(x, y));
        }
    }

    #[test]
    fn test_seed_changes_world() {
        let mut a = ChunkedWorld::new(small_config(8), None);
        let mut b = ChunkedWorld::new(WorldConfig { seed: 1, ..small_config(8) }, None);
        let differs = (0..64).any(|i| a.get_height01(i * 2, i) != b.get_height01(i * 2, i));
        assert!(differs);
    }

    #[test]
    fn test_reads_survive_eviction() {
        let mut world = ChunkedWorld::new(small_config(1), None);
        let before: Vec<_> = (0..8).map(|i| (world.get_height01(i * 16, 20), world.get_biome_id(i * 16, 20))).collect();
        assert!(world.cache_stats().evictions > 0);
        let after: Vec<_> = (0..8).map(|i| (world.get_height01(i * 16, 20), world.get_biome_id(i * 16, 20))).collect();
        assert_eq!(before, after);
        assert_eq!(world.cached_chunk_coords().len(), 1);
    }

    #[test]
    fn test_overlay_override_survives_eviction() {
        let mut world = ChunkedWorld::new(small_config(1), None);
        let site: Overlay = ConstructionSite::new("hut", "Hut", 40, 5.0).into();
        world.set_overlay(3, 3, site.clone());
        world.set_overlay(-1, 70, Overlay::Empty);
        assert_eq!(world.overlay_override_count(), 2);
        assert_eq!(world.get_overlay(3, 3), site);

        // Touch far chunks so (0, 0) gets evicted and regenerated
        for i in 1..8 {
            world.get_level(i * 16, 40);
        }
        assert!(!world.is_chunk_cached((0, 0)));
        assert_eq!(world.get_overlay(3, 3), site);
        assert!(world.get_overlay(127, 63).is_empty());

        let baked = world.clear_overlay_override(3, 3);
        assert_eq!(baked, Some(site));
        let prop = world.with_tile(3, 3, |c, lx, ly| c.prop_id(lx, ly));
        assert_eq!(world.get_overlay(3, 3), Overlay::from_prop_id(prop));
    }

    #[test]
    fn test_construction_site_work_in_place() {
        let mut world = ChunkedWorld::new(small_config(4), None);
        world.set_overlay(5, 6, ConstructionSite::new("wall", "Wall", 41, 2.0).into());
        let done = world
            .overlay_override_mut(5, 6)
            .and_then(Overlay::as_site_mut)
            .map(|site| site.apply_work(2.0));
        assert_eq!(done, Some(true));
        assert!(world.get_overlay(5, 6).as_site().is_some_and(|s| s.is_built()));
        assert!(world.overlay_override_mut(6, 6).is_none());
    }

    #[test]
    fn test_is_water_matches_biome() {
        let mut world = ChunkedWorld::new(small_config(8), None);
        for y in (0..64).step_by(7) {
            for x in (0..128).step_by(9) {
                let biome = world.get_biome(x, y);
                assert_eq!(world.get_is_water(x, y), biome.is_water());
                assert_eq!(biome.id(), world.get_biome_id(x, y));
            }
        }
    }

    #[test]
    fn test_snapshot_without_generation() {
        let mut world = ChunkedWorld::new(small_config(2), None);
        let far = (world.spawn().0 as i64 + 64, 60);
        let key = {
            let (gx, gy) = world.wrap(far.0, far.1);
            world.chunk_key(gx, gy)
        };
        if !world.is_chunk_cached(key) {
            assert!(world.get_tile_snapshot(far.0, far.1, false).is_none());
        }

        let snap = world.get_tile_snapshot(far.0, far.1, true);
        assert!(snap.is_some());
        assert!(world.is_chunk_cached(key));

        let order = world.cached_chunk_coords();
        let peeked = world.get_tile_snapshot(far.0, far.1, false);
        assert_eq!(peeked, snap);
        assert_eq!(world.cached_chunk_coords(), order);
    }

    #[test]
    fn test_chunk_coords_around() {
        let world = ChunkedWorld::new(small_config(4), None);
        let coords = world.chunk_coords_around(0, 0, 1);
        assert_eq!(coords[0], (0, 0));
        // Row -1 is past the pole; column -1 wraps to 7
        assert_eq!(coords.len(), 6);
        assert!(coords.contains(&(7, 1)));
        assert!(coords.iter().all(|&(_, cy)| cy < 4));
    }

    #[test]
    fn test_prewarm() {
        let mut world = ChunkedWorld::new(small_config(32), None);
        let coords = world.chunk_coords_around(64, 32, 1);
        let mut calls = Vec::new();
        let mut sink = |fraction: f32, label: &str| calls.push((fraction, label.to_string()));
        let generated = world.prewarm_chunk_coords(&coords, Some(&mut sink), "Loading chunks");
        for key in &coords {
            assert!(world.is_chunk_cached(*key));
        }
        assert!(generated <= coords.len());
        assert_eq!(calls.last().map(|(f, _)| *f), Some(1.0));
        assert!(calls.iter().all(|(_, label)| label == "Loading chunks"));

        assert_eq!(world.prewarm_chunk_coords(&coords, None, "again"), 0);
        let expected = usize::from(!world.is_chunk_cached((1, 0)));
        assert_eq!(world.prewarm_chunk_coords(&[(9, 0), (1, 99)], None, "wrap"), expected);
        assert!(world.is_chunk_cached((1, 0)));
    }

    #[test]
    fn test_refine_spawn_finds_walkable_tile() {
        let mut world = ChunkedWorld::new(small_config(16), None);
        let (sx, sy) = world.spawn();
        world.set_overlay(sx as i64, sy as i64, Overlay::prop("rock"));
        let refined = world.refine_spawn_from_loaded(36);
        assert_ne!(refined, (sx, sy));
        assert_eq!(world.spawn(), refined);
        let snap = world.get_tile_snapshot(refined.0 as i64, refined.1 as i64, true);
        assert!(snap.is_some_and(|s| s.is_walkable()));
    }

    #[test]
    fn test_prepare_spawn_area_loads_chunks_around_spawn() {
        let mut world = ChunkedWorld::new(small_config(32), None);
        let (sx, sy) = world.spawn();
        world.set_overlay(sx as i64, sy as i64, Overlay::prop("rock"));

        let mut labels = Vec::new();
        let mut sink = |_: f32, label: &str| labels.push(label.to_string());
        world.prepare_spawn_area(1, Some(&mut sink));

        let spawn = world.spawn();
        assert_ne!(spawn, (sx, sy));
        for key in world.chunk_coords_around(spawn.0 as i64, spawn.1 as i64, 1) {
            assert!(world.is_chunk_cached(key), "chunk {:?} not loaded", key);
        }
        assert_eq!(labels.last().map(String::as_str), Some("Spawn area ready"));
        assert_eq!(world.prepare_spawn_area(1, None), 0);
    }

    #[test]
    fn test_progress_reported() {
        let mut last = (0.0, String::new());
        let mut sink = |fraction: f32, label: &str| last = (fraction, label.to_string());
        let _world = ChunkedWorld::new(small_config(4), Some(&mut sink));
        assert_eq!(last.0, 1.0);
        assert_eq!(last.1, "World ready");
    }
}
