//! LRU chunk cache keyed by chunk coordinates.
//!
//! Eviction is always safe: chunk contents are a pure function of the world
//! seed and coordinates, so an evicted chunk is simply regenerated on the next
//! access.

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::chunk::Chunk;

pub type ChunkKey = (usize, usize);

/// Cache statistics for monitoring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Number of evictions
    pub evictions: usize,
    /// Current number of cached chunks
    pub cached: usize,
    pub capacity: usize,
    /// Estimated memory usage in bytes
    pub memory_bytes: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    /// Format as human-readable string
    pub fn summary(&self) -> String {
        format!(
            "Hits: {} | Misses: {} | Rate: {:.1}% | Chunks: {}/{} | Evicted: {} | Mem: {:.1}MB",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.cached,
            self.capacity,
            self.evictions,
            self.memory_bytes as f32 / (1024.0 * 1024.0)
        )
    }
}

/// Bounded LRU map of generated chunks
pub struct ChunkCache {
    chunks: HashMap<ChunkKey, Chunk>,
    /// LRU order (most recent at back)
    lru_order: VecDeque<ChunkKey>,
    max_size: usize,
    stats: CacheStats,
}

impl ChunkCache {
    pub fn new(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            chunks: HashMap::with_capacity(max_size),
            lru_order: VecDeque::with_capacity(max_size),
            max_size,
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    fn touch(&mut self, key: ChunkKey) {
        if self.lru_order.back() != Some(&key) {
            self.lru_order.retain(|k| *k != key);
            self.lru_order.push_back(key);
        }
    }

    /// Look up a chunk and mark it most recently used. Counts a hit or miss.
    pub fn get(&mut self, key: ChunkKey) -> Option<&Chunk> {
        if self.chunks.contains_key(&key) {
            self.stats.hits += 1;
            self.touch(key);
            self.chunks.get(&key)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Read without touching LRU order or statistics
    pub fn peek(&self, key: ChunkKey) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    /// Make room for `key` if it is new and the cache is full.
    fn evict_for(&mut self, key: ChunkKey) -> Option<ChunkKey> {
        if self.chunks.len() < self.max_size || self.chunks.contains_key(&key) {
            return None;
        }
        let old_key = self.lru_order.pop_front()?;
        self.chunks.remove(&old_key);
        self.stats.evictions += 1;
        log::debug!("Evicted chunk {:?}", old_key);
        Some(old_key)
    }

    /// Insert a chunk as most recent; returns the evicted key, if any.
    pub fn insert(&mut self, key: ChunkKey, chunk: Chunk) -> Option<ChunkKey> {
        let evicted = self.evict_for(key);
        self.touch(key);
        self.chunks.insert(key, chunk);
        evicted
    }

    /// Cached chunk for `key`, generating it with `make` on a miss.
    pub fn get_or_insert_with<F: FnOnce() -> Chunk>(&mut self, key: ChunkKey, make: F) -> &Chunk {
        if self.chunks.contains_key(&key) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            self.evict_for(key);
        }
        self.touch(key);
        self.chunks.entry(key).or_insert_with(make)
    }

    pub fn contains(&self, key: &ChunkKey) -> bool {
        self.chunks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Keys from least to most recently used
    pub fn keys(&self) -> Vec<ChunkKey> {
        self.lru_order.iter().copied().collect()
    }

    fn memory_size(&self) -> usize {
        self.chunks.values().map(|c| c.memory_size()).sum()
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
        self.lru_order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached: self.chunks.len(),
            capacity: self.max_size,
            memory_bytes: self.memory_size(),
            ..self.stats
        }
    }
}
