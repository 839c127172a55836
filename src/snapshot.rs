//! Persisted world state.
//!
//! Chunks are never written out: seed and params regenerate them exactly.
//! A snapshot only carries those plus the overlay overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::overlay::Overlay;
use crate::params::WorldParams;
use crate::world::{ChunkedWorld, Progress, WorldConfig};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub x: usize,
    pub y: usize,
    pub value: Overlay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub version: u32,
    /// Final seed
    pub seed: u64,
    pub params: WorldParams,
    pub tiles_levels: u8,
    pub chunk_size: usize,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub overrides: Vec<OverlayEntry>,
}

impl WorldSnapshot {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Saved world snapshot to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let snapshot: WorldSnapshot = serde_json::from_str(&text)?;
        if snapshot.version != SNAPSHOT_VERSION {
            log::warn!(
                "Snapshot {} has version {}, expected {}",
                path.as_ref().display(),
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }
        Ok(snapshot)
    }
}

impl ChunkedWorld {
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            version: SNAPSHOT_VERSION,
            seed: self.seed(),
            params: self.params().clone(),
            tiles_levels: self.tiles_levels(),
            chunk_size: self.chunk_size(),
            width: self.width(),
            height: self.height(),
            overrides: self
                .overlay_overrides()
                .map(|(x, y, value)| OverlayEntry { x, y, value: value.clone() })
                .collect(),
        }
    }

    /// Rebuild a world from a snapshot. The spawn is recomputed, then the
    /// overrides are reapplied.
    pub fn from_snapshot(snapshot: WorldSnapshot, cache_chunks: usize, progress: Progress<'_>) -> Self {
        let config = WorldConfig {
            width: snapshot.width,
            height: snapshot.height,
            seed: snapshot.seed,
            params: snapshot.params,
            tiles_levels: snapshot.tiles_levels,
            chunk_size: snapshot.chunk_size,
            cache_chunks,
        };
        let mut world = ChunkedWorld::new(config, progress);
        for entry in snapshot.overrides {
            world.set_overlay(entry.x as i64, entry.y as i64, entry.value);
        }
        world
    }

    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.snapshot().save(path)
    }

    pub fn load_snapshot<P: AsRef<Path>>(path: P, cache_chunks: usize, progress: Progress<'_>) -> Result<Self> {
        let snapshot = WorldSnapshot::load(path)?;
        Ok(ChunkedWorld::from_snapshot(snapshot, cache_chunks, progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldGenError;
    use crate::overlay::ConstructionSite;
    use crate::seeds::make_final_seed;

    fn world() -> ChunkedWorld {
        let params = WorldParams::default();
        ChunkedWorld::new(
            WorldConfig {
                width: 128,
                height: 64,
                seed: make_final_seed(Some(5), &params),
                params,
                tiles_levels: 6,
                chunk_size: 16,
                cache_chunks: 8,
            },
            None,
        )
    }

    #[test]
    fn test_snapshot_restores_world() {
        let mut original = world();
        original.set_overlay(10, 12, ConstructionSite::new("hut", "Hut", 40, 3.0).with_cost("wood", 2).into());
        original.set_overlay(-2, 1, Overlay::Empty);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        original.save_snapshot(&path).unwrap();

        let mut restored = ChunkedWorld::load_snapshot(&path, 2, None).unwrap();
        assert_eq!(restored.snapshot(), original.snapshot());
        assert_eq!(restored.spawn(), original.spawn());
        assert_eq!(restored.cache_capacity(), 2);
        for (x, y) in [(10, 12), (126, 1), (40, 40), (0, 63)] {
            assert_eq!(restored.get_overlay(x, y), original.get_overlay(x, y));
            assert_eq!(restored.get_height01(x, y), original.get_height01(x, y));
        }
    }

    #[test]
    fn test_snapshot_contents() {
        let mut world = world();
        world.set_overlay(3, 4, Overlay::prop("tree"));
        let snapshot = world.snapshot();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.overrides, vec![OverlayEntry { x: 3, y: 4, value: Overlay::Prop { id: 10 } }]);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(WorldSnapshot::load(&missing), Err(WorldGenError::Io(_))));

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "{ not json").unwrap();
        assert!(matches!(WorldSnapshot::load(&garbage), Err(WorldGenError::Json(_))));
    }
}
